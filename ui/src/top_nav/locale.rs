use dioxus::prelude::*;

use crate::i18n::{self, SelectedLanguage};
use crate::t;

/// Locale picker in the header actions. Hidden when only one catalogue
/// ships. A successful switch is published through the
/// `Signal<SelectedLanguage>` context when the host provides one.
#[component]
pub fn LanguageSwitcher() -> Element {
    let languages = use_hook(i18n::available_languages);
    let shared = try_use_context::<Signal<SelectedLanguage>>();
    let mut local = use_signal(i18n::current_language);
    let current = shared.map(|language| language().0).unwrap_or_else(|| local());

    if languages.len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(true) => {
                tracing::debug!(tag, "language switched");
                local.set(tag.clone());
                if let Some(mut shared) = shared {
                    shared.set(SelectedLanguage(tag));
                }
            }
            Ok(false) => tracing::debug!(tag, "language unchanged"),
            Err(err) => tracing::warn!("language switch to {tag} failed: {err}"),
        }
    };

    rsx! {
        div { class: "top-nav__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                class: "top-nav__locale-select",
                value: "{current}",
                oninput: on_change,
                for code in languages {
                    option { key: "{code}", value: "{code}", selected: code == current, "{code}" }
                }
            }
        }
    }
}
