use dioxus::prelude::*;

/// Plain marketing page used for routes that only need the shared chrome.
#[component]
pub fn ContentPage(title: String) -> Element {
    crate::i18n::use_language_refresh();

    rsx! {
        section { class: "page page-content",
            h1 { "{title}" }
            p { {crate::t!("content-placeholder")} }
        }
    }
}
