//! Translated chrome for the header and the event nav.
//!
//! Catalogues live in `i18n/<lang>/brightline-ui.ftl` and are embedded at
//! compile time; `i18n.toml` names `en-US` as the reference catalogue that
//! `fl!` checks message ids against. Menu titles and day labels come from
//! the site config and are shown as authored.
//!
//! ```ignore
//! ui::i18n::init();
//! let label = ui::t!("sticky-nav-ticket-owner", name = "Ada");
//! ```
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Catalogue file stem, shared by every locale folder.
const CATALOGUE: &str = "brightline-ui";
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Catalogues;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK_LANGUAGE
        .parse::<LanguageIdentifier>()
        .unwrap_or_default();
    FluentLanguageLoader::new(CATALOGUE, fallback)
});

static SELECTED: Once = Once::new();

/// Pick the visitor's preferred languages once per process. Later calls are
/// no-ops; a failed selection leaves the reference catalogue in place.
pub fn init() {
    SELECTED.call_once(|| match select(&preferred_languages()) {
        Ok(chosen) => tracing::debug!(?chosen, "i18n catalogues selected"),
        Err(err) => tracing::warn!("i18n: keeping {FALLBACK_LANGUAGE} strings: {err}"),
    });
}

/// Switch to `tag` at runtime. Tags that do not parse leave the current
/// strings untouched and report no change.
pub fn set_language(tag: &str) -> Result<bool, I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "i18n: ignoring malformed language tag");
        return Ok(false);
    };
    let chosen = select(&[lang])?;
    Ok(!chosen.is_empty())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Language chosen in the header switcher. The host app provides it as a
/// `Signal<SelectedLanguage>` context so already-mounted views can follow
/// a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedLanguage(pub String);

/// Re-render the calling component whenever the selected language changes.
/// No-op when the host does not provide the context.
pub fn use_language_refresh() {
    if let Some(language) = try_use_context::<Signal<SelectedLanguage>>() {
        let _ = language.read();
    }
}

/// Embedded locales, sorted by tag.
pub fn available_languages() -> Vec<String> {
    let mut tags: Vec<String> = LOADER
        .available_languages(&Catalogues)
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect();
    tags.sort();
    tags
}

fn select(requested: &[LanguageIdentifier]) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Catalogues, requested)
}

#[cfg(target_arch = "wasm32")]
fn preferred_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn preferred_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
