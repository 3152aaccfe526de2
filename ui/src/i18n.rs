//! Localized labels for `tmedian-ui`.
//!
//! Wiring:
//! - `i18n-embed` picks the language from the platform requester and loads bundles
//! - `fluent` formats messages
//! - `rust-embed` embeds the `.ftl` files at compile time
//! - `i18n-embed-fl` provides the compile-time checked `fl!` macro
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/tmedian_ui.ftl   (fallback/reference)
//!   es-ES/tmedian_ui.ftl
//!   fr-FR/tmedian_ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("nav-logout");
//! ```
//!
//! Adding a locale: copy `en-US/tmedian_ui.ftl` to `i18n/<lang-id>/tmedian_ui.ftl`,
//! translate the values (keep IDs and placeholders) and register it in the
//! completeness tests.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation shorthand routed through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-logout")
/// t!("home-signed-in", name = display_name)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "tmedian_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("i18n: failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_languages_are_embedded() {
        let langs = available_languages();
        assert_eq!(langs, vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn domain_matches_the_name_fl_checks_against() {
        // `fl!` derives its domain from the package name with `-` folded to `_`.
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
        for lang in available_languages() {
            assert!(
                Localizations::get(&format!("{lang}/{DOMAIN}.ftl")).is_some(),
                "{lang} has no {DOMAIN}.ftl bundle"
            );
        }
    }

    #[test]
    fn fallback_bundle_resolves_labels() {
        init();
        let fallback: LanguageIdentifier = "en-US".parse().unwrap();
        i18n_embed::select(&*LOADER, &Localizations, &[fallback]).unwrap();
        assert_eq!(fl!(&*LOADER, "nav-logout"), "Logout");
        assert_eq!(fl!(&*LOADER, "nav-search-placeholder"), "Search...");
    }
}
