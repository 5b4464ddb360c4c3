//! Localized strings for the site.
//!
//! Every visible string lives in a Fluent bundle embedded at compile time:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/tydesigns_ui.ftl   (fallback/reference)
//! ```
//!
//! Lookups go through the `t!` macro, which `i18n-embed-fl` checks against the fallback
//! bundle at compile time, so a typo in a key fails the build instead of rendering blank:
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let label = t!("nav-home");
//! ```
//!
//! Adding a locale means copying `en-US/tydesigns_ui.ftl` to `i18n/<lang-id>/` and
//! translating the values; the requester picks it up from the browser's language list.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!(&*LOADER, ...)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the bundle file in every locale folder is `{DOMAIN}.ftl`.
const DOMAIN: &str = "tydesigns_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the visitor's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
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
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        assert_eq!(crate::t!("nav-home"), "HOME");
        assert_eq!(crate::t!("page-design"), "Designs Done");
    }

    #[test]
    fn bundle_is_named_after_the_package_domain() {
        // `fl!` resolves the bundle from the package name with dashes folded to underscores.
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
        let path = format!("{DOMAIN}.ftl");
        assert!(Localizations::get(&format!("en-US/{path}")).is_some(), "missing en-US/{path}");
    }
}
