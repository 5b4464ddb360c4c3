use dioxus::prelude::*;

use crate::components::SITE_LOGO;
use crate::core::timing::{run_reveal, SPLASH_DELAY_MS};
use crate::i18n;
use crate::t;

const PARTNER_LOGO: Asset = asset!("/assets/brand/millerz.svg");

/// Brand splash for `/`; calls `on_elapsed` once after `delay_ms`.
#[component]
pub fn SplashScreen(
    #[props(default = SPLASH_DELAY_MS)] delay_ms: u64,
    on_elapsed: EventHandler<()>,
) -> Element {
    i18n::init();
    use_future(move || run_reveal(delay_ms, move || on_elapsed.call(())));
    let site_title = t!("site-title");

    rsx! {
        document::Title { "{site_title}" }

        main { class: "splash",
            div { class: "splash__glow" }
            div { class: "splash__content",
                img { class: "splash__partner", src: PARTNER_LOGO, alt: "Millerz Logo", width: "128", height: "128" }
                div { class: "splash__spinner" }
                img { class: "splash__logo", src: SITE_LOGO, alt: t!("logo-alt"), width: "96", height: "96" }
                div { class: "splash__credit",
                    {t!("splash-by")}
                    " "
                    span { class: "splash__partner-name", "Millerz" }
                    " "
                    {t!("splash-with")}
                    " "
                    span { class: "splash__brand-name", "{site_title}" }
                }
            }
        }
    }
}
