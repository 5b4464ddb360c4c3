use dioxus::prelude::*;

use crate::core::timing::BANNER_INTERVAL_MS;
use crate::hooks::use_rotation;
use crate::t;

/// Status strip cycling through `messages` every `interval_ms`.
#[component]
pub fn RotatingBanner(
    messages: Vec<String>,
    #[props(default = BANNER_INTERVAL_MS)] interval_ms: u64,
) -> Element {
    let index = use_rotation(messages.len(), interval_ms);

    let Some(message) = messages.get(index()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "banner",
            role: "status",
            aria_live: "polite",
            aria_label: t!("banner-label"),
            "{message}"
        }
    }
}
