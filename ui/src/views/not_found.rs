use dioxus::prelude::*;

use crate::core::error::SiteError;
use crate::core::nav::{navigate_to, SiteSection};
use crate::t;

/// Rendered for paths outside the site's routes; logs and offers a way back.
#[component]
pub fn NotFound(path: String) -> Element {
    use_hook({
        let path = path.clone();
        move || {
            let err = SiteError::NavigationTargetInvalid { target: path };
            tracing::warn!(%err, "unrouted path requested");
        }
    });

    rsx! {
        section { class: "page page--dark page--revealed not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            code { "{path}" }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| {
                    let _ = navigate_to(SiteSection::Home.href());
                },
                {t!("not-found-home")}
            }
        }
    }
}
