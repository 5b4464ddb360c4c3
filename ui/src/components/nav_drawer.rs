use dioxus::prelude::*;

use crate::content::default_nav_links;
use crate::core::nav::{navigate_to, NavLink, SiteSection};
use crate::t;

const DRAWER_CSS: Asset = asset!("/assets/styling/drawer.css");
pub const SITE_LOGO: Asset = asset!("/assets/brand/logo.svg");

/// Overlay navigation listing the site's routes.
///
/// `active` is the section of the route currently rendered; the highlight follows it
/// whenever it changes. Selecting a link navigates, highlights it and closes the drawer.
#[component]
pub fn NavDrawer(
    open: bool,
    on_close: EventHandler<()>,
    active: SiteSection,
    logo: Option<String>,
    links: Option<Vec<NavLink>>,
) -> Element {
    let mut selected = use_signal(|| active.href().to_string());
    use_effect(use_reactive((&active,), move |(active,)| {
        selected.set(active.href().to_string());
    }));

    if !open {
        // Keep the stylesheet in the head so the first open paints styled.
        return rsx! {
            document::Link { rel: "stylesheet", href: DRAWER_CSS }
        };
    }

    let links = links.unwrap_or_else(default_nav_links);
    let logo_src = logo.unwrap_or_else(|| SITE_LOGO.to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: DRAWER_CSS }

        aside { class: "drawer", role: "navigation",
            button {
                r#type: "button",
                class: "drawer__close",
                aria_label: t!("nav-close"),
                onclick: move |_| on_close.call(()),
                "×"
            }

            img { class: "drawer__logo", src: "{logo_src}", alt: t!("logo-alt") }
            div { class: "drawer__brand", {t!("brand-mark")} }

            nav { class: "drawer__links",
                for link in links.into_iter() {
                    {render_link(link, selected, on_close)}
                }
            }
        }
    }
}

fn render_link(link: NavLink, mut selected: Signal<String>, on_close: EventHandler<()>) -> Element {
    let NavLink { label, href } = link;
    let is_active = selected() == href;

    rsx! {
        button {
            key: "{label}-{href}",
            r#type: "button",
            class: format!(
                "drawer__link {}",
                if is_active { "drawer__link--active" } else { "" }
            ),
            onclick: move |_| {
                match navigate_to(&href) {
                    Ok(_) => selected.set(href.clone()),
                    Err(err) => tracing::warn!(%err, "drawer link ignored"),
                }
                on_close.call(());
            },
            "{label}"
        }
    }
}
