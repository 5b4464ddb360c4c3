use dioxus::prelude::*;

use crate::components::{NavDrawer, RotatingBanner};
use crate::content::{page_title, CONTACT_EMAIL, OWNER_NAME};
use crate::core::breakpoint::DEFAULT_BREAKPOINT_PX;
use crate::core::drawer::{DrawerPolicy, DrawerState};
use crate::core::format::{copyright_line, current_year, mailto_link};
use crate::core::nav::SiteSection;
use crate::core::timing::REVEAL_DELAY_MS;
use crate::hooks::{use_escape_key, use_is_wide_viewport, use_reveal};
use crate::i18n;
use crate::t;

/// Colour treatment of a page; maps to a `page--{name}` modifier in the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageTheme {
    #[default]
    Dark,
    Light,
    Sun,
}

impl PageTheme {
    fn class(self) -> &'static str {
        match self {
            PageTheme::Dark => "page--dark",
            PageTheme::Light => "page--light",
            PageTheme::Sun => "page--sun",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FooterStyle {
    /// Copyright plus a mail-to link.
    #[default]
    MailTo,
    /// Copyright plus a short note.
    Note,
    Hidden,
}

/// Layout shared by every content page: drawer, hamburger, banner, hero, content, footer.
///
/// The shell owns the page's UI state. The reveal flag, banner index, drawer state and
/// breakpoint all start fresh on mount and are dropped with the page.
#[component]
pub fn PageShell(
    section: SiteSection,
    title: String,
    subtitle: String,
    tagline: Option<String>,
    banner: Vec<String>,
    #[props(default)] policy: DrawerPolicy,
    #[props(default)] theme: PageTheme,
    #[props(default)] footer: FooterStyle,
    children: Element,
) -> Element {
    i18n::init();

    let revealed = use_reveal(REVEAL_DELAY_MS);
    let wide = use_is_wide_viewport(DEFAULT_BREAKPOINT_PX);
    let mut drawer = use_signal(DrawerState::default);
    let close_drawer = use_callback(move |()| drawer.with_mut(DrawerState::close));
    use_escape_key(close_drawer);

    let drawer_visible = drawer().visible(policy, wide(), revealed());
    let stage = if revealed() { "page--revealed" } else { "page--intro" };
    let document_title = format!("{} | {}", page_title(section), t!("site-title"));
    let year = current_year();
    let copyright = copyright_line(year, OWNER_NAME, &t!("footer-rights"));

    let page_class = format!("page {} {stage}", theme.class());

    rsx! {
        document::Title { "{document_title}" }

        div { class: "{page_class}",
            if drawer_visible {
                if drawer().needs_backdrop() {
                    div {
                        class: "drawer-backdrop",
                        onclick: move |_| close_drawer.call(()),
                    }
                }
            } else {
                button {
                    r#type: "button",
                    class: "page__menu",
                    aria_label: t!("nav-open"),
                    onclick: move |_| drawer.with_mut(DrawerState::open),
                    "☰"
                }
            }

            NavDrawer { open: drawer_visible, on_close: close_drawer, active: section }

            main { class: "page__main",
                div { class: "page__overlay" }

                RotatingBanner { messages: banner }

                header { class: "hero",
                    h1 { class: "hero__title", "{title}" }
                    h2 { class: "hero__subtitle", "{subtitle}" }
                    if let Some(line) = tagline {
                        p { class: "hero__tagline", "{line}" }
                    }
                }

                {children}

                {match footer {
                    FooterStyle::MailTo => rsx! {
                        footer { class: "page__footer",
                            "{copyright}"
                            br {}
                            a { href: mailto_link(CONTACT_EMAIL), {t!("footer-cta")} }
                        }
                    },
                    FooterStyle::Note => rsx! {
                        footer { class: "page__footer",
                            "{copyright}"
                            br {}
                            span { {t!("footer-reach-out")} }
                        }
                    },
                    FooterStyle::Hidden => rsx! {},
                }}
            }
        }
    }
}
