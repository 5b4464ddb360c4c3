use dioxus::prelude::*;

use crate::components::{CardGrid, PageShell};
use crate::content::{banner_messages, home_cards, OWNER_NAME};
use crate::core::format::current_year;
use crate::core::nav::SiteSection;
use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageShell {
            section: SiteSection::Home,
            title: current_year().to_string(),
            subtitle: OWNER_NAME.to_string(),
            tagline: t!("home-tagline"),
            banner: banner_messages(SiteSection::Home),
            CardGrid { cards: home_cards() }
        }
    }
}
