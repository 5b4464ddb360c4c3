use dioxus::prelude::*;

use crate::components::{CardGrid, PageShell};
use crate::content::{banner_messages, experience_cards, page_title, BRAND};
use crate::core::drawer::DrawerPolicy;
use crate::core::format::{brand_year, current_year};
use crate::core::nav::SiteSection;

#[component]
pub fn Experiences() -> Element {
    rsx! {
        PageShell {
            section: SiteSection::Experiences,
            title: page_title(SiteSection::Experiences),
            subtitle: brand_year(BRAND, current_year()),
            banner: banner_messages(SiteSection::Experiences),
            policy: DrawerPolicy::PinOnWide,
            CardGrid { cards: experience_cards() }
        }
    }
}
