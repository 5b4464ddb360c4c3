use dioxus::prelude::*;

use crate::components::{CardGrid, PageShell};
use crate::content::{banner_messages, page_title, service_cards, BRAND};
use crate::core::drawer::DrawerPolicy;
use crate::core::format::{brand_year, current_year};
use crate::core::nav::SiteSection;

#[component]
pub fn Services() -> Element {
    rsx! {
        PageShell {
            section: SiteSection::Services,
            title: page_title(SiteSection::Services),
            subtitle: brand_year(BRAND, current_year()),
            banner: banner_messages(SiteSection::Services),
            policy: DrawerPolicy::PinOnWide,
            CardGrid { cards: service_cards() }
        }
    }
}
