use dioxus::prelude::*;

use crate::components::{DesignGallery, FooterStyle, PageShell, PageTheme};
use crate::content::{banner_messages, page_title, BRAND};
use crate::core::format::{brand_year, current_year};
use crate::core::nav::SiteSection;

#[component]
pub fn Design() -> Element {
    rsx! {
        PageShell {
            section: SiteSection::Design,
            title: page_title(SiteSection::Design),
            subtitle: brand_year(BRAND, current_year()),
            banner: banner_messages(SiteSection::Design),
            theme: PageTheme::Light,
            footer: FooterStyle::Note,
            DesignGallery {}
        }
    }
}
