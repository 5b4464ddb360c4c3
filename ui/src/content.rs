//! Static site content: identity, contact details, banner lists and card copy.

use crate::core::nav::{NavLink, SiteSection};
use crate::t;

pub const OWNER_NAME: &str = "Tinotenda James";
pub const BRAND: &str = "TY Designs";
pub const CONTACT_EMAIL: &str = "contact@tydesigns.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+263 78 061 8259";
/// Digits only, as `wa.me` expects.
pub const WHATSAPP_NUMBER: &str = "263780618259";
pub const LOCATION: &str = "Harare, Zimbabwe";

pub const CHAT_DESIGNER_NAME: &str = "tyno james";
pub const CHAT_TITLE: &str = "Lead Designer";
pub const CHAT_GREETING: &str = "Hey, how can I help you today?";

/// A titled card in a page's content grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: String,
    pub body: String,
}

impl Card {
    fn new(icon: &'static str, title: String, body: String) -> Self {
        Self { icon, title, body }
    }
}

pub fn site_title() -> String {
    t!("site-title")
}

/// Meta description for search engines.
pub fn site_description() -> String {
    t!("site-description")
}

/// The five drawer routes, in display order.
pub fn default_nav_links() -> Vec<NavLink> {
    SiteSection::ALL
        .into_iter()
        .map(|section| NavLink::new(nav_label(section), section.href()))
        .collect()
}

pub fn nav_label(section: SiteSection) -> String {
    match section {
        SiteSection::Home => t!("nav-home"),
        SiteSection::Services => t!("nav-services"),
        SiteSection::Experiences => t!("nav-experiences"),
        SiteSection::Design => t!("nav-design"),
        SiteSection::Contact => t!("nav-contact"),
    }
}

pub fn page_title(section: SiteSection) -> String {
    match section {
        SiteSection::Home => t!("page-home"),
        SiteSection::Services => t!("page-services"),
        SiteSection::Experiences => t!("page-experiences"),
        SiteSection::Design => t!("page-design"),
        SiteSection::Contact => t!("page-contact"),
    }
}

pub fn banner_messages(section: SiteSection) -> Vec<String> {
    match section {
        SiteSection::Home => vec![
            t!("home-banner-updates"),
            t!("home-banner-showcase"),
            t!("home-banner-curious"),
        ],
        SiteSection::Services => vec![
            t!("services-banner-empower"),
            t!("services-banner-precision"),
            t!("services-banner-creativity"),
        ],
        SiteSection::Experiences => vec![
            t!("experiences-banner-launched"),
            t!("experiences-banner-awards"),
            t!("experiences-banner-trusted"),
        ],
        SiteSection::Design => vec![
            t!("design-banner-purpose"),
            t!("design-banner-harmony"),
            t!("design-banner-identity"),
        ],
        SiteSection::Contact => vec![
            t!("contact-banner-collaborate"),
            t!("contact-banner-reach"),
            t!("contact-banner-worldwide"),
        ],
    }
}

pub fn home_cards() -> Vec<Card> {
    vec![
        Card::new("✦", t!("home-card-services-title"), t!("home-card-services-body")),
        Card::new("✦", t!("home-card-experiences-title"), t!("home-card-experiences-body")),
        Card::new("✦", t!("home-card-design-title"), t!("home-card-design-body")),
    ]
}

pub fn service_cards() -> Vec<Card> {
    vec![
        Card::new("🚀", t!("services-web-title"), t!("services-web-body")),
        Card::new("🎨", t!("services-brand-title"), t!("services-brand-body")),
        Card::new("👥", t!("services-ux-title"), t!("services-ux-body")),
    ]
}

pub fn experience_cards() -> Vec<Card> {
    vec![
        Card::new("💼", t!("experiences-startup-title"), t!("experiences-startup-body")),
        Card::new("🏅", t!("experiences-award-title"), t!("experiences-award-body")),
        Card::new("👥", t!("experiences-community-title"), t!("experiences-community-body")),
    ]
}

pub fn contact_cards() -> Vec<Card> {
    vec![
        Card::new("✉️", t!("contact-email-label"), CONTACT_EMAIL.to_string()),
        Card::new("📞", t!("contact-phone-label"), CONTACT_PHONE_DISPLAY.to_string()),
        Card::new("📍", t!("contact-location-label"), LOCATION.to_string()),
    ]
}
