//! Shared UI crate for the TY Designs site: pages, components, hooks and the pure state
//! behind them. Platform crates supply the router and launch the app.

pub mod content;
pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components {
    mod card_grid;
    pub use card_grid::CardGrid;

    mod chat_bubble;
    pub use chat_bubble::ChatBubble;

    mod design_gallery;
    pub use design_gallery::DesignGallery;

    mod nav_drawer;
    pub use nav_drawer::{NavDrawer, SITE_LOGO};

    mod page_shell;
    pub use page_shell::{FooterStyle, PageShell, PageTheme};

    mod rotating_banner;
    pub use rotating_banner::RotatingBanner;
}

use dioxus::prelude::*;

/// Site-wide stylesheet; platform crates link it once at the root.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
