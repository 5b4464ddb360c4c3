//! Site sections, drawer links and the navigation hook-up to the platform router.
//!
//! `ui` never sees the platform `Route` enum. The platform crate registers a
//! [`Navigate`] function at startup (before the router renders) and the drawer routes
//! every request through [`navigate_to`]:
//!
//! ```ignore
//! fn go_to(section: SiteSection) {
//!     let _ = navigator().push(match section { SiteSection::Home => Route::Home {}, /* ... */ });
//! }
//! ui::core::nav::register_navigator(go_to);
//! ```

use once_cell::sync::OnceCell;

use super::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSection {
    Home,
    Services,
    Experiences,
    Design,
    Contact,
}

impl SiteSection {
    /// Drawer order.
    pub const ALL: [SiteSection; 5] = [
        SiteSection::Home,
        SiteSection::Services,
        SiteSection::Experiences,
        SiteSection::Design,
        SiteSection::Contact,
    ];

    pub fn href(self) -> &'static str {
        match self {
            SiteSection::Home => "/home",
            SiteSection::Services => "/services",
            SiteSection::Experiences => "/Experiences",
            SiteSection::Design => "/design",
            SiteSection::Contact => "/contact",
        }
    }

    /// Resolve a routed path. Matching is exact, including the capitalised `/Experiences`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        Self::ALL.into_iter().find(|section| section.href() == path)
    }
}

/// One entry of the navigation drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

pub type Navigate = fn(SiteSection);

static NAVIGATOR: OnceCell<Navigate> = OnceCell::new();

/// Install the platform's router hook. Later registrations are ignored.
pub fn register_navigator(navigate: Navigate) {
    let _ = NAVIGATOR.set(navigate);
}

/// Validate `href` against the known sections and ask the platform router to go there.
///
/// Unknown targets are a logged no-op. Returns the section that was requested.
pub fn navigate_to(href: &str) -> Result<SiteSection, SiteError> {
    let section = SiteSection::from_path(href).ok_or_else(|| SiteError::NavigationTargetInvalid {
        target: href.to_string(),
    })?;

    match NAVIGATOR.get() {
        Some(navigate) => {
            tracing::debug!(href, "navigating");
            navigate(section);
        }
        None => tracing::warn!(href, "no navigator registered; ignoring request"),
    }
    Ok(section)
}
