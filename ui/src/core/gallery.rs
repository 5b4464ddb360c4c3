//! Gallery contents and the category filter for the design page.
//!
//! Items and filter options are both expanded from one manifest, so the select box can
//! never offer a category the grid does not know about.

use serde::{Deserialize, Serialize};

use super::error::SiteError;

/// Sentinel option that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

const MANIFEST_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/gallery.json"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub folder: String,
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryManifest {
    /// Path prefix every image folder hangs off.
    pub base: String,
    pub categories: Vec<GalleryCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    pub category: String,
}

impl GalleryManifest {
    /// The manifest bundled with the site.
    pub fn embedded() -> Result<Self, SiteError> {
        Self::load(MANIFEST_JSON)
    }

    /// Parse a manifest for display, logging a failure once here rather than at every render.
    pub fn load(raw: &str) -> Result<Self, SiteError> {
        Self::from_json(raw).inspect_err(|err| tracing::warn!(%err, "gallery unavailable"))
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Expand every category into `{base}/{folder}/{folder}-{n}.jpg`, numbered from 1.
    pub fn items(&self) -> Vec<GalleryItem> {
        self.categories
            .iter()
            .flat_map(|cat| {
                (1..=cat.count).map(move |n| GalleryItem {
                    src: format!("{}/{}/{}-{n}.jpg", self.base, cat.folder, cat.folder),
                    alt: format!("{} {n}", cat.label),
                    category: cat.label.clone(),
                })
            })
            .collect()
    }

    /// `"All"` followed by every category label, in manifest order.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().map(|cat| cat.label.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Accept `"All"` or one of `options`; anything else falls back to `All`.
    pub fn parse(value: &str, options: &[String]) -> Self {
        if value == ALL_CATEGORIES {
            return Self::All;
        }
        if options.iter().any(|opt| opt == value) {
            Self::Only(value.to_string())
        } else {
            tracing::warn!(category = value, "unknown gallery category; showing all");
            Self::All
        }
    }

    /// Value to put back into the select box.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(label) => label,
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => item.category == *label,
        }
    }
}

/// Items matching `filter`, in their original relative order.
pub fn filter_items<'a>(items: &'a [GalleryItem], filter: &CategoryFilter) -> Vec<&'a GalleryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
