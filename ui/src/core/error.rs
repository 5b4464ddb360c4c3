//! Failure modes of the site. None of them are fatal: callers log and render a fallback.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// A referenced image could not be loaded; the card degrades to its alt text.
    #[error("asset `{src}` failed to load")]
    AssetMissing { src: String },

    /// A navigation request named a path that no page is routed at.
    #[error("no page is routed at `{target}`")]
    NavigationTargetInvalid { target: String },

    /// The host refused to open an external chat or mail link.
    #[error("could not open `{url}`: {reason}")]
    ExternalLinkUnavailable { url: String, reason: String },

    /// The embedded gallery manifest did not parse.
    #[error("gallery manifest is malformed: {0}")]
    Manifest(String),
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Manifest(err.to_string())
    }
}
