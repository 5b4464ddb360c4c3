//! Platform-agnostic state and helpers shared by every page.

pub mod breakpoint;
pub mod drawer;
pub mod error;
pub mod format;
pub mod gallery;
pub mod nav;
pub mod platform;
pub mod rotation;
pub mod timing;
