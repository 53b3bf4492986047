//! Session crate for the venue browser.
//!
//! This crate ties the catalog and the facet engine together into one
//! browsing session driven by discrete user events.

pub mod browse;

pub use browse::{BrowseEvent, BrowseSession, SessionError};
