//! Common types used throughout instascrape
//!
//! Shared type definitions used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET with query parameters
    #[default]
    GET,
    /// POST with a form body
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

// ============================================================================
// Timeline Options
// ============================================================================

/// Default number of posts requested per timeline page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Options for walking a user timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineOptions {
    /// Posts requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Stop after this many pages; `None` walks until the timeline ends.
    ///
    /// The first page is always fetched, so `Some(0)` behaves like
    /// `Some(1)`. Zero never means "unlimited".
    #[serde(default)]
    pub max_pages: Option<u32>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: None,
        }
    }
}

impl TimelineOptions {
    /// Create options with a page size and no page limit
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            max_pages: None,
        }
    }

    /// Limit the number of pages fetched
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}
