//! Pagination types
//!
//! Defines the page metadata, the running state and the per-page outcome.

use serde::{Deserialize, Serialize};

/// Pagination metadata reported with every timeline page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether the service claims another page exists
    pub has_next_page: bool,
    /// Cursor of the next page
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// Why pagination stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The service reported no next page
    Exhausted,
    /// The cursor did not change from the previous page
    StalledCursor,
    /// The caller's page limit was reached
    PageLimit,
}

/// Result of processing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch the page after `cursor`
    Continue {
        /// Cursor for the `after` variable
        cursor: Option<String>,
    },
    /// No more pages
    Done(StopReason),
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Number of the page being fetched, starting at 1
    pub page: u32,
    /// Cursor returned with the previous page
    pub cursor: Option<String>,
    /// Total nodes fetched so far
    pub total_fetched: u64,
    /// Set once pagination is complete
    pub stop_reason: Option<StopReason>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            cursor: None,
            total_fetched: 0,
            stop_reason: None,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Is pagination complete?
    pub fn is_done(&self) -> bool {
        self.stop_reason.is_some()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self, reason: StopReason) {
        self.stop_reason = Some(reason);
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: Option<String>) {
        self.cursor = cursor;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}
