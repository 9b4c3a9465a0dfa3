//! Cursor pagination over a GraphQL connection
//!
//! Termination rules, checked in this order after every page:
//! 1. `has_next_page` is false
//! 2. `end_cursor` equals the previous page's cursor (stall)
//! 3. after advancing, the page counter exceeds `max_pages`
//!
//! The stall check only looks one page back; a longer cycle of cursors is
//! not detected.

use super::types::{NextPage, PageInfo, PaginationState, StopReason};
use tracing::debug;

/// Cursor-based pagination with stall detection and an optional page limit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPaginator {
    /// Stop after this many pages
    pub max_pages: Option<u32>,
}

impl CursorPaginator {
    /// Create a paginator stopping after `max_pages` pages
    pub fn with_max_pages(max_pages: Option<u32>) -> Self {
        Self { max_pages }
    }

    /// Process one page's metadata and decide whether to fetch another
    pub fn process_page(
        &self,
        page_info: &PageInfo,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        if !page_info.has_next_page {
            debug!("Page {}: no next page", state.page);
            return finish(state, StopReason::Exhausted);
        }

        if page_info.end_cursor == state.cursor {
            debug!("Page {}: cursor did not advance", state.page);
            return finish(state, StopReason::StalledCursor);
        }

        state.set_cursor(page_info.end_cursor.clone());
        state.next_page();

        if let Some(max_pages) = self.max_pages {
            if state.page > max_pages {
                debug!("Reached page limit of {}", max_pages);
                return finish(state, StopReason::PageLimit);
            }
        }

        NextPage::Continue {
            cursor: state.cursor.clone(),
        }
    }
}

fn finish(state: &mut PaginationState, reason: StopReason) -> NextPage {
    state.mark_done(reason);
    NextPage::Done(reason)
}
