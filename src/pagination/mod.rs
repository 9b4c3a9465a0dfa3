//! Pagination module
//!
//! # Overview
//!
//! Timeline pages form a cursor-based connection. [`CursorPaginator`]
//! inspects each page's [`PageInfo`], advances the [`PaginationState`] and
//! reports whether another page should be fetched.

mod cursor;
mod types;

pub use cursor::CursorPaginator;
pub use types::{NextPage, PageInfo, PaginationState, StopReason};
