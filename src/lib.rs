// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # instascrape
//!
//! A small async client for public Instagram data: single posts, user
//! profiles, and lazily paginated user timelines.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use instascrape::{Scraper, ScraperConfig, TimelineOptions};
//!
//! #[tokio::main]
//! async fn main() -> instascrape::Result<()> {
//!     let scraper = Scraper::new(ScraperConfig::default().with_env())?;
//!
//!     let post = scraper.scrape_post("https://www.instagram.com/p/DIH5xdXtbFj/").await?;
//!     let user = scraper.scrape_user("instagram").await?;
//!
//!     let mut posts = scraper.scrape_user_posts("instagram", TimelineOptions::new(12));
//!     while let Some(node) = posts.next().await {
//!         println!("{}", node?["code"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Scraper                            │
//! │   scrape_post()     scrape_user()     scrape_user_posts()    │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬───────────┐
//! │  Query   │ Transport │    Decode     │ Paginate  │  Output   │
//! ├──────────┼───────────┼───────────────┼───────────┼───────────┤
//! │ Shortcode│ reqwest   │ Key paths     │ Cursor    │ Snapshot  │
//! │ Variables│ Headers   │ Shape faults  │ Stall     │ JSON file │
//! │ Form body│ Status    │               │ Page limit│           │
//! └──────────┴───────────┴───────────────┴───────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration file and environment overrides
pub mod config;

/// HTTP client and transport seam
pub mod http;

/// Shortcode extraction and document query encoding
pub mod query;

/// Response payload decoders
pub mod decode;

/// Cursor pagination
pub mod pagination;

/// Snapshot and result files
pub mod output;

/// Post, profile and timeline flows
pub mod scraper;

/// Typed post and profile records
pub mod normalize;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ScraperConfig;
pub use error::{Error, FaultKind, Result};
pub use normalize::{MediaKind, Post, Profile};
pub use query::extract_shortcode;
pub use scraper::Scraper;
pub use types::TimelineOptions;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
