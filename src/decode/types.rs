//! Typed response records
//!
//! Only the parts of a response the scraper relies on are typed. Post and
//! user payloads stay as raw JSON because the remote schema is large and
//! unstable; normalization picks fields out of them best-effort.

use serde::Deserialize;
use serde_json::Value;

/// Key path of the single post payload
pub const POST_MEDIA_PATH: &[&str] = &["data", "xdt_shortcode_media"];

/// Key path of the timeline edges
pub const TIMELINE_EDGES_PATH: &[&str] = &[
    "data",
    "xdt_api__v1__feed__user_timeline_graphql_connection",
    "edges",
];

/// Key path of the timeline pagination metadata
pub const TIMELINE_PAGE_INFO_PATH: &[&str] = &[
    "data",
    "xdt_api__v1__feed__user_timeline_graphql_connection",
    "page_info",
];

/// Key path of the profile payload
pub const PROFILE_USER_PATH: &[&str] = &["data", "user"];

/// An edge of a timeline connection
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEdge {
    /// The post node
    pub node: Value,
}
