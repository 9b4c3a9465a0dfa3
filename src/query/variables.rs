//! GraphQL document query variables and form encoding
//!
//! Variables are plain serde records. Field declaration order is the key
//! order on the wire, and optional fields always serialize (as `null`), so
//! equal inputs always produce byte-identical bodies.

use crate::error::Result;
use serde::Serialize;

/// Variables for the single post document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostVariables {
    /// Post shortcode
    pub shortcode: String,
    /// Always `null`
    pub fetch_tagged_user_count: Option<u32>,
    /// Comment to pin to the top, if any
    pub hoisted_comment_id: Option<String>,
    /// Reply to pin to the top, if any
    pub hoisted_reply_id: Option<String>,
}

impl PostVariables {
    /// Variables for one post, all optional fields empty
    pub fn new(shortcode: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            fetch_tagged_user_count: None,
            hoisted_comment_id: None,
            hoisted_reply_id: None,
        }
    }
}

/// Variables for the user timeline document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineVariables {
    /// Cursor of the page to fetch (`None` = first page)
    pub after: Option<String>,
    /// Backward cursor, unused
    pub before: Option<String>,
    /// Page size and reel flags
    pub data: TimelineData,
    /// Page size
    pub first: u32,
    /// Backward page size, unused
    pub last: Option<u32>,
    /// Timeline owner
    pub username: String,
    /// Relay provider flag
    #[serde(rename = "__relay_internal__pv__PolarisIsLoggedInrelayprovider")]
    pub is_logged_in_provider: bool,
    /// Relay provider flag
    #[serde(rename = "__relay_internal__pv__PolarisShareSheetV3relayprovider")]
    pub share_sheet_provider: bool,
}

/// Nested `data` block of the timeline variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineData {
    /// Page size
    pub count: u32,
    /// Reel flag, always set
    pub include_reel_media_seen_timestamp: bool,
    /// Reel flag, always set
    pub include_relationship_info: bool,
    /// Reel flag, always set
    pub latest_besties_reel_media: bool,
    /// Reel flag, always set
    pub latest_reel_media: bool,
}

impl TimelineVariables {
    /// Variables for the first page of a user's timeline
    pub fn new(username: impl Into<String>, page_size: u32) -> Self {
        Self {
            after: None,
            before: None,
            data: TimelineData {
                count: page_size,
                include_reel_media_seen_timestamp: true,
                include_relationship_info: true,
                latest_besties_reel_media: true,
                latest_reel_media: true,
            },
            first: page_size,
            last: None,
            username: username.into(),
            is_logged_in_provider: true,
            share_sheet_provider: true,
        }
    }

    /// Point the variables at the page after `cursor`
    pub fn set_after(&mut self, cursor: impl Into<String>) {
        self.after = Some(cursor.into());
    }
}

/// Serialize variables to compact JSON (`,` and `:` separators, no spaces)
pub fn to_compact_json<V: Serialize>(variables: &V) -> Result<String> {
    Ok(serde_json::to_string(variables)?)
}

/// Build the form body `variables=<percent-encoded JSON>&doc_id=<doc_id>`
pub fn encode_document_query<V: Serialize>(variables: &V, doc_id: &str) -> Result<String> {
    let json = to_compact_json(variables)?;
    Ok(format!(
        "variables={}&doc_id={}",
        urlencoding::encode(&json),
        doc_id
    ))
}
