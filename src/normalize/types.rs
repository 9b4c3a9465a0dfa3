//! Normalized record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// A single photo
    Image,
    /// A single video or reel
    Video,
    /// Several photos or videos
    Carousel,
    /// The payload did not say
    Unknown,
}

/// A post, from either a single-post payload or a timeline node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Numeric media id
    pub id: Option<String>,
    /// Shortcode used in post URLs
    pub shortcode: Option<String>,
    /// Caption text
    pub caption: Option<String>,
    /// Publication time
    pub taken_at: Option<DateTime<Utc>>,
    /// Like count
    pub like_count: Option<u64>,
    /// Comment count
    pub comment_count: Option<u64>,
    /// Media kind
    pub media_kind: MediaKind,
    /// Image URL (first item for carousels, thumbnail for videos)
    pub display_url: Option<String>,
    /// Video URL
    pub video_url: Option<String>,
    /// Author's username
    pub owner_username: Option<String>,
}

impl Post {
    /// Canonical post URL, when the shortcode is known
    pub fn url(&self) -> Option<String> {
        self.shortcode
            .as_ref()
            .map(|code| format!("https://www.instagram.com/p/{code}/"))
    }
}

/// A user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Numeric user id
    pub id: Option<String>,
    /// Username
    pub username: Option<String>,
    /// Display name
    pub full_name: Option<String>,
    /// Biography text
    pub biography: Option<String>,
    /// Followers
    pub follower_count: Option<u64>,
    /// Accounts followed
    pub following_count: Option<u64>,
    /// Posts on the timeline
    pub post_count: Option<u64>,
    /// Private account
    pub is_private: bool,
    /// Verified account
    pub is_verified: bool,
    /// Profile picture URL, HD when available
    pub profile_pic_url: Option<String>,
    /// Link in bio
    pub external_url: Option<String>,
}
