//! Best-effort extraction of normalized records from raw payloads
//!
//! Two post shapes exist: the GraphQL `xdt_shortcode_media` payload of a
//! single post, and the v1 feed node of a timeline. Missing fields become
//! `None`; extraction never fails.

use super::types::{MediaKind, Post, Profile};
use chrono::{DateTime, Utc};
use serde_json::Value;

impl Post {
    /// Normalize a single-post payload (`data.xdt_shortcode_media`)
    pub fn from_post_payload(media: &Value) -> Self {
        let media_kind = match str_at(media, "__typename") {
            Some(t) if t.ends_with("Sidecar") => MediaKind::Carousel,
            Some(t) if t.ends_with("Video") => MediaKind::Video,
            Some(t) if t.ends_with("Image") => MediaKind::Image,
            _ => match bool_at(media, "is_video") {
                Some(true) => MediaKind::Video,
                Some(false) => MediaKind::Image,
                None => MediaKind::Unknown,
            },
        };

        Self {
            id: string_at(media, "id"),
            shortcode: string_at(media, "shortcode"),
            caption: string_at(media, "edge_media_to_caption.edges[0].node.text"),
            taken_at: u64_at(media, "taken_at_timestamp").and_then(timestamp),
            like_count: u64_at(media, "edge_media_preview_like.count")
                .or_else(|| u64_at(media, "edge_liked_by.count")),
            comment_count: u64_at(media, "edge_media_to_parent_comment.count")
                .or_else(|| u64_at(media, "edge_media_to_comment.count")),
            media_kind,
            display_url: string_at(media, "display_url"),
            video_url: string_at(media, "video_url"),
            owner_username: string_at(media, "owner.username"),
        }
    }

    /// Normalize a timeline node (v1 feed item)
    pub fn from_timeline_node(node: &Value) -> Self {
        // 1 = image, 2 = video, 8 = carousel
        let media_kind = match u64_at(node, "media_type") {
            Some(1) => MediaKind::Image,
            Some(2) => MediaKind::Video,
            Some(8) => MediaKind::Carousel,
            _ => MediaKind::Unknown,
        };

        Self {
            id: string_at(node, "pk").or_else(|| string_at(node, "id")),
            shortcode: string_at(node, "code"),
            caption: string_at(node, "caption.text"),
            taken_at: u64_at(node, "taken_at").and_then(timestamp),
            like_count: u64_at(node, "like_count"),
            comment_count: u64_at(node, "comment_count"),
            media_kind,
            display_url: string_at(node, "image_versions2.candidates[0].url")
                .or_else(|| string_at(node, "carousel_media[0].image_versions2.candidates[0].url")),
            video_url: string_at(node, "video_versions[0].url"),
            owner_username: string_at(node, "user.username")
                .or_else(|| string_at(node, "owner.username")),
        }
    }
}

impl Profile {
    /// Normalize a profile payload (`data.user`)
    pub fn from_user(user: &Value) -> Self {
        Self {
            id: string_at(user, "id"),
            username: string_at(user, "username"),
            full_name: string_at(user, "full_name"),
            biography: string_at(user, "biography"),
            follower_count: u64_at(user, "edge_followed_by.count"),
            following_count: u64_at(user, "edge_follow.count"),
            post_count: u64_at(user, "edge_owner_to_timeline_media.count"),
            is_private: bool_at(user, "is_private").unwrap_or(false),
            is_verified: bool_at(user, "is_verified").unwrap_or(false),
            profile_pic_url: string_at(user, "profile_pic_url_hd")
                .or_else(|| string_at(user, "profile_pic_url")),
            external_url: string_at(user, "external_url"),
        }
    }
}

/// Look up a dot path with optional `[n]` array indices
fn value_at<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index: usize = part[bracket_pos + 1..part.len() - 1].parse().ok()?;
            if !name.is_empty() {
                current = current.get(name)?;
            }
            current = current.get(index)?;
        } else {
            current = current.get(part)?;
        }
    }
    Some(current)
}

fn str_at<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    value_at(value, path)?.as_str()
}

/// Strings as is, numbers rendered (ids come as either)
fn string_at(value: &Value, path: &str) -> Option<String> {
    match value_at(value, path)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn u64_at(value: &Value, path: &str) -> Option<u64> {
    match value_at(value, path)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn bool_at(value: &Value, path: &str) -> Option<bool> {
    value_at(value, path)?.as_bool()
}

fn timestamp(seconds: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(seconds).ok()?, 0)
}
