//! Response decoders
//!
//! Each decoder parses a body, walks a fixed key path and fails with
//! `Error::Shape` naming the path when the structure is not what we expect.

use super::types::{
    TimelineEdge, POST_MEDIA_PATH, PROFILE_USER_PATH, TIMELINE_EDGES_PATH,
    TIMELINE_PAGE_INFO_PATH,
};
use crate::error::{Error, Result};
use crate::pagination::PageInfo;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Parse a response body as JSON
pub fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
}

/// Walk a key path, failing with a shape error at the first missing key
pub fn extract_path<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        let walked = path[..=depth].join(".");
        current = match current {
            Value::Object(map) => map.get(*key).ok_or_else(|| {
                Error::shape(&walked, describe(value, &format!("missing key '{key}'")))
            })?,
            other => {
                return Err(Error::shape(
                    &walked,
                    format!("expected an object, found {}", type_name(other)),
                ))
            }
        };
    }

    if current.is_null() {
        return Err(Error::shape(
            path.join("."),
            describe(value, "value is null"),
        ));
    }

    Ok(current)
}

/// Walk a key path and decode the value found there
pub fn decode_at<T: DeserializeOwned>(value: &Value, path: &[&str]) -> Result<T> {
    let target = extract_path(value, path)?;
    Deserialize::deserialize(target).map_err(|e| Error::shape(path.join("."), e.to_string()))
}

/// Decode a single post response into the raw post payload
pub fn decode_post(body: &str) -> Result<Value> {
    let value = parse_body(body)?;
    extract_path(&value, POST_MEDIA_PATH).cloned()
}

/// Decode a profile response into the raw user payload
pub fn decode_profile(body: &str) -> Result<Value> {
    let value = parse_body(body)?;
    extract_path(&value, PROFILE_USER_PATH).cloned()
}

/// Decode the post nodes of a timeline page, in the order received.
///
/// Pagination metadata is decoded separately by [`decode_page_info`], so a
/// page with usable edges still yields them when its metadata is broken.
pub fn decode_timeline_nodes(raw: &Value) -> Result<Vec<Value>> {
    let edges: Vec<TimelineEdge> = decode_at(raw, TIMELINE_EDGES_PATH)?;
    Ok(edges.into_iter().map(|edge| edge.node).collect())
}

/// Decode the pagination metadata of a timeline page
pub fn decode_page_info(raw: &Value) -> Result<PageInfo> {
    decode_at(raw, TIMELINE_PAGE_INFO_PATH)
}

/// Append any error message the service reported alongside the data
fn describe(root: &Value, detail: &str) -> String {
    let reported = root
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            root.get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
        });

    match reported {
        Some(message) => format!("{detail} (service said: {message})"),
        None => detail.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
