//! Response decoder module
//!
//! # Overview
//!
//! Every flow expects its payload at a fixed key path. The decoders here
//! walk that path explicitly so that a changed response schema surfaces as
//! `Error::Shape { path, .. }` rather than as a transport failure or panic.

mod decoders;
mod types;

pub use decoders::{
    decode_at, decode_page_info, decode_post, decode_profile, decode_timeline_nodes,
    extract_path, parse_body,
};
pub use types::{
    TimelineEdge, POST_MEDIA_PATH, PROFILE_USER_PATH, TIMELINE_EDGES_PATH,
    TIMELINE_PAGE_INFO_PATH,
};
