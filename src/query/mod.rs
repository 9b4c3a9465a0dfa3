//! Query construction module
//!
//! Turns caller input into the pieces of a GraphQL document query:
//! the post shortcode, the typed variables, and the encoded form body.

mod identifier;
mod variables;

pub use identifier::{extract_shortcode, POST_PATH_MARKER};
pub use variables::{
    encode_document_query, to_compact_json, PostVariables, TimelineData, TimelineVariables,
};
