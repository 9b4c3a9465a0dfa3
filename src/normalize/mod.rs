//! Normalization module
//!
//! Typed [`Post`] and [`Profile`] records built from raw payloads.

mod extract;
mod types;

pub use types::{MediaKind, Post, Profile};
