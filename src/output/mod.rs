//! Output module
//!
//! JSON files written to disk: the optional debug snapshot of the latest
//! timeline page, and collected results.

mod writer;

pub use writer::{write_json_file, SnapshotWriter};
