//! CLI module
//!
//! Command-line interface for running scrapes.
//!
//! # Commands
//!
//! - `post` - Fetch a single post by URL or shortcode
//! - `user` - Fetch a user profile
//! - `posts` - Stream a user's timeline

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
