//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrape public Instagram posts, timelines and profiles
#[derive(Parser, Debug)]
#[command(name = "instascrape")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single post
    Post {
        /// Post URL or shortcode
        target: String,

        /// Print the raw payload instead of the normalized record
        #[arg(long)]
        raw: bool,
    },

    /// Fetch a user profile
    User {
        /// Username
        username: String,

        /// Print the raw payload instead of the normalized record
        #[arg(long)]
        raw: bool,
    },

    /// Fetch a user's posts, page by page
    Posts {
        /// Username
        username: String,

        /// Posts per page (defaults to the config value)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,

        /// Stop after this many pages (0 still fetches one page)
        #[arg(long)]
        max_pages: Option<u32>,

        /// Print raw nodes instead of normalized records
        #[arg(long)]
        raw: bool,

        /// Also write all collected posts to this file (JSON array)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Pretty-printed JSON
    Pretty,
}
