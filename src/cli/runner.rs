//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ScraperConfig;
use crate::error::{Error, Result, ResultExt};
use crate::normalize::{Post, Profile};
use crate::output::write_json_file;
use crate::scraper::Scraper;
use crate::types::TimelineOptions;
use futures::StreamExt;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        if !config.session.has_session() {
            warn!("No session cookie configured; the profile endpoint usually rejects anonymous requests");
        }
        let scraper = Scraper::new(config)?;

        match &self.cli.command {
            Commands::Post { target, raw } => {
                let payload = scraper.scrape_post(target).await?;
                if *raw {
                    self.emit(&payload)
                } else {
                    self.emit(&Post::from_post_payload(&payload))
                }
            }
            Commands::User { username, raw } => {
                let payload = scraper.scrape_user(username).await?;
                if *raw {
                    self.emit(&payload)
                } else {
                    self.emit(&Profile::from_user(&payload))
                }
            }
            Commands::Posts {
                username,
                page_size,
                max_pages,
                raw,
                output,
            } => {
                let mut options = scraper.config().timeline;
                if let Some(page_size) = page_size {
                    options.page_size = *page_size;
                }
                if max_pages.is_some() {
                    options.max_pages = *max_pages;
                }
                self.posts(&scraper, username, options, *raw, output.as_deref())
                    .await
            }
        }
    }

    /// Stream a timeline to stdout, optionally collecting it to a file
    async fn posts(
        &self,
        scraper: &Scraper,
        username: &str,
        options: TimelineOptions,
        raw: bool,
        output: Option<&Path>,
    ) -> Result<()> {
        let mut collected: Vec<Value> = Vec::new();
        let mut stream = scraper.scrape_user_posts(username, options);

        while let Some(node) = stream.next().await {
            let node = match node {
                Ok(node) => node,
                Err(e) => return Err(save_partial(output, &collected, e)),
            };

            let item = if raw {
                node
            } else {
                serde_json::to_value(Post::from_timeline_node(&node))?
            };
            self.emit(&item)?;
            if output.is_some() {
                collected.push(item);
            }
        }

        if let Some(path) = output {
            write_json_file(path, &collected)
                .with_context(|| format!("Saving results to {}", path.display()))?;
            info!("Wrote {} posts to {}", collected.len(), path.display());
        }
        Ok(())
    }

    /// Load the config file (if any) and apply environment overrides
    fn load_config(&self) -> Result<ScraperConfig> {
        let config = match &self.cli.config {
            Some(path) => ScraperConfig::load(path)?,
            None => ScraperConfig::default(),
        };
        let config = config.with_env();
        config.validate()?;
        Ok(config)
    }

    /// Print one item in the selected format
    fn emit<T: Serialize>(&self, item: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(item)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(item)?,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        Ok(())
    }
}

/// Save the posts collected before `error`, then hand `error` back.
///
/// A failed save is logged; the fetch error is always the one returned.
fn save_partial(output: Option<&Path>, collected: &[Value], error: Error) -> Error {
    if let Some(path) = output {
        match write_json_file(path, collected) {
            Ok(()) => info!(
                "Wrote {} posts to {} before failing",
                collected.len(),
                path.display()
            ),
            Err(save_error) => warn!(
                "Could not save partial results to {}: {save_error}",
                path.display()
            ),
        }
    }
    error
}
