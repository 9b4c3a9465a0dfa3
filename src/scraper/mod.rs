//! Scraper module
//!
//! The three request flows, sharing one transport and one configuration:
//!
//! - [`Scraper::scrape_post`]: one post by URL or shortcode
//! - [`Scraper::scrape_user`]: one profile by username
//! - [`Scraper::scrape_user_posts`]: a lazy stream over a user's timeline

mod timeline;

use crate::config::ScraperConfig;
use crate::decode::{decode_post, decode_profile};
use crate::error::Result;
use crate::http::{ApiRequest, HttpClient, HttpClientConfig, Transport};
use crate::output::SnapshotWriter;
use crate::query::{encode_document_query, extract_shortcode, PostVariables};
use crate::types::TimelineOptions;
use futures::stream::BoxStream;
use serde_json::Value;
use tracing::{debug, info};

/// Scraper over a [`Transport`]
pub struct Scraper<T: Transport = HttpClient> {
    transport: T,
    config: ScraperConfig,
    snapshot: Option<SnapshotWriter>,
}

impl Scraper<HttpClient> {
    /// Create a scraper backed by a reqwest client built from `config`
    pub fn new(config: ScraperConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(HttpClientConfig::from_scraper_config(&config))?;
        Ok(Self::with_transport(config, client))
    }
}

impl<T: Transport> Scraper<T> {
    /// Create a scraper over any transport
    pub fn with_transport(config: ScraperConfig, transport: T) -> Self {
        let snapshot = config.debug.snapshot_path.clone().map(SnapshotWriter::new);
        if let Some(writer) = &snapshot {
            debug!("Writing timeline snapshots to {}", writer.path().display());
        }
        Self {
            transport,
            config,
            snapshot,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one post and return its raw payload
    pub async fn scrape_post(&self, url_or_shortcode: &str) -> Result<Value> {
        let shortcode = extract_shortcode(url_or_shortcode);
        info!("Scraping post: {shortcode}");

        let body = encode_document_query(
            &PostVariables::new(shortcode),
            &self.config.documents.post_doc_id,
        )?;
        let response = self
            .transport
            .execute(ApiRequest::post_form(&self.config.endpoints.graphql_url, body))
            .await?;

        decode_post(&response)
    }

    /// Fetch one profile and return the raw user payload
    pub async fn scrape_user(&self, username: &str) -> Result<Value> {
        info!("Scraping profile: {username}");

        let response = self
            .transport
            .execute(ApiRequest::get(&self.config.endpoints.profile_url).query("username", username))
            .await?;

        decode_profile(&response)
    }

    /// Stream every post node of a user's timeline.
    ///
    /// Nothing is fetched until the stream is polled. The stream ends when the
    /// service reports no next page, when the cursor stops advancing, or after
    /// `options.max_pages` pages; it yields at most one error, then ends.
    pub fn scrape_user_posts(
        &self,
        username: &str,
        options: TimelineOptions,
    ) -> BoxStream<'_, Result<Value>> {
        timeline::user_posts(self, username, options)
    }
}

impl<T: Transport> std::fmt::Debug for Scraper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scraper")
            .field("config", &self.config)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
