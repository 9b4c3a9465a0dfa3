//! Configuration types for the scraper
//!
//! This module contains the configuration loaded from YAML (or JSON, which
//! YAML accepts). Every field has a default, so an empty file is valid;
//! session credentials are usually supplied through the environment.

use crate::error::{Error, Result};
use crate::types::TimelineOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Environment variable holding the `sessionid` cookie value
pub const ENV_SESSION_ID: &str = "INSTASCRAPE_SESSIONID";

/// Environment variable holding the `csrftoken` cookie value
pub const ENV_CSRF_TOKEN: &str = "INSTASCRAPE_CSRFTOKEN";

/// Environment variable overriding the `x-ig-app-id` header
pub const ENV_APP_ID: &str = "INSTASCRAPE_APP_ID";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete scraper configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Remote endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Server-side query document identifiers
    #[serde(default)]
    pub documents: DocumentConfig,

    /// Session credentials
    #[serde(default)]
    pub session: SessionConfig,

    /// Fixed request headers
    #[serde(default)]
    pub headers: HeaderConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Timeline defaults
    #[serde(default)]
    pub timeline: TimelineOptions,

    /// Debug output
    #[serde(default)]
    pub debug: DebugConfig,
}

impl ScraperConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ScraperConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply credential overrides from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply credential overrides from a lookup function
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(session_id) = lookup(ENV_SESSION_ID) {
            self.session.session_id = Some(session_id);
        }
        if let Some(csrf_token) = lookup(ENV_CSRF_TOKEN) {
            self.session.csrf_token = Some(csrf_token);
        }
        if let Some(app_id) = lookup(ENV_APP_ID) {
            self.headers.app_id = app_id;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoints.graphql_url)?;
        Url::parse(&self.endpoints.profile_url)?;

        if self.documents.post_doc_id.is_empty() {
            return Err(Error::invalid_value(
                "documents.post_doc_id",
                "cannot be empty",
            ));
        }
        if self.documents.timeline_doc_id.is_empty() {
            return Err(Error::invalid_value(
                "documents.timeline_doc_id",
                "cannot be empty",
            ));
        }
        if self.timeline.page_size == 0 {
            return Err(Error::invalid_value(
                "timeline.page_size",
                "must be at least 1",
            ));
        }
        if self.http.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "http.timeout_seconds",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// Remote endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Generic GraphQL query endpoint (single post and timeline)
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Profile-info endpoint
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
}

fn default_graphql_url() -> String {
    "https://www.instagram.com/graphql/query".to_string()
}

fn default_profile_url() -> String {
    "https://i.instagram.com/api/v1/users/web_profile_info/".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            graphql_url: default_graphql_url(),
            profile_url: default_profile_url(),
        }
    }
}

impl EndpointConfig {
    /// Point both endpoints at one base URL (mock servers, proxies)
    pub fn with_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            graphql_url: format!("{base}/graphql/query"),
            profile_url: format!("{base}/api/v1/users/web_profile_info/"),
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Document identifiers selecting server-side query templates.
///
/// These are controlled by the remote service and change without notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Single post query
    #[serde(default = "default_post_doc_id")]
    pub post_doc_id: String,

    /// User timeline query
    #[serde(default = "default_timeline_doc_id")]
    pub timeline_doc_id: String,
}

fn default_post_doc_id() -> String {
    "8845758582119845".to_string()
}

fn default_timeline_doc_id() -> String {
    "9310670392322965".to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            post_doc_id: default_post_doc_id(),
            timeline_doc_id: default_timeline_doc_id(),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Session credentials sent as cookies
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// `sessionid` cookie value
    #[serde(default)]
    pub session_id: Option<String>,

    /// `csrftoken` cookie value
    #[serde(default)]
    pub csrf_token: Option<String>,
}

impl SessionConfig {
    /// Render the `cookie` header value, if any credential is set
    pub fn cookie_header(&self) -> Option<String> {
        let mut cookie = String::new();
        if let Some(session_id) = &self.session_id {
            cookie.push_str(&format!("sessionid={session_id}; "));
        }
        if let Some(csrf_token) = &self.csrf_token {
            cookie.push_str(&format!("csrftoken={csrf_token}; "));
        }
        let cookie = cookie.trim_end().to_string();
        if cookie.is_empty() {
            None
        } else {
            Some(cookie)
        }
    }

    /// Check whether a session cookie is configured
    pub fn has_session(&self) -> bool {
        self.session_id.is_some()
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("session_id", &self.session_id.as_ref().map(|_| "<redacted>"))
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// ============================================================================
// Headers
// ============================================================================

/// Fixed headers sent with every request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// `x-ig-app-id`: internal id of the web app, rarely changes
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Browser user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `accept-language`
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// `accept-encoding`
    #[serde(default = "default_accept_encoding")]
    pub accept_encoding: String,

    /// `accept`
    #[serde(default = "default_accept")]
    pub accept: String,
}

fn default_app_id() -> String {
    "936619743392459".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.94 Safari/537.36".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

fn default_accept_encoding() -> String {
    "gzip, deflate, br".to_string()
}

fn default_accept() -> String {
    "*/*".to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            accept_encoding: default_accept_encoding(),
            accept: default_accept(),
        }
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    20
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

impl HttpConfig {
    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

// ============================================================================
// Debug
// ============================================================================

/// Debug output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Overwrite this file with every raw timeline page
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}
