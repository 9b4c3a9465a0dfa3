//! HTTP client with fixed browser-like headers
//!
//! Provides a thin wrapper around `reqwest` that handles:
//! - Persistent default headers (session cookie, app id, browser headers)
//! - Form-encoded POST bodies and query-string GETs
//! - Classification of failures into transport, timeout and status errors
//!
//! Exactly one attempt is made per request. Retries are left to the caller.

use crate::config::ScraperConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Content type of GraphQL document queries
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            default_headers: HashMap::new(),
            user_agent: format!("instascrape/{}", crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Derive the client config from the scraper config
    pub fn from_scraper_config(config: &ScraperConfig) -> Self {
        let headers = &config.headers;
        let mut builder = Self::builder()
            .timeout(config.http.timeout())
            .user_agent(&headers.user_agent)
            .header("x-ig-app-id", &headers.app_id)
            .header("accept-language", &headers.accept_language)
            .header("accept-encoding", &headers.accept_encoding)
            .header("accept", &headers.accept);

        if let Some(cookie) = config.session.cookie_header() {
            builder = builder.header("cookie", cookie);
        }

        builder.build()
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header_names: Vec<&String> = self.default_headers.keys().collect();
        f.debug_struct("HttpClientConfig")
            .field("timeout", &self.timeout)
            .field("default_headers", &header_names)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Pre-encoded form body
    pub form: Option<String>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set an already encoded form body
    #[must_use]
    pub fn form(mut self, body: impl Into<String>) -> Self {
        self.form = Some(body.into());
        self
    }
}

/// HTTP client carrying the fixed header set
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let headers = build_header_map(&config.default_headers)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Make a single request, failing on any non-2xx status
    async fn request(&self, method: Method, url: &str, config: RequestConfig) -> Result<Response> {
        let timeout = self.config.timeout;

        let mut req = self.client.request(method.clone(), url);

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(body) = config.form {
            req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        debug!("Sending request: {} {}", method, url);

        match req.send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    warn!("Request rejected with {}: {} {}", status.as_u16(), method, url);
                    return Err(Error::http_status(status.as_u16(), body));
                }

                debug!("Request succeeded: {} {}", method, url);
                Ok(response)
            }
            Err(e) if e.is_timeout() => {
                warn!("Request timeout after {:?}: {} {}", timeout, method, url);
                Err(Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                })
            }
            Err(e) => {
                warn!("Request failed: {} {}: {}", method, url, e);
                Err(Error::Http(e))
            }
        }
    }

    /// Make a request and return the response body as text
    pub async fn request_text(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<String> {
        let response = self.request(method, url, config).await?;
        let body = response.text().await?;
        Ok(body)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Convert string headers into a reqwest header map
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.to_ascii_lowercase().as_bytes())
            .map_err(|e| Error::invalid_value(format!("headers.{key}"), e.to_string()))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| Error::invalid_value(format!("headers.{key}"), e.to_string()))?;
        if name == reqwest::header::COOKIE {
            value.set_sensitive(true);
        }
        map.insert(name, value);
    }
    Ok(map)
}
