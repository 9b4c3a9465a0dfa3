//! Transport seam between the scraper and the network
//!
//! The scraper only ever needs "send this request, give me the body".
//! Tests substitute a scripted implementation for the reqwest client.

use super::client::{HttpClient, RequestConfig};
use crate::error::Result;
use crate::types::Method;
use async_trait::async_trait;

/// A request as the scraper describes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Query-string parameters
    pub query: Vec<(String, String)>,
    /// Form-encoded body
    pub form: Option<String>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: Vec::new(),
            form: None,
        }
    }

    /// Create a form-encoded POST request
    pub fn post_form(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            query: Vec::new(),
            form: Some(body.into()),
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Something that can execute an [`ApiRequest`] and return the body text.
///
/// Implementations must report non-2xx responses as `Error::HttpStatus`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request
    async fn execute(&self, request: ApiRequest) -> Result<String>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<String> {
        let mut config = RequestConfig::new();
        for (key, value) in request.query {
            config = config.query(key, value);
        }
        if let Some(form) = request.form {
            config = config.form(form);
        }
        self.request_text(request.method.into(), &request.url, config)
            .await
    }
}
