//! Error types for instascrape
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into three remote fault classes (transport, rejection, shape)
//! plus local faults; see [`FaultKind`].

use thiserror::Error;

/// The main error type for instascrape
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration could not be read or is inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A single configuration value was rejected
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Dotted name of the offending field
        field: String,
        /// Why it was rejected
        message: String,
    },

    /// The config file is not valid YAML for [`crate::ScraperConfig`]
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Connect, DNS, TLS or body transfer failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No response within the configured timeout
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// The timeout that expired
        timeout_ms: u64,
    },

    /// An endpoint URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Remote Rejection
    // ============================================================================
    /// The service answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code
        status: u16,
        /// Response body, as sent
        body: String,
    },

    // ============================================================================
    // Shape Errors
    // ============================================================================
    /// The response body is not JSON
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Parser error
        message: String,
    },

    /// The payload is missing or malformed at a key path
    #[error("Unexpected response shape at '{path}': {message}")]
    Shape {
        /// Dotted key path walked so far
        path: String,
        /// What was found instead
        message: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// File system failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Any other error, usually with added context
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// DNS, connect, timeout and other network failures
    Transport,
    /// The remote service answered with a non-2xx status
    Rejection,
    /// The response body did not have the expected structure
    Shape,
    /// Configuration, I/O and everything else raised locally
    Local,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a shape error for a key path
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn fault_kind(&self) -> FaultKind {
        match self {
            Error::Http(e) if e.is_decode() => FaultKind::Shape,
            Error::Http(_) | Error::Timeout { .. } => FaultKind::Transport,
            Error::HttpStatus { .. } => FaultKind::Rejection,
            Error::Decode { .. } | Error::Shape { .. } => FaultKind::Shape,
            _ => FaultKind::Local,
        }
    }

    /// Check if this error is retryable in principle.
    ///
    /// Nothing in this crate retries; callers may use this to decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => !e.is_decode() && !e.is_builder(),
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for instascrape
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
