//! HTTP client module
//!
//! Provides the reqwest-backed client and the [`Transport`] trait the
//! scraper is written against.
//!
//! # Features
//!
//! - **Fixed Headers**: Session cookie, app id and browser headers on every request
//! - **Form Bodies**: `application/x-www-form-urlencoded` document queries
//! - **Error Classification**: Transport, timeout and status failures stay distinct

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, FORM_CONTENT_TYPE};
pub use transport::{ApiRequest, Transport};
