//! HTTP client module
//!
//! Thin wrapper over `reqwest` that applies authentication, default headers
//! and a base URL, and turns non-success responses into
//! [`Error::FetchFailed`](crate::Error::FetchFailed).
//!
//! Requests are sent exactly once. There is no retry, backoff or rate
//! limiting; a failed request is reported to the caller as-is.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
