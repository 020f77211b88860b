//! HTTP networking module
//!
//! Provides the authenticated HTTP client used to reach the search engine.

mod client;

pub use client::HttpClient;
