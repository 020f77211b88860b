//! telepules-autocomplete: prefix autocomplete proxy for OpenSearch
//!
//! A typed prefix is turned into a case-insensitive include pattern, sent to
//! OpenSearch as a terms aggregation over a keyword sub-field, and the bucket
//! keys are returned as suggestions.

pub mod autocomplete;
pub mod config;
pub mod engine;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod web;

pub use autocomplete::Autocompleter;
pub use config::Settings;
pub use error::SearchError;
pub use query::{build_pattern, Pattern};
pub use results::{extract_bucket_count, extract_suggestions};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
