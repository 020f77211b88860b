//! Autocomplete over OpenSearch terms aggregations
//!
//! A prefix becomes a case-insensitive include pattern, the pattern is sent
//! as a terms aggregation, and the bucket keys come back as suggestions.

mod service;
mod trace;

pub use service::Autocompleter;
pub use trace::DebugTrace;
