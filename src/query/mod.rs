//! Query building module
//!
//! Turns a user prefix into a case-insensitive pattern and wraps it in a
//! terms aggregation over the keyword sub-field of the configured field.

mod aggregation;
mod pattern;

pub use aggregation::{
    aggregation_name, build_autocomplete_query, build_mapping_check_query, keyword_field,
    AggregationMode, AggregationQuery, DEFAULT_SUGGESTION_SIZE, MAX_MAPPING_CHECK_SIZE,
};
pub use pattern::{build_pattern, build_pattern_with, Pattern, PatternPolicy};
