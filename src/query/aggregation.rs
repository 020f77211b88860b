//! Terms aggregation query bodies.

use super::pattern::Pattern;
use serde_json::{json, Value};

/// Buckets requested for autocomplete suggestions by default.
pub const DEFAULT_SUGGESTION_SIZE: usize = 10;

/// Upper bound on buckets requested by the mapping check.
pub const MAX_MAPPING_CHECK_SIZE: usize = 100;

/// Name of the aggregation for a field, e.g. `unique_telepules`.
pub fn aggregation_name(field: &str) -> String {
    format!("unique_{}", field)
}

/// Keyword sub-field used for bucketing, e.g. `telepules.keyword`.
pub fn keyword_field(field: &str) -> String {
    format!("{}.keyword", field)
}

/// What the aggregation is used for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregationMode {
    /// Prefix-filtered buckets
    Autocomplete(Pattern),
    /// Plain buckets, only counted
    MappingCheck,
}

/// A single terms aggregation over the keyword sub-field of `field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationQuery {
    pub field: String,
    pub size: usize,
    pub mode: AggregationMode,
}

impl AggregationQuery {
    /// Prefix-filtered aggregation for suggestions
    pub fn autocomplete(field: impl Into<String>, pattern: Pattern, size: usize) -> Self {
        Self {
            field: field.into(),
            size: size.max(1),
            mode: AggregationMode::Autocomplete(pattern),
        }
    }

    /// Count-only aggregation; `size` is clamped to [`MAX_MAPPING_CHECK_SIZE`]
    pub fn mapping_check(field: impl Into<String>, size: usize) -> Self {
        Self {
            field: field.into(),
            size: size.clamp(1, MAX_MAPPING_CHECK_SIZE),
            mode: AggregationMode::MappingCheck,
        }
    }

    /// Pattern sent as the `include` filter, if any
    pub fn pattern(&self) -> Option<&Pattern> {
        match &self.mode {
            AggregationMode::Autocomplete(pattern) => Some(pattern),
            AggregationMode::MappingCheck => None,
        }
    }

    /// Render the request body
    pub fn to_body(&self) -> Value {
        let mut terms = json!({
            "field": keyword_field(&self.field),
            "size": self.size,
        });
        if let Some(pattern) = self.pattern() {
            terms["include"] = json!(pattern.as_str());
        }

        json!({
            "size": 0,
            "aggs": {
                aggregation_name(&self.field): {
                    "terms": terms
                }
            }
        })
    }
}

/// Request body for an autocomplete lookup
pub fn build_autocomplete_query(field: &str, pattern: Pattern, size: usize) -> Value {
    AggregationQuery::autocomplete(field, pattern, size).to_body()
}

/// Request body counting the distinct keyword values
pub fn build_mapping_check_query(field: &str, size: usize) -> Value {
    AggregationQuery::mapping_check(field, size).to_body()
}
