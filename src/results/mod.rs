//! Results module
//!
//! Reduces raw engine responses into suggestion lists and mapping checks.
//! Partial or mistyped responses degrade to empty results instead of errors.

mod reducer;

pub use reducer::{extract_bucket_count, extract_suggestions, mapping_has_keyword};

use serde::Serialize;

/// Response body of the autocomplete endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionResult {
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

/// Response body of the mapping check endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingCheckResult {
    pub field_mapping_exists: bool,
    pub unique_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_field_names() {
        let result = MappingCheckResult {
            field_mapping_exists: true,
            unique_count: 7,
            debug: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"fieldMappingExists": true, "uniqueCount": 7})
        );

        let result = SuggestionResult {
            suggestions: vec!["Szeged".to_string()],
            debug: Some("trace".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"suggestions": ["Szeged"], "debug": "trace"})
        );
    }
}
