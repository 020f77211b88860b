//! Autocomplete service over a search backend

use super::trace::DebugTrace;
use crate::config::Settings;
use crate::engine::{index_body, IndexCreation, SearchBackend};
use crate::error::SearchError;
use crate::query::{build_pattern_with, AggregationQuery, PatternPolicy};
use crate::results::{
    extract_bucket_count, extract_suggestions, mapping_has_keyword, MappingCheckResult,
    SuggestionResult,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Turns prefixes into terms aggregations and reduces the answers.
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct Autocompleter {
    backend: Arc<dyn SearchBackend>,
    field: String,
    suggestion_size: usize,
    mapping_check_size: usize,
    policy: PatternPolicy,
    debug: bool,
}

impl Autocompleter {
    /// Create a service with default sizes for `field`
    pub fn new(backend: Arc<dyn SearchBackend>, field: impl Into<String>) -> Self {
        let defaults = crate::config::AutocompleteSettings::default();
        Self {
            backend,
            field: field.into(),
            suggestion_size: defaults.suggestion_size,
            mapping_check_size: defaults.mapping_check_size,
            policy: defaults.pattern_policy,
            debug: false,
        }
    }

    /// Create a service configured from settings
    pub fn from_settings(backend: Arc<dyn SearchBackend>, settings: &Settings) -> Self {
        Self {
            backend,
            field: settings.opensearch.field.clone(),
            suggestion_size: settings.autocomplete.suggestion_size,
            mapping_check_size: settings.autocomplete.mapping_check_size,
            policy: settings.autocomplete.pattern_policy,
            debug: settings.general.debug,
        }
    }

    /// Include a debug trace in results
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the pattern policy
    pub fn with_policy(mut self, policy: PatternPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Suggestions for a prefix, in engine order
    pub async fn suggest(&self, prefix: &str) -> Result<SuggestionResult, SearchError> {
        if prefix.is_empty() {
            return Err(SearchError::invalid_input("missing 'q' parameter"));
        }

        let mut trace = DebugTrace::new(self.debug);
        trace.record("query", format!("{:?}", prefix));

        let pattern = build_pattern_with(prefix, self.policy);
        trace.record("pattern", format!("{:?}", pattern.as_str()));
        debug!(prefix, pattern = %pattern, "Built autocomplete pattern");

        let body = AggregationQuery::autocomplete(&self.field, pattern, self.suggestion_size)
            .to_body();
        trace.record("request", &body);

        let response = self.backend.search(body).await.map_err(|e| {
            error!(prefix, error = %e, "Autocomplete query failed");
            e
        })?;
        trace.record("response", &response);

        let suggestions = extract_suggestions(&response, &self.field);
        trace.record("suggestions", format!("{:?}", suggestions));

        Ok(SuggestionResult {
            suggestions,
            debug: trace.finish(),
        })
    }

    /// Whether the keyword sub-field exists and how many distinct values it has
    pub async fn check_mapping(&self) -> Result<MappingCheckResult, SearchError> {
        let mut trace = DebugTrace::new(self.debug);

        let mapping = self.backend.get_mapping().await.map_err(|e| {
            error!(error = %e, "Mapping request failed");
            e
        })?;
        trace.record("mapping", &mapping);

        let field_mapping_exists = mapping_has_keyword(&mapping, self.backend.index(), &self.field);
        trace.record("fieldMappingExists", field_mapping_exists);

        let body = AggregationQuery::mapping_check(&self.field, self.mapping_check_size).to_body();
        trace.record("request", &body);

        let response = self.backend.search(body).await.map_err(|e| {
            error!(error = %e, "Mapping check query failed");
            e
        })?;
        trace.record("response", &response);

        let unique_count = extract_bucket_count(&response, &self.field);
        trace.record("uniqueCount", unique_count);

        Ok(MappingCheckResult {
            field_mapping_exists,
            unique_count,
            debug: trace.finish(),
        })
    }

    /// Create the index with the autocomplete analyzer and keyword sub-field
    pub async fn create_index(&self) -> Result<IndexCreation, SearchError> {
        self.backend.create_index(index_body(&self.field)).await
    }
}
