//! In-memory backend for tests

use super::traits::{IndexCreation, SearchBackend};
use crate::error::SearchError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Canned-response backend that records the queries it receives
pub struct MockBackend {
    pub search_response: Result<Value, u16>,
    pub mapping_response: Result<Value, u16>,
    pub queries: Mutex<Vec<Value>>,
}

impl MockBackend {
    /// Backend whose searches return the given bucket keys
    pub fn with_keys(keys: &[&str]) -> Self {
        let buckets: Vec<Value> = keys
            .iter()
            .map(|k| json!({"key": k, "doc_count": 1}))
            .collect();
        Self {
            search_response: Ok(json!({
                "aggregations": {"unique_telepules": {"buckets": buckets}}
            })),
            mapping_response: Ok(json!({
                "orszagos_cimlista": {"mappings": {"properties": {
                    "telepules": {"type": "text", "fields": {"keyword": {"type": "keyword"}}}
                }}}
            })),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Backend failing every call with the given status
    pub fn failing(status: u16) -> Self {
        Self {
            search_response: Err(status),
            mapping_response: Err(status),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<Value> {
        self.queries.lock().unwrap().clone()
    }

    fn reply(result: &Result<Value, u16>) -> Result<Value, SearchError> {
        match result {
            Ok(value) => Ok(value.clone()),
            Err(status) => Err(SearchError::Status {
                status: *status,
                body: "mock failure".to_string(),
            }),
        }
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    fn index(&self) -> &str {
        "orszagos_cimlista"
    }

    async fn create_index(&self, body: Value) -> Result<IndexCreation, SearchError> {
        self.queries.lock().unwrap().push(body);
        Self::reply(&self.mapping_response).map(|_| IndexCreation::Created)
    }

    async fn get_mapping(&self) -> Result<Value, SearchError> {
        Self::reply(&self.mapping_response)
    }

    async fn search(&self, query: Value) -> Result<Value, SearchError> {
        self.queries.lock().unwrap().push(query);
        Self::reply(&self.search_response)
    }
}
