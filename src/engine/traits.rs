//! Engine traits and types

use crate::error::SearchError;
use async_trait::async_trait;
use serde_json::Value;

/// Outcome of the index-creation helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCreation {
    Created,
    AlreadyExists,
}

impl IndexCreation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExists => "already_exists",
        }
    }
}

/// Remote operations the autocomplete service needs from the search engine.
///
/// Each call is a single request with no retry; failures are returned as-is.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Index the backend operates on
    fn index(&self) -> &str;

    /// Create the index with the given settings and mappings
    async fn create_index(&self, body: Value) -> Result<IndexCreation, SearchError>;

    /// Fetch the index mapping
    async fn get_mapping(&self) -> Result<Value, SearchError>;

    /// Run a search request and return the decoded body
    async fn search(&self, query: Value) -> Result<Value, SearchError>;
}

/// HTTP request to be made against the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// Path relative to the cluster base URL
    pub path: String,
    pub method: HttpMethod,
    /// JSON body
    pub body: Option<Value>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            body: None,
        }
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Post,
            body: None,
        }
    }

    /// Create a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Put,
            body: None,
        }
    }

    /// Add JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// HTTP response from the engine
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json(&self) -> Result<Value, SearchError> {
        serde_json::from_str(&self.text).map_err(|e| SearchError::decode(e.to_string()))
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into an error
    pub fn error_for_status(self) -> Result<Self, SearchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SearchError::Status {
                status: self.status,
                body: self.text,
            })
        }
    }
}
