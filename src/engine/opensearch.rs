//! OpenSearch backend over plain HTTP.

use super::traits::{EngineRequest, IndexCreation, SearchBackend};
use crate::config::OpenSearchSettings;
use crate::error::SearchError;
use crate::network::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

/// Search backend for a single OpenSearch index.
///
/// Every request carries the configured basic-auth credentials. Errors are
/// returned unchanged; nothing is retried.
pub struct OpenSearchClient {
    client: HttpClient,
    index: String,
}

impl OpenSearchClient {
    /// Create a client for `index` on top of an existing HTTP client
    pub fn new(client: HttpClient, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    /// Create a client from connection settings
    pub fn with_settings(settings: &OpenSearchSettings) -> Result<Self, SearchError> {
        let client = HttpClient::with_settings(settings)?;

        info!(
            url = %client.base_url(),
            index = %settings.index,
            "Created OpenSearch client"
        );

        Ok(Self::new(client, settings.index.clone()))
    }
}

#[async_trait]
impl SearchBackend for OpenSearchClient {
    fn index(&self) -> &str {
        &self.index
    }

    async fn create_index(&self, body: Value) -> Result<IndexCreation, SearchError> {
        let request = EngineRequest::put(self.index.as_str()).json(body);
        let response = self.client.execute(request).await?;

        if response.is_success() {
            info!(index = %self.index, "Index created");
            return Ok(IndexCreation::Created);
        }

        if response.status == 400 && response.text.contains("resource_already_exists_exception") {
            info!(index = %self.index, "Index already exists");
            return Ok(IndexCreation::AlreadyExists);
        }

        error!(
            index = %self.index,
            status = response.status,
            body = %response.text,
            "Index creation failed"
        );
        Err(SearchError::Status {
            status: response.status,
            body: response.text,
        })
    }

    async fn get_mapping(&self) -> Result<Value, SearchError> {
        let request = EngineRequest::get(format!("{}/_mapping", self.index));
        self.client.execute(request).await?.error_for_status()?.json()
    }

    async fn search(&self, query: Value) -> Result<Value, SearchError> {
        let request = EngineRequest::post(format!("{}/_search", self.index)).json(query);
        self.client.execute(request).await?.error_for_status()?.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::index_body;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // base64("admin:secret")
    const AUTH: &str = "Basic YWRtaW46c2VjcmV0";

    fn backend(server: &MockServer) -> OpenSearchClient {
        let url = url::Url::parse(&server.uri()).unwrap();
        let settings = OpenSearchSettings {
            host: url.host_str().unwrap().to_string(),
            port: url.port(),
            user: "admin".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        OpenSearchClient::with_settings(&settings).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_auth_and_body() {
        let server = MockServer::start().await;
        let query = json!({"size": 0});

        Mock::given(method("POST"))
            .and(path("/orszagos_cimlista/_search"))
            .and(header("authorization", AUTH))
            .and(header("content-type", "application/json"))
            .and(body_json(&query))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"took": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let result = backend(&server).search(query).await.unwrap();
        assert_eq!(result["took"], 1);
    }

    #[tokio::test]
    async fn test_search_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = backend(&server).search(json!({})).await.unwrap_err();
        assert!(matches!(err, SearchError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = backend(&server).search(json!({})).await.unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_mapping() {
        let server = MockServer::start().await;
        let mapping = json!({"orszagos_cimlista": {"mappings": {"properties": {}}}});
        Mock::given(method("GET"))
            .and(path("/orszagos_cimlista/_mapping"))
            .and(header("authorization", AUTH))
            .respond_with(ResponseTemplate::new(200).set_body_json(mapping.clone()))
            .mount(&server)
            .await;

        assert_eq!(backend(&server).get_mapping().await.unwrap(), mapping);
    }

    #[tokio::test]
    async fn test_create_index() {
        let server = MockServer::start().await;
        let body = index_body("telepules");
        Mock::given(method("PUT"))
            .and(path("/orszagos_cimlista"))
            .and(body_json(&body))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})),
            )
            .mount(&server)
            .await;

        let outcome = backend(&server).create_index(body).await.unwrap();
        assert_eq!(outcome, IndexCreation::Created);
    }

    #[tokio::test]
    async fn test_create_index_already_exists() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"type": "resource_already_exists_exception"},
                "status": 400
            })))
            .mount(&server)
            .await;

        let outcome = backend(&server).create_index(json!({})).await.unwrap();
        assert_eq!(outcome, IndexCreation::AlreadyExists);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let settings = OpenSearchSettings {
            host: "127.0.0.1".to_string(),
            // Nothing listens on the discard port
            port: Some(9),
            user: "admin".to_string(),
            password: "secret".to_string(),
            request_timeout: 1.0,
            ..Default::default()
        };
        let backend = OpenSearchClient::with_settings(&settings).unwrap();
        let err = backend.search(json!({})).await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
