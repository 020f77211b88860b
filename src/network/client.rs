//! HTTP client for requests to the search engine

use crate::config::OpenSearchSettings;
use crate::engine::{EngineRequest, EngineResponse, HttpMethod};
use crate::error::SearchError;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client bound to one cluster and one set of credentials
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    user: String,
    password: String,
}

impl HttpClient {
    /// Create a new HTTP client from connection settings
    pub fn with_settings(settings: &OpenSearchSettings) -> Result<Self, SearchError> {
        let base_url = settings.base_url()?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout));

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            user: settings.user.clone(),
            password: settings.password.clone(),
        })
    }

    /// Cluster base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute an engine request with basic auth
    pub async fn execute(&self, request: EngineRequest) -> Result<EngineResponse, SearchError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|e| SearchError::transport(format!("invalid path {}: {}", request.path, e)))?;

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
            HttpMethod::Put => self.client.put(url.clone()),
        };

        req_builder = req_builder
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json");

        if let Some(body) = request.body {
            req_builder = req_builder
                .header(CONTENT_TYPE, "application/json")
                .body(encode_body(&body)?);
        }

        debug!(method = ?request.method, url = %url, "Sending engine request");

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Read status and body
    async fn parse_response(response: Response) -> Result<EngineResponse, SearchError> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!(status, bytes = text.len(), "Engine responded");

        Ok(EngineResponse { status, text })
    }
}

/// Encode a request body as JSON
fn encode_body<T: Serialize + ?Sized>(body: &T) -> Result<Vec<u8>, SearchError> {
    serde_json::to_vec(body).map_err(|e| SearchError::serialization(e.to_string()))
}
