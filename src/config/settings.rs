//! Settings structures for the autocomplete service

use crate::error::SearchError;
use crate::query::{PatternPolicy, DEFAULT_SUGGESTION_SIZE, MAX_MAPPING_CHECK_SIZE};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use url::Url;

/// Main settings structure, loadable from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub opensearch: OpenSearchSettings,
    pub autocomplete: AutocompleteSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("AUTOCOMPLETE_DEBUG") {
            match parse_flag(&val) {
                Some(flag) => self.general.debug = flag,
                None => warn!("Ignoring unrecognised AUTOCOMPLETE_DEBUG value: {}", val),
            }
        }
        if let Some(val) = var("OPENSEARCH_HOST") {
            self.opensearch.host = val;
        }
        if let Some(val) = var("OPENSEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.opensearch.port = Some(port);
            }
        }
        if let Some(val) = var("OPENSEARCH_USER") {
            self.opensearch.user = val;
        }
        if let Some(val) = var("OPENSEARCH_PASSWORD") {
            self.opensearch.password = val;
        }
        if let Some(val) = var("OPENSEARCH_INDEX") {
            self.opensearch.index = val;
        }
        if let Some(val) = var("PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
    }

    /// Check that every required connection setting is present
    pub fn validate(&self) -> Result<(), SearchError> {
        let os = &self.opensearch;
        let missing = [
            ("OPENSEARCH_HOST", os.host.is_empty()),
            ("OPENSEARCH_PORT", os.port.is_none()),
            ("OPENSEARCH_USER", os.user.is_empty()),
            ("OPENSEARCH_PASSWORD", os.password.is_empty()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(key, _)| key)
        .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(SearchError::config(format!(
                "missing required setting(s): {}",
                missing.join(", ")
            )));
        }
        if !(os.request_timeout.is_finite() && os.request_timeout > 0.0) {
            return Err(SearchError::config(format!(
                "request_timeout must be a positive number of seconds, got {}",
                os.request_timeout
            )));
        }
        if os.field.is_empty() || os.index.is_empty() {
            return Err(SearchError::config("index and field names must not be empty"));
        }
        Ok(())
    }
}

/// Boolean environment value: `true/false`, `1/0`, `yes/no`, `on/off`
fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Include debug traces in API responses
    pub debug: bool,
    /// Instance name displayed on the demo page
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Település kereső".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Connection settings for the OpenSearch cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenSearchSettings {
    /// URL scheme, `http` or `https`
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    /// Basic auth user
    pub user: String,
    /// Basic auth password
    pub password: String,
    /// Index holding the address list
    pub index: String,
    /// Text field with a `keyword` sub-field used for bucketing
    pub field: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Verify TLS certificates
    pub verify_ssl: bool,
}

impl Default for OpenSearchSettings {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: String::new(),
            port: None,
            user: String::new(),
            password: String::new(),
            index: "orszagos_cimlista".to_string(),
            field: "telepules".to_string(),
            request_timeout: 5.0,
            verify_ssl: true,
        }
    }
}

impl OpenSearchSettings {
    /// Base URL of the cluster, e.g. `http://localhost:9200`
    pub fn base_url(&self) -> Result<Url, SearchError> {
        let port = self
            .port
            .ok_or_else(|| SearchError::config("OpenSearch port is not set"))?;
        let raw = format!("{}://{}:{}", self.scheme, self.host, port);
        Url::parse(&raw).map_err(|e| SearchError::config(format!("invalid URL {}: {}", raw, e)))
    }
}

/// Autocomplete behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Buckets requested per autocomplete query
    pub suggestion_size: usize,
    /// Buckets requested by the mapping check (at most 100)
    pub mapping_check_size: usize,
    /// How non-letter prefix characters are embedded in the pattern
    pub pattern_policy: PatternPolicy,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            suggestion_size: DEFAULT_SUGGESTION_SIZE,
            mapping_check_size: MAX_MAPPING_CHECK_SIZE,
            pattern_policy: PatternPolicy::default(),
        }
    }
}
