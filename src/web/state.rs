//! Application state shared across handlers

use crate::autocomplete::Autocompleter;
use crate::config::Settings;
use crate::engine::SearchBackend;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Autocomplete service
    pub autocomplete: Arc<Autocompleter>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, backend: Arc<dyn SearchBackend>) -> anyhow::Result<Self> {
        let autocomplete = Arc::new(Autocompleter::from_settings(backend, &settings));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            autocomplete,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
