use std::sync::Arc;

use hours_core::AggregateOptions;
use hours_notion::RecordStore;

use crate::config::HoursSettings;
use crate::error::Result;
use crate::services::AppServices;

/// Settings the aggregation runs with.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub options: AggregateOptions,
}

impl AppConfig {
    pub fn from_settings(settings: &HoursSettings) -> Result<Self> {
        Ok(Self {
            options: settings.to_options()?,
        })
    }
}

/// Application state shared by the HTTP layer and the CLI.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        let services = AppServices::new(&config, store);
        Self { config, services }
    }
}
