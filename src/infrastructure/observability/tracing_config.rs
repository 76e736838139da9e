use crate::presentation::config::Settings;

pub const DEFAULT_FILTER: &str = "info,lectern=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl From<&Settings> for TracingConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            environment: settings.environment.to_string(),
            json_format: settings.logging.json,
            filter: settings.logging.level.clone(),
        }
    }
}
