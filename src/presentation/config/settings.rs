use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::llm::DEFAULT_BASE_URL;
use crate::infrastructure::observability::DEFAULT_FILTER;

pub const ENV_PREFIX: &str = "APP";
pub const API_KEY_FALLBACK_VARIABLE: &str = "GEMINI_API_KEY";
pub const LOG_FORMAT_FALLBACK_VARIABLE: &str = "LOG_FORMAT";

/// Un-prefixed variables used as defaults for `model.api_key` and `logging.json`.
/// The `APP_*` keys and the settings file still win over them.
#[derive(Debug, Clone, Default)]
pub struct Fallbacks {
    pub api_key: Option<String>,
    pub log_format: Option<String>,
}

impl Fallbacks {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_FALLBACK_VARIABLE).ok(),
            log_format: std::env::var(LOG_FORMAT_FALLBACK_VARIABLE).ok(),
        }
    }

    fn json_logging(&self) -> bool {
        self.log_format
            .as_deref()
            .is_some_and(|format| format.trim().eq_ignore_ascii_case("json"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub audio: AudioSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub api_key: String,
    pub name: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub max_duration_minutes: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>` (any format `config`
    /// understands, optional) and `APP_*` environment variables, in that order.
    /// Nested keys use a double underscore: `APP_MODEL__API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_with(environment, &Fallbacks::from_env())
    }

    pub fn load_with(
        environment: Environment,
        fallbacks: &Fallbacks,
    ) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 100)?
            .set_default("model.api_key", fallbacks.api_key.clone().unwrap_or_default())?
            .set_default("model.name", "gemini-2.0-flash")?
            .set_default("model.base_url", DEFAULT_BASE_URL)?
            .set_default("model.timeout_secs", 120)?
            .set_default("audio.max_duration_minutes", 15.0)?
            .set_default("logging.level", DEFAULT_FILTER)?
            .set_default("logging.json", fallbacks.json_logging())?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.environment = environment;
        settings.check()?;

        Ok(settings)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let minutes = self.audio.max_duration_minutes;
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(ConfigError::Message(format!(
                "audio.max_duration_minutes must be a positive number, got {}",
                minutes
            )));
        }
        if self.server.max_upload_mb == 0 {
            return Err(ConfigError::Message(
                "server.max_upload_mb must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl ModelSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AudioSettings {
    pub fn max_duration(&self) -> Duration {
        Duration::from_secs_f64(self.max_duration_minutes * 60.0)
    }
}
