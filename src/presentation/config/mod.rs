mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    API_KEY_FALLBACK_VARIABLE, AudioSettings, ENV_PREFIX, Fallbacks, LOG_FORMAT_FALLBACK_VARIABLE,
    LoggingSettings, ModelSettings, ServerSettings, Settings,
};
