//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and log format
//! - `sessions`: session retention
//! - `logging`: log filter
//!
//! Provider and pipeline sections reuse the config types of the crates that
//! own them.

mod logging;
mod server;
mod sessions;

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use application::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use logging::LoggingConfig;
pub use server::{LogFormat, ServerConfig};
pub use sessions::SessionStoreConfig;

/// Prefix for environment overrides, e.g. `VOICE_AGENT__SERVER__PORT`
pub const ENV_PREFIX: &str = "VOICE_AGENT";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech provider configuration (AssemblyAI and Murf)
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Inference configuration (Gemini)
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Turn pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Session retention configuration
    #[serde(default)]
    pub sessions: SessionStoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::File::with_name("config").required(false))
    }

    /// Load configuration from the given file source, then environment
    pub fn load_from<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Self::load_layers(file, environment())
    }

    fn load_layers<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Fill missing provider keys from their conventional environment variables
    ///
    /// Reads `ASSEMBLYAI_API_KEY`, `MURF_API_KEY` and `GEMINI_API_KEY`. Keys
    /// already set by the config file or prefixed variables are kept.
    pub fn resolve_provider_keys(&mut self) {
        self.resolve_provider_keys_with(|name| std::env::var(name).ok());
    }

    /// Same as [`Self::resolve_provider_keys`] with a custom variable lookup
    pub fn resolve_provider_keys_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fill_missing(
            &mut self.speech.assemblyai_api_key,
            "ASSEMBLYAI_API_KEY",
            &lookup,
        );
        fill_missing(&mut self.speech.murf_api_key, "MURF_API_KEY", &lookup);
        fill_missing(&mut self.inference.api_key, "GEMINI_API_KEY", &lookup);
    }

    /// Validate the structural settings
    ///
    /// Provider keys are checked when the provider clients are built.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.pipeline.validate()?;
        self.sessions.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("server.allowed_origins")
        .try_parsing(true)
}

fn fill_missing(slot: &mut Option<String>, variable: &str, lookup: &impl Fn(&str) -> Option<String>) {
    if slot.as_deref().is_some_and(|value| !value.is_empty()) {
        return;
    }
    if let Some(value) = lookup(variable).filter(|value| !value.trim().is_empty()) {
        debug!(variable, "Loaded provider key from environment");
        *slot = Some(value);
    }
}
