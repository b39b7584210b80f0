//! Configuration loading.
//!
//! Layers, lowest to highest precedence:
//! - Bundled defaults (include_str! from postcraft.toml)
//! - `~/.config/postcraft/postcraft.toml`
//! - `./postcraft.toml`
//! - Environment variables (`OPENROUTER_API_KEY`, `DEEPSEEK_MODEL`,
//!   `TRANSLATION_MODEL`, `YOUR_BLOG_DOMAIN`, `POSTCRAFT_SESSION_DIR`)

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use postcraft_error::{ConfigError, PostcraftResult};
use postcraft_models::OpenRouterConfig;
use postcraft_workflow::WorkflowSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../postcraft.toml");

/// Environment variable holding the OpenRouter credential.
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
/// Environment variable overriding the generation model.
pub const GENERATION_MODEL_VAR: &str = "DEEPSEEK_MODEL";
/// Environment variable overriding the translation model.
pub const TRANSLATION_MODEL_VAR: &str = "TRANSLATION_MODEL";
/// Environment variable overriding the blog domain.
pub const BLOG_DOMAIN_VAR: &str = "YOUR_BLOG_DOMAIN";
/// Environment variable overriding the session directory.
pub const SESSION_DIR_VAR: &str = "POSTCRAFT_SESSION_DIR";

/// Model gateway connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GatewaySection {
    /// Bearer token; usually supplied through the environment
    #[serde(default)]
    api_key: Option<String>,
    /// Chat-completions URL
    endpoint: String,
    /// Request timeout in seconds
    timeout_secs: u64,
}

/// Workflow settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct WorkflowSection {
    /// Domain of canonical blog URLs
    blog_domain: String,
    /// Model for ideas and content
    generation_model: String,
    /// Model for translation
    translation_model: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is unset
    level: String,
    /// Emit JSON lines instead of text
    json: bool,
}

/// Session storage settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
pub struct StorageSection {
    /// Directory of the filesystem session store
    #[serde(default)]
    session_dir: Option<String>,
}

/// Complete Postcraft configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct PostcraftConfig {
    /// Model gateway
    gateway: GatewaySection,
    /// Workflow
    workflow: WorkflowSection,
    /// Logging
    logging: LoggingSection,
    /// Session storage
    #[serde(default)]
    storage: StorageSection,
}

/// Values read from the process environment.
///
/// Blank variables count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `OPENROUTER_API_KEY`
    pub api_key: Option<String>,
    /// `DEEPSEEK_MODEL`
    pub generation_model: Option<String>,
    /// `TRANSLATION_MODEL`
    pub translation_model: Option<String>,
    /// `YOUR_BLOG_DOMAIN`
    pub blog_domain: Option<String>,
    /// `POSTCRAFT_SESSION_DIR`
    pub session_dir: Option<String>,
}

impl EnvOverrides {
    /// Read the recognised variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: env_var(API_KEY_VAR),
            generation_model: env_var(GENERATION_MODEL_VAR),
            translation_model: env_var(TRANSLATION_MODEL_VAR),
            blog_domain: env_var(BLOG_DOMAIN_VAR),
            session_dir: env_var(SESSION_DIR_VAR),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn config_error(context: &str, e: impl std::fmt::Display) -> ConfigError {
    ConfigError::new(format!("{}: {}", context, e))
}

impl PostcraftConfig {
    /// Load configuration from the standard locations and the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file is malformed or a value is invalid.
    pub fn load() -> PostcraftResult<Self> {
        debug!(
            "Loading configuration with precedence: env > current dir > home dir > bundled defaults"
        );

        let mut layers = Vec::new();
        if let Some(home) = dirs::home_dir() {
            layers.push(home.join(".config/postcraft/postcraft.toml"));
        }
        layers.push(PathBuf::from("postcraft.toml"));

        Self::from_layers(&layers, &EnvOverrides::from_env())
    }

    /// Load the bundled defaults, then each optional file in order, then `env`.
    ///
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file is malformed or a value is invalid.
    #[instrument(skip(env), fields(layer_count = layers.len()))]
    pub fn from_layers(layers: &[PathBuf], env: &EnvOverrides) -> PostcraftResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        for layer in layers {
            debug!(path = %layer.display(), "Adding optional configuration layer");
            builder = builder.add_source(File::from(layer.as_path()).required(false));
        }

        let overrides = [
            ("gateway.api_key", &env.api_key),
            ("workflow.generation_model", &env.generation_model),
            ("workflow.translation_model", &env.translation_model),
            ("workflow.blog_domain", &env.blog_domain),
            ("storage.session_dir", &env.session_dir),
        ];
        for (key, value) in overrides {
            builder = builder
                .set_override_option(key, value.clone())
                .map_err(|e| config_error("Failed to apply environment override", e))?;
        }

        let config: Self = builder
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> PostcraftResult<()> {
        let required = [
            ("workflow.blog_domain", &self.workflow.blog_domain),
            ("workflow.generation_model", &self.workflow.generation_model),
            ("workflow.translation_model", &self.workflow.translation_model),
            ("gateway.endpoint", &self.gateway.endpoint),
        ];
        if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::new(format!("{} must not be empty", key)).into());
        }
        if self.gateway.timeout_secs == 0 {
            return Err(ConfigError::new("gateway.timeout_secs must be positive").into());
        }
        Ok(())
    }

    /// Settings for the OpenRouter client.
    pub fn openrouter_config(&self) -> PostcraftResult<OpenRouterConfig> {
        OpenRouterConfig::builder()
            .api_key(self.gateway.api_key.clone())
            .endpoint(self.gateway.endpoint.clone())
            .timeout_secs(self.gateway.timeout_secs)
            .build()
            .map_err(|e| config_error("Invalid gateway settings", e).into())
    }

    /// Settings for the content workflow.
    pub fn workflow_settings(&self) -> PostcraftResult<WorkflowSettings> {
        WorkflowSettings::builder()
            .blog_domain(self.workflow.blog_domain.clone())
            .generation_model(self.workflow.generation_model.clone())
            .translation_model(self.workflow.translation_model.clone())
            .build()
            .map_err(|e| config_error("Invalid workflow settings", e).into())
    }

    /// Directory of the filesystem session store.
    ///
    /// Falls back to `{data_dir}/postcraft/sessions`.
    pub fn session_dir(&self) -> PostcraftResult<PathBuf> {
        if let Some(dir) = self.storage.session_dir.as_deref() {
            return Ok(Path::new(dir).to_path_buf());
        }
        dirs::data_dir()
            .map(|data| data.join("postcraft").join("sessions"))
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "No data directory available; set {} or storage.session_dir",
                    SESSION_DIR_VAR
                ))
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let config = PostcraftConfig::from_layers(&[], &EnvOverrides::default()).unwrap();
        assert_eq!(config.workflow().blog_domain(), "myblogname.com");
        assert_eq!(config.workflow().generation_model(), "deepseek/deepseek-chat");
        assert_eq!(config.gateway().timeout_secs(), &120);
        assert!(config.gateway().api_key().is_none());
        assert!(!*config.logging().json());
    }

    #[test]
    fn test_missing_layer_is_skipped() {
        let layers = vec![PathBuf::from("/nonexistent/postcraft/postcraft.toml")];
        assert!(PostcraftConfig::from_layers(&layers, &EnvOverrides::default()).is_ok());
    }
}
