//! Shared configuration loader for the webster tools.
//!
//! `defaults/webster.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WebsterConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use webster_babel::{DuplicateSenses, RenderOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/webster.default.toml");

/// Top-level configuration consumed by webster applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WebsterConfig {
    pub render: RenderConfig,
    pub api: ApiConfig,
    pub notes: NotesConfig,
    pub postprocess: PostprocessConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by [`RenderOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub base_url: String,
    pub highlight_color: String,
    pub duplicate_senses: DuplicateSenses,
    pub subdivision_illustrations: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            base_url: config.base_url,
            highlight_color: config.highlight_color,
            duplicate_senses: config.duplicate_senses,
            subdivision_illustrations: config.subdivision_illustrations,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            base_url: config.base_url.clone(),
            highlight_color: config.highlight_color.clone(),
            duplicate_senses: config.duplicate_senses,
            subdivision_illustrations: config.subdivision_illustrations,
        }
    }
}

/// Dictionary API endpoint and credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub root: String,
    pub key_env: String,
    /// Inline key. Takes precedence over `key_env` when present.
    #[serde(default)]
    pub key: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotesConfig {
    pub directory: PathBuf,
}

/// External formatter run over written notes.
#[derive(Debug, Clone, Deserialize)]
pub struct PostprocessConfig {
    pub enabled: bool,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WebsterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WebsterConfig, ConfigError> {
    Loader::new().build()
}
