//! Shared configuration loader for the markref toolchain.
//!
//! `defaults/markref.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MarkrefConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use markref::sinks::{FragmentOptions, SinkOptions, TextOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/markref.default.toml");

/// Top-level configuration consumed by markref applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkrefConfig {
    pub convert: ConvertConfig,
    pub references: ReferencesConfig,
}

/// Sink-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub text: TextConfig,
    pub fragments: FragmentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub line_feeds: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FragmentConfig {
    pub default_title: String,
    pub min_sentence_length: usize,
}

/// Reference engine knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferencesConfig {
    pub max_prune_passes: usize,
}

impl From<TextConfig> for TextOptions {
    fn from(config: TextConfig) -> Self {
        TextOptions {
            line_feeds: config.line_feeds,
        }
    }
}

impl From<FragmentConfig> for FragmentOptions {
    fn from(config: FragmentConfig) -> Self {
        FragmentOptions {
            default_title: config.default_title,
            min_sentence_length: config.min_sentence_length,
        }
    }
}

impl From<&ConvertConfig> for SinkOptions {
    fn from(config: &ConvertConfig) -> Self {
        SinkOptions {
            text: config.text.clone().into(),
            fragments: config.fragments.clone().into(),
        }
    }
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
    pub fn build(self) -> Result<MarkrefConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkrefConfig, ConfigError> {
    Loader::new().build()
}
