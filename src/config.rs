//! Configuration loader for luasyntax.
//!
//! `defaults/luasyntax.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. [`Loader`] deserializes it into
//! [`CheckConfig`]; the checker takes no configuration files or flags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;

const DEFAULT_TOML: &str = include_str!("../defaults/luasyntax.default.toml");

/// Top-level configuration consumed by the checker.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Layout knobs for the rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    pub indent: String,
    pub function_indent: String,
    pub caret: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            function_indent: "  ".to_string(),
            caret: "^".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is absent
    pub filter: String,
}

/// Builds the configuration from the embedded defaults.
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CheckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CheckConfig, ConfigError> {
    Loader::new().build()
}
