use config::{Config, Environment, File};
use csc_logger::LogSettings;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "csc.toml";
const ENV_PREFIX: &str = "CSC";

/// Error raised while loading configuration.
#[csc_derive::csc_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Top-level configuration of the `csc` tool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub log: LogSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Indent printed JSON.
    pub pretty: bool,
}

/// Loads configuration from a file overlaid with environment variables.
///
/// 1. **File**: `path` when given (must exist), otherwise `csc.toml` if it exists.
/// 2. **Environment**: variables prefixed with `CSC__`, nested with `__`
///    (e.g., `CSC__LOG__LEVEL=debug` maps to `log.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not fit [`CliConfig`].
pub fn load_config(path: Option<&Path>) -> Result<CliConfig, ConfigError> {
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.to_path_buf(), true),
    );

    let builder = Config::builder().add_source(File::from(file.as_path()).required(required)).add_source(
        Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
    );

    debug!("Loading config from {}", file.display());

    builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<CliConfig>()
        .context("Failed to deserialize config")
}
