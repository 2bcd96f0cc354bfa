//! # Logger
//!
//! A centralized logging utility for the client tooling.
//! It configures console and file logging with rotation, non-blocking I/O and
//! environment-based filtering.
//!
//! * Console output goes to **stderr** so that stdout stays free for JSON payloads.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"csc_models=debug"`), in addition to `RUST_LOG`.
//! * [`LogSettings`] is the deserializable form used by configuration files.
//!
//! ## Example
//!
//! ```rust
//! # use csc_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Logging section of a configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Minimum level, e.g. `"warn"`.
    #[serde(deserialize_with = "level_from_str")]
    pub level: LevelFilter,
    /// Extra env-filter directives, e.g. `"csc_models=debug"`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; no file output when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            filter: None,
            console: true,
            path: None,
            json: false,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

fn level_from_str<'de, D: Deserializer<'de>>(d: D) -> Result<LevelFilter, D::Error> {
    let raw = String::deserialize(d)?;
    LevelFilter::from_str(&raw)
        .map_err(|_| serde::de::Error::custom(format!("Invalid log level '{raw}'")))
}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    settings: LogSettings,
    rotation: Rotation,
}

impl LoggerBuilder {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `csc_models=debug`).
    ///
    /// `RUST_LOG` is only consulted when no explicit filter is set.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.filter = Some(filter.into());
        self
    }

    /// Enables console logging on stderr.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Sets the directory for rolling log files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.path = Some(path.into());
        self
    }

    /// Writes log files as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Configures maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. It holds the [`WorkerGuard`] of the file writer and must be
    /// kept alive for the duration of the program so pending lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    /// Returns [`LoggerError::Io`] if the log directory cannot be created.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate(&self.name, &self.settings)?;
        let env_filter = build_env_filter(&self.settings)?;

        let mut layers = Vec::new();
        if self.settings.console {
            layers.push(layer().compact().with_writer(std::io::stderr).boxed());
        }

        let guard = if let Some(path) = &self.settings.path {
            fs::create_dir_all(path)
                .context(format!("Failed to create path: {}", path.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(self.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.settings.max_files)
                .build(path)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.settings.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, "Logger initialized");

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background worker guard. Drop it only when the application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] with default settings.
    ///
    /// The `name` prefixes rolling log files (e.g., `csc.2026-10-18.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        Self::from_settings(name, LogSettings::default())
    }

    /// Returns a [`LoggerBuilder`] seeded from configuration.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn from_settings(name: impl Into<String>, settings: LogSettings) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), settings, rotation: Rotation::DAILY }
    }

    /// Returns a reference to the underlying worker guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(name: &str, settings: &LogSettings) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    if !settings.console && settings.path.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging layers enabled. Enable console or file output.".into(),
            context: None,
        });
    }
    Ok(())
}

fn build_env_filter(settings: &LogSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
