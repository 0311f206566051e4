//! Logging configuration for rowquery
//!
//! Built on the `tracing` framework: level filtering via `RUST_LOG` or the
//! configured level, pretty or compact output, and daily-rotated log files.

use rowquery_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILE: &str = "rowquery.log";

/// Log output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Output to stderr
    Stderr,
    /// Output to a file with daily rotation
    File(PathBuf),
    /// Output to both stderr and file
    Both(PathBuf),
}

impl LogOutput {
    fn file(&self) -> Option<&Path> {
        match self {
            LogOutput::Stderr => None,
            LogOutput::File(path) | LogOutput::Both(path) => Some(path),
        }
    }

    fn to_terminal(&self) -> bool {
        matches!(self, LogOutput::Stderr | LogOutput::Both(_))
    }
}

/// Log format style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format (default)
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter, in `EnvFilter` directive syntax
    pub level: String,
    /// Output destination
    pub output: LogOutput,
    /// Format style
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            output: LogOutput::Stderr,
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Create config with info level
    pub fn info() -> Self {
        Self {
            level: "info".to_string(),
            ..Default::default()
        }
    }

    /// Create config with debug level
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Create config with warn level
    pub fn warn() -> Self {
        Self::default()
    }

    /// Set log output to file with rotation
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set log output to both stderr and file
    pub fn with_both<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::Both(path.into());
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Initialize global logging with this configuration
    ///
    /// `RUST_LOG` takes precedence over the configured level. When a log file
    /// is configured the returned guard must be kept alive; dropping it
    /// flushes and stops the background writer.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rowquery::logging::LogConfig;
    ///
    /// let _guard = LogConfig::info().init()?;
    /// # Ok::<(), rowquery::Error>(())
    /// ```
    pub fn init(self) -> Result<Option<WorkerGuard>> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| {
                Error::InvalidOperation(format!("invalid log level '{}': {}", self.level, e))
            })?;

        let terminal_layer = self
            .output
            .to_terminal()
            .then(|| format_layer(self.format, std::io::stderr, true));

        let (file_layer, guard) = match self.output.file() {
            Some(path) => {
                let appender = tracing_appender::rolling::daily(
                    path.parent().unwrap_or_else(|| Path::new(".")),
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or(DEFAULT_LOG_FILE),
                );
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                (Some(format_layer(self.format, non_blocking, false)), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(terminal_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| Error::InvalidOperation(format!("logging already initialized: {}", e)))?;

        Ok(guard)
    }
}

fn format_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}
