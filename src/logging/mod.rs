//! Logging system initialization and configuration
//!
//! Uses the tracing ecosystem for structured logging with support for:
//! - Environment variable override (CLICKDEMO_LOG)
//! - Optional file output with daily rotation
//! - Console output in pretty, compact or JSON form

use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::Settings;
use crate::error::LoggingError;

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "CLICKDEMO_LOG";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level
    pub level: Level,
    /// Console output format
    pub format: LogFormat,
    /// Show timestamps
    pub timestamps: bool,
    /// Show file and line numbers
    pub file_line: bool,
    /// Enable file output
    pub file_output: bool,
    /// Log file directory path
    pub file_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
            timestamps: true,
            file_line: false,
            file_output: false,
            file_path: None,
        }
    }
}

impl LoggingConfig {
    /// Logging configuration derived from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            level: parse_level(&settings.log_level),
            format: LogFormat::from_str(&settings.log_format),
            timestamps: settings.log_timestamps,
            file_output: settings.log_to_file,
            ..Self::default()
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Get the default log directory path
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clickdemo")
        .join("logs")
}

/// Initialize the logging system
///
/// # Environment Variables
/// - `CLICKDEMO_LOG`: Override log filter (e.g., "clickdemo=debug")
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(format!("clickdemo={}", config.level.as_str().to_lowercase()))
    });

    let console_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .boxed(),
        LogFormat::Compact if config.timestamps => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .without_time()
            .with_target(true)
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .boxed(),
        LogFormat::Pretty if config.timestamps => fmt::layer()
            .with_target(true)
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_ansi(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .without_time()
            .with_target(true)
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_ansi(true)
            .boxed(),
    };

    let file_layer = if config.file_output {
        let log_dir = config.file_path.clone().unwrap_or_else(default_log_dir);

        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!("Warning: Failed to create log directory {:?}: {}", log_dir, e);
            None
        } else {
            let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "clickdemo.log");

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE);

            Some(file_layer.boxed())
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::info!("Logging initialized");
    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        file_output = config.file_output,
        "Logging configuration"
    );

    Ok(())
}

/// Parse log level from string
pub fn parse_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
