//! Settings Management
//!
//! Optional persistent preferences stored as TOML.
//!
//! # Configuration File
//!
//! Settings live in `<config_dir>/clickdemo/config.toml`, or wherever
//! `CLICKDEMO_CONFIG` points:
//!
//! ```toml
//! window_title = "ClickDemo"
//! screen_width = 320.0
//! screen_height = 480.0
//! log_level = "info"
//! log_format = "pretty"   # or "compact", "json"
//! log_timestamps = true
//! log_to_file = false
//! ```
//!
//! A missing file yields the defaults. A malformed file is backed up to
//! `config.toml.backup` and the defaults are used instead.
//!
//! Settings are read before the tracing subscriber exists, so the
//! `*_reporting` loaders hand back their diagnostics as [`ConfigNotice`]s
//! for the caller to emit once logging is up.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::ConfigError;
use crate::shell::Screen;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "CLICKDEMO_CONFIG";

/// Smallest accepted screen edge, in points
pub const SCREEN_EDGE_MIN: f64 = 200.0;
/// Largest accepted screen edge, in points
pub const SCREEN_EDGE_MAX: f64 = 4096.0;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Title of the main window
    #[serde(default = "default_window_title")]
    pub window_title: String,

    /// Screen bounds the window is sized to at launch
    #[serde(default = "default_screen_width")]
    pub screen_width: f64,
    #[serde(default = "default_screen_height")]
    pub screen_height: f64,

    /// Default log level ("trace".."error")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Console log format ("pretty", "compact" or "json")
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Prefix console log lines with timestamps
    #[serde(default = "default_log_timestamps")]
    pub log_timestamps: bool,

    /// Write a daily-rotated log file in addition to the console
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_window_title() -> String {
    "ClickDemo".to_string()
}

fn default_screen_width() -> f64 {
    Screen::REFERENCE_WIDTH
}

fn default_screen_height() -> f64 {
    Screen::REFERENCE_HEIGHT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            log_timestamps: default_log_timestamps(),
            log_to_file: false,
        }
    }
}

/// Diagnostic recorded while loading settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

impl ConfigNotice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::INFO,
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            level: Level::WARN,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::ERROR,
            message: message.into(),
        }
    }

    /// Emit through the current tracing subscriber
    pub fn log(&self) {
        match self.level {
            Level::ERROR => tracing::error!("{}", self.message),
            Level::WARN => tracing::warn!("{}", self.message),
            Level::INFO => tracing::info!("{}", self.message),
            Level::DEBUG => tracing::debug!("{}", self.message),
            _ => tracing::trace!("{}", self.message),
        }
    }
}

fn log_all(notices: &[ConfigNotice]) {
    notices.iter().for_each(ConfigNotice::log);
}

impl Settings {
    /// Get the config file path
    ///
    /// `CLICKDEMO_CONFIG` wins; otherwise the platform config directory:
    /// - macOS: ~/Library/Application Support/clickdemo/config.toml
    /// - Linux: ~/.config/clickdemo/config.toml
    /// - Windows: %APPDATA%\clickdemo\config.toml
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("clickdemo").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load and validate settings from `path`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut notices = Vec::new();
        let settings = Self::parse_file(path, &mut notices)?;
        log_all(&notices);
        Ok(settings)
    }

    fn parse_file(path: &Path, notices: &mut Vec<ConfigNotice>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut settings: Settings =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        notices.extend(settings.validate());
        Ok(settings)
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        let (settings, notices) = Self::load_reporting();
        log_all(&notices);
        settings
    }

    /// Like [`Settings::load`], but returns the diagnostics instead of logging them
    pub fn load_reporting() -> (Self, Vec<ConfigNotice>) {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_reporting(&path),
            Err(e) => (
                Settings::default(),
                vec![ConfigNotice::warn(format!("{}, using default settings", e))],
            ),
        }
    }

    /// Load settings from `path`, falling back to defaults on any error.
    ///
    /// A file that exists but cannot be parsed is moved aside to
    /// `<name>.toml.backup`.
    pub fn load_or_default(path: &Path) -> Self {
        let (settings, notices) = Self::load_or_default_reporting(path);
        log_all(&notices);
        settings
    }

    /// Like [`Settings::load_or_default`], but returns the diagnostics instead of logging them
    pub fn load_or_default_reporting(path: &Path) -> (Self, Vec<ConfigNotice>) {
        let mut notices = Vec::new();

        if !path.exists() {
            notices.push(ConfigNotice::info(format!(
                "No settings file found at {:?}, using defaults",
                path
            )));
            return (Settings::default(), notices);
        }

        let settings = match Self::parse_file(path, &mut notices) {
            Ok(settings) => {
                notices.push(ConfigNotice::info(format!("Loaded settings from {:?}", path)));
                settings
            }
            Err(e @ ConfigError::Parse { .. }) => {
                notices.push(ConfigNotice::warn(format!(
                    "{}. Using defaults and backing up old file.",
                    e
                )));

                let backup_path = path.with_extension("toml.backup");
                if let Err(backup_err) = fs::rename(path, &backup_path) {
                    notices.push(ConfigNotice::error(format!(
                        "Failed to backup corrupted config: {}",
                        backup_err
                    )));
                } else {
                    notices.push(ConfigNotice::info(format!(
                        "Backed up corrupted config to {:?}",
                        backup_path
                    )));
                }
                Settings::default()
            }
            Err(e) => {
                notices.push(ConfigNotice::warn(format!("{}, using defaults", e)));
                Settings::default()
            }
        };

        (settings, notices)
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save settings to `path`
    ///
    /// Writes to a temporary file first and renames it into place.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, &contents).map_err(write_err)?;
        fs::rename(&temp_path, path).map_err(write_err)?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Validate and fix any out-of-range settings
    ///
    /// Returns a warning for every value that was replaced.
    pub fn validate(&mut self) -> Vec<ConfigNotice> {
        let mut notices = Vec::new();

        if self.window_title.trim().is_empty() {
            notices.push(ConfigNotice::warn("window_title is blank, using default"));
            self.window_title = default_window_title();
        }

        self.screen_width = clamp_edge(
            "screen_width",
            self.screen_width,
            default_screen_width(),
            &mut notices,
        );
        self.screen_height = clamp_edge(
            "screen_height",
            self.screen_height,
            default_screen_height(),
            &mut notices,
        );

        notices
    }

    /// Screen the shell is launched on
    pub fn screen(&self) -> Screen {
        Screen::new(self.screen_width, self.screen_height)
    }
}

fn clamp_edge(name: &str, value: f64, fallback: f64, notices: &mut Vec<ConfigNotice>) -> f64 {
    if !value.is_finite() {
        notices.push(ConfigNotice::warn(format!(
            "{} is not a finite number, using {}",
            name, fallback
        )));
        return fallback;
    }

    let clamped = value.clamp(SCREEN_EDGE_MIN, SCREEN_EDGE_MAX);
    if clamped != value {
        notices.push(ConfigNotice::warn(format!(
            "{} out of range ({}), clamping to {}",
            name, value, clamped
        )));
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.window_title, "ClickDemo");
        assert_eq!(settings.screen_width, 320.0);
        assert_eq!(settings.screen_height, 480.0);
        assert_eq!(settings.log_level, "info");
        assert!(!settings.log_to_file);
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings {
            window_title: "   ".to_string(),
            screen_width: 10.0,
            screen_height: 100_000.0,
            ..Settings::default()
        };
        let notices = settings.validate();
        assert_eq!(notices.len(), 3);
        assert!(notices.iter().all(|n| n.level == Level::WARN));
        assert_eq!(settings.window_title, "ClickDemo");
        assert_eq!(settings.screen_width, SCREEN_EDGE_MIN);
        assert_eq!(settings.screen_height, SCREEN_EDGE_MAX);

        settings.screen_width = f64::NAN;
        settings.validate();
        assert_eq!(settings.screen_width, 320.0);
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let settings = Settings {
            window_title: "Counter".to_string(),
            screen_width: 1024.0,
            screen_height: 768.0,
            log_level: "debug".to_string(),
            log_format: "json".to_string(),
            log_timestamps: false,
            log_to_file: true,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "window_title = \"Tapper\"\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.window_title, "Tapper");
        assert_eq!(loaded.screen_width, 320.0);
        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.log_format, "pretty");
        assert!(loaded.log_timestamps);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_malformed_file_backed_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "screen_width = \"wide\"").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));

        let loaded = Settings::load_or_default(&path);
        assert_eq!(loaded, Settings::default());
        assert!(!path.exists());
        assert!(dir.path().join("config.toml.backup").exists());
    }

    #[test]
    fn test_malformed_file_reports_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_timestamps = 3").unwrap();

        let (loaded, notices) = Settings::load_or_default_reporting(&path);
        assert_eq!(loaded, Settings::default());
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, Level::WARN);
        assert!(notices[0].message.contains("Failed to parse config"));
        assert!(notices[0].message.contains("backing up old file"));
        assert_eq!(notices[1].level, Level::INFO);
        assert!(notices[1].message.contains("config.toml.backup"));
    }

    #[test]
    fn test_missing_file_reports_defaults() {
        let dir = TempDir::new().unwrap();
        let (loaded, notices) = Settings::load_or_default_reporting(&dir.path().join("none.toml"));
        assert_eq!(loaded, Settings::default());
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.starts_with("No settings file found"));
    }

    #[test]
    fn test_out_of_range_file_reports_clamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "screen_width = 50.0\n").unwrap();

        let (loaded, notices) = Settings::load_or_default_reporting(&path);
        assert_eq!(loaded.screen_width, SCREEN_EDGE_MIN);
        assert!(notices
            .iter()
            .any(|n| n.level == Level::WARN && n.message.contains("screen_width out of range")));
    }

    #[test]
    fn test_notice_reaches_subscriber() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "screen_width = \"wide\"").unwrap();
        let (_, notices) = Settings::load_or_default_reporting(&path);

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || log_all(&notices));

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("backing up old file"));
        assert!(output.contains("Backed up corrupted config"));
    }

    #[test]
    fn test_screen_from_settings() {
        let settings = Settings {
            screen_width: 800.0,
            screen_height: 600.0,
            ..Settings::default()
        };
        let bounds = settings.screen().bounds();
        assert_eq!(bounds.width, 800.0);
        assert_eq!(bounds.height, 600.0);
    }
}
