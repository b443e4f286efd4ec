//! qrstamp runtime configuration handling
//!
//! All settings come from the process environment, are read exactly once at
//! startup, and are immutable afterwards. Color values are deliberately not
//! validated here; a bad color name surfaces when the render step parses it.

use std::env;

/// Environment variable naming the output subdirectory.
pub const QR_CODE_DIR_VAR: &str = "QR_CODE_DIR";
/// Environment variable for the QR module color.
pub const FILL_COLOR_VAR: &str = "FILL_COLOR";
/// Environment variable for the QR background color.
pub const BACK_COLOR_VAR: &str = "BACK_COLOR";

/// Top-level configuration sourced from the environment at process start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output subdirectory name, joined onto the current working directory
    pub qr_dir: String,
    /// QR module (dark) color, any CSS color string
    pub fill_color: String,
    /// QR background (light) color, any CSS color string
    pub back_color: String,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            qr_dir: "qr_codes".to_string(),
            fill_color: "black".to_string(),
            back_color: "white".to_string(),
            logging: LoggingOptions::default(),
        }
    }
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything absent or empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(dir) = non_empty_var(QR_CODE_DIR_VAR) {
            self.qr_dir = dir;
        }
        if let Some(fill) = non_empty_var(FILL_COLOR_VAR) {
            self.fill_color = fill;
        }
        if let Some(back) = non_empty_var(BACK_COLOR_VAR) {
            self.back_color = back;
        }
        self.logging.apply_env_overrides();
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRSTAMP_LOG_LEVEL`)
    pub level: String,
    /// ANSI colors in stdout logging
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: true,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Some(level) = non_empty_var("QRSTAMP_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(color) = env::var("QRSTAMP_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
