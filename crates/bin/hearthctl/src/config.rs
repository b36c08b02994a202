//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hearth.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report settings.
    pub report: ReportConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// What the report computes and how it is printed.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Energy price applied to the total power draw.
    pub price_per_kwh: f64,
    /// Lights drawing more than this are counted as power hogs.
    pub high_power_light_threshold: f64,
    /// Room searched for a disconnected light to repair.
    pub repair_room: String,
    /// Output format on stdout.
    pub format: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per query.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown output format {other:?}"
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `hearth.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the final configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("hearth.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("HEARTH_PRICE_PER_KWH") {
            self.report.price_per_kwh = val.parse().map_err(|_| {
                ConfigError::Validation(format!("HEARTH_PRICE_PER_KWH is not a number: {val:?}"))
            })?;
        }
        if let Ok(val) = std::env::var("HEARTH_REPAIR_ROOM") {
            self.report.repair_room = val;
        }
        if let Ok(val) = std::env::var("HEARTH_FORMAT") {
            self.report.format = val.parse()?;
        }
        if let Ok(val) = std::env::var("HEARTH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let price = self.report.price_per_kwh;
        if !price.is_finite() || price < 0.0 {
            return Err(ConfigError::Validation(
                "price_per_kwh must be a non-negative number".to_string(),
            ));
        }
        if !self.report.high_power_light_threshold.is_finite() {
            return Err(ConfigError::Validation(
                "high_power_light_threshold must be a finite number".to_string(),
            ));
        }
        if self.report.repair_room.is_empty() {
            return Err(ConfigError::Validation(
                "repair_room must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            price_per_kwh: 0.10,
            high_power_light_threshold: 15.0,
            repair_room: "Kitchen".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hearthctl=info,hearth=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
