//! Named logger configuration
//!
//! ```
//! use rust_leveled_logger::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json(r#"{"name":"billing","level":"warn"}"#).unwrap();
//! assert_eq!(config.level, LogLevel::Warn);
//! assert!(config.report_caller);
//! ```

use super::{
    error::{LoggerError, Result},
    fields::Fields,
    formatter::Formatter,
    log_level::LogLevel,
    timestamp::TimestampFormat,
};
use crate::formatters::TextFormatter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub level: LogLevel,
    /// Use the ANSI color formatter instead of the text formatter
    pub colors: bool,
    pub report_caller: bool,
    pub timestamp_format: TimestampFormat,
    pub fields: Fields,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: crate::global::DEFAULT_LOGGER_NAME.to_string(),
            level: LogLevel::Debug,
            colors: false,
            report_caller: true,
            timestamp_format: TimestampFormat::default(),
            fields: Fields::new(),
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            level,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "logger name must not be empty"));
        }
        if self.colors && !cfg!(feature = "console") {
            return Err(LoggerError::config(
                "LoggerConfig",
                "colors requested but the `console` feature is disabled",
            ));
        }
        self.timestamp_format.validate()
    }

    /// Formatter described by this configuration
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        #[cfg(feature = "console")]
        {
            if self.colors {
                return Arc::new(
                    crate::formatters::ColorFormatter::new()
                        .with_label(self.name.clone())
                        .with_fields(self.fields.clone())
                        .with_timestamp_format(self.timestamp_format.clone())
                        .with_report_caller(self.report_caller),
                );
            }
        }

        Arc::new(
            TextFormatter::new()
                .with_label(self.name.clone())
                .with_fields(self.fields.clone())
                .with_timestamp_format(self.timestamp_format.clone())
                .with_report_caller(self.report_caller),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, "default");
        assert_eq!(config.level, LogLevel::Debug);
        assert!(!config.colors);
        assert!(config.report_caller);
        assert_eq!(config.timestamp_format, TimestampFormat::Standard);
    }

    #[test]
    fn test_from_json_full() {
        let config = LoggerConfig::from_json(
            r#"{
                "name": "ingest",
                "level": "trace",
                "report_caller": false,
                "timestamp_format": {"custom": "%H:%M"},
                "fields": {"shard": 3}
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.name, "ingest");
        assert_eq!(config.level, LogLevel::Trace);
        assert!(!config.report_caller);
        assert_eq!(config.timestamp_format, TimestampFormat::Custom("%H:%M".to_string()));
        assert_eq!(config.fields.format_fields(), "shard=3");
        assert_eq!(config.formatter().name(), "text");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = LoggerConfig::from_json(r#"{"name": "  "}"#).expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_bad_json() {
        let err = LoggerConfig::from_json(r#"{"level": "loud"}"#).expect_err("unknown level");
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_unknown_timestamp_specifier_rejected() {
        let err = LoggerConfig::from_json(r#"{"name":"cfg","timestamp_format":{"custom":"%Q"}}"#)
            .expect_err("bad pattern");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colors_keep_caller_label_and_fields() {
        use std::panic::Location;

        let config = LoggerConfig::from_json(
            r#"{"name":"ui","colors":true,"report_caller":false,
                "timestamp_format":{"custom":"T"},"fields":{"tab":2}}"#,
        )
        .expect("valid config");

        let line = config.formatter().render(LogLevel::Info, Location::caller(), &["shown".to_string()]);
        assert_eq!(line, "\x1b[0;32mT [INFO] [ui] shown tab=2\x1b[0m");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colors_pick_color_formatter() {
        let mut config = LoggerConfig::new("ui", LogLevel::Info);
        config.colors = true;
        assert_eq!(config.formatter().name(), "color");
    }
}
