//! Timestamp formatting utilities
//!
//! Provides the timestamp layouts formatters can prefix a line with. The
//! default is the compact local-time layout `YYYY-MM-DD HH:MM:SS.mmm`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2025-01-08 10:30:45.000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45.123`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

/// strftime pattern behind [`TimestampFormat::Standard`]
pub const STANDARD_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

impl TimestampFormat {
    /// Render `datetime`. A custom pattern chrono cannot render falls back to
    /// [`STANDARD_PATTERN`].
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Standard => render(datetime, STANDARD_PATTERN),
            TimestampFormat::Iso8601 => render(datetime, "%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => render(datetime, pattern),
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }

    /// Reject custom patterns containing unknown strftime specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime pattern '{}'", pattern),
                ));
            }
        }
        Ok(())
    }
}

fn render(datetime: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", datetime.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", datetime.format(STANDARD_PATTERN));
    }
    out
}
