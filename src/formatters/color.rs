//! ANSI color formatter
//!
//! Output: `<color><timestamp> <file:line> [LEVEL] [label] message key=value...<reset>`.
//! Caller, label and fields are optional.
//! Colors come from [`LogLevel::color_code`]; Panic and Fatal use the
//! magenta/red family so they never look like Info or Debug lines.

use super::{caller_token, level_token};
use crate::core::{CallerResolver, Fields, Formatter, LogLevel, SiteResolver, TimestampFormat};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// ANSI reset sequence
pub const RESET_SEQ: &str = "\x1b[0m";

#[derive(Clone)]
pub struct ColorFormatter {
    enabled: bool,
    label: Option<String>,
    fields: Option<Fields>,
    timestamp_format: TimestampFormat,
    report_caller: bool,
    resolver: Arc<dyn CallerResolver>,
}

impl ColorFormatter {
    pub fn new() -> Self {
        Self {
            enabled: true,
            label: None,
            fields: None,
            timestamp_format: TimestampFormat::default(),
            report_caller: true,
            resolver: Arc::new(SiteResolver::new()),
        }
    }

    /// Colors only when the terminal supports them (honors `NO_COLOR`,
    /// `CLICOLOR_FORCE` and tty detection)
    pub fn auto() -> Self {
        Self::new().with_colors(colored::control::SHOULD_COLORIZE.should_colorize())
    }

    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = if fields.is_empty() { None } else { Some(fields) };
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_report_caller(mut self, enabled: bool) -> Self {
        self.report_caller = enabled;
        self
    }

    #[must_use]
    pub fn with_resolver<R: CallerResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn colors_enabled(&self) -> bool {
        self.enabled
    }

    /// Escape sequence for a level, `ESC[0;<code>m`
    pub fn color_sequence(level: LogLevel) -> String {
        format!("\x1b[0;{}m", level.color_code().to_fg_str())
    }
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorFormatter")
            .field("enabled", &self.enabled)
            .field("label", &self.label)
            .field("fields", &self.fields)
            .field("timestamp_format", &self.timestamp_format)
            .field("report_caller", &self.report_caller)
            .finish()
    }
}

impl Formatter for ColorFormatter {
    fn prefix(&self, level: LogLevel) -> String {
        if self.enabled {
            Self::color_sequence(level)
        } else {
            String::new()
        }
    }

    fn suffix(&self, _level: LogLevel) -> String {
        if self.enabled {
            RESET_SEQ.to_string()
        } else {
            String::new()
        }
    }

    fn format(&self, level: LogLevel, site: &'static Location<'static>, parts: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(parts.len() + 5);
        out.push(self.timestamp_format.now());
        if self.report_caller {
            if let Some(caller) = caller_token(self.resolver.as_ref(), site) {
                out.push(caller);
            }
        }
        out.push(level_token(level));
        if let Some(ref label) = self.label {
            out.push(format!("[{}]", label));
        }
        out.extend(parts.iter().cloned());
        if let Some(ref fields) = self.fields {
            out.push(fields.format_fields());
        }
        out
    }

    fn name(&self) -> &str {
        "color"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallerLocation, FixedResolver};

    #[test]
    fn test_fixed_color_table() {
        let formatter = ColorFormatter::new();
        assert_eq!(formatter.prefix(LogLevel::Debug), "\x1b[0;36m");
        assert_eq!(formatter.prefix(LogLevel::Trace), "\x1b[0;34m");
        assert_eq!(formatter.prefix(LogLevel::Info), "\x1b[0;32m");
        assert_eq!(formatter.prefix(LogLevel::Warn), "\x1b[0;33m");
        assert_eq!(formatter.prefix(LogLevel::Error), "\x1b[0;31m");
        assert_eq!(formatter.prefix(LogLevel::Panic), "\x1b[0;35m");
        assert_eq!(formatter.prefix(LogLevel::Fatal), "\x1b[0;91m");
    }

    #[test]
    fn test_severe_levels_stand_out() {
        let formatter = ColorFormatter::new();
        for severe in [LogLevel::Panic, LogLevel::Fatal] {
            for calm in [LogLevel::Info, LogLevel::Debug] {
                assert_ne!(formatter.prefix(severe), formatter.prefix(calm));
            }
        }
    }

    #[test]
    fn test_suffix_is_reset() {
        let formatter = ColorFormatter::new();
        for level in LogLevel::ALL {
            assert_eq!(formatter.suffix(level), RESET_SEQ);
        }
    }

    #[test]
    fn test_line_layout() {
        let formatter = ColorFormatter::new()
            .with_timestamp_format(TimestampFormat::Custom("T".to_string()))
            .with_resolver(FixedResolver::new(CallerLocation::new("svc.rs", 40)));

        let line = formatter.render(LogLevel::Error, Location::caller(), &["boom".to_string()]);
        assert_eq!(line, "\x1b[0;31mT svc.rs:40 [ERROR] boom\x1b[0m");
    }

    #[test]
    fn test_disabled_colors_keep_tokens() {
        let formatter = ColorFormatter::new()
            .with_colors(false)
            .with_timestamp_format(TimestampFormat::Custom("T".to_string()))
            .with_resolver(FixedResolver::none());

        let line = formatter.render(LogLevel::Info, Location::caller(), &["ok".to_string()]);
        assert_eq!(line, "T [INFO] ok");
        assert!(!formatter.colors_enabled());
    }

    #[test]
    fn test_label_fields_and_caller_toggle() {
        let formatter = ColorFormatter::new()
            .with_colors(false)
            .with_timestamp_format(TimestampFormat::Custom("T".to_string()))
            .with_resolver(FixedResolver::new(CallerLocation::new("svc.rs", 40)))
            .with_report_caller(false)
            .with_label("jobs")
            .with_fields(Fields::new().with_field("queue", "fast"));

        let line = formatter.render(LogLevel::Warn, Location::caller(), &["slow".to_string()]);
        assert_eq!(line, "T [WARN] [jobs] slow queue=fast");
    }
}
