//! Plain text formatter
//!
//! Produces `<timestamp> <file:line> [LEVEL] [label] message key=value...`
//! with no color. Every piece except the level and the message can be turned
//! off.

use super::{caller_token, level_token};
use crate::core::{CallerResolver, Fields, Formatter, LogLevel, SiteResolver, TimestampFormat};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

#[derive(Clone)]
pub struct TextFormatter {
    label: Option<String>,
    fields: Option<Fields>,
    timestamp_format: Option<TimestampFormat>,
    report_caller: bool,
    resolver: Arc<dyn CallerResolver>,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            label: None,
            fields: None,
            timestamp_format: Some(TimestampFormat::default()),
            report_caller: true,
            resolver: Arc::new(SiteResolver::new()),
        }
    }

    /// Tag every line with `[label]`; named loggers use their name here
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
        self.timestamp_format = Some(format);
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
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

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFormatter")
            .field("label", &self.label)
            .field("fields", &self.fields)
            .field("timestamp_format", &self.timestamp_format)
            .field("report_caller", &self.report_caller)
            .finish()
    }
}

impl Formatter for TextFormatter {
    fn prefix(&self, _level: LogLevel) -> String {
        String::new()
    }

    fn suffix(&self, _level: LogLevel) -> String {
        String::new()
    }

    fn format(&self, level: LogLevel, site: &'static Location<'static>, parts: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(parts.len() + 5);

        if let Some(ref format) = self.timestamp_format {
            out.push(format.now());
        }
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
        "text"
    }
}
