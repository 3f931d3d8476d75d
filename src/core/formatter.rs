//! Formatter trait for decorating log messages
//!
//! A formatter knows nothing about routing or streams. It supplies a prefix
//! and a suffix for a level and turns message parts into the decorated
//! sequence that ends up between them.

use super::log_level::LogLevel;
use std::panic::Location;

pub trait Formatter: Send + Sync {
    /// Text placed before the line, e.g. an ANSI color sequence
    fn prefix(&self, level: LogLevel) -> String;

    /// Text placed after the line, e.g. the ANSI reset sequence
    fn suffix(&self, level: LogLevel) -> String;

    /// Return a new sequence: decoration tokens followed by `parts`
    fn format(&self, level: LogLevel, site: &'static Location<'static>, parts: &[String]) -> Vec<String>;

    fn name(&self) -> &str;

    /// Assemble the complete line: prefix, formatted parts joined by spaces, suffix
    fn render(&self, level: LogLevel, site: &'static Location<'static>, parts: &[String]) -> String {
        let mut line = self.prefix(level);
        line.push_str(&self.format(level, site, parts).join(" "));
        line.push_str(&self.suffix(level));
        line
    }
}
