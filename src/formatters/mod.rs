//! Formatter implementations

#[cfg(feature = "console")]
pub mod color;
pub mod text;

#[cfg(feature = "console")]
pub use color::{ColorFormatter, RESET_SEQ};
pub use text::TextFormatter;

pub use crate::core::Formatter;

use crate::core::{CallerResolver, LogLevel};
use std::panic::Location;

/// `[LEVEL]` token shared by the reference formatters
pub(crate) fn level_token(level: LogLevel) -> String {
    format!("[{}]", level)
}

pub(crate) fn caller_token(
    resolver: &dyn CallerResolver,
    site: &'static Location<'static>,
) -> Option<String> {
    resolver.resolve(site).map(|location| location.to_string())
}
