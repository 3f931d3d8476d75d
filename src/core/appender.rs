//! Appender trait for line-oriented output destinations

use super::error::Result;

/// Writes fully formatted lines to a destination
///
/// An appender never sees levels or formatters; by the time a line reaches it
/// the destination has already been chosen and the text already built.
pub trait Appender: Send {
    /// Write one line. The appender adds the line terminator.
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
