//! Shared output streams
//!
//! A [`Stream`] is a cloneable handle to one appender. Clones share the same
//! appender, so several levels of a level set (or several named loggers) can
//! write to one destination; the internal mutex keeps each line whole.

use super::{appender::Appender, error::Result};
use crate::appenders::{ConsoleAppender, MemoryAppender};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Stream {
    appender: Arc<Mutex<Box<dyn Appender>>>,
}

impl Stream {
    pub fn new<A: Appender + 'static>(appender: A) -> Self {
        Self::from_boxed(Box::new(appender))
    }

    pub fn from_boxed(appender: Box<dyn Appender>) -> Self {
        Self {
            appender: Arc::new(Mutex::new(appender)),
        }
    }

    /// Stream writing to standard output
    pub fn stdout() -> Self {
        Self::new(ConsoleAppender::stdout())
    }

    /// Stream writing to standard error
    pub fn stderr() -> Self {
        Self::new(ConsoleAppender::stderr())
    }

    /// In-memory stream, returned together with the buffer it fills
    pub fn memory() -> (Self, MemoryAppender) {
        let buffer = MemoryAppender::new();
        (Self::new(buffer.clone()), buffer)
    }

    /// Write one line while holding the stream lock
    pub fn write_line(&self, line: &str) -> Result<()> {
        self.appender.lock().append(line)
    }

    /// Write one line and flush before releasing the lock
    pub fn write_line_flushed(&self, line: &str) -> Result<()> {
        let mut appender = self.appender.lock();
        appender.append(line)?;
        appender.flush()
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    pub fn name(&self) -> String {
        self.appender.lock().name().to_string()
    }

    /// Whether both handles point at the same appender
    pub fn same_as(&self, other: &Stream) -> bool {
        Arc::ptr_eq(&self.appender, &other.appender)
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").field("appender", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_appender() {
        let (stream, buffer) = Stream::memory();
        let clone = stream.clone();
        assert!(stream.same_as(&clone));

        stream.write_line("one").expect("memory write");
        clone.write_line("two").expect("memory write");
        assert_eq!(buffer.lines(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_distinct_streams() {
        let (a, _) = Stream::memory();
        let (b, _) = Stream::memory();
        assert!(!a.same_as(&b));
    }

    #[test]
    fn test_name() {
        assert_eq!(Stream::stdout().name(), "stdout");
        assert_eq!(Stream::stderr().name(), "stderr");
        assert_eq!(Stream::memory().0.name(), "memory");
    }
}
