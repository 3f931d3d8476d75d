//! Per-level logger table
//!
//! A [`LevelSet`] holds one [`LogHandle`] per level, a stream-backed
//! [`Logger`] unless replaced. Debug, Trace, Info and Warn share the normal
//! stream; Error, Panic and Fatal share the error stream.
//!
//! ```
//! use rust_leveled_logger::{LevelSet, LogLevel};
//!
//! let loggers = LevelSet::new(None, None, None);
//! loggers[LogLevel::Info].printf(format_args!("listening on {}", 8080));
//! ```

use super::{
    error::Result, formatter::Formatter, log_handle::LogHandle, log_level::LogLevel,
    logger::Logger, stream::Stream,
};
use crate::formatters::TextFormatter;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

#[derive(Clone)]
pub struct LevelSet {
    loggers: [Arc<dyn LogHandle>; 7],
}

impl LevelSet {
    /// Build the table. Missing pieces default to stdout, stderr and a
    /// [`TextFormatter`].
    pub fn new(
        out: Option<Stream>,
        err: Option<Stream>,
        formatter: Option<Arc<dyn Formatter>>,
    ) -> Self {
        let out = out.unwrap_or_else(Stream::stdout);
        let err = err.unwrap_or_else(Stream::stderr);
        let formatter = formatter.unwrap_or_else(|| Arc::new(TextFormatter::new()));

        let loggers = LogLevel::ALL.map(|level| {
            let stream = if level.is_error_stream() { &err } else { &out };
            Arc::new(Logger::new(level, Arc::clone(&formatter), stream.clone()))
                as Arc<dyn LogHandle>
        });

        Self { loggers }
    }

    pub fn builder() -> LevelSetBuilder {
        LevelSetBuilder::new()
    }

    pub fn get(&self, level: LogLevel) -> &dyn LogHandle {
        self.loggers[level as usize].as_ref()
    }

    /// Replace the handle for one level
    pub fn set(&mut self, level: LogLevel, handle: Arc<dyn LogHandle>) {
        self.loggers[level as usize] = handle;
    }

    /// Use one handle for every level
    pub fn set_all(&mut self, handle: Arc<dyn LogHandle>) {
        for slot in self.loggers.iter_mut() {
            *slot = Arc::clone(&handle);
        }
    }

    /// Handles in level order, most urgent first
    pub fn iter(&self) -> impl Iterator<Item = &dyn LogHandle> {
        self.loggers.iter().map(|handle| handle.as_ref())
    }

    /// Flush every distinct stream once, and every handle without a stream
    pub fn flush(&self) -> Result<()> {
        let mut flushed: Vec<&Stream> = Vec::new();
        for handle in self.iter() {
            match handle.stream() {
                Some(stream) if flushed.iter().any(|s| s.same_as(stream)) => continue,
                Some(stream) => {
                    stream.flush()?;
                    flushed.push(stream);
                }
                None => handle.flush()?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|handle| handle.stream().map(Stream::name)))
            .finish()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl Index<LogLevel> for LevelSet {
    type Output = dyn LogHandle;

    fn index(&self, level: LogLevel) -> &(dyn LogHandle + 'static) {
        self.loggers[level as usize].as_ref()
    }
}

/// Builder for constructing a LevelSet with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let (out, captured) = Stream::memory();
/// let loggers = LevelSet::builder()
///     .out(out)
///     .formatter(Arc::new(TextFormatter::new().without_timestamp()))
///     .build();
///
/// loggers[LogLevel::Warn].printf(format_args!("retry {}", 2));
/// assert_eq!(captured.len(), 1);
/// ```
#[derive(Default)]
pub struct LevelSetBuilder {
    out: Option<Stream>,
    err: Option<Stream>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl LevelSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream for Debug, Trace, Info and Warn
    #[must_use = "builder methods return a new value"]
    pub fn out(mut self, stream: Stream) -> Self {
        self.out = Some(stream);
        self
    }

    /// Stream for Error, Panic and Fatal
    #[must_use = "builder methods return a new value"]
    pub fn err(mut self, stream: Stream) -> Self {
        self.err = Some(stream);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn build(self) -> LevelSet {
        LevelSet::new(self.out, self.err, self.formatter)
    }
}
