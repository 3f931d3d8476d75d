//! Level-gated multi-level sink
//!
//! The sink behind a named [`Instance`](super::instance::Instance). It owns the
//! active filtering level and drops anything less urgent without a trace.

use super::{error::Result, formatter::Formatter, log_level::LogLevel, stream::Stream};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

pub struct Sink {
    level: RwLock<LogLevel>,
    formatter: Arc<dyn Formatter>,
    stream: Stream,
}

impl Sink {
    pub fn new(level: LogLevel, formatter: Arc<dyn Formatter>, stream: Stream) -> Self {
        Self {
            level: RwLock::new(level),
            formatter,
            stream,
        }
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.level())
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    /// Write `args` at `level` if the gate lets it through.
    ///
    /// Returns whether a line was written.
    pub fn log(&self, level: LogLevel, site: &'static Location<'static>, args: fmt::Arguments<'_>) -> bool {
        if !self.is_enabled(level) {
            return false;
        }
        self.write(level, site, args.to_string(), false);
        true
    }

    /// Write regardless of the gate and flush; used by fatal and panic calls
    pub fn log_unconditional(&self, level: LogLevel, site: &'static Location<'static>, message: String) {
        self.write(level, site, message, true);
    }

    pub fn flush(&self) -> Result<()> {
        self.stream.flush()
    }

    fn write(&self, level: LogLevel, site: &'static Location<'static>, message: String, flush: bool) {
        let line = self.formatter.render(level, site, &[message]);
        let result = if flush {
            self.stream.write_line_flushed(&line)
        } else {
            self.stream.write_line(&line)
        };
        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] Failed to write to '{}': {}", self.stream.name(), e);
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("level", &self.level())
            .field("formatter", &self.formatter.name())
            .field("stream", &self.stream)
            .finish()
    }
}
