//! Single-level logger
//!
//! A [`Logger`] is bound to one level, one shared formatter and one stream.
//! It does no filtering of its own: every call is formatted and written.
//! Fatal and panic variants return a [`Termination`] after the line is out.

use super::{
    error::Result,
    formatter::Formatter,
    log_handle::LogHandle,
    log_level::LogLevel,
    stream::Stream,
    termination::{Termination, FATAL_EXIT_CODE},
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    level: LogLevel,
    formatter: Arc<dyn Formatter>,
    stream: Stream,
}

impl Logger {
    #[must_use]
    pub fn new(level: LogLevel, formatter: Arc<dyn Formatter>, stream: Stream) -> Self {
        Self {
            level,
            formatter,
            stream,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    pub fn flush(&self) -> Result<()> {
        self.stream.flush()
    }

    fn emit(&self, site: &'static Location<'static>, parts: Vec<String>, flush: bool) {
        let line = self.formatter.render(self.level, site, &parts);
        let result = if flush {
            self.stream.write_line_flushed(&line)
        } else {
            self.stream.write_line(&line)
        };
        if let Err(e) = result {
            eprintln!(
                "[LOGGER ERROR] {} logger failed to write to '{}': {}",
                self.level,
                self.stream.name(),
                e
            );
        }
    }
}

impl LogHandle for Logger {
    #[track_caller]
    fn print(&self, parts: &[&dyn fmt::Display]) {
        self.emit(Location::caller(), collect_parts(parts), false);
    }

    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Location::caller(), vec![args.to_string()], false);
    }

    #[track_caller]
    fn fatal(&self, parts: &[&dyn fmt::Display]) -> Termination {
        self.emit(Location::caller(), collect_parts(parts), true);
        Termination::ExitProcess(FATAL_EXIT_CODE)
    }

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> Termination {
        self.emit(Location::caller(), vec![args.to_string()], true);
        Termination::ExitProcess(FATAL_EXIT_CODE)
    }

    #[track_caller]
    fn panic(&self, parts: &[&dyn fmt::Display]) -> Termination {
        let parts = collect_parts(parts);
        let message = parts.join(" ");
        self.emit(Location::caller(), parts, true);
        Termination::UnrecoverablePanic(message)
    }

    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) -> Termination {
        let message = args.to_string();
        self.emit(Location::caller(), vec![message.clone()], true);
        Termination::UnrecoverablePanic(message)
    }

    fn stream(&self) -> Option<&Stream> {
        Some(&self.stream)
    }

    fn flush(&self) -> Result<()> {
        Logger::flush(self)
    }
}

fn collect_parts(parts: &[&dyn fmt::Display]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("formatter", &self.formatter.name())
            .field("stream", &self.stream)
            .finish()
    }
}
