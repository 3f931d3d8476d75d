//! Named logger instances
//!
//! An [`Instance`] is what the registry hands out: a name, the configured
//! minimum level and the [`Sink`] doing the work. Emission methods are
//! `#[track_caller]` so the reported location is the caller's.

use super::{
    error::Result,
    fields::Fields,
    log_level::LogLevel,
    sink::Sink,
    termination::{Termination, FATAL_EXIT_CODE},
};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

pub struct Instance {
    name: String,
    level: RwLock<LogLevel>,
    fields: Option<Fields>,
    sink: Arc<Sink>,
}

impl Instance {
    pub fn new(name: impl Into<String>, level: LogLevel, sink: Arc<Sink>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(level),
            fields: None,
            sink,
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured minimum level
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Capitalized level name, e.g. `"Info"`
    pub fn level_name(&self) -> &'static str {
        self.level().name()
    }

    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }

    /// Update the stored level and the sink's gate together
    pub fn set_level(&self, level: LogLevel) {
        let mut stored = self.level.write();
        self.sink.set_level(level);
        *stored = level;
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.sink.is_enabled(level)
    }

    /// Gated write at `level`. Fatal and Panic levels are written like any
    /// other here; use [`fatalf`](Self::fatalf) or [`panicf`](Self::panicf)
    /// for the terminating variants.
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.sink.log(level, Location::caller(), args);
    }

    /// Info-level write
    #[track_caller]
    pub fn print(&self, args: fmt::Arguments<'_>) {
        self.sink.log(LogLevel::Info, Location::caller(), args);
    }

    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.sink.log(LogLevel::Trace, Location::caller(), args);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.sink.log(LogLevel::Debug, Location::caller(), args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.sink.log(LogLevel::Info, Location::caller(), args);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.sink.log(LogLevel::Warn, Location::caller(), args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.sink.log(LogLevel::Error, Location::caller(), args);
    }

    /// Write the message whatever the level, then exit the process with status 1
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.sink
            .log_unconditional(LogLevel::Fatal, Location::caller(), args.to_string());
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write the message whatever the level, then panic with it
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.sink
            .log_unconditional(LogLevel::Panic, Location::caller(), message.clone());
        panic!("{}", message)
    }

    /// Like [`fatalf`](Self::fatalf) but hands the exit back to the caller
    #[track_caller]
    pub fn fatal_deferred(&self, args: fmt::Arguments<'_>) -> Termination {
        self.sink
            .log_unconditional(LogLevel::Fatal, Location::caller(), args.to_string());
        Termination::ExitProcess(FATAL_EXIT_CODE)
    }

    /// Like [`panicf`](Self::panicf) but hands the unwind back to the caller
    #[track_caller]
    pub fn panic_deferred(&self, args: fmt::Arguments<'_>) -> Termination {
        let message = args.to_string();
        self.sink
            .log_unconditional(LogLevel::Panic, Location::caller(), message.clone());
        Termination::UnrecoverablePanic(message)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("fields", &self.fields)
            .field("sink", &self.sink)
            .finish()
    }
}
