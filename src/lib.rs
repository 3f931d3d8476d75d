//! # Rust Leveled Logger
//!
//! A leveled logging facility with named logger instances, per-level output
//! routing and pluggable formatters.
//!
//! ## Features
//!
//! - **Named Loggers**: a registry hands out one instance per name, safe under
//!   concurrent first use
//! - **Level Routing**: a level set sends Error, Panic and Fatal to the error
//!   stream and everything else to the normal stream
//! - **Pluggable Formatting**: plain text or ANSI color, with timestamp and
//!   caller `file:line`
//! - **Explicit Termination**: fatal and panic calls always write first
//!
//! ## Example
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let (out, captured) = Stream::memory();
//! let registry = Registry::with_output(out);
//!
//! let svc = registry.get_or_create(LogLevel::Info, "svc");
//! svc.infof(format_args!("x={}", 5));
//! assert!(captured.contents().contains("x=5"));
//! ```

pub mod appenders;
pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, CallerLocation, CallerResolver, FieldValue, Fields, FixedResolver, Formatter,
        Instance, LevelSet, LevelSetBuilder, LogHandle, LogLevel, Logger, LoggerConfig,
        LoggerError, Registry, Result, SiteResolver, Sink, Stream, Termination, TimestampFormat,
    };
    #[cfg(feature = "console")]
    pub use crate::formatters::ColorFormatter;
    pub use crate::formatters::TextFormatter;
}

pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use crate::core::{
    string_to_level, Appender, CallerLocation, CallerResolver, FieldValue, Fields, FixedResolver,
    Formatter, Instance, LevelSet, LevelSetBuilder, LogHandle, LogLevel, Logger, LoggerConfig,
    LoggerError, Registry, Result, SiteResolver, Sink, Stream, Termination, TimestampFormat,
    FATAL_EXIT_CODE,
};
#[cfg(feature = "console")]
pub use crate::formatters::ColorFormatter;
pub use crate::formatters::TextFormatter;
pub use crate::global::{
    debugf, default_logger, errorf, fatalf, infof, init, list, new_named_logger,
    new_named_logger_with_fields, panicf, print, registry, set_level, tracef, warnf,
    DEFAULT_LOGGER_NAME,
};
