//! Core logger types and traits

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod instance;
pub mod level_set;
pub mod log_handle;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod sink;
pub mod stream;
pub mod termination;
pub mod timestamp;

pub use appender::Appender;
pub use caller::{CallerLocation, CallerResolver, FixedResolver, SiteResolver};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use formatter::Formatter;
pub use instance::Instance;
pub use level_set::{LevelSet, LevelSetBuilder};
pub use log_handle::LogHandle;
pub use log_level::{string_to_level, LogLevel};
pub use logger::Logger;
pub use registry::Registry;
pub use sink::Sink;
pub use stream::Stream;
pub use termination::{Termination, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
