//! Logging macros for ergonomic log message formatting.
//!
//! The macros take a named logger [`Instance`](crate::Instance) (or anything
//! dereferencing to one) followed by `format!`-style arguments. Nothing is
//! formatted when the level is filtered out.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::{info, warn, LogLevel, Registry, Stream};
//!
//! let (out, _captured) = Stream::memory();
//! let registry = Registry::with_output(out);
//! let logger = registry.get_or_create(LogLevel::Info, "server");
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "{} connections pending", 3);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Registry::with_output(Stream::memory().0).get_or_create(LogLevel::Info, "app");
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message whatever the level, then exit the process with status 1.
///
/// ```no_run
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Registry::new().get_or_create(LogLevel::Info, "app");
/// use rust_leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::core::{LogLevel, Registry, Stream};

    fn registry() -> (Registry, MemoryAppender) {
        let (out, buffer) = Stream::memory();
        (Registry::with_output(out), buffer)
    }

    #[test]
    fn test_log_macro() {
        let (registry, buffer) = registry();
        let logger = registry.get_or_create(LogLevel::Info, "m");
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(buffer.len(), 2);
        assert!(buffer.contents().contains("Formatted: 42"));
    }

    #[test]
    fn test_level_macros_respect_gate() {
        let (registry, buffer) = registry();
        let logger = registry.get_or_create(LogLevel::Warn, "m");
        trace!(logger, "Trace {}", 1);
        debug!(logger, "Debug {}", 2);
        info!(logger, "Info {}", 3);
        warn!(logger, "Warn {}", 4);
        error!(logger, "Error {}", 5);

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[WARN] [m] Warn 4"));
        assert!(lines[1].ends_with("[ERROR] [m] Error 5"));
    }

    #[test]
    fn test_macro_reports_macro_call_site() {
        let (registry, buffer) = registry();
        let logger = registry.get_or_create(LogLevel::Info, "m");
        let line = line!() + 1;
        info!(logger, "where");
        assert!(buffer.contents().contains(&format!("macros.rs:{}", line)));
    }
}
