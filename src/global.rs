//! Process-wide registry and the default logger
//!
//! The free functions here forward to a lazily created instance named
//! `"default"` (level Debug) registered in the global [`Registry`].
//!
//! ```
//! use rust_leveled_logger as logh;
//! use rust_leveled_logger::LogLevel;
//!
//! logh::infof(format_args!("starting {}", "worker"));
//!
//! let db = logh::new_named_logger(LogLevel::Warn, "db");
//! db.warnf(format_args!("slow query: {}ms", 840));
//! logh::set_level("db", LogLevel::Debug).unwrap();
//! ```

use crate::core::{
    string_to_level, Fields, Instance, LogLevel, Registry, Result,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name of the default instance
pub const DEFAULT_LOGGER_NAME: &str = "default";

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static DEFAULT_LOGGER: Lazy<Arc<Instance>> =
    Lazy::new(|| REGISTRY.get_or_create(LogLevel::Debug, DEFAULT_LOGGER_NAME));

pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub fn default_logger() -> &'static Arc<Instance> {
    &DEFAULT_LOGGER
}

/// Set the default logger's level from a string; unknown strings mean debug
pub fn init(level: &str) {
    DEFAULT_LOGGER.set_level(string_to_level(level));
}

pub fn new_named_logger(level: LogLevel, name: &str) -> Arc<Instance> {
    REGISTRY.get_or_create(level, name)
}

pub fn new_named_logger_with_fields(level: LogLevel, name: &str, fields: Fields) -> Arc<Instance> {
    REGISTRY.get_or_create_with_fields(level, name, fields)
}

pub fn set_level(name: &str, level: LogLevel) -> Result<()> {
    REGISTRY.set_level(name, level)
}

pub fn list() -> HashMap<String, Arc<Instance>> {
    REGISTRY.list()
}

#[track_caller]
pub fn print(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.print(args);
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.tracef(args);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.debugf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.infof(args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.warnf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.errorf(args);
}

/// Log through the default logger, then exit with status 1
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.fatalf(args)
}

/// Log through the default logger, then panic
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.panicf(args)
}
