//! Tests for the package-level default logger
//!
//! Kept in their own binary because `init` changes process-wide state.

use rust_leveled_logger as logh;
use rust_leveled_logger::{LogLevel, DEFAULT_LOGGER_NAME};
use std::sync::Arc;

#[test]
fn test_default_logger_lifecycle() {
    let default = logh::default_logger();
    assert_eq!(default.name(), DEFAULT_LOGGER_NAME);
    assert_eq!(default.level(), LogLevel::Debug);
    assert!(logh::list().contains_key(DEFAULT_LOGGER_NAME));

    logh::init("warn");
    assert_eq!(default.level(), LogLevel::Warn);
    assert_eq!(default.sink().level(), LogLevel::Warn);

    logh::init("trace");
    assert_eq!(default.level(), LogLevel::Trace);

    logh::init("nonsense");
    assert_eq!(default.level(), LogLevel::Debug);

    // set_level by name reaches the same instance
    logh::set_level(DEFAULT_LOGGER_NAME, LogLevel::Error).expect("default is registered");
    assert_eq!(default.level(), LogLevel::Error);
    logh::init("debug");

    logh::infof(format_args!("facade info {}", 1));
    logh::errorf(format_args!("facade error {}", 2));
}

#[test]
fn test_named_loggers_through_facade() {
    let fields = logh::Fields::new().with_field("component", "cache");
    let cache = logh::new_named_logger_with_fields(LogLevel::Info, "facade-cache", fields);
    let again = logh::new_named_logger(LogLevel::Trace, "facade-cache");

    assert!(Arc::ptr_eq(&cache, &again));
    assert_eq!(again.level_name(), "Info");
    assert!(again.fields().is_some());

    let err = logh::set_level("facade-missing", LogLevel::Info).unwrap_err();
    assert_eq!(err.to_string(), "logger [facade-missing] not found");
}

#[test]
fn test_facade_panicf_unwinds() {
    let result = std::panic::catch_unwind(|| {
        logh::panicf(format_args!("facade panic {}", 3));
    });
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("facade panic 3"));
}
