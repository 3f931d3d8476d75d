//! Basic logger usage example
//!
//! Demonstrates a per-level logger table and the package-level default logger.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger as logh;
use rust_leveled_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // One logger per level; errors go to stderr, the rest to stdout
    let loggers = LevelSet::builder()
        .formatter(Arc::new(ColorFormatter::auto()))
        .build();

    println!("1. Logging at different levels:");
    loggers[LogLevel::Debug].print(&[&"debug mode"]);
    loggers[LogLevel::Trace].print(&[&"trace mode"]);
    loggers[LogLevel::Info].print(&[&"info mode"]);
    loggers[LogLevel::Warn].print(&[&"warn mode"]);
    loggers[LogLevel::Error].print(&[&"error mode"]);

    // Fatal and panic hand the termination back instead of acting on it
    let termination =
        loggers[LogLevel::Fatal].fatalf(format_args!("fatal mode (not exiting in this demo)"));
    println!("   fatal logger asked for: {:?}", termination);

    println!("\n2. The default logger:");
    logh::init("info");
    logh::debugf(format_args!("hidden at info level"));
    logh::infof(format_args!("info: {}", "success"));
    logh::warnf(format_args!("warn: {}", "wrong"));
    logh::errorf(format_args!("error: {}", "wrong"));

    loggers.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
