//! Named logger example
//!
//! Demonstrates the registry: idempotent creation, per-name levels, fields,
//! and a file-backed registry.
//!
//! Run with: cargo run --example named_loggers

use rust_leveled_logger as logh;
use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Named Loggers Example ===\n");

    println!("1. Same name, same logger:");
    let api = logh::new_named_logger(LogLevel::Info, "api");
    let again = logh::new_named_logger(LogLevel::Trace, "api");
    println!("   shared: {}, level: {}", Arc::ptr_eq(&api, &again), again.level_name());

    println!("\n2. Changing a level by name:");
    api.debugf(format_args!("debug (hidden)"));
    logh::set_level("api", LogLevel::Debug)?;
    api.debugf(format_args!("debug (visible)"));
    if let Err(e) = logh::set_level("missing", LogLevel::Debug) {
        println!("   expected error: {}", e);
    }

    println!("\n3. Fields:");
    let fields = Fields::new().with_field("region", "eu-west").with_field("shard", 3);
    let db = logh::new_named_logger_with_fields(LogLevel::Info, "db", fields);
    info!(db, "connected in {}ms", 12);
    warn!(db, "replica lag {}s", 4);

    println!("\n4. Registered loggers:");
    let mut names: Vec<_> = logh::list().into_keys().collect();
    names.sort();
    for name in names {
        println!("   - {}", name);
    }

    println!("\n5. File-backed registry:");
    let path = std::env::temp_dir().join("rust_leveled_logger_demo.log");
    let registry = Registry::with_output(Stream::new(FileAppender::new(&path)?));
    let jobs = registry.get_or_create(LogLevel::Info, "jobs");
    jobs.infof(format_args!("nightly export finished"));
    jobs.flush()?;
    println!("   wrote to {}", path.display());

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
