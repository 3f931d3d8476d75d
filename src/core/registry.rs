//! Registry of named logger instances
//!
//! A [`Registry`] maps names to [`Instance`]s. Lookups take the read lock;
//! creation and level changes take the write lock. Creation re-checks under
//! the write lock, so racing first requests for one name build exactly one
//! sink and every caller gets the same instance back.
//!
//! ```
//! use rust_leveled_logger::{LogLevel, Registry, Stream};
//!
//! let (out, captured) = Stream::memory();
//! let registry = Registry::with_output(out);
//!
//! let svc = registry.get_or_create(LogLevel::Info, "svc");
//! svc.debugf(format_args!("dropped"));
//! svc.infof(format_args!("x={}", 5));
//! assert_eq!(captured.len(), 1);
//!
//! registry.set_level("svc", LogLevel::Debug).unwrap();
//! svc.debugf(format_args!("y"));
//! assert_eq!(captured.len(), 2);
//! ```

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    fields::Fields,
    formatter::Formatter,
    instance::Instance,
    log_level::LogLevel,
    sink::Sink,
    stream::Stream,
    timestamp::TimestampFormat,
};
use crate::formatters::TextFormatter;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Instance>>>,
    output: Stream,
    timestamp_format: TimestampFormat,
}

impl Registry {
    /// Registry whose instances write to standard output
    pub fn new() -> Self {
        Self::with_output(Stream::stdout())
    }

    /// Registry whose instances write to `output`
    pub fn with_output(output: Stream) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            output,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Timestamp layout for instances created from now on
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn output(&self) -> &Stream {
        &self.output
    }

    /// Return the instance registered under `name`, creating it at `level`
    /// if there is none.
    ///
    /// On a hit the existing instance is returned untouched: `level` is not
    /// applied. Use [`set_level`](Self::set_level) to change it.
    pub fn get_or_create(&self, level: LogLevel, name: &str) -> Arc<Instance> {
        self.get_or_insert_with(name, || {
            let formatter = self.text_formatter(name);
            Instance::new(name, level, self.sink(level, Arc::new(formatter)))
        })
    }

    /// Like [`get_or_create`](Self::get_or_create), attaching `fields` to every
    /// line of a newly created instance. Ignored on a hit.
    pub fn get_or_create_with_fields(&self, level: LogLevel, name: &str, fields: Fields) -> Arc<Instance> {
        self.get_or_insert_with(name, || {
            let formatter = self.text_formatter(name).with_fields(fields.clone());
            Instance::new(name, level, self.sink(level, Arc::new(formatter))).with_fields(fields)
        })
    }

    /// Create (or fetch) an instance from a configuration
    pub fn get_or_create_with_config(&self, config: &LoggerConfig) -> Result<Arc<Instance>> {
        config.validate()?;
        Ok(self.get_or_insert_with(&config.name, || {
            let mut instance = Instance::new(
                config.name.clone(),
                config.level,
                self.sink(config.level, config.formatter()),
            );
            if !config.fields.is_empty() {
                instance = instance.with_fields(config.fields.clone());
            }
            instance
        }))
    }

    pub fn get(&self, name: &str) -> Option<Arc<Instance>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Change the level of a registered instance
    ///
    /// Fails with [`LoggerError::LoggerNotFound`] and leaves the registry
    /// untouched when `name` is unknown.
    pub fn set_level(&self, name: &str, level: LogLevel) -> Result<()> {
        let loggers = self.loggers.write();
        let instance = loggers.get(name).ok_or_else(|| LoggerError::not_found(name))?;
        instance.set_level(level);
        Ok(())
    }

    /// Snapshot of all registered instances
    pub fn list(&self) -> HashMap<String, Arc<Instance>> {
        self.loggers.read().clone()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Forget every registered instance. Handles already given out keep
    /// working; the next request for a name builds a new instance.
    pub fn reset(&self) {
        self.loggers.write().clear();
    }

    fn get_or_insert_with<F>(&self, name: &str, build: F) -> Arc<Instance>
    where
        F: FnOnce() -> Instance,
    {
        {
            let loggers = self.loggers.read();
            if let Some(found) = loggers.get(name) {
                return Arc::clone(found);
            }
        }

        let mut loggers = self.loggers.write();
        let instance = loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(build()));
        Arc::clone(instance)
    }

    fn text_formatter(&self, name: &str) -> TextFormatter {
        TextFormatter::new()
            .with_label(name)
            .with_timestamp_format(self.timestamp_format.clone())
            .with_report_caller(true)
    }

    fn sink(&self, level: LogLevel, formatter: Arc<dyn Formatter>) -> Arc<Sink> {
        Arc::new(Sink::new(level, formatter, self.output.clone()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.names())
            .field("output", &self.output)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    fn registry() -> (Registry, MemoryAppender) {
        let (out, buffer) = Stream::memory();
        (Registry::with_output(out), buffer)
    }

    #[test]
    fn test_create_then_hit() {
        let (registry, _) = registry();
        let first = registry.get_or_create(LogLevel::Info, "api");
        let second = registry.get_or_create(LogLevel::Trace, "api");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(first.sink(), second.sink()));
        // the hit does not apply the requested level
        assert_eq!(second.level(), LogLevel::Info);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_names() {
        let (registry, _) = registry();
        let a = registry.get_or_create(LogLevel::Info, "a");
        let b = registry.get_or_create(LogLevel::Info, "b");
        assert!(!Arc::ptr_eq(a.sink(), b.sink()));
        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_level_unknown_name() {
        let (registry, _) = registry();
        registry.get_or_create(LogLevel::Info, "known");

        let err = registry
            .set_level("absent-name", LogLevel::Trace)
            .expect_err("unknown logger");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "logger [absent-name] not found");
        assert_eq!(registry.names(), vec!["known"]);
        assert!(!registry.contains("absent-name"));
    }

    #[test]
    fn test_set_level_updates_instance_and_sink() {
        let (registry, _) = registry();
        let svc = registry.get_or_create(LogLevel::Info, "svc");
        registry.set_level("svc", LogLevel::Error).expect("registered");
        assert_eq!(svc.level(), LogLevel::Error);
        assert_eq!(svc.sink().level(), LogLevel::Error);
    }

    #[test]
    fn test_label_is_name() {
        let (registry, buffer) = registry();
        let svc = registry.get_or_create(LogLevel::Info, "svc");
        svc.infof(format_args!("hello"));
        let line = buffer.contents();
        assert!(line.contains("[INFO] [svc] hello"), "unexpected line {:?}", line);
        assert!(line.contains("registry.rs:"), "caller missing from {:?}", line);
    }

    #[test]
    fn test_with_fields() {
        let (registry, buffer) = registry();
        let fields = Fields::new().with_field("tenant", "acme");
        let svc = registry.get_or_create_with_fields(LogLevel::Info, "svc", fields.clone());
        assert_eq!(svc.fields(), Some(&fields));

        svc.warnf(format_args!("quota"));
        assert!(buffer.contents().ends_with("quota tenant=acme"));

        // cache hit ignores the new fields
        let again = registry.get_or_create_with_fields(LogLevel::Info, "svc", Fields::new());
        assert_eq!(again.fields(), Some(&fields));
    }

    #[test]
    fn test_with_config() {
        let (registry, buffer) = registry();
        let mut config = LoggerConfig::new("cfg", LogLevel::Warn);
        config.report_caller = false;
        config.timestamp_format = TimestampFormat::Custom("TS".to_string());

        let instance = registry.get_or_create_with_config(&config).expect("valid config");
        instance.infof(format_args!("hidden"));
        instance.warnf(format_args!("shown"));
        assert_eq!(buffer.lines(), vec!["TS [WARN] [cfg] shown"]);

        let bad = LoggerConfig::new("", LogLevel::Info);
        assert!(registry.get_or_create_with_config(&bad).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_is_snapshot() {
        let (registry, _) = registry();
        registry.get_or_create(LogLevel::Info, "one");
        let snapshot = registry.list();
        registry.get_or_create(LogLevel::Info, "two");

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains_key("one"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reset() {
        let (registry, _) = registry();
        let old = registry.get_or_create(LogLevel::Info, "svc");
        registry.reset();
        assert!(registry.is_empty());

        let new = registry.get_or_create(LogLevel::Info, "svc");
        assert!(!Arc::ptr_eq(&old, &new));
    }

    #[test]
    fn test_independent_registries() {
        let (a, _) = registry();
        let (b, _) = registry();
        a.get_or_create(LogLevel::Info, "svc");
        assert!(b.get("svc").is_none());
    }
}
