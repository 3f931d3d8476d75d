//! Caller location resolution
//!
//! Every public emission method is `#[track_caller]`, so the
//! [`Location`] handed to a formatter already points at the user's call site
//! rather than at a frame inside this crate. Turning that location into the
//! `file:line` token is the one place callers may want to customize or fake,
//! so it sits behind [`CallerResolver`].

use std::fmt;
use std::panic::Location;

/// Source position of a log call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl CallerLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl From<&Location<'_>> for CallerLocation {
    fn from(site: &Location<'_>) -> Self {
        CallerLocation::new(site.file(), site.line())
    }
}

/// Resolves the call site of a log call into a [`CallerLocation`]
pub trait CallerResolver: Send + Sync {
    fn resolve(&self, site: &'static Location<'static>) -> Option<CallerLocation>;
}

/// Default resolver: reports the tracked call site
///
/// With `short_file` enabled only the file name is kept (`main.rs:12`
/// instead of `src/bin/main.rs:12`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteResolver {
    short_file: bool,
}

impl SiteResolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn short_file(mut self, enabled: bool) -> Self {
        self.short_file = enabled;
        self
    }
}

impl CallerResolver for SiteResolver {
    fn resolve(&self, site: &'static Location<'static>) -> Option<CallerLocation> {
        let file = site.file();
        let file = if self.short_file {
            file.rsplit(['/', '\\']).next().unwrap_or(file)
        } else {
            file
        };
        Some(CallerLocation::new(file, site.line()))
    }
}

/// Resolver that always reports the same location (or none at all)
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    location: Option<CallerLocation>,
}

impl FixedResolver {
    pub fn new(location: CallerLocation) -> Self {
        Self {
            location: Some(location),
        }
    }

    /// Resolver that never produces a location
    pub fn none() -> Self {
        Self { location: None }
    }
}

impl CallerResolver for FixedResolver {
    fn resolve(&self, _site: &'static Location<'static>) -> Option<CallerLocation> {
        self.location.clone()
    }
}
