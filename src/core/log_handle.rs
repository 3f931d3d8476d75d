//! Per-level logging backend
//!
//! [`LogHandle`] is what a [`LevelSet`](super::LevelSet) slot holds. The
//! built-in [`Logger`](super::Logger) implements it over a formatter and a
//! stream; any other backend (a test recorder, an adapter to another logging
//! crate) can be installed for a single level.

use super::{error::Result, stream::Stream, termination::Termination};
use std::fmt;

pub trait LogHandle: Send + Sync {
    /// Write the parts separated by spaces
    #[track_caller]
    fn print(&self, parts: &[&dyn fmt::Display]);

    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>);

    /// Write, then return the termination the caller must carry out
    #[track_caller]
    fn fatal(&self, parts: &[&dyn fmt::Display]) -> Termination;

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> Termination;

    #[track_caller]
    fn panic(&self, parts: &[&dyn fmt::Display]) -> Termination;

    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) -> Termination;

    /// Stream backing this handle, if it writes to one
    fn stream(&self) -> Option<&Stream> {
        None
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
