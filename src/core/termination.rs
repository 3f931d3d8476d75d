//! Termination side effects of fatal and panic log calls
//!
//! Fatal and panic calls always write their line first. What happens next is
//! returned as a [`Termination`] so the caller decides when and how to carry
//! it out.

/// Exit status used by fatal log calls
pub const FATAL_EXIT_CODE: i32 = 1;

#[must_use = "a fatal or panic log call does nothing further unless the termination is triggered"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Ordinary log call, nothing to do
    None,
    /// Exit the process with the given status
    ExitProcess(i32),
    /// Unwind the current thread with the given message
    UnrecoverablePanic(String),
}

impl Termination {
    pub fn is_none(&self) -> bool {
        matches!(self, Termination::None)
    }

    /// Carry out the termination.
    ///
    /// Returns normally only for [`Termination::None`].
    pub fn trigger(self) {
        match self {
            Termination::None => {}
            Termination::ExitProcess(code) => std::process::exit(code),
            Termination::UnrecoverablePanic(message) => panic!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_returns() {
        let termination = Termination::None;
        assert!(termination.is_none());
        termination.trigger();
    }

    #[test]
    #[should_panic(expected = "disk on fire")]
    fn test_panic_unwinds_with_message() {
        Termination::UnrecoverablePanic("disk on fire".to_string()).trigger();
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(Termination::ExitProcess(FATAL_EXIT_CODE), Termination::ExitProcess(1));
        assert!(!Termination::ExitProcess(1).is_none());
    }
}
