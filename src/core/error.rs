//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// No logger registered under the requested name
    #[error("logger [{name}] not found")]
    LoggerNotFound { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a not-found error for a logger name
    pub fn not_found(name: impl Into<String>) -> Self {
        LoggerError::LoggerNotFound { name: name.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Returns true if this error reports an unknown logger name
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoggerError::LoggerNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::not_found("svc");
        assert!(matches!(err, LoggerError::LoggerNotFound { .. }));
        assert!(err.is_not_found());

        let err = LoggerError::config("LoggerConfig", "empty name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::not_found("svc");
        assert_eq!(err.to_string(), "logger [svc] not found");

        let err = LoggerError::config("LoggerConfig", "empty name");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: empty name"
        );

        let err = LoggerError::writer("stream closed");
        assert_eq!(err.to_string(), "Writer error: stream closed");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
