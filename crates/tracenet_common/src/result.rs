//! Common result and error types for the tracenet workspace.

/// The result type for fallible internal operations.
///
/// Structural defects in a design are never an `Err`: they are reported
/// through the diagnostic sink and the run carries on. `Err` means the tool
/// itself could not continue.
pub type TraceResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug or an unusable environment, not a
/// problem in the design being inspected.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<std::io::Error> for InternalError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: format!("report write failed: {err}"),
        }
    }
}
