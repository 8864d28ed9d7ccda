//! Error types for taskmodel
//!
//! Uses `thiserror` for library errors.
//!
//! The error surface is deliberately tiny. Mutating a value object after
//! construction, or mutating through a shared or read-only borrow, is
//! rejected by the compiler rather than reported here; the doctests in
//! [`crate::passing`] pin that down. What remains fallible at run time is
//! the checked downcast in [`crate::boxing`] and JSON rendering in the demo
//! harness.

use thiserror::Error;

/// Result type alias for taskmodel operations
pub type TaskModelResult<T> = Result<T, TaskModelError>;

/// Main error type for taskmodel operations
#[derive(Error, Debug)]
pub enum TaskModelError {
    /// A boxed value was unboxed as the wrong type
    #[error("cannot unbox value as '{expected}' - the box holds a different type")]
    UnboxMismatch {
        /// Type name the caller asked for
        expected: &'static str,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unbox_mismatch() {
        let err = TaskModelError::UnboxMismatch { expected: "i32" };
        assert_eq!(
            err.to_string(),
            "cannot unbox value as 'i32' - the box holds a different type"
        );
    }
}
