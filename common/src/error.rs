//! Error handling for the extkit-common crate.

use thiserror::Error;

/// Error type shared by the extkit utility crates.
///
/// Absence of a value is never reported through this type; utilities signal
/// "nothing found" with `Option::None`. Errors are reserved for inputs a
/// utility cannot give a meaningful answer for.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Serialization failed: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Empty range: ceil({min}) is greater than floor({max})")]
    EmptyRange { min: f64, max: f64 },

    #[error("Bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("Bound {value} is outside the representable integer range")]
    OutOfRange { value: f64 },
}

/// Result type alias for utility operations.
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error category for grouping related error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller passed arguments outside the operation's domain
    Input,
    /// Converting caller data into an inspectable form failed
    DataProcessing,
}

impl UtilError {
    /// Create a serialization error with a custom message and source error.
    pub fn serialization_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn empty_range(min: f64, max: f64) -> Self {
        Self::EmptyRange { min, max }
    }

    pub fn non_finite_bound(value: f64) -> Self {
        Self::NonFiniteBound { value }
    }

    pub fn out_of_range(value: f64) -> Self {
        Self::OutOfRange { value }
    }

    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilError::SerializationError { .. } => ErrorCategory::DataProcessing,
            UtilError::EmptyRange { .. }
            | UtilError::NonFiniteBound { .. }
            | UtilError::OutOfRange { .. } => ErrorCategory::Input,
        }
    }
}

/// Context helpers for adding context to errors.
pub mod context {
    use super::*;

    /// Extension trait for adding context to Results.
    pub trait ErrorContext<T> {
        /// Wrap the error as a serialization error with the given context.
        fn with_serialization_context<F>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> String;
    }

    impl<T, E> ErrorContext<T> for std::result::Result<T, E>
    where
        E: Into<anyhow::Error>,
    {
        fn with_serialization_context<F>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> String,
        {
            self.map_err(|e| UtilError::serialization_error_with_source(f(), e.into()))
        }
    }
}

pub use context::ErrorContext;
