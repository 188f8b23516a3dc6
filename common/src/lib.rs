//! Common abstractions for the extkit utility crates.
//!
//! This module provides the shared error type.

pub mod error;

pub use error::{ErrorCategory, ErrorContext, Result, UtilError};
