//! Utilities module for extkit
//!
//! This module provides small, pure helpers over slices, keyed collections,
//! strings and numbers.

pub mod collections;
pub mod numbers;
pub mod objects;
pub mod selector;
pub mod strings;
pub mod traits;

pub use collections::*;
pub use numbers::*;
pub use objects::*;
pub use selector::Selector;
pub use strings::*;
pub use traits::*;

pub use extkit_common::{Result, UtilError};
