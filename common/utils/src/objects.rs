//! Keyed collection utilities for extkit
//!
//! Emptiness is decided from a value's [`Shape`]: absent values and keyed
//! collections without keys are empty, scalars never are.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde_json::{Map, Value};

/// How a value looks to [`is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Missing or null.
    Absent,
    /// A collection holding this many keys.
    Keyed(usize),
    /// Anything else. Scalars are not introspected.
    Scalar,
}

/// Types whose shape can be inspected.
pub trait Inspect {
    fn shape(&self) -> Shape;
}

/// True when `value` is absent or a keyed collection with no keys.
///
/// ```
/// use extkit_utils::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!({})));
/// assert!(is_empty(&json!(null)));
/// assert!(!is_empty(&json!({"a": 1})));
/// assert!(!is_empty(&json!(0)));
/// ```
pub fn is_empty<V: Inspect + ?Sized>(value: &V) -> bool {
    match value.shape() {
        Shape::Absent => true,
        Shape::Keyed(keys) => keys == 0,
        Shape::Scalar => false,
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape {
        self.as_ref().map_or(Shape::Absent, Inspect::shape)
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T> Inspect for [T] {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl<T> Inspect for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl Inspect for Map<String, Value> {
    fn shape(&self) -> Shape {
        Shape::Keyed(self.len())
    }
}

impl Inspect for Value {
    fn shape(&self) -> Shape {
        match self {
            Value::Null => Shape::Absent,
            Value::Object(fields) => Shape::Keyed(fields.len()),
            Value::Array(items) => Shape::Keyed(items.len()),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Inspect for $t {
                fn shape(&self) -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

impl_scalar!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64
);
