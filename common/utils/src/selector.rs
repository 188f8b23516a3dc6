//! Key selectors for grouping
//!
//! A [`Selector`] names how an element is turned into a string key: either by
//! reading a named property or by calling a function. The variant is matched
//! once per call, not once per element.

use extkit_common::{ErrorContext, Result};
use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// Key used when the selected property does not exist on an element.
pub const UNDEFINED_KEY: &str = "undefined";

/// Either a property name or a key function.
pub enum Selector<'a, T> {
    /// Read the named field from the element's serialized form.
    ByProperty(String),
    /// Compute the key directly.
    ByFunction(Box<dyn Fn(&T) -> String + 'a>),
}

impl<'a, T> Selector<'a, T> {
    pub fn property<S: Into<String>>(name: S) -> Self {
        Selector::ByProperty(name.into())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + 'a,
    {
        Selector::ByFunction(Box::new(f))
    }
}

impl<T: Serialize> Selector<'_, T> {
    /// Resolve the key for a single element.
    pub fn key_of(&self, item: &T) -> Result<String> {
        match self {
            Selector::ByFunction(f) => Ok(f(item)),
            Selector::ByProperty(name) => property_key(item, name),
        }
    }
}

impl<T> From<&str> for Selector<'_, T> {
    fn from(name: &str) -> Self {
        Selector::property(name)
    }
}

impl<T> From<String> for Selector<'_, T> {
    fn from(name: String) -> Self {
        Selector::ByProperty(name)
    }
}

impl<T> fmt::Debug for Selector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::ByProperty(name) => f.debug_tuple("ByProperty").field(name).finish(),
            Selector::ByFunction(_) => f.write_str("ByFunction(..)"),
        }
    }
}

pub(crate) fn property_key<T: Serialize>(item: &T, name: &str) -> Result<String> {
    let value = serde_json::to_value(item)
        .with_serialization_context(|| format!("Failed to read property '{name}' of element"))?;

    Ok(match value {
        Value::Object(mut fields) => match fields.remove(name) {
            Some(field) => stringify(field),
            None => UNDEFINED_KEY.to_string(),
        },
        _ => UNDEFINED_KEY.to_string(),
    })
}

/// Stringify a JSON value the way an object key would be.
///
/// Numbers use `f64`'s `Display`, so `1.0` and `1` both become `"1"` and a
/// property key matches `score.to_string()`.
pub fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        Value::Number(n) => number_key(&n),
        other => other.to_string(),
    }
}

fn number_key(n: &Number) -> String {
    if let Some(int) = n.as_i64() {
        int.to_string()
    } else if let Some(uint) = n.as_u64() {
        uint.to_string()
    } else if let Some(float) = n.as_f64() {
        float.to_string()
    } else {
        n.to_string()
    }
}
