//! Common traits for extkit
//!
//! This module provides traits shared by the collection utilities.

use serde_json::Value;

/// Loose truthiness, as dynamic languages define it.
///
/// `false`, zero, `NaN`, the empty string, `None` and JSON `null` are falsy.
/// Everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_truthiness() {
        assert!(true.is_truthy());
        assert!(false.is_falsy());
        assert!(0_i32.is_falsy());
        assert!((-3_i64).is_truthy());
        assert!(0.0_f64.is_falsy());
        assert!(f64::NAN.is_falsy());
        assert!(0.5_f32.is_truthy());
        assert!('\0'.is_truthy());
    }

    #[test]
    fn test_string_truthiness() {
        assert!("".is_falsy());
        assert!("0".is_truthy());
        assert!(String::new().is_falsy());
        assert!(String::from("a").is_truthy());
    }

    #[test]
    fn test_option_truthiness() {
        assert!(None::<i32>.is_falsy());
        assert!(Some(0).is_falsy());
        assert!(Some(7).is_truthy());
    }

    #[test]
    fn test_json_truthiness() {
        assert!(json!(null).is_falsy());
        assert!(json!(0).is_falsy());
        assert!(json!("").is_falsy());
        assert!(json!(false).is_falsy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
        assert!(json!(1.5).is_truthy());
    }
}
