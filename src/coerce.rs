//! Lenient integer coercion
//!
//! Page, page size and window values can arrive from query strings, config
//! files or JSON bodies. [`Coerce`] turns any of those into an `i64`, or
//! `None` when the value has no integer reading.

use serde_json::Value;

/// A value that may be read as an integer
pub trait Coerce {
    /// Integer reading of this value, if there is one
    fn coerce(&self) -> Option<i64>;
}

macro_rules! coerce_int {
    ($($t:ty),*) => {
        $(
            impl Coerce for $t {
                fn coerce(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

coerce_int!(i8, i16, i32, i64, isize);
coerce_int!(u8, u16, u32, u64, usize);

impl Coerce for f64 {
    fn coerce(&self) -> Option<i64> {
        // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound
        if self.is_finite() && *self >= i64::MIN as f64 && *self < i64::MAX as f64 {
            Some(self.trunc() as i64)
        } else {
            None
        }
    }
}

impl Coerce for f32 {
    fn coerce(&self) -> Option<i64> {
        f64::from(*self).coerce()
    }
}

impl Coerce for str {
    fn coerce(&self) -> Option<i64> {
        self.trim().parse::<i64>().ok()
    }
}

impl Coerce for String {
    fn coerce(&self) -> Option<i64> {
        self.as_str().coerce()
    }
}

impl Coerce for Value {
    fn coerce(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().and_then(|u| u.coerce()))
                .or_else(|| n.as_f64().and_then(|f| f.coerce())),
            Value::String(s) => s.coerce(),
            _ => None,
        }
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn coerce(&self) -> Option<i64> {
        self.as_ref().and_then(Coerce::coerce)
    }
}

impl<T: Coerce + ?Sized> Coerce for &T {
    fn coerce(&self) -> Option<i64> {
        (**self).coerce()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("7", Some(7); "plain digits")]
    #[test_case("  12 ", Some(12); "surrounding whitespace")]
    #[test_case("+3", Some(3); "explicit plus")]
    #[test_case("-4", Some(-4); "negative")]
    #[test_case("cheese", None; "word")]
    #[test_case("3.5", None; "decimal string")]
    #[test_case("", None; "empty")]
    fn test_coerce_str(input: &str, expected: Option<i64>) {
        assert_eq!(input.coerce(), expected);
        assert_eq!(input.to_string().coerce(), expected);
    }

    #[test]
    fn test_coerce_integers() {
        assert_eq!(5u8.coerce(), Some(5));
        assert_eq!((-5i32).coerce(), Some(-5));
        assert_eq!(10usize.coerce(), Some(10));
        assert_eq!(u64::MAX.coerce(), None);
    }

    #[test]
    fn test_coerce_floats_truncate() {
        assert_eq!(3.9f64.coerce(), Some(3));
        assert_eq!((-3.9f64).coerce(), Some(-3));
        assert_eq!(2.5f32.coerce(), Some(2));
        assert_eq!(f64::NAN.coerce(), None);
        assert_eq!(f64::INFINITY.coerce(), None);
        assert_eq!(1e30f64.coerce(), None);
    }

    #[test]
    fn test_coerce_json_values() {
        assert_eq!(json!(4).coerce(), Some(4));
        assert_eq!(json!(4.7).coerce(), Some(4));
        assert_eq!(json!("9").coerce(), Some(9));
        assert_eq!(json!("nine").coerce(), None);
        assert_eq!(json!(null).coerce(), None);
        assert_eq!(json!(true).coerce(), None);
        assert_eq!(json!([1]).coerce(), None);
        assert_eq!(json!({"page": 1}).coerce(), None);
    }

    #[test]
    fn test_coerce_option_and_refs() {
        let none: Option<i32> = None;
        assert_eq!(none.coerce(), None);
        assert_eq!(Some(2).coerce(), Some(2));
        assert_eq!((&&3i64).coerce(), Some(3));
    }
}
