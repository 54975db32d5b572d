//! Coercion of JSON values into numbers
//!
//! Clients send numbers either as JSON numbers or as numeric strings
//! ("1500", " 12.5 "). Both are accepted; booleans, arrays, objects and
//! non-numeric strings are rejected with the offending field named.

use crate::error::ValidationError;
use serde_json::Value;

/// Coerce a JSON value into a finite `f64`
pub fn coerce_number(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(ValidationError::NotFinite(field)),
        None => Err(ValidationError::NotNumeric { field, value: value.to_string() }),
    }
}

/// Coerce a JSON value into a whole number.
/// `12` and `12.0` are accepted, `12.5` is not.
pub fn coerce_integer(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
    }
    if let Value::String(s) = value {
        if let Ok(i) = s.trim().parse::<i64>() {
            return Ok(i);
        }
    }

    let number = coerce_number(field, value)?;
    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
        return Err(ValidationError::NotInteger { field, value: value.to_string() });
    }
    Ok(number as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(coerce_number("x", &json!(1500)), Ok(1500.0));
        assert_eq!(coerce_number("x", &json!(12.5)), Ok(12.5));
        assert_eq!(coerce_number("x", &json!(" 99.9 ")), Ok(99.9));
        assert_eq!(coerce_number("x", &json!("-3")), Ok(-3.0));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for bad in [json!("abc"), json!(true), json!(null), json!([1]), json!({"v": 1}), json!("")] {
            assert!(matches!(
                coerce_number("target_amount", &bad),
                Err(ValidationError::NotNumeric { field: "target_amount", .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_strings() {
        assert_eq!(coerce_number("x", &json!("inf")), Err(ValidationError::NotFinite("x")));
        assert_eq!(coerce_number("x", &json!("NaN")), Err(ValidationError::NotFinite("x")));
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce_integer("months_left", &json!(24)), Ok(24));
        assert_eq!(coerce_integer("months_left", &json!(-5)), Ok(-5));
        assert_eq!(coerce_integer("months_left", &json!(6.0)), Ok(6));
        assert_eq!(coerce_integer("months_left", &json!("18")), Ok(18));
        assert_eq!(coerce_integer("months_left", &json!("18.0")), Ok(18));
        assert!(matches!(
            coerce_integer("months_left", &json!(6.5)),
            Err(ValidationError::NotInteger { field: "months_left", .. })
        ));
        assert!(matches!(
            coerce_integer("months_left", &json!("soon")),
            Err(ValidationError::NotNumeric { .. })
        ));
    }
}
