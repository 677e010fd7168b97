//! Field Sanitization
//!
//! Coercion of untrusted Airtable field values into plain numbers and
//! strings. This is the single normalization point: every entity built by
//! the API client goes through these helpers, so nothing downstream ever
//! re-checks field types.

use serde_json::Value;

/// Coerce a field to a number. Missing, null, or non-numeric values
/// become `0`.
pub fn number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Coerce a field to a string. Missing or null values become the empty
/// string; numbers and booleans take their display form; composite values
/// are treated as absent.
pub fn string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a field to a string with a fallback. Missing, null, or empty
/// values take the default, mirroring the `field || default` idiom of the
/// source data layer.
pub fn string_or(value: Option<&Value>, default: &str) -> String {
    let s = string(value);
    if s.is_empty() {
        default.to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_malformed_inputs_yield_zero() {
        assert_eq!(number(None), 0.0);
        assert_eq!(number(Some(&Value::Null)), 0.0);
        assert_eq!(number(Some(&json!("not a number"))), 0.0);
        assert_eq!(number(Some(&json!({"nested": 1}))), 0.0);
        assert_eq!(number(Some(&json!([1, 2]))), 0.0);
    }

    #[test]
    fn test_number_valid_inputs() {
        assert_eq!(number(Some(&json!(7.5))), 7.5);
        assert_eq!(number(Some(&json!(-3))), -3.0);
        assert_eq!(number(Some(&json!("12.5"))), 12.5);
        assert_eq!(number(Some(&json!(" 42 "))), 42.0);
        assert_eq!(number(Some(&json!(true))), 1.0);
        assert_eq!(number(Some(&json!(""))), 0.0);
    }

    #[test]
    fn test_string_missing_yields_empty() {
        assert_eq!(string(None), "");
        assert_eq!(string(Some(&Value::Null)), "");
        assert_eq!(string(Some(&json!({"a": 1}))), "");
    }

    #[test]
    fn test_string_scalar_forms() {
        assert_eq!(string(Some(&json!("Finance"))), "Finance");
        assert_eq!(string(Some(&json!(5))), "5");
        assert_eq!(string(Some(&json!(5.5))), "5.5");
        assert_eq!(string(Some(&json!(true))), "true");
    }

    #[test]
    fn test_string_or_defaults() {
        assert_eq!(string_or(None, "OK"), "OK");
        assert_eq!(string_or(Some(&Value::Null), "N/A"), "N/A");
        assert_eq!(string_or(Some(&json!("")), "Not Started"), "Not Started");
        assert_eq!(string_or(Some(&json!("Alert")), "OK"), "Alert");
    }
}
