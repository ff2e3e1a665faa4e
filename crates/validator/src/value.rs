//! Nil and emptiness probes over request values.
//!
//! The orchestrators decide presence with these instead of truthiness:
//! only a missing key or an explicit JSON `null` counts as absent, so
//! legitimately provided values like `0`, `""`, and `false` are still
//! validated.

use serde_json::Value;

/// Filters a lookup result down to an actually-present value.
///
/// `None` and `Some(Value::Null)` both mean "absent".
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use turnstile_validator::value::present;
///
/// let zero = json!(0);
/// assert_eq!(present(Some(&zero)), Some(&zero));
/// assert_eq!(present(Some(&Value::Null)), None);
/// assert_eq!(present(None), None);
/// ```
#[must_use]
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

/// Returns true when a lookup result is missing or `null`.
#[must_use]
pub fn is_nil(value: Option<&Value>) -> bool {
    present(value).is_none()
}

/// Returns true when a request body has no fields to validate.
///
/// An absent body (`null`), an object with no entries, and a body that
/// is not an object at all are all field-less; each takes the
/// required-only path in body validation.
#[must_use]
pub fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Object(entries) => entries.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn falsy_values_still_count_as_present() {
        let zero = json!(0);
        let empty = json!("");
        let no = json!(false);
        assert!(!is_nil(Some(&zero)));
        assert!(!is_nil(Some(&empty)));
        assert!(!is_nil(Some(&no)));
    }

    #[test]
    fn missing_and_null_count_as_nil() {
        assert!(is_nil(None));
        assert!(is_nil(Some(&Value::Null)));
    }

    #[test]
    fn only_populated_objects_are_non_empty_bodies() {
        assert!(is_empty_body(&Value::Null));
        assert!(is_empty_body(&json!({})));
        assert!(is_empty_body(&json!("not an object")));
        assert!(!is_empty_body(&json!({"field": null})));
    }
}
