//! Sequence checks.

use serde_json::Value;

use crate::foundation::Check;

/// Checks that a value is a JSON array.
///
/// Per-element validation is a separate, structural concern (see
/// [`items`](crate::items)); this check owns only the "is it a
/// sequence at all" failure.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::foundation::Check;
/// use turnstile_validator::validators::is_array;
///
/// assert!(is_array().check(&json!(["a", "b"])));
/// assert!(!is_array().check(&json!("a,b")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsArray;

impl Check for IsArray {
    type Input = Value;

    fn check(&self, input: &Value) -> bool {
        input.is_array()
    }
}

/// Creates an [`IsArray`] check.
#[must_use]
pub fn is_array() -> IsArray {
    IsArray
}
