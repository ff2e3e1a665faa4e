//! Numeric checks.

use serde_json::Value;

use crate::foundation::Check;

// ============================================================================
// IS NUMBER
// ============================================================================

/// Checks that a value is a JSON number.
///
/// Strings that failed integer coercion arrive here unchanged (the
/// coercion layer's stand-in for a not-a-number sentinel) and are
/// rejected.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::foundation::Check;
/// use turnstile_validator::validators::is_number;
///
/// assert!(is_number().check(&json!(42)));
/// assert!(is_number().check(&json!(4.5)));
/// assert!(!is_number().check(&json!("42")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsNumber;

impl Check for IsNumber {
    type Input = Value;

    fn check(&self, input: &Value) -> bool {
        input.is_number()
    }
}

/// Creates an [`IsNumber`] check.
#[must_use]
pub fn is_number() -> IsNumber {
    IsNumber
}

// ============================================================================
// IS WHOLE
// ============================================================================

/// Checks that a numeric value is integral.
///
/// Integer coercion leaves already-numeric input alone, so a JSON
/// `5.5` reaches this check intact and is rejected here.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::foundation::Check;
/// use turnstile_validator::validators::is_whole;
///
/// assert!(is_whole().check(&json!(5)));
/// assert!(is_whole().check(&json!(5.0)));
/// assert!(!is_whole().check(&json!(5.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsWhole;

impl Check for IsWhole {
    type Input = Value;

    fn check(&self, input: &Value) -> bool {
        if input.is_i64() || input.is_u64() {
            return true;
        }
        input
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
    }
}

/// Creates an [`IsWhole`] check.
#[must_use]
pub fn is_whole() -> IsWhole {
    IsWhole
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn is_number_accepts_integers_and_floats() {
        assert!(is_number().check(&json!(0)));
        assert!(is_number().check(&json!(-3)));
        assert!(is_number().check(&json!(2.75)));
    }

    #[test]
    fn is_number_rejects_non_numeric_values() {
        assert!(!is_number().check(&json!("0")));
        assert!(!is_number().check(&json!(null)));
        assert!(!is_number().check(&json!([1])));
        assert!(!is_number().check(&json!(true)));
    }

    #[test]
    fn is_whole_accepts_integral_floats() {
        assert!(is_whole().check(&json!(-2)));
        assert!(is_whole().check(&json!(9.0)));
        assert!(is_whole().check(&json!(1e3)));
    }

    #[test]
    fn is_whole_rejects_fractional_and_non_numeric_values() {
        assert!(!is_whole().check(&json!(0.1)));
        assert!(!is_whole().check(&json!("5")));
    }
}
