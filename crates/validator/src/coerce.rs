//! Best-effort coercion of raw request values to their declared type.
//!
//! Query values (and stringly-typed body values) arrive as strings;
//! [`cast_if_needed`] converts them toward the schema-declared type
//! before the checks run. Coercion never fails: anything it cannot
//! convert falls through unchanged, and the type checks reject it with
//! the right error. Unconvertible integer strings passing through
//! unchanged is this design's rendition of a not-a-number sentinel.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};
use turnstile_schema::ParamType;

/// A trimmed string starting with `[` is treated as a stringified list.
static ARRAY_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[").expect("array-like pattern is valid"));

/// Characters stripped before splitting a stringified list on commas.
static LIST_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\[\]'"\s]"#).expect("list-syntax pattern is valid"));

/// Coerces a raw value toward the declared type.
///
/// Already-matching values come back unchanged, so coercion is
/// idempotent; re-coercing its own output is the identity.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_schema::ParamType;
/// use turnstile_validator::coerce::cast_if_needed;
///
/// assert_eq!(cast_if_needed(&json!("1"), ParamType::Integer), json!(1));
/// assert_eq!(
///     cast_if_needed(&json!(r#"["hello","hi"]"#), ParamType::Array),
///     json!(["hello", "hi"]),
/// );
/// ```
#[must_use]
pub fn cast_if_needed(value: &Value, ty: ParamType) -> Value {
    match ty {
        ParamType::Integer => coerce_integer(value),
        ParamType::Array => coerce_array(value),
        // No coercion registered for strings.
        ParamType::String => value.clone(),
    }
}

/// Parses string input as a base-10 integer; everything else passes
/// through untouched, including non-integral numbers; whether those
/// are acceptable is the integral check's call, not coercion's.
fn coerce_integer(value: &Value) -> Value {
    let Some(raw) = value.as_str() else {
        return value.clone();
    };
    parse_integer_prefix(raw).map_or_else(|| value.clone(), Value::Number)
}

/// Base-10 prefix parse: optional leading whitespace, optional sign,
/// then digits up to the first non-digit. At least one digit is
/// required; `"12abc"` parses to `12`, `"abc"` to nothing.
fn parse_integer_prefix(raw: &str) -> Option<Number> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    let digits: &str = &unsigned[..unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count()];
    if digits.is_empty() {
        return None;
    }

    let negative = trimmed.starts_with('-');
    match digits.parse::<i64>() {
        Ok(magnitude) => Some(Number::from(if negative { -magnitude } else { magnitude })),
        // Digit runs beyond i64 fall back to floating point, trading
        // precision for range the way untyped numeric parsers do.
        Err(_) => {
            let magnitude = digits.parse::<f64>().ok()?;
            Number::from_f64(if negative { -magnitude } else { magnitude })
        }
    }
}

/// Turns a stringified list (`'["a", "b"]'`) into a sequence of
/// strings. Sequences pass through; so does any string that does not
/// look array-like. Elements are not coerced here; each one is
/// coerced against the item type when it is validated.
fn coerce_array(value: &Value) -> Value {
    if value.is_array() {
        return value.clone();
    }
    let Some(raw) = value.as_str() else {
        return value.clone();
    };
    if !ARRAY_LIKE.is_match(raw) {
        return value.clone();
    }

    let stripped = LIST_SYNTAX.replace_all(raw, "");
    Value::Array(
        stripped
            .split(',')
            .map(|element| Value::String(element.to_owned()))
            .collect(),
    )
}

// ============================================================================
// TESTS
// ============================================================================
