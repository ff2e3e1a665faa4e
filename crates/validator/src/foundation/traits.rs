//! Core traits for the validation system.
//!
//! [`Check`] is the predicate every type check implements; [`CheckExt`]
//! layers the boolean combinators on top. A check answers only "does
//! this value satisfy me"; which [`ErrorKind`](super::ErrorKind) a
//! failure maps to is decided by the descriptor that pairs checks with
//! kinds, so combinators stay pure boolean algebra.

use crate::combinators::{And, Not};

// ============================================================================
// CHECK TRAIT
// ============================================================================

/// A boolean predicate over a borrowed input.
///
/// Checks are generic over their input type; every built-in check uses
/// [`serde_json::Value`], the uniform representation of query and body
/// values.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use turnstile_validator::foundation::Check;
///
/// struct LongerThan(usize);
///
/// impl Check for LongerThan {
///     type Input = Value;
///
///     fn check(&self, input: &Value) -> bool {
///         input.as_str().is_some_and(|s| s.len() > self.0)
///     }
/// }
///
/// assert!(LongerThan(3).check(&json!("hello")));
/// assert!(!LongerThan(3).check(&json!("hi")));
/// ```
pub trait Check {
    /// The type of input being checked.
    ///
    /// Use `?Sized` inputs like `str` for checks over borrowed text.
    type Input: ?Sized;

    /// Returns true when the input satisfies this check.
    fn check(&self, input: &Self::Input) -> bool;
}

// ============================================================================
// CHECK EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for checks.
///
/// Automatically implemented for every [`Check`], giving a fluent API
/// for composing predicates.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::prelude::*;
///
/// let whole_number = is_number().and(is_whole());
/// assert!(whole_number.check(&json!(7)));
/// assert!(!whole_number.check(&json!(7.5)));
///
/// let non_empty = is_empty().not();
/// assert!(non_empty.check(&json!("text")));
/// assert!(!non_empty.check(&json!("")));
/// ```
pub trait CheckExt: Check + Sized {
    /// Combines two checks with logical AND.
    ///
    /// Both checks must pass; evaluation stops at the first failure.
    fn and<C>(self, other: C) -> And<Self, C>
    where
        C: Check<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Inverts a check with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<C: Check> CheckExt for C {}
