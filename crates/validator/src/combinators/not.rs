//! NOT combinator - logical negation of checks.

use crate::foundation::Check;

/// Inverts a check with logical NOT.
///
/// The combined check passes exactly when the inner check fails.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::combinators::Not;
/// use turnstile_validator::foundation::Check;
/// use turnstile_validator::validators::is_empty;
///
/// let non_empty = Not::new(is_empty());
/// assert!(non_empty.check(&json!("text")));
/// assert!(!non_empty.check(&json!("")));
///
/// // Values without a length are vacuously non-empty.
/// assert!(non_empty.check(&json!(123)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<C> {
    inner: C,
}

impl<C> Not<C> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner check.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner check.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> Check for Not<C>
where
    C: Check,
{
    type Input = C::Input;

    fn check(&self, input: &Self::Input) -> bool {
        !self.inner.check(input)
    }
}
