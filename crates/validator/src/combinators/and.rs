//! AND combinator - logical conjunction of checks.

use crate::foundation::Check;

/// Combines two checks with logical AND.
///
/// Both checks must pass for the combined check to pass; evaluation
/// stops at the first failure.
///
/// # Type Parameters
///
/// * `L` - The left (first) check type
/// * `R` - The right (second) check type
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::combinators::And;
/// use turnstile_validator::foundation::Check;
/// use turnstile_validator::validators::{is_number, is_whole};
///
/// let check = And::new(is_number(), is_whole());
/// assert!(check.check(&json!(12)));
/// assert!(!check.check(&json!(12.5)));
/// assert!(!check.check(&json!("12")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left check.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right check.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right checks.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Check for And<L, R>
where
    L: Check,
    R: Check<Input = L::Input>,
{
    type Input = L::Input;

    fn check(&self, input: &Self::Input) -> bool {
        self.left.check(input) && self.right.check(input)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::foundation::{Check, CheckExt};
    use crate::validators::{is_number, is_string, is_whole};

    #[test]
    fn passes_only_when_both_sides_pass() {
        let check = is_number().and(is_whole());
        assert!(check.check(&json!(3)));
        assert!(!check.check(&json!(3.25)));
        assert!(!check.check(&json!("3")));
    }

    #[test]
    fn chains_across_three_checks() {
        let check = is_string().and(is_string()).and(is_string());
        assert!(check.check(&json!("abc")));
        assert!(!check.check(&json!(null)));
    }
}
