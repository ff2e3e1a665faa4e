//! The result processor: check results → reportable failures.
//!
//! [`run`] is the single chokepoint that converts "did it pass" into
//! "what, if anything, must be reported". Scalar checks map to
//! [`Outcome::Passed`] or [`Outcome::Failed`]; the array-items check
//! maps to [`Outcome::Nested`], one inner outcome per element. The
//! nesting is flattened explicitly by [`Outcome::flatten_into`]: order
//! in, order out.

use crate::descriptor::{Descriptor, DescriptorCheck};
use crate::foundation::{ValidationError, ValidationErrors};
use crate::items::check_items;

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of one check of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The check passed; nothing to report.
    Passed,
    /// The check failed; the error is decided but its message is not
    /// rendered until the serialization boundary.
    Failed(ValidationError),
    /// Per-element results of the array-items check.
    Nested(Vec<Outcome>),
}

impl Outcome {
    /// Returns true when nothing under this outcome failed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        match self {
            Outcome::Passed => true,
            Outcome::Failed(_) => false,
            Outcome::Nested(inner) => inner.iter().all(Outcome::is_passed),
        }
    }

    /// Flattens this outcome into an error collection, depth-first,
    /// preserving order and dropping passes.
    pub fn flatten_into(self, errors: &mut ValidationErrors) {
        match self {
            Outcome::Passed => {}
            Outcome::Failed(error) => errors.push(error),
            Outcome::Nested(inner) => {
                for outcome in inner {
                    outcome.flatten_into(errors);
                }
            }
        }
    }
}

// ============================================================================
// RUNNER
// ============================================================================

/// Runs every check of a descriptor, in list order.
///
/// Every check runs regardless of the others' results; a scalar field
/// can contribute several failures in one pass, and an array reports
/// both "not a valid array" shapes and per-element failures through the
/// same result shape.
#[must_use]
pub fn run(descriptor: &Descriptor<'_>) -> Vec<Outcome> {
    descriptor
        .checks()
        .iter()
        .map(|entry| match entry {
            DescriptorCheck::Scalar { check, kind } => {
                if check.check(descriptor.to_validate()) {
                    Outcome::Passed
                } else {
                    Outcome::Failed(descriptor.fail(*kind))
                }
            }
            DescriptorCheck::Items => Outcome::Nested(check_items(descriptor)),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use turnstile_schema::{ItemRule, ParamLocation, ParamType};

    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn scalar_checks_all_run_independently() {
        // A number under a string rule fails the string-kind check but
        // passes the emptiness check, so exactly one failure.
        let raw = json!(123);
        let descriptor =
            Descriptor::build(ParamLocation::Query, "aField", ParamType::String, None, &raw)
                .unwrap();
        assert_eq!(
            run(&descriptor),
            vec![
                Outcome::Failed(ValidationError::new(ErrorKind::NotAString, "query.aField")),
                Outcome::Passed,
            ]
        );
    }

    #[test]
    fn empty_string_fails_only_the_emptiness_check() {
        let raw = json!("");
        let descriptor =
            Descriptor::build(ParamLocation::Body, "title", ParamType::String, None, &raw)
                .unwrap();
        assert_eq!(
            run(&descriptor),
            vec![
                Outcome::Passed,
                Outcome::Failed(ValidationError::new(ErrorKind::EmptyValue, "body.title")),
            ]
        );
    }

    #[test]
    fn array_failures_nest_per_element() {
        let items = ItemRule::new(ParamType::Integer);
        let raw = json!([1, "x"]);
        let descriptor = Descriptor::build(
            ParamLocation::Query,
            "ids",
            ParamType::Array,
            Some(&items),
            &raw,
        )
        .unwrap();

        let outcomes = run(&descriptor);
        assert_eq!(outcomes[0], Outcome::Passed);
        assert_eq!(
            outcomes[1],
            Outcome::Nested(vec![
                Outcome::Passed,
                Outcome::Failed(ValidationError::new(ErrorKind::NotANumber, "query.ids[1]")),
            ])
        );
    }

    #[test]
    fn flatten_preserves_order_and_drops_passes() {
        let first = ValidationError::new(ErrorKind::NotAnArray, "query.a");
        let second = ValidationError::new(ErrorKind::NotANumber, "query.a[1]");
        let outcome = Outcome::Nested(vec![
            Outcome::Failed(first.clone()),
            Outcome::Nested(vec![Outcome::Passed, Outcome::Failed(second.clone())]),
            Outcome::Passed,
        ]);

        let mut errors = ValidationErrors::new();
        outcome.flatten_into(&mut errors);
        assert_eq!(errors.errors(), &[first, second]);
    }

    #[test]
    fn is_passed_sees_through_nesting() {
        assert!(Outcome::Nested(vec![Outcome::Passed]).is_passed());
        assert!(
            !Outcome::Nested(vec![Outcome::Failed(ValidationError::new(
                ErrorKind::NotANumber,
                "query.n",
            ))])
            .is_passed()
        );
    }
}
