//! Configuration errors for malformed rule documents.
//!
//! These are programmer/config errors, not validation failures: a rule
//! that references no type, a body rule without a schema, an array rule
//! without an item type. The engine propagates them instead of guessing;
//! [`crate::RuleDocument::verify`] rejects the same documents at load
//! time so this class never surfaces at request time.

use thiserror::Error;

/// A structural defect in a rule or rule document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A query rule declares no parameter type.
    #[error("rule `{0}` declares no parameter type")]
    MissingType(String),

    /// A body rule carries no schema to validate against.
    #[error("body rule `{0}` has no schema")]
    MissingSchema(String),

    /// An array rule declares no item type.
    #[error("array rule `{0}` declares no item type")]
    MissingItems(String),

    /// An array rule nests arrays; only one level of array-of-primitive
    /// is supported.
    #[error("array rule `{0}` nests array items, which is not supported")]
    NestedArrayItems(String),
}
