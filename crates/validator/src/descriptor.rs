//! Per-field validation descriptors.
//!
//! A [`Descriptor`] is built fresh for every (rule, raw value) pair:
//! the rendered error path, the coerced value, and the ordered check
//! list for the declared type. It lives for one validation pass and is
//! discarded; nothing is cached.
//!
//! The type dispatch is a closed `match` on [`ParamType`]; there is no
//! open registry because the supported type set is fixed and small.

use std::fmt;

use serde_json::Value;
use smallvec::{SmallVec, smallvec};
use turnstile_schema::{ItemRule, ParamLocation, ParamType, RuleError};

use crate::coerce::cast_if_needed;
use crate::foundation::{Check, CheckExt, ErrorKind, ValidationError};
use crate::outcome::Outcome;
use crate::validators::{is_array, is_empty, is_number, is_string, is_whole};

// ============================================================================
// DESCRIPTOR CHECK
// ============================================================================

/// One entry of a descriptor's check list.
pub(crate) enum DescriptorCheck {
    /// A boolean check paired with the kind reported on failure.
    Scalar {
        check: Box<dyn Check<Input = Value>>,
        kind: ErrorKind,
    },
    /// The structural per-element check of array rules. It has no kind
    /// of its own; failures are reported per element.
    Items,
}

impl DescriptorCheck {
    fn scalar(check: impl Check<Input = Value> + 'static, kind: ErrorKind) -> Self {
        DescriptorCheck::Scalar {
            check: Box::new(check),
            kind,
        }
    }
}

impl fmt::Debug for DescriptorCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorCheck::Scalar { kind, .. } => f
                .debug_struct("Scalar")
                .field("kind", kind)
                .finish_non_exhaustive(),
            DescriptorCheck::Items => f.write_str("Items"),
        }
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// The bundle built for one (rule, raw value) pair: error path, coerced
/// value, and ordered check list.
///
/// Check-list order is evaluation order, and every check runs; a field
/// can collect several errors in one pass.
#[derive(Debug)]
pub struct Descriptor<'r> {
    path: String,
    to_validate: Value,
    checks: SmallVec<[DescriptorCheck; 2]>,
    location: ParamLocation,
    name: &'r str,
    items: Option<&'r ItemRule>,
}

impl<'r> Descriptor<'r> {
    /// Builds the descriptor for a field rule.
    ///
    /// The raw value is coerced toward `ty` and the check list for the
    /// declared type is assembled:
    ///
    /// - `integer`: whole-number check, reported as [`ErrorKind::NotANumber`]
    /// - `string`: string-kind then non-empty checks, both always run
    /// - `array`: sequence-kind check, then per-element validation
    ///
    /// An array rule without an item type is a configuration error and
    /// fails fast here rather than mid-iteration.
    pub fn build(
        location: ParamLocation,
        name: &'r str,
        ty: ParamType,
        items: Option<&'r ItemRule>,
        raw: &Value,
    ) -> Result<Self, RuleError> {
        let checks: SmallVec<[DescriptorCheck; 2]> = match ty {
            ParamType::Integer => smallvec![DescriptorCheck::scalar(
                is_number().and(is_whole()),
                ErrorKind::NotANumber,
            )],
            ParamType::String => smallvec![
                DescriptorCheck::scalar(is_string(), ErrorKind::NotAString),
                DescriptorCheck::scalar(is_empty().not(), ErrorKind::EmptyValue),
            ],
            ParamType::Array => {
                if items.is_none() {
                    return Err(RuleError::MissingItems(name.to_owned()));
                }
                smallvec![
                    DescriptorCheck::scalar(is_array(), ErrorKind::NotAnArray),
                    DescriptorCheck::Items,
                ]
            }
        };

        Ok(Self {
            path: format!("{location}.{name}"),
            to_validate: cast_if_needed(raw, ty),
            checks,
            location,
            name,
            items,
        })
    }

    /// Builds the descriptor for one array element.
    ///
    /// The path is indexed by the element's original position and the
    /// check list is the scalar list for the item type. Item rules are
    /// scalar, so only the primary check of the type applies.
    pub(crate) fn for_item(
        location: ParamLocation,
        name: &'r str,
        index: usize,
        ty: ParamType,
        raw: &Value,
    ) -> Self {
        let primary = match ty {
            ParamType::Integer => {
                DescriptorCheck::scalar(is_number().and(is_whole()), ErrorKind::NotANumber)
            }
            ParamType::String => DescriptorCheck::scalar(is_string(), ErrorKind::NotAString),
            ParamType::Array => DescriptorCheck::scalar(is_array(), ErrorKind::NotAnArray),
        };

        Self {
            path: format!("{location}.{name}[{index}]"),
            to_validate: cast_if_needed(raw, ty),
            checks: smallvec![primary],
            location,
            name,
            items: None,
        }
    }

    /// Runs the primary (first) check only, as item validation does.
    pub(crate) fn primary(&self) -> Outcome {
        match self.checks.first() {
            Some(DescriptorCheck::Scalar { check, kind }) => {
                if check.check(&self.to_validate) {
                    Outcome::Passed
                } else {
                    Outcome::Failed(self.fail(*kind))
                }
            }
            // Item descriptors always carry one scalar check.
            _ => Outcome::Passed,
        }
    }

    /// Creates a failure of the given kind at this descriptor's path.
    pub(crate) fn fail(&self, kind: ErrorKind) -> ValidationError {
        ValidationError::new(kind, self.path.clone())
    }

    /// The rendered error path (`body.title`, `query.tags[2]`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The coerced value the checks run against.
    #[must_use]
    pub fn to_validate(&self) -> &Value {
        &self.to_validate
    }

    /// Where the field lives.
    #[must_use]
    pub fn location(&self) -> ParamLocation {
        self.location
    }

    /// The field key.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    /// The item rule of an array descriptor.
    #[must_use]
    pub fn items(&self) -> Option<&ItemRule> {
        self.items
    }

    pub(crate) fn checks(&self) -> &[DescriptorCheck] {
        &self.checks
    }
}

// ============================================================================
// TESTS
// ============================================================================
