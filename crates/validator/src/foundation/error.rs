//! Validation failure types.
//!
//! A failure is decided in two stages: the check that fails picks an
//! [`ErrorKind`] while the descriptor binds the field path, and the
//! final client-facing string is materialized only at the boundary
//! where errors are serialized: `Display` on [`ValidationError`].

use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of validation failures.
///
/// Each kind owns its message template; the rendered message is always
/// `"<path> <template>"` and the templates are part of the public
/// contract; bindings serialize them verbatim into client responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value did not coerce to a whole number.
    NotANumber,
    /// The value is not a string.
    NotAString,
    /// The value is a string (or sequence) of zero length.
    EmptyValue,
    /// The value is not a sequence.
    NotAnArray,
    /// A required body field is missing or null.
    RequiredField,
    /// A body field is not declared in the schema.
    NotRelevant,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::NotANumber => "not_a_number",
            ErrorKind::NotAString => "not_a_string",
            ErrorKind::EmptyValue => "empty_value",
            ErrorKind::NotAnArray => "not_an_array",
            ErrorKind::RequiredField => "required_field",
            ErrorKind::NotRelevant => "not_relevant",
        }
    }

    /// The message template rendered after the field path.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            ErrorKind::NotANumber => "is not a valid number",
            ErrorKind::NotAString => "is not a valid string",
            ErrorKind::EmptyValue => "must be non empty",
            ErrorKind::NotAnArray => "is not a valid array",
            ErrorKind::RequiredField => "is a required field",
            ErrorKind::NotRelevant => "is not relevant for this request",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One validation failure, bound to the path of the offending field.
///
/// Paths are human-readable locations: `body.title`, `query.tags[2]`.
///
/// # Examples
///
/// ```
/// use turnstile_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::NotANumber, "query.page");
/// assert_eq!(error.to_string(), "query.page is not a valid number");
/// assert_eq!(error.code(), "not_a_number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    path: String,
}

impl ValidationError {
    /// Creates an error of the given kind at the given path.
    pub fn new(kind: ErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// The failure kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The path of the offending field.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Renders the final client-facing message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind.template())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// An ordered collection of validation failures for one request.
///
/// Order is reporting order: rule order first, then the fixed
/// per-rule ordering (non-relevant, required, per-field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends several errors, preserving their order.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true when no error was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Borrows the recorded errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Materializes every error into its final message, in order.
    ///
    /// This is the serialization boundary: paths are interpolated into
    /// the message templates here and nowhere earlier.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.errors
            .into_iter()
            .map(ValidationError::into_message)
            .collect()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
