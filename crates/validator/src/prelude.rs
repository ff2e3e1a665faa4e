//! Prelude module for convenient imports.
//!
//! Provides a single `use turnstile_validator::prelude::*;` import that
//! brings in the traits, checks, engine entry points, and the rule
//! model re-exported from `turnstile-schema`.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use turnstile_validator::prelude::*;
//!
//! let rules = [Rule::query("page", ParamType::Integer)];
//! let request = RequestData::new().with_query("page", json!("3"));
//! assert!(validate_request(&request, &rules)?.is_empty());
//! # Ok::<(), turnstile_schema::RuleError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Check, CheckExt, ErrorKind, ValidationError, ValidationErrors};

// ============================================================================
// CHECKS AND COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Not};
pub use crate::validators::{
    IsArray, IsEmpty, IsNumber, IsString, IsWhole, is_array, is_empty, is_number, is_string,
    is_whole,
};

// ============================================================================
// PIPELINE: Coercion, descriptors, outcomes
// ============================================================================

pub use crate::coerce::cast_if_needed;
pub use crate::descriptor::Descriptor;
pub use crate::items::check_items;
pub use crate::outcome::{Outcome, run};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::{RequestData, check_body, check_query, validate_request};

// ============================================================================
// RULE MODEL (re-exported from turnstile-schema)
// ============================================================================

pub use turnstile_schema::{
    BodySchema, ItemRule, ParamLocation, ParamRules, ParamType, PropertyRule, Rule, RuleDocument,
    RuleError,
};
