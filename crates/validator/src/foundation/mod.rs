//! Core validation types and traits.
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Check`], [`CheckExt`]
//! - **Errors**: [`ErrorKind`], [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! Checks are boolean predicates composed with combinators:
//!
//! ```
//! use serde_json::json;
//! use turnstile_validator::prelude::*;
//!
//! let whole_number = is_number().and(is_whole());
//! assert!(whole_number.check(&json!(42)));
//! ```
//!
//! Error *selection* is separate from error *rendering*: a failing
//! check contributes an [`ErrorKind`], the descriptor binds the field
//! path, and [`ValidationErrors::into_messages`] materializes the final
//! strings at the serialization boundary.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ValidationError, ValidationErrors};
pub use traits::{Check, CheckExt};
