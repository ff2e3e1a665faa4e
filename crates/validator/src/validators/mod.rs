//! Built-in checks.
//!
//! The closed set of type checks the engine dispatches on:
//!
//! - **Numeric**: [`IsNumber`], [`IsWhole`]
//! - **String**: [`IsString`], [`IsEmpty`]
//! - **Sequence**: [`IsArray`]
//!
//! Every check takes [`serde_json::Value`], the uniform shape of
//! query and body values after coercion. The per-type check *lists*
//! (which checks run for `integer`, `string`, `array`, and which
//! [`ErrorKind`](crate::foundation::ErrorKind) each failure maps to)
//! are assembled by
//! [`Descriptor::build`](crate::descriptor::Descriptor::build).
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use turnstile_validator::prelude::*;
//!
//! // The integer check list in miniature:
//! let whole_number = is_number().and(is_whole());
//! assert!(whole_number.check(&json!(7)));
//! assert!(!whole_number.check(&json!("seven")));
//! ```

pub mod number;
pub mod sequence;
pub mod text;

pub use number::{IsNumber, IsWhole, is_number, is_whole};
pub use sequence::{IsArray, is_array};
pub use text::{IsEmpty, IsString, is_empty, is_string};
