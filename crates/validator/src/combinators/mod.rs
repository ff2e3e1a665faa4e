//! Boolean combinators for composing checks.
//!
//! The combinator set is deliberately small: [`And`] and [`Not`] are
//! all the per-type check lists need. Because checks are pure boolean
//! predicates, the combinators carry no error plumbing; the
//! descriptor pairs each composed check with its
//! [`ErrorKind`](crate::foundation::ErrorKind).
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use turnstile_validator::prelude::*;
//!
//! let whole_number = is_number().and(is_whole());
//! let non_empty = is_empty().not();
//!
//! assert!(whole_number.check(&json!(7)));
//! assert!(non_empty.check(&json!("text")));
//! ```

mod and;
mod not;

pub use and::And;
pub use not::Not;
