//! # turnstile-validator
//!
//! The Turnstile request validation engine: validates query parameters
//! and JSON bodies against declarative rules and produces a flat,
//! ordered list of client-facing error messages.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use turnstile_validator::prelude::*;
//!
//! let rules = [
//!     Rule::body(
//!         BodySchema::new()
//!             .property("title", ParamType::String)
//!             .require("title"),
//!     ),
//!     Rule::query("page", ParamType::Integer),
//! ];
//!
//! let request = RequestData::new()
//!     .with_body(json!({ "title": "hello", "extra": true }))
//!     .with_query("page", json!("2"));
//!
//! let errors = validate_request(&request, &rules)?;
//! assert_eq!(errors, vec!["body.extra is not relevant for this request".to_owned()]);
//! # Ok::<(), turnstile_schema::RuleError>(())
//! ```
//!
//! ## Pipeline
//!
//! Raw values flow through four stages, each its own module:
//!
//! 1. [`coerce`]: best-effort conversion toward the declared type
//!    (query values arrive as strings).
//! 2. [`descriptor`]: the per-(rule, value) bundle of error path, coerced
//!    value, ordered check list from the closed [`validators`] set.
//! 3. [`outcome`]: runs the checks and converts pass/fail into
//!    deferred, path-bound errors; array rules nest per-element results
//!    from [`items`].
//! 4. [`engine`]: orchestrates rules across a request and materializes
//!    messages at the serialization boundary.
//!
//! The engine is pure and synchronous: one pass is a function of
//! (request data, rule set) with no shared state, no I/O, and
//! input-proportional cost. Concurrent requests need no locking.
//!
//! Malformed rules (a query rule without a type, an array rule without
//! an item type, a body rule without a schema) are configuration
//! errors, reported as [`turnstile_schema::RuleError`]; verify rule
//! documents at load time with
//! [`RuleDocument::verify`](turnstile_schema::RuleDocument::verify) to
//! keep that class unreachable at request time.

pub mod coerce;
pub mod combinators;
pub mod descriptor;
pub mod engine;
pub mod foundation;
pub mod items;
pub mod outcome;
pub mod prelude;
pub mod validators;
pub mod value;

pub use engine::{RequestData, validate_request};
pub use foundation::{ErrorKind, ValidationError, ValidationErrors};
