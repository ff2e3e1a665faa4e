//! # turnstile-schema
//!
//! The declarative rule model consumed by `turnstile-validator`.
//!
//! A rule describes one validated request field: where it lives
//! ([`ParamLocation`]), what type it must coerce to ([`ParamType`]), and,
//! for arrays and bodies, the nested shape ([`ItemRule`], [`BodySchema`]).
//! Rules are grouped per route and HTTP method in a [`RuleDocument`],
//! the shape an OpenAPI-style document is loaded into by the HTTP binding.
//!
//! This crate never performs I/O: the binding loads and deserializes the
//! document (everything here derives `serde`), calls
//! [`RuleDocument::verify`] once at load time, and hands already-resolved
//! [`Rule`]s to the engine per request.
//!
//! ## Quick Start
//!
//! ```rust
//! use turnstile_schema::{BodySchema, ParamType, Rule};
//!
//! let query_rule = Rule::query("page", ParamType::Integer);
//! let body_rule = Rule::body(
//!     BodySchema::new()
//!         .property("title", ParamType::String)
//!         .require("title"),
//! );
//!
//! assert!(query_rule.verify().is_ok());
//! assert!(body_rule.verify().is_ok());
//! ```

pub mod document;
pub mod error;
pub mod rule;

pub use document::{ParamRules, RuleDocument};
pub use error::RuleError;
pub use rule::{BodySchema, ItemRule, ParamLocation, ParamType, PropertyRule, Rule};
