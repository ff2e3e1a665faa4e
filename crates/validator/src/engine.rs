//! Request orchestration: rules × request data → error messages.
//!
//! [`check_query`] and [`check_body`] validate one rule each and return
//! raw [`Outcome`]s; [`validate_request`] dispatches every rule by
//! location, flattens the outcomes in rule order, and materializes the
//! final messages. One pass is a pure function of (request data, rule
//! set): no shared state, no I/O, cost bounded by the number of fields
//! and array elements.

use serde_json::{Map, Value};
use tracing::{debug, trace};
use turnstile_schema::{BodySchema, ParamLocation, Rule, RuleError};

use crate::descriptor::Descriptor;
use crate::foundation::{ErrorKind, ValidationError, ValidationErrors};
use crate::outcome::{Outcome, run};
use crate::value;

// ============================================================================
// REQUEST DATA
// ============================================================================

/// The request-like input contract of the engine.
///
/// The HTTP binding adapts its framework's request to this shape:
/// query parameters as a key→value map (values may be pre-split into
/// arrays or left as strings) and the JSON body as-is (`Null` when
/// absent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestData {
    /// Query parameters by name.
    pub query: Map<String, Value>,
    /// Parsed JSON body; `Null` when the request carries none.
    pub body: Value,
}

impl RequestData {
    /// Creates an empty request (no query parameters, no body).
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: Map::new(),
            body: Value::Null,
        }
    }

    /// Sets the body.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Adds one query parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_query(mut self, name: impl Into<String>, value: Value) -> Self {
        self.query.insert(name.into(), value);
        self
    }
}

// ============================================================================
// QUERY ORCHESTRATOR
// ============================================================================

/// Validates one query rule against the query map.
///
/// Query fields are implicitly optional: a key that is absent from the
/// map, or explicitly `null`, produces no errors. Presence is decided
/// by key membership, so provided-but-falsy values like `0` and `""`
/// are still validated.
pub fn check_query(query: &Map<String, Value>, rule: &Rule) -> Result<Vec<Outcome>, RuleError> {
    let Some(raw) = value::present(query.get(&rule.name)) else {
        return Ok(Vec::new());
    };
    let ty = rule
        .ty
        .ok_or_else(|| RuleError::MissingType(rule.name.clone()))?;

    trace!(field = %rule.name, %ty, "checking query field");
    let descriptor = Descriptor::build(rule.location, &rule.name, ty, rule.items.as_ref(), raw)?;
    Ok(run(&descriptor))
}

// ============================================================================
// BODY ORCHESTRATOR
// ============================================================================

/// Validates one body rule against the request body.
///
/// An empty body (absent, `null`, `{}`, or not an object) yields one
/// required-field error per `schema.required` entry and nothing else.
/// Otherwise every body entry is either validated against its property
/// rule or flagged as not relevant, and the outcomes are concatenated
/// in the fixed order: non-relevant, required, per-field validation.
pub fn check_body(body: &Value, rule: &Rule) -> Result<Vec<Outcome>, RuleError> {
    let schema = rule
        .schema
        .as_ref()
        .ok_or_else(|| RuleError::MissingSchema(rule.name.clone()))?;

    if value::is_empty_body(body) {
        return Ok(missing_required(schema, rule.location, |_| true));
    }
    // is_empty_body only lets non-empty objects through.
    let Some(entries) = body.as_object() else {
        return Ok(Vec::new());
    };

    let required = missing_required(schema, rule.location, |name| {
        value::is_nil(entries.get(name))
    });

    let mut non_relevant = Vec::new();
    let mut field_outcomes = Vec::new();
    for (key, raw) in entries {
        match schema.properties.get(key) {
            None => {
                trace!(field = %key, "body field not in schema");
                non_relevant.push(Outcome::Failed(ValidationError::new(
                    ErrorKind::NotRelevant,
                    format!("{}.{}", rule.location, key),
                )));
            }
            Some(property) => {
                trace!(field = %key, ty = %property.ty, "checking body field");
                let descriptor = Descriptor::build(
                    rule.location,
                    key,
                    property.ty,
                    property.items.as_ref(),
                    raw,
                )?;
                field_outcomes.extend(run(&descriptor));
            }
        }
    }

    let mut outcomes = non_relevant;
    outcomes.extend(required);
    outcomes.extend(field_outcomes);
    Ok(outcomes)
}

/// One required-field failure per `required` name matching the filter,
/// in declaration order.
fn missing_required(
    schema: &BodySchema,
    location: ParamLocation,
    mut is_missing: impl FnMut(&str) -> bool,
) -> Vec<Outcome> {
    schema
        .required
        .iter()
        .map(String::as_str)
        .filter(|name| is_missing(name))
        .map(|name| {
            Outcome::Failed(ValidationError::new(
                ErrorKind::RequiredField,
                format!("{location}.{name}"),
            ))
        })
        .collect()
}

// ============================================================================
// TOP-LEVEL ORCHESTRATOR
// ============================================================================

/// Validates a request against an ordered rule set.
///
/// Rules are dispatched by location, outcomes concatenated in rule
/// order, passes discarded, and the surviving failures materialized
/// into their final messages, in that same order. An empty result
/// means the request may proceed.
///
/// Malformed rules surface as [`RuleError`]; verifying the rule
/// document at load time keeps that path unreachable here.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use turnstile_validator::prelude::*;
///
/// let rules = [Rule::query("page", ParamType::Integer)];
/// let request = RequestData::new().with_query("page", json!("oops"));
///
/// let errors = validate_request(&request, &rules)?;
/// assert_eq!(errors, vec!["query.page is not a valid number".to_owned()]);
/// # Ok::<(), turnstile_schema::RuleError>(())
/// ```
pub fn validate_request(request: &RequestData, rules: &[Rule]) -> Result<Vec<String>, RuleError> {
    let mut outcomes = Vec::new();
    for rule in rules {
        let ruled = match rule.location {
            ParamLocation::Query => check_query(&request.query, rule)?,
            ParamLocation::Body => check_body(&request.body, rule)?,
        };
        outcomes.extend(ruled);
    }

    let mut errors = ValidationErrors::new();
    for outcome in outcomes {
        outcome.flatten_into(&mut errors);
    }
    debug!(rules = rules.len(), errors = errors.len(), "request validated");
    Ok(errors.into_messages())
}

// ============================================================================
// TESTS
// ============================================================================
