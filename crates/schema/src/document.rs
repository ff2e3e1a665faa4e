//! The rule-document shape the HTTP binding loads rules from.
//!
//! A [`RuleDocument`] is `route path → lowercase method → rule lists`,
//! the shape an OpenAPI-style document distills to once per-route
//! parameter definitions are grouped by location. The binding resolves
//! `(path, method)` to a [`ParamRules`] before invoking the engine; a
//! missing entry means the route is unvalidated, or unknown; that
//! distinction is the binding's call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::rule::Rule;

// ============================================================================
// PARAM RULES
// ============================================================================

/// The rules of one route+method, grouped by parameter location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamRules {
    /// Body rules, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Rule>,
    /// Query rules, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<Rule>,
}

impl ParamRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates all rules: body rules first, then query rules, each in
    /// declaration order. This is the order errors are reported in.
    pub fn all(&self) -> impl Iterator<Item = &Rule> {
        self.body.iter().chain(self.query.iter())
    }

    /// Returns true when no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.query.is_empty()
    }

    /// Checks every rule for structural defects.
    pub fn verify(&self) -> Result<(), RuleError> {
        self.all().try_for_each(Rule::verify)
    }
}

// ============================================================================
// RULE DOCUMENT
// ============================================================================

/// Route path → lowercase HTTP method → [`ParamRules`].
///
/// Route and method order is preserved so diagnostics and serialization
/// match the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleDocument {
    routes: IndexMap<String, IndexMap<String, ParamRules>>,
}

impl RuleDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rules of one route+method. The method is stored
    /// lowercased.
    #[must_use = "builder methods must be chained or built"]
    pub fn route(
        mut self,
        path: impl Into<String>,
        method: impl AsRef<str>,
        rules: ParamRules,
    ) -> Self {
        self.routes
            .entry(path.into())
            .or_default()
            .insert(method.as_ref().to_ascii_lowercase(), rules);
        self
    }

    /// Looks up the rules for a route+method. The method is matched
    /// case-insensitively against the document's lowercase keys.
    #[must_use]
    pub fn rules_for(&self, path: &str, method: &str) -> Option<&ParamRules> {
        self.routes
            .get(path)?
            .get(&method.to_ascii_lowercase())
    }

    /// Iterates `(path, method, rules)` entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &ParamRules)> {
        self.routes.iter().flat_map(|(path, methods)| {
            methods
                .iter()
                .map(move |(method, rules)| (path.as_str(), method.as_str(), rules))
        })
    }

    /// Verifies every rule in the document.
    ///
    /// Run once at load time so malformed rules never reach the engine
    /// at request time.
    pub fn verify(&self) -> Result<(), RuleError> {
        self.entries()
            .try_for_each(|(_, _, rules)| rules.verify())
    }
}

// ============================================================================
// TESTS
// ============================================================================
