//! The per-field rule model.
//!
//! A [`Rule`] is one validated field of a request. Query rules carry a
//! [`ParamType`] directly (plus an [`ItemRule`] for arrays); body rules
//! carry a [`BodySchema`] mapping field names to [`PropertyRule`]s with
//! an ordered `required` list. The supported type set is closed: the
//! engine dispatches on [`ParamType`] with a `match`, never a registry.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;

// ============================================================================
// PARAM LOCATION
// ============================================================================

/// Where a validated field lives in the request.
///
/// The lowercase name doubles as the error-path prefix (`body.title`,
/// `query.page[2]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// A field of the JSON request body.
    Body,
    /// A query-string parameter.
    Query,
}

impl ParamLocation {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamLocation::Body => "body",
            ParamLocation::Query => "query",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARAM TYPE
// ============================================================================

/// The closed set of schema-declared parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// A whole number; string input is coerced by base-10 prefix parsing.
    Integer,
    /// A non-empty piece of text.
    String,
    /// A sequence of scalar items; stringified lists are coerced.
    Array,
}

impl ParamType {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::String => "string",
            ParamType::Array => "array",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ITEM AND PROPERTY RULES
// ============================================================================

/// Element type of an array rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRule {
    /// Scalar type every element must satisfy.
    #[serde(rename = "type")]
    pub ty: ParamType,
}

impl ItemRule {
    /// Creates an item rule for the given element type.
    #[must_use]
    pub const fn new(ty: ParamType) -> Self {
        Self { ty }
    }
}

/// One body field's rule inside a [`BodySchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRule {
    /// Declared type of the field.
    #[serde(rename = "type")]
    pub ty: ParamType,
    /// Element type, when `ty` is [`ParamType::Array`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemRule>,
}

impl PropertyRule {
    /// Creates a scalar property rule.
    #[must_use]
    pub const fn new(ty: ParamType) -> Self {
        Self { ty, items: None }
    }

    /// Creates an array property rule with the given element type.
    #[must_use]
    pub const fn array(item_ty: ParamType) -> Self {
        Self {
            ty: ParamType::Array,
            items: Some(ItemRule::new(item_ty)),
        }
    }
}

// ============================================================================
// BODY SCHEMA
// ============================================================================

/// The flat object schema a request body validates against.
///
/// `properties` preserves declaration order; `required` is an ordered
/// sequence of names that must be present and non-nil. Any body key not
/// in `properties` is flagged as not relevant, regardless of its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodySchema {
    /// Field name → rule for every recognized body field.
    #[serde(default)]
    pub properties: IndexMap<String, PropertyRule>,
    /// Names that must be present, in reporting order.
    #[serde(default)]
    pub required: Vec<String>,
}

impl BodySchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar property.
    #[must_use = "builder methods must be chained or built"]
    pub fn property(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.properties.insert(name.into(), PropertyRule::new(ty));
        self
    }

    /// Adds an array property with the given element type.
    #[must_use = "builder methods must be chained or built"]
    pub fn array_property(mut self, name: impl Into<String>, item_ty: ParamType) -> Self {
        self.properties
            .insert(name.into(), PropertyRule::array(item_ty));
        self
    }

    /// Marks a field name as required.
    #[must_use = "builder methods must be chained or built"]
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One validated request field.
///
/// The wire shape follows OpenAPI-style parameter objects: `in` and
/// `name` always, `type`/`items` for query fields, `schema` for bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Where the field lives.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Field key (for bodies, conventionally `"body"`).
    pub name: String,
    /// Declared type; required for query rules.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<ParamType>,
    /// Element type, when `ty` is [`ParamType::Array`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemRule>,
    /// Body schema; required for body rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<BodySchema>,
}

impl Rule {
    /// Creates a scalar query rule.
    #[must_use]
    pub fn query(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            location: ParamLocation::Query,
            name: name.into(),
            ty: Some(ty),
            items: None,
            schema: None,
        }
    }

    /// Creates an array query rule with the given element type.
    #[must_use]
    pub fn query_array(name: impl Into<String>, item_ty: ParamType) -> Self {
        Self {
            location: ParamLocation::Query,
            name: name.into(),
            ty: Some(ParamType::Array),
            items: Some(ItemRule::new(item_ty)),
            schema: None,
        }
    }

    /// Creates a body rule for the given schema.
    #[must_use]
    pub fn body(schema: BodySchema) -> Self {
        Self {
            location: ParamLocation::Body,
            name: "body".to_owned(),
            ty: None,
            items: None,
            schema: Some(schema),
        }
    }

    /// Checks the rule for structural defects.
    ///
    /// Query rules must declare a type; array rules an item type; body
    /// rules a schema. Item types must be scalar.
    pub fn verify(&self) -> Result<(), RuleError> {
        match self.location {
            ParamLocation::Query => {
                let ty = self
                    .ty
                    .ok_or_else(|| RuleError::MissingType(self.name.clone()))?;
                if ty == ParamType::Array {
                    verify_items(&self.name, self.items.as_ref())?;
                }
                Ok(())
            }
            ParamLocation::Body => {
                let schema = self
                    .schema
                    .as_ref()
                    .ok_or_else(|| RuleError::MissingSchema(self.name.clone()))?;
                for (name, property) in &schema.properties {
                    if property.ty == ParamType::Array {
                        verify_items(name, property.items.as_ref())?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn verify_items(name: &str, items: Option<&ItemRule>) -> Result<(), RuleError> {
    let items = items.ok_or_else(|| RuleError::MissingItems(name.to_owned()))?;
    if items.ty == ParamType::Array {
        return Err(RuleError::NestedArrayItems(name.to_owned()));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn param_type_wire_names_round_trip() {
        for ty in [ParamType::Integer, ParamType::String, ParamType::Array] {
            let encoded = serde_json::to_value(ty).unwrap();
            assert_eq!(encoded, json!(ty.as_str()));
            let decoded: ParamType = serde_json::from_value(encoded).unwrap();
            assert_eq!(decoded, ty);
        }
    }

    #[test]
    fn rule_deserializes_openapi_parameter_shape() {
        let rule: Rule = serde_json::from_value(json!({
            "in": "query",
            "name": "tags",
            "type": "array",
            "items": { "type": "string" },
        }))
        .unwrap();

        assert_eq!(rule, Rule::query_array("tags", ParamType::String));
    }

    #[test]
    fn body_schema_preserves_property_order() {
        let schema: BodySchema = serde_json::from_value(json!({
            "properties": {
                "zebra": { "type": "string" },
                "apple": { "type": "integer" },
            },
            "required": ["zebra"],
        }))
        .unwrap();

        let names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["zebra", "apple"]);
    }

    #[test]
    fn verify_rejects_query_rule_without_type() {
        let rule: Rule =
            serde_json::from_value(json!({ "in": "query", "name": "page" })).unwrap();
        assert_eq!(rule.verify(), Err(RuleError::MissingType("page".into())));
    }

    #[test]
    fn verify_rejects_array_rule_without_items() {
        let rule: Rule = serde_json::from_value(json!({
            "in": "query",
            "name": "tags",
            "type": "array",
        }))
        .unwrap();
        assert_eq!(rule.verify(), Err(RuleError::MissingItems("tags".into())));
    }

    #[test]
    fn verify_rejects_nested_array_items() {
        let rule = Rule::query_array("grid", ParamType::Array);
        assert_eq!(
            rule.verify(),
            Err(RuleError::NestedArrayItems("grid".into()))
        );
    }

    #[test]
    fn verify_rejects_body_rule_without_schema() {
        let rule: Rule =
            serde_json::from_value(json!({ "in": "body", "name": "body" })).unwrap();
        assert_eq!(rule.verify(), Err(RuleError::MissingSchema("body".into())));
    }

    #[test]
    fn verify_accepts_array_property_with_scalar_items() {
        let rule = Rule::body(BodySchema::new().array_property("ids", ParamType::Integer));
        assert_eq!(rule.verify(), Ok(()));
    }
}
