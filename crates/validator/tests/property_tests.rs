//! Property-based tests for turnstile-validator.

use proptest::prelude::*;
use serde_json::json;
use turnstile_validator::prelude::*;

// ============================================================================
// COERCION IDEMPOTENCE: cast(cast(x)) == cast(x)
// ============================================================================

proptest! {
    #[test]
    fn integer_coercion_is_idempotent(s in ".*") {
        let value = json!(s);
        let once = cast_if_needed(&value, ParamType::Integer);
        let twice = cast_if_needed(&once, ParamType::Integer);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn array_coercion_is_idempotent(s in ".*") {
        let value = json!(s);
        let once = cast_if_needed(&value, ParamType::Array);
        let twice = cast_if_needed(&once, ParamType::Array);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn string_coercion_is_identity(s in ".*") {
        let value = json!(s);
        prop_assert_eq!(cast_if_needed(&value, ParamType::String), value);
    }
}

// ============================================================================
// WELL-TYPED VALUES VALIDATE CLEAN
// ============================================================================

proptest! {
    #[test]
    fn any_integer_string_passes_an_integer_rule(n in any::<i64>()) {
        let rules = [Rule::query("page", ParamType::Integer)];
        let request = RequestData::new().with_query("page", json!(n.to_string()));
        prop_assert!(validate_request(&request, &rules).unwrap().is_empty());
    }

    #[test]
    fn any_non_empty_string_passes_a_string_rule(s in ".+") {
        let rules = [Rule::query("title", ParamType::String)];
        let request = RequestData::new().with_query("title", json!(s));
        prop_assert!(validate_request(&request, &rules).unwrap().is_empty());
    }

    #[test]
    fn any_integer_sequence_passes_an_integer_array_rule(ns in prop::collection::vec(any::<i64>(), 0..8)) {
        let rules = [Rule::query_array("ids", ParamType::Integer)];
        let request = RequestData::new().with_query("ids", json!(ns));
        prop_assert!(validate_request(&request, &rules).unwrap().is_empty());
    }
}

// ============================================================================
// ARRAY VALIDATION IS INDEX-PRESERVING
// ============================================================================

proptest! {
    #[test]
    fn errors_appear_exactly_at_invalid_indices(pattern in prop::collection::vec(any::<bool>(), 0..12)) {
        let elements: Vec<serde_json::Value> = pattern
            .iter()
            .map(|valid| if *valid { json!(1) } else { json!("bad") })
            .collect();
        let rules = [Rule::query_array("ids", ParamType::Integer)];
        let request = RequestData::new().with_query("ids", json!(elements));

        let errors = validate_request(&request, &rules).unwrap();
        let expected: Vec<String> = pattern
            .iter()
            .enumerate()
            .filter(|(_, valid)| !**valid)
            .map(|(i, _)| format!("query.ids[{i}] is not a valid number"))
            .collect();
        prop_assert_eq!(errors, expected);
    }
}

// ============================================================================
// RELEVANCE: ONE ERROR PER UNKNOWN KEY
// ============================================================================

proptest! {
    #[test]
    fn every_unknown_key_yields_exactly_one_relevance_error(extra in prop::collection::btree_set("[a-z]{1,8}", 0..6)) {
        let schema = BodySchema::new().property("known", ParamType::String);
        let mut body = serde_json::Map::new();
        body.insert("known".to_owned(), json!("ok"));
        for key in &extra {
            if key != "known" {
                body.insert(key.clone(), json!("whatever"));
            }
        }
        let unknown = body.len() - 1;

        let rules = [Rule::body(schema)];
        let request = RequestData::new().with_body(serde_json::Value::Object(body));
        let errors = validate_request(&request, &rules).unwrap();

        prop_assert_eq!(errors.len(), unknown);
        for error in &errors {
            prop_assert!(error.ends_with("is not relevant for this request"));
        }
    }
}

// ============================================================================
// REQUIRED FIELDS: ONE ERROR PER MISSING NAME, IN ORDER
// ============================================================================

proptest! {
    #[test]
    fn every_missing_required_name_is_reported_once_in_order(names in prop::collection::btree_set("[a-z]{1,8}", 1..6)) {
        // The digit keeps the present field out of the generated name space.
        let mut schema = BodySchema::new().property("present_0", ParamType::String);
        for name in &names {
            schema = schema.require(name.clone());
        }
        let rules = [Rule::body(schema)];
        let request = RequestData::new().with_body(json!({ "present_0": "here" }));

        let errors = validate_request(&request, &rules).unwrap();
        let expected: Vec<String> = names
            .iter()
            .map(|name| format!("body.{name} is a required field"))
            .collect();
        prop_assert_eq!(errors, expected);
    }
}
