//! Integration tests for the public rule-document API.

use pretty_assertions::assert_eq;
use serde_json::json;
use turnstile_schema::{BodySchema, ParamRules, ParamType, Rule, RuleDocument, RuleError};

#[test]
fn a_document_built_in_code_serializes_like_a_loaded_one() {
    let built = RuleDocument::new().route(
        "/articles",
        "post",
        ParamRules {
            body: vec![Rule::body(
                BodySchema::new()
                    .property("title", ParamType::String)
                    .require("title"),
            )],
            query: vec![Rule::query_array("tags", ParamType::String)],
        },
    );

    let loaded: RuleDocument = serde_json::from_value(json!({
        "/articles": {
            "post": {
                "body": [{
                    "in": "body",
                    "name": "body",
                    "schema": {
                        "properties": { "title": { "type": "string" } },
                        "required": ["title"],
                    },
                }],
                "query": [{
                    "in": "query",
                    "name": "tags",
                    "type": "array",
                    "items": { "type": "string" },
                }],
            },
        },
    }))
    .unwrap();

    assert_eq!(built, loaded);
}

#[test]
fn verify_walks_every_route_and_method() {
    let document = RuleDocument::new()
        .route(
            "/articles",
            "get",
            ParamRules {
                body: Vec::new(),
                query: vec![Rule::query("page", ParamType::Integer)],
            },
        )
        .route(
            "/articles",
            "post",
            ParamRules {
                body: vec![Rule {
                    schema: None,
                    ..Rule::body(BodySchema::new())
                }],
                query: Vec::new(),
            },
        );

    assert_eq!(
        document.verify(),
        Err(RuleError::MissingSchema("body".into()))
    );
}

#[test]
fn entries_iterate_in_document_order() {
    let document = RuleDocument::new()
        .route("/b", "get", ParamRules::new())
        .route("/a", "post", ParamRules::new())
        .route("/a", "get", ParamRules::new());

    let order: Vec<(&str, &str)> = document
        .entries()
        .map(|(path, method, _)| (path, method))
        .collect();
    assert_eq!(order, [("/b", "get"), ("/a", "post"), ("/a", "get")]);
}
