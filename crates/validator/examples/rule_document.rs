//! Driving the engine from a rule document, the way an HTTP binding
//! does: deserialize, verify once at load time, look rules up per
//! route+method, validate.
//!
//! Run with: `cargo run --example rule_document`

use serde_json::json;
use turnstile_validator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // In production this comes off disk; loading is the binding's job.
    let document: RuleDocument = serde_json::from_value(json!({
        "/articles": {
            "post": {
                "body": [{
                    "in": "body",
                    "name": "body",
                    "schema": {
                        "properties": {
                            "title": { "type": "string" },
                            "tags": { "type": "array", "items": { "type": "string" } },
                        },
                        "required": ["title"],
                    },
                }],
                "query": [
                    { "in": "query", "name": "draft", "type": "integer" },
                ],
            },
        },
    }))?;

    // Reject malformed documents before any request sees them.
    document.verify()?;

    let Some(rules) = document.rules_for("/articles", "POST") else {
        println!("route is unvalidated");
        return Ok(());
    };
    let rules: Vec<Rule> = rules.all().cloned().collect();

    let request = RequestData::new()
        .with_body(json!({ "title": "", "tags": "[rust, http]" }))
        .with_query("draft", json!("1"));

    for error in validate_request(&request, &rules)? {
        println!("{error}");
    }

    Ok(())
}
