//! Basic usage: declare rules, validate a request, print the errors.
//!
//! Run with: `cargo run --example basic_usage`

use serde_json::json;
use turnstile_validator::prelude::*;

fn main() -> Result<(), RuleError> {
    let rules = [
        Rule::body(
            BodySchema::new()
                .property("title", ParamType::String)
                .array_property("tags", ParamType::String)
                .require("title"),
        ),
        Rule::query("page", ParamType::Integer),
    ];

    // A request a binding would hand over: the title is missing, an
    // undeclared field sneaks in, one tag is not a string, and the
    // page number does not parse.
    let request = RequestData::new()
        .with_body(json!({
            "tags": ["rust", 7],
            "author": "nobody asked",
        }))
        .with_query("page", json!("three"));

    let errors = validate_request(&request, &rules)?;
    if errors.is_empty() {
        println!("request is valid");
    } else {
        println!("rejected with {} error(s):", errors.len());
        for error in &errors {
            println!("  - {error}");
        }
    }

    Ok(())
}
