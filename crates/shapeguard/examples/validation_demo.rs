//! Validation demonstration example
//!
//! Run with `RUST_LOG=shapeguard=warn` to see non-strict check warnings.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::json;
use shapeguard::types::{any, array, bool, fields, func, number, object, one_of, string};
use shapeguard::{validate_batch, AnyOf, Schema, ValidationConfig, Value};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Shapeguard Schema Validation Demo ===\n");

    let schema = widget_schema()?;

    demo_strict_validation(&schema);

    println!();

    demo_defaults(&schema)?;

    println!();

    demo_batch(&schema);

    Ok(())
}

fn widget_schema() -> Result<Schema, Box<dyn std::error::Error>> {
    Ok(object(
        Some(fields([
            ("id", any(Some(AnyOf::alternatives([number(false, None), string(false, None)])), false, None)),
            ("kind", one_of(json!(["button", "slider", "toggle"]), false, None)?),
            ("enabled", bool(false, Some(Value::Bool(true)))),
            ("width", number(false, Some(Value::from(120)))),
            ("tags", array(Some(string(false, None)), true, None)),
            ("on_click", func(true, None)),
        ])),
        false,
        None,
    ))
}

fn demo_strict_validation(schema: &Schema) {
    println!("--- Strict Validation ---");

    let valid = Value::from(json!({"id": 7, "kind": "button", "tags": ["primary"]}));
    println!("✅ Validating valid widget:");
    match schema.validate(&valid, Some("widget")) {
        Ok(resolved) => println!("   Valid! Resolved: {}", resolved),
        Err(e) => println!("   Error: {}", e),
    }

    let invalid = Value::from(json!({"id": 7, "kind": "dropdown"}));
    println!("\n❌ Validating invalid widget (unknown kind):");
    match schema.validate(&invalid, Some("widget")) {
        Ok(_) => println!("   Unexpectedly valid!"),
        Err(e) => println!("   Error: {}", e),
    }
}

fn demo_defaults(schema: &Schema) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Default Resolution ---");

    let sparse = Value::from(json!({"id": "w-1", "kind": "slider", "width": 0}));
    let resolved = schema.validate(&sparse, None)?;
    println!("   {} -> {}", sparse, resolved);

    Ok(())
}

fn demo_batch(schema: &Schema) {
    println!("--- Batch Validation ---");

    let widgets: Vec<Value> = vec![
        json!({"id": 1, "kind": "toggle"}).into(),
        json!({"id": true, "kind": "toggle"}).into(),
        json!({"kind": "button"}).into(),
    ];

    match validate_batch(schema, &widgets, &ValidationConfig::strict()) {
        Ok(resolved) => println!("   All {} widgets valid", resolved.len()),
        Err(errors) => println!("   {} invalid widgets:\n{}", errors.len(), errors),
    }

    if let Ok(resolved) = validate_batch(schema, &widgets, &ValidationConfig::warn()) {
        println!("   Warn mode kept {} widgets", resolved.len());
    }
}
