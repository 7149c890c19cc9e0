//! Factory functions for schema nodes
//!
//! Each factory takes the variant configuration (if any), the optional flag
//! and an optional default, mirroring the builder calls on [`Schema`]:
//!
//! ```rust
//! use shapeguard::types::{fields, number, object, string};
//! use shapeguard::Value;
//! use serde_json::json;
//!
//! let point = object(
//!     Some(fields([
//!         ("x", number(false, Some(Value::from(10)))),
//!         ("label", string(true, None)),
//!     ])),
//!     false,
//!     None,
//! );
//!
//! assert!(point.check_value(&json!({"x": 5}).into(), None));
//! assert_eq!(point.resolve_default(&json!({}).into()), Value::from(json!({"x": 10})));
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::{AnyOf, Fields, Schema, SchemaKind};
use crate::validation::error::{SchemaError, SchemaResult};
use crate::value::Value;

/// Label used when rejecting the `values` argument of [`one_of`]
const VALUES_PARAMETER: &str = "Parameter \"values\"";

fn configure(schema: Schema, optional: bool, default_value: Option<Value>) -> Schema {
    let schema = if optional { schema.mark_optional() } else { schema };
    match default_value {
        Some(default_value) => schema.with_default(default_value),
        None => schema,
    }
}

/// Anything present; optionally restricted by a predicate or alternatives
pub fn any(of_type: Option<AnyOf>, optional: bool, default_value: Option<Value>) -> Schema {
    configure(Schema::new(SchemaKind::Any(of_type)), optional, default_value)
}

/// A sequence, optionally of elements matching `of_type`
pub fn array(of_type: Option<Schema>, optional: bool, default_value: Option<Value>) -> Schema {
    configure(
        Schema::new(SchemaKind::Array(of_type.map(Box::new))),
        optional,
        default_value,
    )
}

/// A boolean
pub fn bool(optional: bool, default_value: Option<Value>) -> Schema {
    configure(Schema::new(SchemaKind::Boolean), optional, default_value)
}

/// A callable [`Function`](crate::value::Function) value
pub fn func(optional: bool, default_value: Option<Value>) -> Schema {
    configure(Schema::new(SchemaKind::Function), optional, default_value)
}

/// A number
pub fn number(optional: bool, default_value: Option<Value>) -> Schema {
    configure(Schema::new(SchemaKind::Number), optional, default_value)
}

/// A keyed structure, optionally with a schema per declared field
pub fn object(of_type: Option<Fields>, optional: bool, default_value: Option<Value>) -> Schema {
    configure(Schema::new(SchemaKind::Object(of_type)), optional, default_value)
}

/// One of a fixed list of values.
///
/// Fails immediately when `values` is not an array.
pub fn one_of<V: Into<Value>>(
    values: V,
    optional: bool,
    default_value: Option<Value>,
) -> SchemaResult<Schema> {
    let values = values.into();
    let values = match array(None, false, None)
        .validate(&values, Some(VALUES_PARAMETER))
        .map_err(|e| SchemaError::InvalidEnumeration(Box::new(e)))?
    {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    Ok(configure(
        Schema::new(SchemaKind::Enumeration(values)),
        optional,
        default_value,
    ))
}

/// A string
pub fn string(optional: bool, default_value: Option<Value>) -> Schema {
    configure(Schema::new(SchemaKind::String), optional, default_value)
}

/// Build a field-schema map for [`object`]
pub fn fields<K, I>(entries: I) -> Fields
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Schema)>,
{
    entries
        .into_iter()
        .map(|(key, schema)| (key.into(), schema))
        .collect()
}
