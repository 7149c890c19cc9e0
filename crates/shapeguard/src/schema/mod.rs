//! Schema nodes: declarative descriptions of what a valid value looks like
//!
//! A [`Schema`] combines settings shared by every node (optionality, a
//! default value, a diagnostic type label) with a [`SchemaKind`] carrying
//! the variant-specific configuration. Composite kinds (`Array`, `Object`,
//! `Any`) hold child schemas, so nodes compose into trees describing nested
//! data.
//!
//! Every check runs on the *effective value*: when the observed value is
//! falsy (see [`Value::is_falsy`]) and a default is configured, the default
//! stands in for it. The shared presence clause ("optional, or present") is
//! always evaluated before the kind-specific clause.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod kind;
pub mod types;

pub use kind::{AnyOf, Fields, Predicate, SchemaKind};

use crate::validation::error::{SchemaError, SchemaResult};
use crate::value::{Map, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

/// A composable descriptor of a value's expected shape
#[derive(Debug, Clone)]
pub struct Schema {
    kind: SchemaKind,
    optional: bool,
    default_value: Option<Value>,
    type_name: Option<String>,
}

impl Schema {
    /// Create a required schema of the given kind without a default
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            type_name: kind.type_name(),
            kind,
            optional: false,
            default_value: None,
        }
    }

    /// Allow the value to be absent
    pub fn mark_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Substitute `default_value` for absent or falsy values.
    ///
    /// A schema with a default is always optional.
    pub fn with_default<V: Into<Value>>(mut self, default_value: V) -> Self {
        self.default_value = Some(default_value.into());
        self.optional = true;
        self
    }

    /// Variant-specific configuration
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    /// Whether an absent value is accepted
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Default substituted for absent or falsy values
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Diagnostic label, e.g. `"Number"`; `None` for `any` schemas
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The value checks operate on: the default when `value` is falsy and a
    /// default is configured, `value` otherwise
    pub fn effective_value<'a>(&'a self, value: &'a Value) -> &'a Value {
        match &self.default_value {
            Some(default_value) if value.is_falsy() => default_value,
            _ => value,
        }
    }

    /// Check `value` without reporting anything.
    ///
    /// Children of composite schemas still report their own failures.
    pub fn check(&self, value: &Value) -> bool {
        self.check_labelled(value, None)
    }

    fn check_labelled(&self, value: &Value, label: Option<&str>) -> bool {
        let effective = self.effective_value(value);
        let present = self.optional || !effective.is_null();
        present && (effective.is_null() || self.kind.accepts(effective, label))
    }

    /// Strict validation: an invalid value is an error.
    ///
    /// On success the value is returned with defaults resolved.
    pub fn validate(&self, value: &Value, label: Option<&str>) -> SchemaResult<Value> {
        if !self.check_labelled(value, label) {
            return Err(self.violation(value, label));
        }
        Ok(self.resolve_default(value))
    }

    /// Non-strict check: an invalid value is logged as a warning and
    /// reported as `false`
    pub fn check_value(&self, value: &Value, label: Option<&str>) -> bool {
        let valid = self.check_labelled(value, label);
        if !valid {
            warn!(label = label.unwrap_or_default(), "{}", self.violation(value, label));
        }
        valid
    }

    /// `!check_value(..)`, for "first invalid child" searches
    pub fn check_value_negated(&self, value: &Value, label: Option<&str>) -> bool {
        !self.check_value(value, label)
    }

    /// Resolve defaults for `value`.
    ///
    /// Object schemas with a field map and no whole-object default merge
    /// per-field defaults into a copy of the value; every other schema
    /// returns the effective value.
    pub fn resolve_default(&self, value: &Value) -> Value {
        match (&self.kind, &self.default_value) {
            (SchemaKind::Object(Some(fields)), None) => {
                let mut resolved = match Value::deep_extend(&Value::Object(Map::new()), value) {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                for (key, schema) in fields {
                    if schema.default_value.is_none() {
                        continue;
                    }
                    let current = resolved.remove(key).unwrap_or_default();
                    resolved.insert(key.clone(), schema.resolve_default(&current));
                }
                Value::Object(resolved)
            }
            _ => {
                let effective = self.effective_value(value);
                if !std::ptr::eq(effective, value) {
                    debug!(type_name = ?self.type_name(), "substituted default value");
                }
                effective.clone()
            }
        }
    }

    /// Pretty JSON description of this schema, used in diagnostics
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("<unrenderable: {}>", e))
    }

    fn violation(&self, value: &Value, label: Option<&str>) -> SchemaError {
        SchemaError::violation(label, self.render(), value.to_pretty_json())
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(type_name) = &self.type_name {
            map.serialize_entry("typeName", type_name)?;
        }
        map.serialize_entry("optional", &self.optional)?;
        if let Some(default_value) = &self.default_value {
            map.serialize_entry("defaultValue", default_value)?;
        }
        match &self.kind {
            SchemaKind::Any(Some(of_type)) => map.serialize_entry("ofType", of_type)?,
            SchemaKind::Array(Some(element)) => map.serialize_entry("ofType", element)?,
            SchemaKind::Object(Some(fields)) => map.serialize_entry("ofType", fields)?,
            SchemaKind::Enumeration(values) => map.serialize_entry("values", values)?,
            _ => {}
        }
        map.end()
    }
}
