//! Schema variants and their kind-specific checks
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::Schema;
use crate::validation::base::{field_label, index_label};
use crate::value::Value;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Field-schema map of an object schema, keyed by field name
pub type Fields = BTreeMap<String, Schema>;

/// Custom acceptance test for [`SchemaKind::Any`]
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// What an `any` schema accepts besides absence
#[derive(Clone)]
pub enum AnyOf {
    /// Accept values for which the predicate returns true
    Predicate(Predicate),
    /// Accept values matched by at least one alternative schema
    Alternatives(Vec<Schema>),
}

impl AnyOf {
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        AnyOf::Predicate(Arc::new(predicate))
    }

    pub fn alternatives<I: IntoIterator<Item = Schema>>(alternatives: I) -> Self {
        AnyOf::Alternatives(alternatives.into_iter().collect())
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            AnyOf::Predicate(predicate) => predicate(value),
            AnyOf::Alternatives(alternatives) => {
                // A losing alternative does not report its own failure, but children of
                // a composite alternative still warn through `check_value`.
                match alternatives.iter().position(|alternative| alternative.check(value)) {
                    Some(index) => {
                        debug!(alternative = index, "value matched alternative schema");
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

impl fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyOf::Predicate(_) => f.write_str("Predicate(..)"),
            AnyOf::Alternatives(alternatives) => {
                f.debug_tuple("Alternatives").field(alternatives).finish()
            }
        }
    }
}

impl Serialize for AnyOf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnyOf::Predicate(_) => serializer.serialize_str("[Predicate]"),
            AnyOf::Alternatives(alternatives) => alternatives.serialize(serializer),
        }
    }
}

/// The closed set of schema variants
#[derive(Debug, Clone)]
pub enum SchemaKind {
    Any(Option<AnyOf>),
    /// Sequence, optionally with a schema every element must satisfy
    Array(Option<Box<Schema>>),
    Boolean,
    /// Membership in a fixed, ordered set of allowed values
    Enumeration(Vec<Value>),
    Function,
    Number,
    /// Keyed structure, optionally with a schema per declared field
    Object(Option<Fields>),
    String,
}

impl SchemaKind {
    /// Diagnostic label for this kind
    pub(crate) fn type_name(&self) -> Option<String> {
        let name = match self {
            SchemaKind::Any(_) => return None,
            SchemaKind::Array(_) => "Array",
            SchemaKind::Boolean => "Boolean",
            SchemaKind::Enumeration(values) => {
                let listed: Vec<String> = values
                    .iter()
                    .map(|value| match value {
                        Value::String(s) => s.clone(),
                        Value::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                return Some(format!("Enumeration of {}", listed.join(",")));
            }
            SchemaKind::Function => "Function",
            SchemaKind::Number => "Number",
            SchemaKind::Object(_) => "Object",
            SchemaKind::String => "String",
        };
        Some(name.to_string())
    }

    /// Kind-specific clause, applied to a present effective value.
    ///
    /// Children of composite kinds are checked through their non-strict
    /// entry point so each failing child is reported on its own.
    pub(crate) fn accepts(&self, value: &Value, label: Option<&str>) -> bool {
        match self {
            SchemaKind::Any(of_type) => of_type.as_ref().map_or(true, |of| of.accepts(value)),
            SchemaKind::Array(element) => match (value.as_array(), element) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(items), Some(element)) => {
                    let failing: Vec<usize> = items
                        .iter()
                        .enumerate()
                        .filter(|(index, item)| {
                            element.check_value_negated(item, Some(&index_label(label, *index)))
                        })
                        .map(|(index, _)| index)
                        .collect();
                    if !failing.is_empty() {
                        debug!(?failing, "array elements failed their schema");
                    }
                    failing.is_empty()
                }
            },
            SchemaKind::Boolean => value.is_boolean(),
            SchemaKind::Enumeration(values) => values.contains(value),
            SchemaKind::Function => value.is_function(),
            SchemaKind::Number => value.is_number(),
            SchemaKind::Object(fields) => match (value.as_object(), fields) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(_), Some(fields)) => {
                    let failing: Vec<&str> = fields
                        .iter()
                        .filter(|(key, schema)| {
                            schema.check_value_negated(value.field(key), Some(&field_label(label, key)))
                        })
                        .map(|(key, _)| key.as_str())
                        .collect();
                    if !failing.is_empty() {
                        debug!(?failing, "object fields failed their schema");
                    }
                    failing.is_empty()
                }
            },
            SchemaKind::String => value.is_string(),
        }
    }
}
