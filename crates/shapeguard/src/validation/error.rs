//! Error types for schema validation
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use thiserror::Error;

/// Errors raised by strict validation and schema construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A value did not satisfy its schema
    #[error("{}The given value is not valid. Type {schema}. Value: {value}", label_prefix(.label))]
    Violation {
        /// Caller-supplied context for the value (field name, path, ...)
        label: Option<String>,
        /// Rendered schema description
        schema: String,
        /// Rendered offending value
        value: String,
    },

    /// An enumeration schema was given something other than a list of values
    #[error("Invalid enumeration: {0}")]
    InvalidEnumeration(Box<SchemaError>),
}

fn label_prefix(label: &Option<String>) -> String {
    match label {
        Some(label) => format!("{}: ", label),
        None => String::new(),
    }
}

impl SchemaError {
    /// Create a violation error
    pub fn violation<S, V>(label: Option<&str>, schema: S, value: V) -> Self
    where
        S: Into<String>,
        V: Into<String>,
    {
        Self::Violation {
            label: label.map(str::to_string),
            schema: schema.into(),
            value: value.into(),
        }
    }

    /// Label attached to the failing value, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Violation { label, .. } => label.as_deref(),
            Self::InvalidEnumeration(inner) => inner.label(),
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Multiple errors collected during batch validation
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationErrors {
    /// Collected errors, in input order
    pub errors: Vec<SchemaError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: SchemaError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.errors.iter()
    }

    /// Ok if no errors were collected, Err otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SchemaError> for ValidationErrors {
    fn from(error: SchemaError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl From<Vec<SchemaError>> for ValidationErrors {
    fn from(errors: Vec<SchemaError>) -> Self {
        Self { errors }
    }
}
