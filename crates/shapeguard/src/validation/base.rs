//! Validation modes and path context
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// How validation failures are surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Failures are returned as errors
    Strict,
    /// Failures are logged as warnings and processing continues
    Warn,
}

/// Path of the value currently being checked, e.g. `$.servers[1].port`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    path: String,
}

impl ValidationContext {
    /// Context positioned at the document root
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Context rooted at a caller-supplied label
    pub fn labelled<L: Into<String>>(label: L) -> Self {
        Self { path: label.into() }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
        }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::root()
    }
}

/// Label for a child field: the full path when the parent was labelled,
/// otherwise the bare field name
pub(crate) fn field_label(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => ValidationContext::labelled(parent).child(key).path,
        None => key.to_string(),
    }
}

/// Label for an array element: the full path when the parent was labelled,
/// otherwise the bare index
pub(crate) fn index_label(parent: Option<&str>, index: usize) -> String {
    match parent {
        Some(parent) => ValidationContext::labelled(parent).child_index(index).path,
        None => index.to_string(),
    }
}
