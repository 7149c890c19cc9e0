//! Validation support: errors, modes, path context and batch validation
//!
//! Single values are validated through [`Schema::validate`] (strict) or
//! [`Schema::check_value`] (non-strict). This module adds configuration for
//! validating many values against one schema:
//!
//! - **Strict**: every failing value becomes an error
//! - **Warn**: failing values are logged and passed through
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;

// Re-export commonly used types
pub use base::{ValidationContext, ValidationMode};
pub use error::{SchemaError, SchemaResult, ValidationErrors};

use crate::schema::Schema;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Validation configuration for batch operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validation mode to use
    pub mode: ValidationMode,
    /// Whether to stop on first error or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration for strict validation
    pub fn strict() -> Self {
        Self::default()
    }

    /// Create a configuration that only warns about invalid values
    pub fn warn() -> Self {
        Self {
            mode: ValidationMode::Warn,
            ..Self::default()
        }
    }

    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Validate every value in `values` against `schema`.
///
/// Returns the values with defaults resolved. In strict mode failing values
/// are collected as errors labelled with their index (`$[i]`); in warn mode
/// they are logged and kept.
pub fn validate_batch(
    schema: &Schema,
    values: &[Value],
    config: &ValidationConfig,
) -> Result<Vec<Value>, ValidationErrors> {
    let context = ValidationContext::root();
    let mut resolved = Vec::with_capacity(values.len());
    let mut errors = ValidationErrors::new();

    for (i, value) in values.iter().enumerate() {
        let item_context = context.child_index(i);
        let label = Some(item_context.path());

        match config.mode {
            ValidationMode::Warn => {
                schema.check_value(value, label);
                resolved.push(schema.resolve_default(value));
            }
            ValidationMode::Strict => match schema.validate(value, label) {
                Ok(value) => resolved.push(value),
                Err(error) => {
                    errors.add(error);

                    if config.fail_fast {
                        break;
                    }

                    if config.max_errors > 0 && errors.len() >= config.max_errors {
                        warn!(max_errors = config.max_errors, "error limit reached, stopping batch");
                        break;
                    }
                }
            },
        }
    }

    debug!(total = values.len(), failed = errors.len(), "batch validation finished");
    errors.into_result().map(|()| resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{fields, number, object, string};
    use serde_json::json;

    fn point() -> Schema {
        object(
            Some(fields([
                ("x", number(false, Some(Value::from(1)))),
                ("name", string(false, None)),
            ])),
            false,
            None,
        )
    }

    fn batch() -> Vec<Value> {
        vec![
            json!({"name": "a"}).into(),
            json!({"name": 1}).into(),
            json!({"x": 4, "name": "c"}).into(),
            json!({}).into(),
        ]
    }

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.mode, ValidationMode::Strict);
        assert!(!config.fail_fast);
        assert_eq!(config.max_errors, 0);
    }

    #[test]
    fn test_validation_config_builders() {
        let strict = ValidationConfig::strict().with_fail_fast().with_max_errors(5);
        assert_eq!(strict.mode, ValidationMode::Strict);
        assert!(strict.fail_fast);
        assert_eq!(strict.max_errors, 5);

        let warn = ValidationConfig::warn();
        assert_eq!(warn.mode, ValidationMode::Warn);
    }

    #[test]
    fn test_validation_config_from_partial_json() {
        let config: ValidationConfig = serde_json::from_value(json!({"mode": "warn"})).unwrap();
        assert_eq!(config, ValidationConfig::warn());
    }

    #[test]
    fn test_batch_all_valid() {
        let values: Vec<Value> = vec![json!({"name": "a"}).into(), json!({"x": 2, "name": "b"}).into()];
        let resolved = validate_batch(&point(), &values, &ValidationConfig::strict()).unwrap();
        assert_eq!(resolved[0], Value::from(json!({"x": 1, "name": "a"})));
        assert_eq!(resolved[1], Value::from(json!({"x": 2, "name": "b"})));
    }

    #[test]
    fn test_batch_strict_collects_all_errors() {
        let errors = validate_batch(&point(), &batch(), &ValidationConfig::strict()).unwrap_err();
        assert_eq!(errors.len(), 2);
        let labels: Vec<_> = errors.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec![Some("$[1]"), Some("$[3]")]);
    }

    #[test]
    fn test_batch_fail_fast() {
        let config = ValidationConfig::strict().with_fail_fast();
        let errors = validate_batch(&point(), &batch(), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_batch_max_errors() {
        let config = ValidationConfig::strict().with_max_errors(1);
        let errors = validate_batch(&point(), &batch(), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_batch_warn_mode_passes_values_through() {
        let resolved = validate_batch(&point(), &batch(), &ValidationConfig::warn()).unwrap();
        assert_eq!(resolved.len(), 4);
        assert_eq!(resolved[1], Value::from(json!({"x": 1, "name": 1})));
        assert_eq!(resolved[3], Value::from(json!({"x": 1})));
    }
}
