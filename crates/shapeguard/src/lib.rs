//! Shapeguard - runtime schema validation for dynamic values
//!
//! This crate lets callers declaratively describe the expected shape of a
//! value and check runtime values against that description:
//! - **Leaf schemas**: boolean, number, string, function
//! - **Enumerations**: membership in a fixed list of values
//! - **Any**: a custom predicate or a list of alternative schemas
//! - **Arrays** and **objects**: recursive structural validation
//!
//! ## Features
//!
//! - **Optional values and defaults**: absent or falsy values fall back to
//!   configured defaults, including per-field defaults of nested objects
//! - **Two failure channels**: strict [`Schema::validate`] returns an error,
//!   non-strict [`Schema::check_value`] logs a warning through `tracing`
//!   and returns `false`
//! - **Batch Processing**: [`validate_batch`] with fail-fast and error limits
//!
//! ## Quick Start
//!
//! ```rust
//! use shapeguard::types::{array, fields, number, object, one_of, string};
//! use shapeguard::Value;
//! use serde_json::json;
//!
//! let server = object(
//!     Some(fields([
//!         ("host", string(false, None)),
//!         ("port", number(false, Some(Value::from(8080)))),
//!         ("protocol", one_of(json!(["http", "https"]), true, None).unwrap()),
//!         ("aliases", array(Some(string(false, None)), true, None)),
//!     ])),
//!     false,
//!     None,
//! );
//!
//! let config = Value::from(json!({"host": "localhost"}));
//! match server.validate(&config, Some("server")) {
//!     Ok(resolved) => assert_eq!(resolved.field("port"), &Value::from(8080)),
//!     Err(e) => panic!("Validation error: {}", e),
//! }
//!
//! assert!(!server.check_value(&json!({"host": 42}).into(), Some("server")));
//! ```
//!
//! ## Falsy values
//!
//! Defaults replace every *falsy* value, not only absent ones: `false`, `0`,
//! `NaN` and `""` are substituted just like a missing value. See
//! [`Value::is_falsy`].
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod schema;
pub mod validation;
pub mod value;

// Re-export commonly used types for convenience
pub use schema::{types, AnyOf, Fields, Predicate, Schema, SchemaKind};
pub use validation::{
    validate_batch, SchemaError, SchemaResult, ValidationConfig, ValidationContext,
    ValidationErrors, ValidationMode,
};
pub use value::{Function, Map, Value};
