//! Prelude module for convenient imports.
//!
//! Provides a single `use tessera_validator::prelude::*;` import that
//! brings in the working set: the factory, the traits, the report types
//! and the input value model.
//!
//! # Examples
//!
//! ```
//! use tessera_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     ("id", Schema::string().boxed()),
//!     ("active", Schema::boolean().boxed()),
//! ]);
//! let report = schema.validate(&Value::from(json!({"id": "42", "active": true})));
//! assert!(report.is_valid());
//! ```

// ============================================================================
// FOUNDATION: traits, report, boundary error
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationReport};

// ============================================================================
// SCHEMA FACTORY AND VALIDATORS
// ============================================================================

pub use crate::schema::Schema;
pub use crate::validators::{
    ArrayValidator, BooleanValidator, DateValidator, NumberValidator, ObjectValidator,
    StringValidator,
};

// ============================================================================
// INPUT VALUES
// ============================================================================

pub use crate::value::{Value, ValueKind};
