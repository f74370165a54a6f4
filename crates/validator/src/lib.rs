//! # tessera-validator
//!
//! A composable schema-validation engine for structured data.
//!
//! Callers declare the expected shape of nested input (scalars, arrays,
//! objects) as a tree of validator nodes, then run a single `validate`
//! pass that walks the input depth-first and returns **every** violation,
//! each qualified with the field path where it occurred. Validation never
//! throws and never stops at the first failure.
//!
//! ## Quick start
//!
//! ```
//! use tessera_validator::prelude::*;
//! use serde_json::json;
//!
//! let user = Schema::object([
//!     ("name", Schema::string().min_length(2).max_length(50).boxed()),
//!     ("email", Schema::string().pattern_str(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?.boxed()),
//!     ("age", Schema::number().integer().min_value(0.0).optional().boxed()),
//!     ("tags", Schema::array(Schema::string()).boxed()),
//! ]);
//!
//! let report = user.validate(&Value::from(json!({
//!     "name": "J",
//!     "email": "not-an-email",
//!     "tags": ["developer", 7],
//! })));
//!
//! assert_eq!(report.errors(), [
//!     "name: String must be at least 2 characters long",
//!     "email: String does not match required pattern",
//!     "tags[1]: Must be a string",
//! ]);
//! # Ok::<(), tessera_validator::ValidationError>(())
//! ```
//!
//! ## Design
//!
//! - Validator trees are immutable after construction and reusable across
//!   passes and threads; only the per-call [`ValidationReport`] is mutated.
//! - Absence (`Null` / missing key) is distinct from presence: `0`,
//!   `false` and `""` are present values. Required absence yields exactly
//!   one error and skips constraint checks.
//! - Container validators own their children (`Box<dyn Validate>`) and
//!   compose field paths per the `.field` / `[index]` protocol in
//!   [`foundation::path`].

pub mod foundation;
pub mod prelude;
pub mod schema;
pub mod validators;
pub mod value;

pub use foundation::{Validate, ValidateExt, ValidationError, ValidationReport};
pub use schema::Schema;
pub use validators::{
    ArrayValidator, BooleanValidator, DateValidator, NumberValidator, ObjectValidator,
    StringValidator,
};
pub use value::{Value, ValueKind};
