//! Built-in validator nodes
//!
//! One module per value kind, plus the two container validators that
//! compose owned children. Every node carries the shared modifiers
//! (`optional()` / `with_message()`) and is constructed through the
//! [`Schema`](crate::Schema) factory or its own `new`.
//!
//! # Examples
//!
//! ```
//! use tessera_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     ("name", Schema::string().min_length(2).boxed()),
//!     ("tags", Schema::array(Schema::string()).boxed()),
//! ]);
//!
//! let report = schema.validate(&Value::from(json!({"name": "Ada", "tags": []})));
//! assert!(report.is_valid());
//! ```

pub mod array;
pub mod boolean;
pub mod date;
pub mod number;
pub mod object;
pub mod string;

pub(crate) mod modifiers;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;
