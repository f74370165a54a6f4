//! Schema factory: entry points for building validator trees.

use crate::foundation::Validate;
use crate::validators::{
    ArrayValidator, BooleanValidator, DateValidator, NumberValidator, ObjectValidator,
    StringValidator,
};

// ============================================================================
// SCHEMA
// ============================================================================

/// Factory for validator nodes.
///
/// Carries no state; each constructor returns a fresh node that is then
/// narrowed with fluent configuration calls and reused across any number of
/// `validate` passes.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
/// use serde_json::json;
///
/// let user = Schema::object([
///     ("name", Schema::string().min_length(2).max_length(50).boxed()),
///     ("age", Schema::number().integer().min_value(0.0).optional().boxed()),
///     ("tags", Schema::array(Schema::string()).boxed()),
/// ]);
///
/// let report = user.validate(&Value::from(json!({
///     "name": "John Doe",
///     "tags": ["developer"],
/// })));
/// assert!(report.is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Schema;

impl Schema {
    /// Creates a new string validator.
    #[must_use]
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// Creates a new number validator.
    #[must_use]
    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    /// Creates a new boolean validator.
    #[must_use]
    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    /// Creates a new date validator.
    #[must_use]
    pub fn date() -> DateValidator {
        DateValidator::new()
    }

    /// Creates a new array validator with the given element validator.
    #[must_use]
    pub fn array(items: impl Validate + 'static) -> ArrayValidator {
        ArrayValidator::new(items)
    }

    /// Creates a new object validator with the given field mapping.
    #[must_use]
    pub fn object<K, I>(fields: I) -> ObjectValidator
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Box<dyn Validate>)>,
    {
        ObjectValidator::new(fields)
    }
}

// ============================================================================
// TESTS
// ============================================================================
