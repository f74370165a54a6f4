//! Object validator: declared fields, strict mode, absence handling.

use std::fmt;

use indexmap::IndexMap;

use super::modifiers::{Modifiers, impl_node_modifiers};
use crate::foundation::{Validate, ValidationReport, path};
use crate::value::Value;

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// Validates that a value is an object whose declared fields satisfy their
/// validators.
///
/// Fields are validated in declaration order; a missing key is handed to
/// its validator as `Null`, so each child's own absence gate decides
/// whether that is an error. Keys not declared in the schema are ignored,
/// unless [`strict`](Self::strict) is enabled; then every undeclared key
/// is reported, in input order, before the declared-field errors.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = Schema::object([
///     ("name", Schema::string().min_length(1).boxed()),
///     ("age", Schema::number().integer().optional().boxed()),
/// ]);
///
/// assert!(schema.validate(&Value::from(json!({"name": "Ada"}))).is_valid());
/// ```
pub struct ObjectValidator {
    modifiers: Modifiers,
    fields: IndexMap<String, Box<dyn Validate>>,
    strict: bool,
}

impl ObjectValidator {
    /// Creates an object validator from an ordered field → validator
    /// mapping.
    ///
    /// Declaration order is preserved and drives error ordering. Declaring
    /// the same field twice keeps the last validator.
    #[must_use]
    pub fn new<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Box<dyn Validate>)>,
    {
        Self {
            modifiers: Modifiers::default(),
            fields: fields
                .into_iter()
                .map(|(name, validator)| (name.into(), validator))
                .collect(),
            strict: false,
        }
    }

    /// Creates an object validator with no declared fields.
    ///
    /// Useful as a base for [`field`](Self::field) chaining, or to accept
    /// any object shape (every key is undeclared and ignored unless strict
    /// mode is on).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            modifiers: Modifiers::default(),
            fields: IndexMap::new(),
            strict: false,
        }
    }

    /// Appends a declared field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        self.fields.insert(name.into(), Box::new(validator));
        self
    }

    /// Rejects any input key not declared in the schema.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Default for ObjectValidator {
    fn default() -> Self {
        Self::empty()
    }
}

impl_node_modifiers!(ObjectValidator);

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("strict", &self.strict)
            .field("optional", &self.modifiers.optional)
            .finish_non_exhaustive()
    }
}

impl Validate for ObjectValidator {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        if let Some(report) = self.modifiers.gate_absent(value, path) {
            return report;
        }

        let mut report = ValidationReport::new();
        let Value::Object(map) = value else {
            self.modifiers.fail(&mut report, path, "Must be an object");
            return report;
        };

        if self.strict {
            for key in map.keys() {
                if !self.fields.contains_key(key) {
                    let key_path = path::child(path, key);
                    tracing::trace!(field = %key_path, "strict mode rejected undeclared field");
                    self.modifiers.fail(
                        &mut report,
                        &key_path,
                        "Extra field not allowed in strict mode",
                    );
                }
            }
        }

        let absent = Value::Null;
        for (name, validator) in &self.fields {
            let field_path = path::child(path, name);
            let field_value = map.get(name).unwrap_or(&absent);
            report.merge(validator.validate_at(field_value, &field_path));
        }

        report
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::schema::Schema;
    use serde_json::json;

    fn person() -> ObjectValidator {
        Schema::object([
            ("name", Schema::string().boxed()),
            ("age", Schema::number().boxed()),
        ])
    }

    #[test]
    fn matching_object_passes() {
        let report = person().validate(&Value::from(json!({"name": "John", "age": 30})));
        assert!(report.is_valid());
    }

    #[test]
    fn non_object_fails_type_check() {
        let report = person().validate(&Value::from("not an object"));
        assert_eq!(report.errors(), ["Must be an object"]);
    }

    #[test]
    fn missing_required_field_is_reported_at_its_path() {
        let report = person().validate(&Value::from(json!({"name": "John"})));
        assert_eq!(report.errors(), ["age: Field is required"]);
    }

    #[test]
    fn explicit_null_field_equals_missing() {
        let report = person().validate(&Value::from(json!({"name": "John", "age": null})));
        assert_eq!(report.errors(), ["age: Field is required"]);
    }

    #[test]
    fn optional_field_may_be_missing() {
        let schema = Schema::object([
            ("name", Schema::string().boxed()),
            ("age", Schema::number().optional().boxed()),
        ]);
        assert!(schema.validate(&Value::from(json!({"name": "John"}))).is_valid());
    }

    #[test]
    fn fields_validate_in_declaration_order() {
        let schema = Schema::object([
            ("b", Schema::string().boxed()),
            ("a", Schema::string().boxed()),
        ]);
        let report = schema.validate(&Value::from(json!({})));
        assert_eq!(
            report.errors(),
            ["b: Field is required", "a: Field is required"]
        );
    }

    #[test]
    fn undeclared_keys_are_ignored_when_not_strict() {
        let report = person().validate(&Value::from(
            json!({"name": "John", "age": 30, "extra": "field"}),
        ));
        assert!(report.is_valid());
    }

    #[test]
    fn strict_mode_reports_every_extra_key() {
        let schema = Schema::object([("name", Schema::string().boxed())]).strict();
        let report = schema.validate(&Value::from(
            json!({"name": "J", "extra": 1, "another": 2}),
        ));
        assert_eq!(
            report.errors(),
            [
                "extra: Extra field not allowed in strict mode",
                "another: Extra field not allowed in strict mode",
            ]
        );
    }

    #[test]
    fn strict_errors_come_before_field_errors() {
        let schema = Schema::object([("name", Schema::string().boxed())]).strict();
        let report = schema.validate(&Value::from(json!({"extra": 1})));
        assert_eq!(
            report.errors(),
            [
                "extra: Extra field not allowed in strict mode",
                "name: Field is required",
            ]
        );
    }

    #[test]
    fn nested_objects_compose_paths() {
        let schema = Schema::object([(
            "address",
            Schema::object([("street", Schema::string().boxed())]).boxed(),
        )]);
        let report = schema.validate(&Value::from(json!({"address": {"street": 123}})));
        assert_eq!(report.errors(), ["address.street: Must be a string"]);
    }

    #[test]
    fn strict_extra_keys_inside_nested_path() {
        let schema = Schema::object([(
            "meta",
            ObjectValidator::empty().strict().boxed(),
        )]);
        let report = schema.validate(&Value::from(json!({"meta": {"x": 1}})));
        assert_eq!(
            report.errors(),
            ["meta.x: Extra field not allowed in strict mode"]
        );
    }

    #[test]
    fn fluent_field_appender() {
        let schema = ObjectValidator::empty()
            .field("name", Schema::string())
            .field("age", Schema::number().optional());
        assert!(schema.validate(&Value::from(json!({"name": "A"}))).is_valid());
    }

    #[test]
    fn duplicate_declaration_keeps_last_validator() {
        let schema = ObjectValidator::empty()
            .field("n", Schema::number())
            .field("n", Schema::string());
        assert!(schema.validate(&Value::from(json!({"n": "text"}))).is_valid());
    }

    #[test]
    fn empty_schema_accepts_any_object() {
        let schema = ObjectValidator::empty();
        assert!(schema.validate(&Value::from(json!({"anything": 1}))).is_valid());
    }

    #[test]
    fn optional_object_null_passes() {
        assert!(person().optional().validate(&Value::Null).is_valid());
    }

    #[test]
    fn required_object_null_fails() {
        assert_eq!(
            person().validate(&Value::Null).errors(),
            ["Field is required"]
        );
    }
}
