//! Boolean validator.

use super::modifiers::{Modifiers, impl_node_modifiers};
use crate::foundation::{Validate, ValidationReport};
use crate::value::Value;

/// Validates that a value is a boolean. Carries no constraints beyond the
/// type check.
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    modifiers: Modifiers,
}

impl BooleanValidator {
    /// Creates a boolean validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl_node_modifiers!(BooleanValidator);

impl Validate for BooleanValidator {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        if let Some(report) = self.modifiers.gate_absent(value, path) {
            return report;
        }

        let mut report = ValidationReport::new();
        if !matches!(value, Value::Bool(_)) {
            self.modifiers.fail(&mut report, path, "Must be a boolean");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn both_truth_values_pass() {
        assert!(Schema::boolean().validate(&Value::Bool(true)).is_valid());
        assert!(Schema::boolean().validate(&Value::Bool(false)).is_valid());
    }

    #[test]
    fn numbers_and_strings_fail() {
        assert_eq!(
            Schema::boolean().validate(&Value::Int(1)).errors(),
            ["Must be a boolean"]
        );
        assert_eq!(
            Schema::boolean().validate(&Value::from("true")).errors(),
            ["Must be a boolean"]
        );
    }

    #[test]
    fn required_null_fails() {
        let report = Schema::boolean().validate(&Value::Null);
        assert_eq!(report.errors(), ["Field is required"]);
    }

    #[test]
    fn optional_null_passes() {
        assert!(Schema::boolean().optional().validate(&Value::Null).is_valid());
    }

    #[test]
    fn custom_message_replaces_type_error() {
        let validator = Schema::boolean().with_message("Flag must be true or false");
        assert_eq!(
            validator.validate(&Value::Int(1)).errors(),
            ["Flag must be true or false"]
        );
    }
}
