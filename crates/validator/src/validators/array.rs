//! Array validator: length bounds plus per-element validation.

use std::fmt;

use super::modifiers::{Modifiers, impl_node_modifiers};
use crate::foundation::{Validate, ValidationReport, path};
use crate::value::Value;

// ============================================================================
// ARRAY VALIDATOR
// ============================================================================

/// Validates that a value is an array whose every element satisfies one
/// owned element validator, with optional length bounds.
///
/// Length bounds are evaluated even when elements also fail, and a failing
/// element never stops validation of the rest. Element errors are appended
/// in index order at the composed path `parent[i]`. An empty array
/// satisfies the type check.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string()).min_length(1);
/// let report = tags.validate(&Value::from(json!(["rust", 2])));
/// assert_eq!(report.errors(), ["[1]: Must be a string"]);
/// ```
pub struct ArrayValidator {
    modifiers: Modifiers,
    items: Box<dyn Validate>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl ArrayValidator {
    /// Creates an array validator that checks every element with `items`.
    #[must_use]
    pub fn new(items: impl Validate + 'static) -> Self {
        Self {
            modifiers: Modifiers::default(),
            items: Box::new(items),
            min_length: None,
            max_length: None,
        }
    }

    /// Requires at least `length` elements.
    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires at most `length` elements.
    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }
}

impl_node_modifiers!(ArrayValidator);

impl fmt::Debug for ArrayValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayValidator")
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("optional", &self.modifiers.optional)
            .finish_non_exhaustive()
    }
}

impl Validate for ArrayValidator {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        if let Some(report) = self.modifiers.gate_absent(value, path) {
            return report;
        }

        let mut report = ValidationReport::new();
        let Value::Array(elements) = value else {
            self.modifiers.fail(&mut report, path, "Must be an array");
            return report;
        };

        if let Some(min) = self.min_length {
            if elements.len() < min {
                self.modifiers.fail(
                    &mut report,
                    path,
                    &format!("Array must have at least {min} items"),
                );
            }
        }
        if let Some(max) = self.max_length {
            if elements.len() > max {
                self.modifiers.fail(
                    &mut report,
                    path,
                    &format!("Array must have at most {max} items"),
                );
            }
        }

        for (index, element) in elements.iter().enumerate() {
            let element_path = path::element(path, index);
            report.merge(self.items.validate_at(element, &element_path));
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
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn homogeneous_array_passes() {
        let validator = Schema::array(Schema::string());
        let report = validator.validate(&Value::from(json!(["hello", "world"])));
        assert!(report.is_valid());
    }

    #[test]
    fn non_array_fails_type_check() {
        let report = Schema::array(Schema::string()).validate(&Value::from("not an array"));
        assert_eq!(report.errors(), ["Must be an array"]);
    }

    #[test]
    fn empty_array_satisfies_type_check() {
        assert!(
            Schema::array(Schema::string())
                .validate(&Value::from(json!([])))
                .is_valid()
        );
    }

    #[test]
    fn empty_array_below_minimum_reports_exactly_one_error() {
        let validator = Schema::array(Schema::string()).min_length(1);
        let report = validator.validate(&Value::from(json!([])));
        assert_eq!(report.errors(), ["Array must have at least 1 items"]);
    }

    #[test]
    fn max_length_bound() {
        let validator = Schema::array(Schema::string()).max_length(2);
        assert!(
            validator
                .validate(&Value::from(json!(["a", "b"])))
                .is_valid()
        );
        assert_eq!(
            validator.validate(&Value::from(json!(["a", "b", "c"]))).errors(),
            ["Array must have at most 2 items"]
        );
    }

    #[test]
    fn element_errors_carry_index_paths() {
        let validator = Schema::array(Schema::number());
        let report = validator.validate(&Value::from(json!([1, "two", 3])));
        assert_eq!(report.errors(), ["[1]: Must be a number"]);
    }

    #[test]
    fn failing_element_does_not_stop_later_elements() {
        let validator = Schema::array(Schema::number());
        let report = validator.validate(&Value::from(json!(["a", 2, "c"])));
        assert_eq!(
            report.errors(),
            ["[0]: Must be a number", "[2]: Must be a number"]
        );
    }

    #[test]
    fn length_bound_and_element_errors_both_report() {
        let validator = Schema::array(Schema::number()).min_length(3);
        let report = validator.validate(&Value::from(json!(["x"])));
        assert_eq!(
            report.errors(),
            ["Array must have at least 3 items", "[0]: Must be a number"]
        );
    }

    #[test]
    fn nested_arrays_compose_paths() {
        let validator = Schema::array(Schema::array(Schema::number()));
        let report = validator.validate(&Value::from(json!([[1, 2], [3, "x"]])));
        assert_eq!(report.errors(), ["[1][1]: Must be a number"]);
    }

    #[test]
    fn null_element_hits_the_child_absence_gate() {
        let validator = Schema::array(Schema::string());
        let report = validator.validate(&Value::from(json!(["a", null])));
        assert_eq!(report.errors(), ["[1]: Field is required"]);
    }

    #[test]
    fn optional_null_passes() {
        let validator = Schema::array(Schema::string()).optional();
        assert!(validator.validate(&Value::Null).is_valid());
    }

    #[test]
    fn custom_message_covers_own_errors_not_childrens() {
        let validator = Schema::array(Schema::number())
            .min_length(2)
            .with_message("Need more items");
        let report = validator.validate(&Value::from(json!(["x"])));
        assert_eq!(report.errors(), ["Need more items", "[0]: Must be a number"]);
    }
}
