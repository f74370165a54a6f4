//! Number validator: type check plus range and integrality constraints.

use super::modifiers::{Modifiers, impl_node_modifiers};
use crate::foundation::{Validate, ValidationReport};
use crate::value::Value;

// ============================================================================
// NUMBER VALIDATOR
// ============================================================================

/// Validates that a value is numeric, with optional bounds and an
/// integer-only restriction.
///
/// Booleans never satisfy the type check: [`Value::Bool`] is a distinct
/// variant from the numeric ones. The integer-only rule is decided by the
/// variant, not the magnitude: `Value::Float(3.0)` is rejected.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let age = Schema::number().integer().min_value(0.0).max_value(150.0);
/// assert!(age.validate(&Value::from(30)).is_valid());
/// assert!(!age.validate(&Value::from(-5)).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    modifiers: Modifiers,
    min_value: Option<f64>,
    max_value: Option<f64>,
    integer_only: bool,
}

impl NumberValidator {
    /// Creates a number validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the number to be at least `value`.
    #[must_use]
    pub fn min_value(mut self, value: f64) -> Self {
        self.min_value = Some(value);
        self
    }

    /// Requires the number to be at most `value`.
    #[must_use]
    pub fn max_value(mut self, value: f64) -> Self {
        self.max_value = Some(value);
        self
    }

    /// Restricts to integer values only.
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.integer_only = true;
        self
    }
}

impl_node_modifiers!(NumberValidator);

impl Validate for NumberValidator {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        if let Some(report) = self.modifiers.gate_absent(value, path) {
            return report;
        }

        let mut report = ValidationReport::new();
        let (number, is_integer) = match value {
            Value::Int(i) => (*i as f64, true),
            Value::Float(f) => (*f, false),
            _ => {
                self.modifiers.fail(&mut report, path, "Must be a number");
                return report;
            }
        };

        if self.integer_only && !is_integer {
            self.modifiers.fail(&mut report, path, "Must be an integer");
        }
        if let Some(min) = self.min_value {
            if number < min {
                self.modifiers
                    .fail(&mut report, path, &format!("Number must be at least {min}"));
            }
        }
        if let Some(max) = self.max_value {
            if number > max {
                self.modifiers
                    .fail(&mut report, path, &format!("Number must be at most {max}"));
            }
        }

        report
    }
}

// ============================================================================
// TESTS
// ============================================================================
