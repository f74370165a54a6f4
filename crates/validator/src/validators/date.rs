//! Date validator: native date/time values and formatted date strings.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::modifiers::{Modifiers, impl_node_modifiers};
use crate::foundation::{Validate, ValidationReport};
use crate::value::Value;

/// Default expected format: ISO calendar date (`YYYY-MM-DD`).
const DEFAULT_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates that a value is a date: either a native date/time value
/// (accepted directly) or a string parseable with the configured strftime
/// format.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let validator = Schema::date();
/// assert!(validator.validate(&Value::from("2024-06-01")).is_valid());
/// assert!(!validator.validate(&Value::from("01/06/2024")).is_valid());
///
/// let validator = Schema::date().format("%d/%m/%Y");
/// assert!(validator.validate(&Value::from("01/06/2024")).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct DateValidator {
    modifiers: Modifiers,
    format: String,
}

impl DateValidator {
    /// Creates a date validator expecting the ISO `%Y-%m-%d` format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strftime format expected of string input.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self {
            modifiers: Modifiers::default(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl_node_modifiers!(DateValidator);

impl Validate for DateValidator {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        if let Some(report) = self.modifiers.gate_absent(value, path) {
            return report;
        }

        let mut report = ValidationReport::new();
        match value {
            Value::DateTime(_) => {}
            Value::Text(text) => {
                if !parses_with(text, &self.format) {
                    self.modifiers.fail(
                        &mut report,
                        path,
                        &format!("Date must be in format {}", self.format),
                    );
                }
            }
            _ => {
                self.modifiers
                    .fail(&mut report, path, "Must be a date or datetime string");
            }
        }
        report
    }
}

/// Tries the format as a datetime, then as a date-only, then as a time-only
/// pattern; the format string decides which fields it can populate.
fn parses_with(input: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(input, format).is_ok()
        || NaiveDate::parse_from_str(input, format).is_ok()
        || NaiveTime::parse_from_str(input, format).is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
