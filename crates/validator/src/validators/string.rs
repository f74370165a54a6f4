//! String validator: type check plus length and pattern constraints.
//!
//! Length is measured in Unicode scalar values, not bytes.

use regex::Regex;

use super::modifiers::{Modifiers, impl_node_modifiers};
use crate::foundation::{Validate, ValidationError, ValidationReport};
use crate::value::Value;

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates that a value is a string satisfying optional length and
/// pattern constraints.
///
/// Once the type check passes, every configured constraint runs and every
/// violation is reported: a string that is both too short and
/// pattern-mismatched produces both errors.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let username = Schema::string().min_length(3).max_length(20);
/// assert!(username.validate(&Value::from("ada")).is_valid());
/// assert!(!username.validate(&Value::from("hi")).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    modifiers: Modifiers,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringValidator {
    /// Creates a string validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `length` characters.
    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires at most `length` characters.
    #[must_use]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Requires the string to match a precompiled pattern.
    ///
    /// The pattern is stored as given; validation never compiles regexes.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles `pattern` and requires the string to match it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `pattern` is not a valid regular
    /// expression.
    pub fn pattern_str(self, pattern: &str) -> Result<Self, ValidationError> {
        let compiled = Regex::new(pattern)
            .map_err(|e| ValidationError::new(format!("invalid pattern {pattern:?}: {e}")))?;
        Ok(self.pattern(compiled))
    }
}

impl_node_modifiers!(StringValidator);

impl Validate for StringValidator {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        if let Some(report) = self.modifiers.gate_absent(value, path) {
            return report;
        }

        let mut report = ValidationReport::new();
        let Value::Text(text) = value else {
            self.modifiers.fail(&mut report, path, "Must be a string");
            return report;
        };

        let length = text.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                self.modifiers.fail(
                    &mut report,
                    path,
                    &format!("String must be at least {min} characters long"),
                );
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                self.modifiers.fail(
                    &mut report,
                    path,
                    &format!("String must be at most {max} characters long"),
                );
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(text) {
                self.modifiers
                    .fail(&mut report, path, "String does not match required pattern");
            }
        }

        report
    }
}

// ============================================================================
// TESTS
// ============================================================================
