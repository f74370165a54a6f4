//! Validation outcome accumulator.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// The outcome of one validation pass: an overall verdict plus the ordered
/// list of every violation found.
///
/// Reports are accumulated while a pass walks the input and are immutable
/// from the caller's perspective once returned. The single invariant is
/// that the verdict and the error list always agree: `is_valid()` is true
/// exactly when `errors()` is empty. [`add_error`](Self::add_error) is the
/// only mutation path and maintains the invariant in one step.
///
/// # Examples
///
/// ```
/// use tessera_validator::prelude::*;
///
/// let report = Schema::string().min_length(3).validate(&Value::from("hi"));
/// assert!(!report.is_valid());
/// assert_eq!(
///     report.errors(),
///     ["String must be at least 3 characters long"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    valid: bool,
    errors: SmallVec<[String; 4]>,
}

impl ValidationReport {
    /// Creates an empty, passing report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: SmallVec::new(),
        }
    }

    /// Whether the validated value satisfied the schema.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Every violation, in the order it was found.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The number of violations.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Records a violation and fails the report in the same step.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.valid = false;
        self.errors.push(error.into());
    }

    /// Folds a child report into this one, preserving error order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
    }

    /// Consumes the report, yielding the ordered error list.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors.into_vec()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "Validation passed");
        }
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_valid_and_empty() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn add_error_fails_the_report() {
        let mut report = ValidationReport::new();
        report.add_error("Test error");
        assert!(!report.is_valid());
        assert_eq!(report.errors(), ["Test error"]);
    }

    #[test]
    fn verdict_always_agrees_with_error_list() {
        let mut report = ValidationReport::new();
        assert_eq!(report.is_valid(), report.errors().is_empty());

        report.add_error("first");
        assert_eq!(report.is_valid(), report.errors().is_empty());

        report.add_error("second");
        assert_eq!(report.is_valid(), report.errors().is_empty());
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn merge_preserves_order() {
        let mut parent = ValidationReport::new();
        parent.add_error("a");

        let mut child = ValidationReport::new();
        child.add_error("b");
        child.add_error("c");

        parent.merge(child);
        assert_eq!(parent.errors(), ["a", "b", "c"]);
        assert!(!parent.is_valid());
    }

    #[test]
    fn merging_passing_child_keeps_verdict() {
        let mut parent = ValidationReport::new();
        parent.merge(ValidationReport::new());
        assert!(parent.is_valid());
    }

    #[test]
    fn into_errors_yields_ordered_list() {
        let mut report = ValidationReport::new();
        report.add_error("x");
        report.add_error("y");
        assert_eq!(report.into_errors(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn display_lists_errors_numbered() {
        let mut report = ValidationReport::new();
        report.add_error("name: Must be a string");
        let rendered = report.to_string();
        assert!(rendered.contains("1 error(s)"));
        assert!(rendered.contains("1. name: Must be a string"));
    }
}
