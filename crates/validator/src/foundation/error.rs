//! Boundary error type for library misuse.

use crate::foundation::path;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error raised for misuse of the library at its API boundary.
///
/// Validation itself never produces this type: schema violations are always
/// accumulated in a [`ValidationReport`](crate::ValidationReport) and
/// reported, not thrown. `ValidationError` appears only when a
/// configuration call is handed unusable input, such as an invalid regular
/// expression given to
/// [`StringValidator::pattern_str`](crate::StringValidator::pattern_str).
///
/// Displays as `"<field_path>: <message>"` when a path is present, else
/// just the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", path::qualify(.field_path, .message))]
pub struct ValidationError {
    /// What went wrong.
    pub message: String,
    /// Where the misuse was detected; empty when not tied to a field.
    pub field_path: String,
}

impl ValidationError {
    /// Creates an error with no field path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_path: String::new(),
        }
    }

    /// Attaches the field path the error refers to.
    #[must_use]
    pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
        self.field_path = field_path.into();
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
