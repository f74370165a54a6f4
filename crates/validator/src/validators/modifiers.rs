//! Shared per-node state: optionality and custom messages.

use crate::foundation::{ValidationReport, path};
use crate::value::Value;

// ============================================================================
// MODIFIERS
// ============================================================================

/// Configuration carried by every validator node.
///
/// `optional` controls the absence gate each `validate_at` runs first;
/// `message`, when set, replaces every failure message the node itself
/// raises, type-check failures included, but never the messages of
/// nested child validators.
#[derive(Debug, Clone, Default)]
pub(crate) struct Modifiers {
    pub(crate) optional: bool,
    pub(crate) message: Option<String>,
}

impl Modifiers {
    /// Runs the absence gate.
    ///
    /// Returns a finished report when `value` is absent: empty for an
    /// optional node, or carrying exactly one required-field error
    /// otherwise. `None` means the value is present and constraint checks
    /// should continue.
    pub(crate) fn gate_absent(&self, value: &Value, path: &str) -> Option<ValidationReport> {
        if !value.is_null() {
            return None;
        }
        let mut report = ValidationReport::new();
        if !self.optional {
            self.fail(&mut report, path, "Field is required");
        }
        Some(report)
    }

    /// Records a violation, substituting the node's custom message when set
    /// and qualifying it with `path`.
    pub(crate) fn fail(&self, report: &mut ValidationReport, path: &str, default: &str) {
        let message = self.message.as_deref().unwrap_or(default);
        report.add_error(path::qualify(path, message));
    }
}

// ============================================================================
// FLUENT SETTERS
// ============================================================================

/// Implements the `optional()` / `with_message()` fluent setters shared by
/// every validator node.
macro_rules! impl_node_modifiers {
    ($validator:ty) => {
        impl $validator {
            /// Accepts a missing or null value without error.
            ///
            /// `0`, `false` and `""` are present values and still run the
            /// full constraint checks.
            #[must_use]
            pub fn optional(mut self) -> Self {
                self.modifiers.optional = true;
                self
            }

            /// Replaces every failure message this node itself raises,
            /// type-check failures included.
            ///
            /// Messages from nested child validators are not affected.
            #[must_use]
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.modifiers.message = Some(message.into());
                self
            }
        }
    };
}

pub(crate) use impl_node_modifiers;

// ============================================================================
// TESTS
// ============================================================================
