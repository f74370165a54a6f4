//! The capability trait every validator node implements.

use crate::foundation::ValidationReport;
use crate::value::Value;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The contract every validator satisfies: check one value against one set
/// of rules and report every violation, qualified by field path.
///
/// The trait is object-safe so container validators can own heterogeneous
/// children as `Box<dyn Validate>`, and requires `Send + Sync` so a
/// finished schema tree can be shared across threads; validation never
/// mutates the tree, only the transient per-call report.
pub trait Validate: Send + Sync {
    /// Validates `value` located at `path`, returning every violation
    /// found at or below it.
    ///
    /// Container validators call this recursively with composed paths; the
    /// returned report is complete, a violation never aborts the walk.
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport;

    /// Validates `value` as the root of the input (empty path).
    fn validate(&self, value: &Value) -> ValidationReport {
        let report = self.validate_at(value, "");
        tracing::trace!(
            valid = report.is_valid(),
            errors = report.error_count(),
            "validation pass finished"
        );
        report
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate_at(&self, value: &Value, path: &str) -> ValidationReport {
        (**self).validate_at(value, path)
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Extension methods automatically available on every validator.
pub trait ValidateExt: Validate + Sized {
    /// Erases the concrete validator type for heterogeneous composition,
    /// e.g. mixing validator kinds inside one object schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_validator::prelude::*;
    ///
    /// let schema = Schema::object([
    ///     ("name", Schema::string().boxed()),
    ///     ("age", Schema::number().integer().boxed()),
    /// ]);
    /// ```
    fn boxed(self) -> Box<dyn Validate>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate_at(&self, _value: &Value, _path: &str) -> ValidationReport {
            ValidationReport::new()
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        fn validate_at(&self, _value: &Value, path: &str) -> ValidationReport {
            let mut report = ValidationReport::new();
            report.add_error(crate::foundation::path::qualify(path, "Always fails"));
            report
        }
    }

    #[test]
    fn validate_defaults_to_empty_path() {
        let report = AlwaysFails.validate(&Value::Null);
        assert_eq!(report.errors(), ["Always fails"]);
    }

    #[test]
    fn validate_at_threads_the_path() {
        let report = AlwaysFails.validate_at(&Value::Null, "user.name");
        assert_eq!(report.errors(), ["user.name: Always fails"]);
    }

    #[test]
    fn boxed_validator_delegates() {
        let boxed: Box<dyn Validate> = AlwaysValid.boxed();
        assert!(boxed.validate(&Value::Null).is_valid());
    }

    #[test]
    fn schema_trees_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let boxed: Box<dyn Validate> = AlwaysValid.boxed();
        assert_send_sync(&boxed);
    }
}
