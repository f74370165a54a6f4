//! Core validation types
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Reports**: [`ValidationReport`], the accumulated outcome of a pass
//! - **Errors**: [`ValidationError`], boundary misuse only
//! - **Paths**: [`path`], field-path composition rules
//!
//! # Architecture
//!
//! Validators report violations, they never throw: a pass always completes
//! and returns a [`ValidationReport`] carrying every failure with its field
//! path. The only error type that can be returned through `Result` is
//! [`ValidationError`], reserved for misuse of configuration calls.

pub mod error;
pub mod path;
pub mod report;
pub mod traits;

pub use error::ValidationError;
pub use report::ValidationReport;
pub use traits::{Validate, ValidateExt};
