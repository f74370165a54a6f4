//! Field-path composition for error reporting.
//!
//! A field path is the dotted/bracketed address of a value inside nested
//! input: object fields join with `.`, array elements append `[index]`,
//! and a bracket segment never takes a leading dot. Every error message a
//! validation pass produces is qualified with the path of the value that
//! raised it, so callers can pinpoint failures in deeply nested data
//! without re-running validation.

// ============================================================================
// COMPOSITION
// ============================================================================

/// Appends an object field to `parent`.
///
/// An empty parent means the field sits at the root and is addressed by its
/// bare name.
///
/// # Examples
///
/// ```
/// use tessera_validator::foundation::path;
///
/// assert_eq!(path::child("", "name"), "name");
/// assert_eq!(path::child("user", "name"), "user.name");
/// assert_eq!(path::child("user.address", "city"), "user.address.city");
/// ```
#[must_use]
pub fn child(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Appends a 0-based array index to `parent`.
///
/// Unlike [`child`], an index never takes a leading dot, so a root-level
/// element is addressed as `[i]`.
///
/// # Examples
///
/// ```
/// use tessera_validator::foundation::path;
///
/// assert_eq!(path::element("", 0), "[0]");
/// assert_eq!(path::element("tags", 2), "tags[2]");
/// assert_eq!(path::element("a.b", 1), "a.b[1]");
/// ```
#[must_use]
pub fn element(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Renders `message` qualified by `path`.
///
/// Produces `"<path>: <message>"` for a non-empty path, or the bare
/// message at the root.
#[must_use]
pub fn qualify(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{path}: {message}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
