//! Naming errors for group containers.

use thiserror::Error;

/// Error raised at settlement when a group name lacks the multi-value suffix.
///
/// Group names must end in `[]`: the group aggregates its members into an
/// ordered list, and the suffix marks that multi-value contract for form
/// serialization. The error is raised by `update_complete()`, not by the
/// name assignment itself.
#[derive(Debug, Clone, Error)]
#[error("Names should end in \"[]\".")]
pub struct NamingError {
    /// The offending name
    pub name: String,
}

impl NamingError {
    /// Create a new naming error for the offending name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
