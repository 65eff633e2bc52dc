//! # Store Error Types
//!
//! Error types for the mock data layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (sugar-core) ← Caller-side input checks               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the data-layer failure cases          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sugar-state snapshot ← Stored as a display string                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI shows the message next to the affected list or form                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read/Write Asymmetry
//! Reads never fail: a missing id is `Ok(None)`, an empty list is `Ok(vec![])`.
//! Writes against a missing id fail with [`StoreError::NotFound`]. Both are
//! typed `StoreResult` so the binding layer handles one error channel.

use thiserror::Error;

use sugar_core::ValidationError;

/// Mock data layer errors.
///
/// The set is deliberately small: there is no backend, so no connection,
/// timeout, or constraint failures exist to report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - `update` or `delete` against an id that is not in the collection
    /// - Status transitions against a removed record
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Login rejected.
    ///
    /// ## When This Occurs
    /// - Unknown email
    /// - Wrong password
    /// - Deactivated account
    ///
    /// The three cases are indistinguishable to the caller. Logs tell them
    /// apart for debugging.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Input validation failed before the operation ran.
    ///
    /// Repositories accept whatever they are given; this variant exists so
    /// callers that validate first can propagate with `?` through one type.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for data layer operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Product", "abc-123");
        assert_eq!(err.to_string(), "Product not found: abc-123");
    }

    #[test]
    fn test_invalid_credentials_hides_cause() {
        let err = StoreError::InvalidCredentials;
        let message = err.to_string();
        assert!(!message.contains("password is wrong"));
        assert!(!message.contains("inactive"));
        assert_eq!(message, "Invalid email or password");
    }

    #[test]
    fn test_validation_error_converts() {
        fn check(name: &str) -> StoreResult<()> {
            sugar_core::validation::validate_name(name)?;
            Ok(())
        }

        let err = check("").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().starts_with("Validation error:"));
    }
}
