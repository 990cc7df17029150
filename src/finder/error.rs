//! Finder error types

use thiserror::Error;

/// Contract violations raised by the selection engine
///
/// These signal programming errors in the embedding application or in the
/// callbacks it supplied, never user input. User cancellation is not an
/// error; it is reported as [`Outcome::Aborted`](super::Outcome::Aborted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// A callback broke its contract (e.g. `display` returned several lines)
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// A query edit was given an index or length outside the query
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(String),
}

impl FinderError {
    /// Whether this error is a contract violation
    ///
    /// Index errors are a refinement of contract violations, so this is
    /// true for every variant.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_) | Self::IndexOutOfBounds(_))
    }

    /// Whether this error reports an out-of-range query index or length
    #[must_use]
    pub const fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds(_))
    }
}

/// Result type for finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let contract = FinderError::ContractViolation("multi-line display".into());
        let index = FinderError::IndexOutOfBounds("index 99".into());

        assert!(contract.is_contract_violation());
        assert!(!contract.is_index_out_of_bounds());
        assert!(index.is_contract_violation());
        assert!(index.is_index_out_of_bounds());
    }

    #[test]
    fn test_error_display() {
        let err = FinderError::IndexOutOfBounds("index to remove from query is out of bounds".into());
        assert_eq!(
            err.to_string(),
            "Index out of bounds: index to remove from query is out of bounds"
        );
    }
}
