use thiserror::Error;

/// Error type returned by every ledger operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("record index {index} is out of range (ledger holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// A candidate record violated one of the record constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("direction is required")]
    MissingDirection,
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
    #[error("category is required")]
    MissingCategory,
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("amount is required")]
    MissingAmount,
    #[error("amount `{0}` is not a finite number")]
    InvalidAmount(String),
    #[error("amount `{0}` must not be negative")]
    NegativeAmount(String),
    #[error("date is required")]
    MissingDate,
    #[error("date `{0}` is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Storage read or write failure. Never fatal for in-memory state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl LedgerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, LedgerError::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_message_names_bounds() {
        let err = LedgerError::IndexOutOfRange { index: 4, len: 2 };
        let message = err.to_string();
        assert!(message.contains('4') && message.contains('2'), "{message}");
        assert!(err.is_index());
    }

    #[test]
    fn validation_errors_convert_transparently() {
        let err: LedgerError = ValidationError::MissingCategory.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "category is required");
    }
}
