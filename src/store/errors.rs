//! # Store Errors
//!
//! Classification of failures reported by the relational store.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures, classified by the constraint the store enforced.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A FOREIGN KEY constraint rejected the write
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// Anything the store reported that is not a known constraint
    #[error("database error :: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.kind() {
                ErrorKind::UniqueViolation => {
                    return StoreError::UniqueViolation(db.message().to_owned())
                }
                ErrorKind::ForeignKeyViolation => {
                    return StoreError::ForeignKeyViolation(db.message().to_owned())
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_unclassified() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }
}
