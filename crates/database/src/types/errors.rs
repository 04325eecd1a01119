//! Error types for the database layer

use thiserror::Error;

/// Errors raised while bringing the database up
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),
}

/// Errors raised by repository operations.
///
/// Absence of a row is not an error; repositories signal it with `Option`
/// or `bool` returns instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        let message = err.to_string();
        if message.contains("UNIQUE constraint failed")
            || message.contains("FOREIGN KEY constraint failed")
        {
            RepositoryError::Constraint(message)
        } else {
            RepositoryError::Database(message)
        }
    }
}
