//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! A missing record is not one of them: lookups return `Ok(None)`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation error with message
    #[error("Validation error: {0}")]
    Validation(String),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
    /// Stored data that cannot be mapped back onto the domain
    #[error("Internal error: {0}")]
    Internal(String),
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
