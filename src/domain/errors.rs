// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Raised when an aggregate would be left in an inconsistent state. Never caused by
    /// caller input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
