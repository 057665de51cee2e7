//! Store-layer error model.

use thiserror::Error;

use shoplite_core::DomainError;

/// Persistence collaborator failure.
///
/// These are **infrastructure errors** (storage, connectivity, constraints) as
/// opposed to domain errors (validation, invariants). The repository layer
/// propagates them unchanged: no retry, no masking.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists at the referenced identity.
    #[error("not found")]
    NotFound,

    /// The store could not service the operation (connectivity, lock state).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The operation violated a storage constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn constraint_violation(msg: impl Into<String>) -> Self {
        Self::ConstraintViolation(msg.into())
    }
}

/// Failure of an atomic read-modify-write (`update_with`).
///
/// Either the store could not locate/service the record, or the domain-level
/// mutation itself was rejected (in which case the record is untouched).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
