//! CRUD services over the repository store.
//!
//! Each service borrows the [`Store`] for the duration of a call chain. Validation happens
//! before any mutation, and every mutation is a single [`Store::transact`] call.

mod appointments;
mod patients;
mod treatments;

pub use appointments::*;
pub use patients::*;
pub use treatments::*;

use thiserror::Error;

use crate::store::StoreError;

/// Service errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    #[error("Persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}

/// Trimmed copy of a required field, or a validation error naming it.
pub(crate) fn require_text(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
