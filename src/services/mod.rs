// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Resource services: stateless CRUD over one entity each.
//!
//! Services are built once in [`AppState::new`](crate::state::AppState::new)
//! and reached through router state. Validation is presence-only: a required
//! field that is missing or empty is [`ServiceError::InvalidInput`].
//! Uniqueness and referential integrity are left to the database.

pub mod courses;
pub mod enrollments;
pub mod users;

pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use users::UserService;

use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid input")]
    InvalidInput,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// A required text field: present and non-empty.
fn required_text(value: Option<String>) -> ServiceResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::InvalidInput),
    }
}

/// A required id: present and non-zero.
fn required_id(value: Option<i64>) -> ServiceResult<i64> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ServiceError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_missing_and_empty() {
        assert!(matches!(required_text(None), Err(ServiceError::InvalidInput)));
        assert!(matches!(
            required_text(Some(String::new())),
            Err(ServiceError::InvalidInput)
        ));
        assert_eq!(required_text(Some("x".into())).unwrap(), "x");
    }

    #[test]
    fn required_id_rejects_missing_and_zero() {
        assert!(matches!(required_id(None), Err(ServiceError::InvalidInput)));
        assert!(matches!(required_id(Some(0)), Err(ServiceError::InvalidInput)));
        assert_eq!(required_id(Some(5)).unwrap(), 5);
    }
}
