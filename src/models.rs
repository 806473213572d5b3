// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. Response types derive `Serialize` and `ToSchema`; request
//! types derive `Deserialize` and `ToSchema`.
//!
//! ## Request Fields
//!
//! Every request field is optional at the serde level. Presence is checked
//! by the resource services so that a missing field and an empty one are
//! both reported as `400 {"error": "Invalid input"}`.
//!
//! ## Model Categories
//!
//! - **Accounts**: the users credentials are issued for (`/users`, `/login`)
//! - **Courses**: catalogue entries (`/courses`)
//! - **Enrollments**: links between an account and a course (`/enroll`)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::storage::{StoredAccount, StoredCourse, StoredEnrollment};

// =============================================================================
// Account Models
// =============================================================================

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Account {
    /// Unique account identifier.
    pub id: i64,
    /// Unique handle, used to log in.
    pub username: String,
    /// Unique contact address.
    pub email: String,
}

impl From<StoredAccount> for Account {
    fn from(row: StoredAccount) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
        }
    }
}

/// Request to create an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Login request. The account is looked up by `username`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    /// Accepted for compatibility; not used for the lookup.
    pub email: Option<String>,
}

// =============================================================================
// Course Models
// =============================================================================

/// A course in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<StoredCourse> for Course {
    fn from(row: StoredCourse) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Request to create a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

// =============================================================================
// Enrollment Models
// =============================================================================

/// An account enrolled in a course.
///
/// The enrollment timestamp is stored but not part of the API response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i64,
    /// Enrolled account.
    pub user_id: i64,
    /// Course enrolled in.
    pub course_id: i64,
}

impl From<StoredEnrollment> for Enrollment {
    fn from(row: StoredEnrollment) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            course_id: row.course_id,
        }
    }
}

/// Request to enroll an account in a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EnrollRequest {
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
}

// =============================================================================
// Misc
// =============================================================================

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn enrollment_response_omits_timestamp() {
        let enrollment: Enrollment = StoredEnrollment {
            id: 3,
            user_id: 1,
            course_id: 2,
            enrolled_at: Utc::now(),
        }
        .into();

        let json = serde_json::to_value(&enrollment).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "user_id": 1, "course_id": 2}));
    }

    #[test]
    fn request_fields_may_be_absent() {
        let request: CreateCourseRequest = serde_json::from_str(r#"{"name":"Rust"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Rust"));
        assert!(request.description.is_none());
    }
}
