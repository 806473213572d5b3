// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Enrollment service.
//!
//! Enrolling the same account in the same course twice creates two rows.
//! Removing an enrollment that does not exist is not an error.

use tracing::{debug, info};

use super::{required_id, ServiceResult};
use crate::models::{EnrollRequest, Enrollment};
use crate::storage::{Database, EnrollmentRepository};

#[derive(Clone, Debug)]
pub struct EnrollmentService {
    db: Database,
}

impl EnrollmentService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Enroll an account in a course. Unknown ids fail on the foreign keys.
    pub async fn enroll(&self, request: EnrollRequest) -> ServiceResult<Enrollment> {
        let user_id = required_id(request.user_id)?;
        let course_id = required_id(request.course_id)?;

        let row = EnrollmentRepository::new(&self.db)
            .create(user_id, course_id)
            .await?;
        info!(enrollment_id = row.id, user_id, course_id, "enrollment created");
        Ok(row.into())
    }

    pub async fn list_for_account(&self, user_id: i64) -> ServiceResult<Vec<Enrollment>> {
        let rows = EnrollmentRepository::new(&self.db)
            .list_for_account(user_id)
            .await?;
        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    /// Idempotent delete.
    pub async fn remove(&self, enrollment_id: i64) -> ServiceResult<()> {
        let removed = EnrollmentRepository::new(&self.db)
            .delete(enrollment_id)
            .await?;
        debug!(enrollment_id, removed, "enrollment remove requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;
    use crate::storage::{AccountRepository, CourseRepository};

    async fn service_with_pair() -> (EnrollmentService, i64, i64) {
        let db = Database::for_tests().await;
        let account = AccountRepository::new(&db)
            .create("john_doe", "john@example.com")
            .await
            .unwrap();
        let course = CourseRepository::new(&db)
            .create("Course 1", "Description 1")
            .await
            .unwrap();
        (EnrollmentService::new(db), account.id, course.id)
    }

    #[tokio::test]
    async fn enroll_twice_creates_two_enrollments() {
        let (service, user_id, course_id) = service_with_pair().await;
        let request = EnrollRequest {
            user_id: Some(user_id),
            course_id: Some(course_id),
        };

        let first = service.enroll(request.clone()).await.unwrap();
        let second = service.enroll(request).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            service.list_for_account(user_id).await.unwrap(),
            vec![first, second]
        );
    }

    #[tokio::test]
    async fn enroll_unknown_course_is_storage_error() {
        let (service, user_id, _) = service_with_pair().await;
        let result = service
            .enroll(EnrollRequest {
                user_id: Some(user_id),
                course_id: Some(999),
            })
            .await;
        assert!(matches!(result, Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let (service, user_id, course_id) = service_with_pair().await;
        let enrollment = service
            .enroll(EnrollRequest {
                user_id: Some(user_id),
                course_id: Some(course_id),
            })
            .await
            .unwrap();

        service.remove(enrollment.id).await.unwrap();
        service.remove(enrollment.id).await.unwrap();
        service.remove(12345).await.unwrap();
        assert!(service.list_for_account(user_id).await.unwrap().is_empty());
    }
}
