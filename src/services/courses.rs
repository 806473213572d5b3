// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Course service.

use tracing::info;

use super::{required_text, ServiceResult};
use crate::models::{Course, CreateCourseRequest};
use crate::storage::{CourseRepository, Database};

#[derive(Clone, Debug)]
pub struct CourseService {
    db: Database,
}

impl CourseService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Course>> {
        let rows = CourseRepository::new(&self.db).list().await?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    pub async fn create(&self, request: CreateCourseRequest) -> ServiceResult<Course> {
        let name = required_text(request.name)?;
        let description = required_text(request.description)?;

        let row = CourseRepository::new(&self.db)
            .create(&name, &description)
            .await?;
        info!(course_id = row.id, "course created");
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    #[tokio::test]
    async fn create_returns_stored_course() {
        let service = CourseService::new(Database::for_tests().await);
        let course = service
            .create(CreateCourseRequest {
                name: Some("Course 1".into()),
                description: Some("Description 1".into()),
            })
            .await
            .unwrap();

        assert_eq!(course.name, "Course 1");
        assert_eq!(course.description, "Description 1");
        assert_eq!(service.list().await.unwrap(), vec![course]);
    }

    #[tokio::test]
    async fn missing_description_is_invalid() {
        let service = CourseService::new(Database::for_tests().await);
        let result = service
            .create(CreateCourseRequest {
                name: Some("Course 1".into()),
                description: None,
            })
            .await;
        assert!(matches!(result, Err(ServiceError::InvalidInput)));
    }
}
