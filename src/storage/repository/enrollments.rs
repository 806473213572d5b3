// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Enrollment repository.
//!
//! An enrollment links an account to a course. Both references must exist
//! (foreign keys); the same pair may be enrolled more than once.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::super::{Database, StorageResult};

/// Enrollment row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredEnrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub enrolled_at: DateTime<Utc>,
}

/// Repository for enrollment operations.
pub struct EnrollmentRepository<'a> {
    db: &'a Database,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i64, course_id: i64) -> StorageResult<StoredEnrollment> {
        let row = sqlx::query_as::<_, StoredEnrollment>(
            r#"INSERT INTO enrollment (user_id, course_id, enrolled_at) VALUES (?, ?, ?)
               RETURNING id, user_id, course_id, enrolled_at"#,
        )
        .bind(user_id)
        .bind(course_id)
        .bind(Utc::now())
        .fetch_one(self.db.pool())
        .await?;
        Ok(row)
    }

    pub async fn find(&self, id: i64) -> StorageResult<Option<StoredEnrollment>> {
        let row = sqlx::query_as::<_, StoredEnrollment>(
            "SELECT id, user_id, course_id, enrolled_at FROM enrollment WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(row)
    }

    /// Enrollments of one account, ordered by id. Empty when there are none.
    pub async fn list_for_account(&self, user_id: i64) -> StorageResult<Vec<StoredEnrollment>> {
        let rows = sqlx::query_as::<_, StoredEnrollment>(
            r#"SELECT id, user_id, course_id, enrolled_at FROM enrollment
               WHERE user_id = ? ORDER BY id"#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM enrollment WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AccountRepository, CourseRepository};

    async fn seed(db: &Database) -> (i64, i64) {
        let account = AccountRepository::new(db)
            .create("john_doe", "john@example.com")
            .await
            .unwrap();
        let course = CourseRepository::new(db)
            .create("Course 1", "Description 1")
            .await
            .unwrap();
        (account.id, course.id)
    }

    #[tokio::test]
    async fn same_pair_can_be_enrolled_twice() {
        let db = Database::for_tests().await;
        let (user_id, course_id) = seed(&db).await;
        let repo = EnrollmentRepository::new(&db);

        let first = repo.create(user_id, course_id).await.unwrap();
        let second = repo.create(user_id, course_id).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list_for_account(user_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_records_timestamp() {
        let db = Database::for_tests().await;
        let (user_id, course_id) = seed(&db).await;
        let before = Utc::now();

        let created = EnrollmentRepository::new(&db)
            .create(user_id, course_id)
            .await
            .unwrap();

        assert!(created.enrolled_at >= before - chrono::Duration::seconds(1));
        assert!(created.enrolled_at <= Utc::now());
    }

    #[tokio::test]
    async fn list_for_account_filters_by_user() {
        let db = Database::for_tests().await;
        let (user_id, course_id) = seed(&db).await;
        let other = AccountRepository::new(&db)
            .create("jane_doe", "jane@example.com")
            .await
            .unwrap();
        let repo = EnrollmentRepository::new(&db);

        let mine = repo.create(user_id, course_id).await.unwrap();
        repo.create(other.id, course_id).await.unwrap();

        assert_eq!(repo.list_for_account(user_id).await.unwrap(), vec![mine]);
        assert!(repo.list_for_account(9999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let db = Database::for_tests().await;
        let (user_id, course_id) = seed(&db).await;
        let repo = EnrollmentRepository::new(&db);
        let created = repo.create(user_id, course_id).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert_eq!(repo.find(created.id).await.unwrap(), None);
    }
}
