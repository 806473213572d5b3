// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Course repository.

use sqlx::FromRow;

use super::super::{Database, StorageResult};

/// Course row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredCourse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Repository for course operations.
pub struct CourseRepository<'a> {
    db: &'a Database,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> StorageResult<Vec<StoredCourse>> {
        let rows = sqlx::query_as::<_, StoredCourse>(
            "SELECT id, name, description FROM course ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> StorageResult<Option<StoredCourse>> {
        let row = sqlx::query_as::<_, StoredCourse>(
            "SELECT id, name, description FROM course WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(row)
    }

    pub async fn create(&self, name: &str, description: &str) -> StorageResult<StoredCourse> {
        let row = sqlx::query_as::<_, StoredCourse>(
            "INSERT INTO course (name, description) VALUES (?, ?) RETURNING id, name, description",
        )
        .bind(name)
        .bind(description)
        .fetch_one(self.db.pool())
        .await?;
        Ok(row)
    }

    /// Delete a course together with its enrollments.
    ///
    /// Returns `false` when no course had this id.
    pub async fn delete(&self, id: i64) -> StorageResult<bool> {
        let mut tx = self.db.pool().begin().await?;
        sqlx::query("DELETE FROM enrollment WHERE course_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM course WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AccountRepository, EnrollmentRepository};

    #[tokio::test]
    async fn list_returns_courses_in_insertion_order() {
        let db = Database::for_tests().await;
        let repo = CourseRepository::new(&db);
        assert!(repo.list().await.unwrap().is_empty());

        let first = repo.create("Course 1", "Description 1").await.unwrap();
        let second = repo.create("Course 2", "Description 2").await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![first.clone(), second]);
        assert_eq!(repo.find(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn delete_cascades_to_enrollments() {
        let db = Database::for_tests().await;
        let courses = CourseRepository::new(&db);
        let enrollments = EnrollmentRepository::new(&db);
        let account = AccountRepository::new(&db)
            .create("john_doe", "john@example.com")
            .await
            .unwrap();

        let kept = courses.create("Kept", "stays").await.unwrap();
        let dropped = courses.create("Dropped", "goes").await.unwrap();
        enrollments.create(account.id, kept.id).await.unwrap();
        let gone = enrollments.create(account.id, dropped.id).await.unwrap();

        assert!(courses.delete(dropped.id).await.unwrap());
        assert_eq!(enrollments.find(gone.id).await.unwrap(), None);

        let remaining = enrollments.list_for_account(account.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].course_id, kept.id);
    }
}
