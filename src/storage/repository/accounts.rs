// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account repository.
//!
//! Accounts are the identities credentials are issued for. `username` and
//! `email` are unique; the storage layer enforces both.

use sqlx::FromRow;

use super::super::{Database, StorageResult};

/// Account row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Repository for account operations.
pub struct AccountRepository<'a> {
    db: &'a Database,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All accounts, ordered by id.
    pub async fn list(&self) -> StorageResult<Vec<StoredAccount>> {
        let rows = sqlx::query_as::<_, StoredAccount>(
            "SELECT id, username, email FROM account ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> StorageResult<Option<StoredAccount>> {
        let row = sqlx::query_as::<_, StoredAccount>(
            "SELECT id, username, email FROM account WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(row)
    }

    pub async fn find_by_username(&self, username: &str) -> StorageResult<Option<StoredAccount>> {
        let row = sqlx::query_as::<_, StoredAccount>(
            "SELECT id, username, email FROM account WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(row)
    }

    /// Insert a new account. Fails on a duplicate username or email.
    pub async fn create(&self, username: &str, email: &str) -> StorageResult<StoredAccount> {
        let row = sqlx::query_as::<_, StoredAccount>(
            "INSERT INTO account (username, email) VALUES (?, ?) RETURNING id, username, email",
        )
        .bind(username)
        .bind(email)
        .fetch_one(self.db.pool())
        .await?;
        Ok(row)
    }

    /// Delete an account together with its enrollments.
    ///
    /// Returns `false` when no account had this id.
    pub async fn delete(&self, id: i64) -> StorageResult<bool> {
        let mut tx = self.db.pool().begin().await?;
        sqlx::query("DELETE FROM enrollment WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM account WHERE id = ?")
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
    use crate::storage::{CourseRepository, EnrollmentRepository, StorageError};

    #[tokio::test]
    async fn create_and_find_account() {
        let db = Database::for_tests().await;
        let repo = AccountRepository::new(&db);

        let created = repo.create("john_doe", "john@example.com").await.unwrap();
        assert!(created.id > 0);

        assert_eq!(repo.find(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(
            repo.find_by_username("john_doe").await.unwrap(),
            Some(created)
        );
        assert_eq!(repo.find_by_username("jane_doe").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_username_or_email_is_rejected() {
        let db = Database::for_tests().await;
        let repo = AccountRepository::new(&db);
        repo.create("john_doe", "john@example.com").await.unwrap();

        let dup_name = repo.create("john_doe", "other@example.com").await;
        assert!(matches!(dup_name, Err(StorageError::Database(_))));

        let dup_email = repo.create("jane_doe", "john@example.com").await;
        assert!(matches!(dup_email, Err(StorageError::Database(_))));

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_enrollments_of_account() {
        let db = Database::for_tests().await;
        let accounts = AccountRepository::new(&db);
        let courses = CourseRepository::new(&db);
        let enrollments = EnrollmentRepository::new(&db);

        let john = accounts.create("john_doe", "john@example.com").await.unwrap();
        let jane = accounts.create("jane_doe", "jane@example.com").await.unwrap();
        let course = courses.create("Course 1", "Description 1").await.unwrap();
        enrollments.create(john.id, course.id).await.unwrap();
        enrollments.create(jane.id, course.id).await.unwrap();

        assert!(accounts.delete(john.id).await.unwrap());
        assert_eq!(accounts.find(john.id).await.unwrap(), None);
        assert!(enrollments.list_for_account(john.id).await.unwrap().is_empty());
        assert_eq!(enrollments.list_for_account(jane.id).await.unwrap().len(), 1);

        assert!(!accounts.delete(john.id).await.unwrap());
    }
}
