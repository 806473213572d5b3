// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Storage Module
//!
//! Relational persistence for accounts, courses and enrollments on SQLite.
//!
//! ## Layout
//!
//! ```text
//! account     (id, username UNIQUE, email UNIQUE)
//! course      (id, name, description)
//! enrollment  (id, user_id -> account, course_id -> course, enrolled_at)
//! ```
//!
//! Foreign keys are enforced on every connection. Deleting an account or a
//! course removes its enrollments: the repositories do it explicitly inside a
//! transaction, and the schema's `ON DELETE CASCADE` backs that up.
//!
//! Every write is committed on its own; there are no multi-operation
//! transactions apart from the cascade deletes.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod repository;
pub mod schema;

pub use repository::{
    AccountRepository, CourseRepository, EnrollmentRepository, StoredAccount, StoredCourse,
    StoredEnrollment,
};
pub use schema::SQLITE_INIT;

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Database Handle
// =============================================================================

/// Shared handle to the connection pool. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database at `url`.
    pub async fn connect(url: &str) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// An in-memory SQLite database lives and dies with its connection, so the
    /// pool is pinned to exactly one connection that is never recycled.
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist yet.
    pub async fn init_schema(&self) -> StorageResult<()> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Round-trip a trivial query; used by the readiness probe.
    pub async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Open an in-memory database with the schema already created.
    #[cfg(test)]
    pub async fn for_tests() -> Self {
        let db = Self::in_memory().await.expect("open in-memory database");
        db.init_schema().await.expect("create schema");
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn connect_creates_missing_file_and_persists_rows() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("coursework.db");
        let url = format!("sqlite://{}", path.display());

        {
            let db = Database::connect(&url).await.unwrap();
            db.init_schema().await.unwrap();
            AccountRepository::new(&db)
                .create("john_doe", "john@example.com")
                .await
                .unwrap();
            db.pool().close().await;
        }
        assert!(path.exists());

        let db = Database::connect(&url).await.unwrap();
        let accounts = AccountRepository::new(&db).list().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].username, "john_doe");
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = Database::for_tests().await;
        let result = EnrollmentRepository::new(&db).create(42, 7).await;
        assert!(matches!(result, Err(StorageError::Database(_))));
    }
}
