// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! SQL DDL for the account, course and enrollment tables.

/// SQLite schema.
///
/// - `account.username` and `account.email` are UNIQUE
/// - `enrollment` references both parents with `ON DELETE CASCADE`
/// - no uniqueness on `(user_id, course_id)`: duplicate enrollments are allowed
/// - `enrolled_at` is stored as RFC3339 text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS account (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS course (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS enrollment (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES account(id) ON DELETE CASCADE,
    course_id INTEGER NOT NULL REFERENCES course(id) ON DELETE CASCADE,
    enrolled_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_enrollment_user_id ON enrollment(user_id);
"#;
