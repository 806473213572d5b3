// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repository layer providing typed access to the SQLite tables.
//!
//! Each repository borrows the [`Database`](super::Database) and exposes the
//! CRUD operations for one table.

pub mod accounts;
pub mod courses;
pub mod enrollments;

pub use accounts::{AccountRepository, StoredAccount};
pub use courses::{CourseRepository, StoredCourse};
pub use enrollments::{EnrollmentRepository, StoredEnrollment};
