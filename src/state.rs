// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::services::{CourseService, EnrollmentService, UserService};
use crate::storage::Database;

/// Everything the route layer needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: Arc<TokenIssuer>,
    pub users: UserService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenIssuer) -> Self {
        Self {
            users: UserService::new(db.clone()),
            courses: CourseService::new(db.clone()),
            enrollments: EnrollmentService::new(db.clone()),
            tokens: Arc::new(tokens),
            db,
        }
    }

    /// State over `db` with a fixed test signing secret.
    #[cfg(test)]
    pub fn for_tests(db: Database) -> Self {
        use std::time::Duration;

        let tokens = TokenIssuer::new(
            b"test-secret",
            Duration::from_secs(900),
            Duration::from_secs(30 * 24 * 3600),
        );
        Self::new(db, tokens)
    }
}
