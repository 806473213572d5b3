// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account service.

use tracing::info;

use super::{required_text, ServiceResult};
use crate::models::{Account, CreateAccountRequest};
use crate::storage::{AccountRepository, Database};

#[derive(Clone, Debug)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Account>> {
        let rows = AccountRepository::new(&self.db).list().await?;
        Ok(rows.into_iter().map(Account::from).collect())
    }

    pub async fn find_by_username(&self, username: &str) -> ServiceResult<Option<Account>> {
        let row = AccountRepository::new(&self.db)
            .find_by_username(username)
            .await?;
        Ok(row.map(Account::from))
    }

    /// Create an account. A duplicate username or email is a storage error.
    pub async fn create(&self, request: CreateAccountRequest) -> ServiceResult<Account> {
        let username = required_text(request.username)?;
        let email = required_text(request.email)?;

        let row = AccountRepository::new(&self.db)
            .create(&username, &email)
            .await?;
        info!(account_id = row.id, "account created");
        Ok(row.into())
    }
}
