// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Demo data for local development.

use tracing::info;

use crate::storage::{AccountRepository, Database, StorageResult, StoredAccount};

pub const DEMO_USERNAME: &str = "john_doe";
pub const DEMO_EMAIL: &str = "john@example.com";

/// Make sure the demo account exists. Safe to run on every startup.
pub async fn seed_demo_account(db: &Database) -> StorageResult<StoredAccount> {
    let repo = AccountRepository::new(db);
    if let Some(existing) = repo.find_by_username(DEMO_USERNAME).await? {
        info!(account_id = existing.id, "demo account already present");
        return Ok(existing);
    }

    let account = repo.create(DEMO_USERNAME, DEMO_EMAIL).await?;
    info!(account_id = account.id, username = DEMO_USERNAME, "seeded demo account");
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_twice_keeps_one_account() {
        let db = Database::for_tests().await;
        let first = seed_demo_account(&db).await.unwrap();
        let second = seed_demo_account(&db).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.email, DEMO_EMAIL);
        assert_eq!(AccountRepository::new(&db).list().await.unwrap().len(), 1);
    }
}
