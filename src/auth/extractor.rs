// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the authenticated account.
//!
//! ```rust,ignore
//! async fn my_handler(CurrentAccount(account): CurrentAccount) -> impl IntoResponse {
//!     // account is the stored Account behind the bearer token
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{middleware::authenticate, AuthError};
use crate::models::Account;
use crate::state::AppState;

/// The account resolved from the request's bearer credential.
///
/// Behind the [`require_account`](super::middleware::require_account) guard
/// this reads the account the guard already resolved. Used on a route
/// without the guard, it authenticates the request itself.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(current) = parts.extensions.get::<CurrentAccount>().cloned() {
            return Ok(current);
        }

        let account = authenticate(state, &parts.headers).await?;
        Ok(CurrentAccount(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AccountRepository, Database};
    use axum::http::Request;

    #[tokio::test]
    async fn extractor_requires_auth_header() {
        let state = AppState::for_tests(Database::for_tests().await);
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = CurrentAccount::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn extractor_authenticates_without_guard() {
        let state = AppState::for_tests(Database::for_tests().await);
        let account = AccountRepository::new(&state.db)
            .create("john_doe", "john@example.com")
            .await
            .unwrap();
        let token = state.tokens.issue(account.id).unwrap().access_token;
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let CurrentAccount(resolved) = CurrentAccount::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(resolved.id, account.id);
        assert_eq!(resolved.username, "john_doe");
    }

    #[tokio::test]
    async fn extractor_prefers_extensions() {
        let state = AppState::for_tests(Database::for_tests().await);
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        parts.extensions.insert(CurrentAccount(Account {
            id: 99,
            username: "from_guard".to_string(),
            email: "guard@example.com".to_string(),
        }));

        let CurrentAccount(resolved) = CurrentAccount::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(resolved.username, "from_guard");
    }
}
