// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access guard middleware for Axum.
//!
//! Installed as a route layer over every protected route:
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/courses", get(list_courses))
//!     .route_layer(axum::middleware::from_fn_with_state(
//!         state.clone(),
//!         require_account,
//!     ));
//! ```
//!
//! For each request the guard
//!
//! 1. reads `Authorization: Bearer <token>`,
//! 2. verifies signature, expiry and token type,
//! 3. resolves the subject against the account table,
//! 4. inserts the [`CurrentAccount`] into request extensions and runs the
//!    wrapped handler.
//!
//! Any failure short-circuits with an [`AuthError`] response; the wrapped
//! handler is not invoked. The account is looked up on every request, so an
//! account deleted after login is refused (403) even while its token is
//! still within its validity window.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use super::{AuthError, CurrentAccount};
use crate::models::Account;
use crate::state::AppState;
use crate::storage::AccountRepository;

/// Access guard: authenticate the caller or reject the request.
pub async fn require_account(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(&state, request.headers()).await {
        Ok(account) => {
            request.extensions_mut().insert(CurrentAccount(account));
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

/// Verify the bearer credential in `headers` and resolve its account.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Account, AuthError> {
    let token = bearer_token(headers).inspect_err(|e| debug!(error = %e, "rejecting request"))?;

    let claims = state
        .tokens
        .verify_access(token)
        .inspect_err(|e| debug!(error = %e, "rejecting credential"))?;
    let account_id = claims.account_id()?;

    let account = AccountRepository::new(&state.db)
        .find(account_id)
        .await
        .map_err(|e| {
            error!(error = %e, account_id, "account lookup failed");
            AuthError::InternalError("account lookup failed".to_string())
        })?;

    match account {
        Some(account) => Ok(account.into()),
        None => {
            warn!(account_id, "valid credential for unknown account");
            Err(AuthError::AccountNotFound)
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?
        .trim();

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .ok_or(AuthError::InvalidAuthHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidAuthHeader);
    }
    Ok(token)
}
