// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info};

use super::json_body;
use crate::{auth::TokenPair, error::ApiError, models::LoginRequest, state::AppState};

/// Exchange a username for an access/refresh token pair.
///
/// The account is looked up by `username` only.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Credentials issued", body = TokenPair),
        (status = 400, description = "Body is not valid JSON"),
        (status = 404, description = "No account with this username"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenPair>, ApiError> {
    let request = json_body(payload)?;
    let username = request.username.unwrap_or_default();

    let Some(account) = state.users.find_by_username(&username).await? else {
        debug!(%username, "login for unknown account");
        return Err(ApiError::not_found("User not found!"));
    };

    let tokens = state.tokens.issue(account.id)?;
    info!(account_id = account.id, "issued credentials");
    Ok(Json(tokens))
}
