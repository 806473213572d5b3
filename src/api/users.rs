// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::json_body;
use crate::{
    auth::CurrentAccount,
    error::ApiError,
    models::{Account, CreateAccountRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All accounts", body = [Account]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token account no longer exists"),
        (status = 404, description = "No accounts"),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    _caller: CurrentAccount,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.users.list().await?;
    if accounts.is_empty() {
        return Err(ApiError::not_found("No users found"));
    }
    Ok(Json(accounts))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateAccountRequest,
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Missing username or email"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Token account no longer exists"),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let request = json_body(payload)?;
    let account = state.users.create(request).await?;
    debug!(caller = caller.id, account_id = account.id, "account created via api");
    Ok((StatusCode::CREATED, Json(account)))
}
