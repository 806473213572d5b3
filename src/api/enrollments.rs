// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Enrollment endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::json_body;
use crate::{
    auth::CurrentAccount,
    error::ApiError,
    models::{EnrollRequest, Enrollment, MessageResponse},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/enroll",
    request_body = EnrollRequest,
    tag = "Enrollments",
    security(("bearer" = [])),
    responses(
        (status = 201, body = Enrollment),
        (status = 400, description = "Missing user_id or course_id"),
        (status = 401),
        (status = 403),
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    _caller: CurrentAccount,
    payload: Result<Json<EnrollRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    let request = json_body(payload)?;
    let enrollment = state.enrollments.enroll(request).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// List the enrollments of one account. An empty list is a 200.
#[utoipa::path(
    get,
    path = "/enrollments/{id}",
    params(
        ("id" = i64, Path, description = "Account whose enrollments to list")
    ),
    tag = "Enrollments",
    security(("bearer" = [])),
    responses(
        (status = 200, body = [Enrollment]),
        (status = 401),
        (status = 403),
    )
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
    _caller: CurrentAccount,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    Ok(Json(state.enrollments.list_for_account(user_id).await?))
}

/// Remove an enrollment. Answers the same whether or not it existed.
#[utoipa::path(
    delete,
    path = "/enrollments/{id}",
    params(
        ("id" = i64, Path, description = "Enrollment to remove")
    ),
    tag = "Enrollments",
    security(("bearer" = [])),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401),
        (status = 403),
    )
)]
pub async fn remove_enrollment(
    State(state): State<AppState>,
    CurrentAccount(caller): CurrentAccount,
    Path(enrollment_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.enrollments.remove(enrollment_id).await?;
    debug!(caller = caller.id, enrollment_id, "enrollment removal handled");
    Ok(Json(MessageResponse::new("Enrollment removed")))
}
