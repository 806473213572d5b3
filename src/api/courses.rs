// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::json_body;
use crate::{
    auth::CurrentAccount,
    error::ApiError,
    models::{Course, CreateCourseRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    security(("bearer" = [])),
    responses(
        (status = 200, body = [Course]),
        (status = 401),
        (status = 403),
        (status = 404, description = "No courses"),
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
    _caller: CurrentAccount,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state.courses.list().await?;
    if courses.is_empty() {
        return Err(ApiError::not_found("No courses found"));
    }
    Ok(Json(courses))
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    tag = "Courses",
    security(("bearer" = [])),
    responses(
        (status = 201, body = Course),
        (status = 400, description = "Missing name or description"),
        (status = 401),
        (status = 403),
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    _caller: CurrentAccount,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let request = json_body(payload)?;
    let course = state.courses.create(request).await?;
    Ok((StatusCode::CREATED, Json(course)))
}
