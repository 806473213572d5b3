// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::debug;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{require_account, TokenPair},
    error::ApiError,
    models::{
        Account, Course, CreateAccountRequest, CreateCourseRequest, EnrollRequest, Enrollment,
        LoginRequest, MessageResponse,
    },
    services::ServiceError,
    state::AppState,
};

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod users;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/enroll", post(enrollments::enroll))
        .route(
            "/enrollments/{id}",
            get(enrollments::list_enrollments).delete(enrollments::remove_enrollment),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_account,
        ));

    let routes = Router::new()
        .route("/login", post(auth::login))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .merge(protected)
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(CorsLayer::permissive())
}

/// Unwrap a JSON body, turning any rejection into `400 Invalid input`.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            debug!(error = %rejection, "rejecting request body");
            Err(ServiceError::InvalidInput.into())
        }
    }
}

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        users::list_users,
        users::create_user,
        courses::list_courses,
        courses::create_course,
        enrollments::enroll,
        enrollments::list_enrollments,
        enrollments::remove_enrollment,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            Account,
            Course,
            Enrollment,
            CreateAccountRequest,
            CreateCourseRequest,
            EnrollRequest,
            LoginRequest,
            MessageResponse,
            TokenPair,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "Auth", description = "Credential issuance"),
        (name = "Users", description = "Account management"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Enrollments", description = "Account/course enrollments"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
