// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::auth::TokenError;
use crate::services::ServiceError;
use crate::storage::StorageError;

/// JSON key the message is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKey {
    /// `{"error": ...}` for rejected input and failures.
    Error,
    /// `{"message": ...}` for lookups that found nothing.
    Message,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub key: BodyKey,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorBody {
    Error { error: String },
    Message { message: String },
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            key: BodyKey::Error,
        }
    }

    /// 404 reported as `{"message": ...}`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            key: BodyKey::Message,
            ..Self::new(StatusCode::NOT_FOUND, message)
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal server error occurred.",
        )
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        error!(error = %err, "storage operation failed");
        Self::internal()
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        error!(error = %err, "token issuance failed");
        Self::internal()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput => Self::bad_request(err.to_string()),
            ServiceError::Storage(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.key {
            BodyKey::Error => ErrorBody::Error {
                error: self.message,
            },
            BodyKey::Message => ErrorBody::Message {
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
