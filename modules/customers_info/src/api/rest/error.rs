use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::error::DomainError;

/// JSON error body returned by the REST layer.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// REST-facing error: a status code plus a JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                message: message.into(),
                errors: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CustomerNotFound { id } => Self::new(
                StatusCode::NOT_FOUND,
                format!("Customer with id {id} was not found"),
            ),
            DomainError::EmailAlreadyExists { email } => Self::new(
                StatusCode::CONFLICT,
                format!("Email '{email}' is already in use"),
            ),
            DomainError::Validation { violations } => Self {
                status: StatusCode::BAD_REQUEST,
                body: ErrorBody {
                    message: "Validation failed".to_string(),
                    errors: Some(violations.iter().map(|v| v.to_string()).collect()),
                },
            },
            DomainError::Storage { .. } => {
                // Log the internal details but don't expose them to the client
                tracing::error!(error = %e, "Storage error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal storage error occurred",
                )
            }
        }
    }
}
