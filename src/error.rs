use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::state::ModelError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Operation cannot be performed in the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Destructive operation invoked without explicit confirmation.
    #[error("confirmation required: {0}")]
    ConfirmationRequired(String),
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownPlayer(_) => ServiceError::NotFound(err.to_string()),
            ModelError::NoSession => ServiceError::InvalidState(err.to_string()),
            ModelError::MissingGame
            | ModelError::InvalidPlayerCount(_)
            | ModelError::TooManyRounds(_)
            | ModelError::EmptyGameName
            | ModelError::NoScoringFields
            | ModelError::RoundOutOfRange { .. }
            | ModelError::UnknownField(_) => ServiceError::InvalidInput(err.to_string()),
        }
    }
}

/// Errors surfaced by handlers, rendered as `{"message": ...}` with a matching status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Unknown player, record or round.
    #[error("not found: {0}")]
    NotFound(String),
    /// The request clashes with current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The caller must repeat the request with `confirm=true`.
    #[error("precondition required: {0}")]
    PreconditionRequired(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PreconditionRequired(_) => StatusCode::PRECONDITION_REQUIRED,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::InvalidState(message) => AppError::Conflict(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::ConfirmationRequired(message) => AppError::PreconditionRequired(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
