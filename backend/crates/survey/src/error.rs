//! Survey Error Types
//!
//! Survey-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Survey-specific result type alias
pub type SurveyResult<T> = Result<T, SurveyError>;

/// Survey-specific error variants
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Unknown or malformed survey id
    #[error("Survey not found")]
    NotFound,

    #[error("You have already responded to this survey")]
    AlreadyResponded,

    /// Body is not valid JSON for the endpoint
    #[error("{0}")]
    InvalidRequest(String),

    /// Answers do not fit the survey's questions
    #[error("{0}")]
    InvalidAnswer(String),

    /// Survey definition failed validation
    #[error("{0}")]
    InvalidSurvey(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SurveyError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SurveyError::NotFound => ErrorKind::NotFound,
            SurveyError::AlreadyResponded
            | SurveyError::InvalidRequest(_)
            | SurveyError::InvalidAnswer(_)
            | SurveyError::InvalidSurvey(_) => ErrorKind::BadRequest,
            SurveyError::Database(e) => AppError::from_sqlx(e).kind(),
            SurveyError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            SurveyError::Database(e) => AppError::from_sqlx(e),
            SurveyError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SurveyError::Database(e) => {
                tracing::error!(error = %e, "Survey database error");
            }
            SurveyError::Internal(msg) => {
                tracing::error!(message = %msg, "Survey internal error");
            }
            SurveyError::AlreadyResponded => {
                tracing::warn!("Duplicate survey response rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Survey error");
            }
        }
    }
}

impl IntoResponse for SurveyError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for SurveyError {
    fn from(rejection: JsonRejection) -> Self {
        SurveyError::InvalidRequest(rejection.body_text())
    }
}
