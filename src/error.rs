//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("invalid room id")]
    InvalidId,
    #[error("room not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Body(#[from] BytesRejection),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        source: sqlx::Error,
    },
}

impl AppError {
    /// Attach the operation message shown in a 500 body. Client-facing errors pass through.
    pub fn context(self, context: &'static str) -> Self {
        match self {
            AppError::Db(source) => AppError::Internal { context, source },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Body(rejection) => rejection.status(),
            AppError::Db(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    fn message(message: &str) -> Self {
        ErrorBody {
            message: message.to_string(),
            errors: None,
            error: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(errors) => ErrorBody {
                errors: Some(errors),
                ..ErrorBody::message("Validation error")
            },
            AppError::InvalidId => ErrorBody::message("Invalid room ID"),
            AppError::NotFound => ErrorBody::message("Room not found"),
            AppError::BadRequest(detail) => ErrorBody {
                error: Some(detail),
                ..ErrorBody::message("Invalid JSON body")
            },
            AppError::Body(rejection) => ErrorBody::message(&rejection.body_text()),
            AppError::Db(source) => {
                tracing::error!(error = %source, "unhandled database error");
                ErrorBody {
                    error: Some(source.to_string()),
                    ..ErrorBody::message("Internal server error")
                }
            }
            AppError::Internal { context, source } => {
                tracing::error!(error = %source, "{}", context);
                ErrorBody {
                    error: Some(source.to_string()),
                    ..ErrorBody::message(context)
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_only_database_errors() {
        let err = AppError::Db(sqlx::Error::PoolClosed).context("Error fetching rooms");
        assert!(matches!(err, AppError::Internal { context: "Error fetching rooms", .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::NotFound.context("Error fetching room");
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(AppError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Validation(vec![]).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BadRequest("eof".into()).status(), StatusCode::BAD_REQUEST);
    }
}
