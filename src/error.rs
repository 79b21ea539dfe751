use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported export target: {0}")]
    UnsupportedExportTarget(String),

    #[error("Download sink unavailable: {0}")]
    DownloadSinkUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingRequiredField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::UnsupportedExportTarget(target) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported export target: {}", target),
            ),
            AppError::DownloadSinkUnavailable(msg) => {
                tracing::error!("Download sink unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Download unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
