use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No files uploaded")]
    NoFilesUploaded,

    #[error("File type {0} is not allowed.")]
    DisallowedExtension(String),

    #[error("File not found")]
    FileNotFound,

    #[error("File processing not complete")]
    ProcessingNotComplete,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NoFilesUploaded => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DisallowedExtension(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::FileNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::ProcessingNotComplete => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Anyhow(e) => {
                tracing::error!("Anyhow error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}
