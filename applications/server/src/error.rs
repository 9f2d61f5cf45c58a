/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Failures raised while starting or running the server
///
/// Searching itself is total; these come from configuration and dataset
/// loading.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] phasebook_core::PhasebookError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Dataset(ref e) => {
                tracing::error!("Dataset error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Dataset error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
