use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Faults raised while handling a single request
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The upstream could not be reached or its body could not be read
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Anything else that went wrong during dispatch
    #[error("{0}")]
    Internal(String),
}

impl From<QueryRejection> for ProxyError {
    fn from(rejection: QueryRejection) -> Self {
        ProxyError::Internal(rejection.body_text())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::Upstream(e) => {
                error!("Upstream transport error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({
                        "error": "Upstream request failed",
                        "message": e.to_string(),
                    })),
                )
                    .into_response()
            }
            ProxyError::Internal(message) => {
                error!("Request failed: {}", message);
                worker_error(message)
            }
        }
    }
}

/// The 500 body returned for any fault inside this service
pub fn worker_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Worker error",
            "message": message,
        })),
    )
        .into_response()
}
