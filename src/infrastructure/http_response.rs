// HTTP response utilities for API errors
use crate::error::ConfiguratorError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures a handler can return to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid value for parameter: {0}")]
    InvalidParameter(&'static str),

    #[error(transparent)]
    Configurator(#[from] ConfiguratorError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidParameter(_) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::Configurator(ConfiguratorError::Upstream(_)) => {
                (StatusCode::BAD_GATEWAY, "upstream")
            }
            ApiError::Configurator(ConfiguratorError::Mapping(_)) => {
                (StatusCode::BAD_GATEWAY, "mapping")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", kind, self);
        }

        let body = ErrorBody {
            error: self.to_string(),
            kind,
        };
        (status, Json(body)).into_response()
    }
}
