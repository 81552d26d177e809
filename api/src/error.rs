use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rag_system::{ErrorResponse, ServiceError};

/// HTTP face of `ServiceError`: 400 for bad input, 502 when a collaborator
/// failed. The body keeps the `{"error": ...}` shape clients already parse.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

/// Malformed or mistyped JSON bodies are bad input like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(ServiceError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            log::warn!("Request failed upstream: {}", self.0);
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
            error_kind: self.0.kind().to_string(),
        });

        (status, body).into_response()
    }
}
