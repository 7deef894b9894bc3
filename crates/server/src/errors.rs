use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::types::ErrorBody;
use service::errors::ServiceError;

/// Error response rendered as `{"error": message}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Db(cause) => {
                // cause stays server-side
                error!(error = %cause, "store operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, e.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let v: JsonApiError = ServiceError::Validation("name is required".into()).into();
        assert_eq!(v.status, StatusCode::BAD_REQUEST);
        assert_eq!(v.message, "name is required");

        let n: JsonApiError = ServiceError::not_found("dish").into();
        assert_eq!(n.status, StatusCode::NOT_FOUND);

        let d: JsonApiError = ServiceError::Db("password authentication failed".into()).into();
        assert_eq!(d.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(d.message, "Internal server error");
    }
}
