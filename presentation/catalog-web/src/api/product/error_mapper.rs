use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::Validation => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::json(name, &self.to_string()))
    }
}
