use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::DialogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DialogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match self {
            DialogError::Product(err) => return err.into_error_response(),
            DialogError::NotOpen | DialogError::AlreadyOpen => {
                (StatusCode::CONFLICT, "DialogStateError")
            }
            DialogError::InvalidDate => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (status, ErrorResponse::json(name, &message))
    }
}
