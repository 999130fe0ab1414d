use actix_web::{error, http::StatusCode, HttpResponse};
use crate::core::AnalysisError;
use crate::models::ErrorResponse;
use crate::services::AuthError;

fn json_error(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

impl error::ResponseError for AnalysisError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        json_error(error::ResponseError::status_code(self), self.kind(), self.to_string())
    }
}

impl error::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        json_error(StatusCode::UNAUTHORIZED, "unauthorized", self.to_string())
    }
}
