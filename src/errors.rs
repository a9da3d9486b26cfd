use actix_web::{http::StatusCode, HttpResponse};
use derive_more::{Display, Error};

/// Client-facing error taxonomy. Store failures are logged with full detail
/// where they are converted and surface only as the generic `Internal`
/// variant; the 403 message does not distinguish a missing meeting from a
/// foreign one.
#[derive(Debug, Display, Error, serde::Serialize, serde::Deserialize)]
pub enum ApiError {
    #[display(fmt = "invalid or expired token")]
    Unauthorized,

    #[display(fmt = "not authorized or meeting not found")]
    Forbidden,

    #[display(fmt = "internal error")]
    Internal,
}

impl actix_web::error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        log::error!("database error: {}", err);
        ApiError::Internal
    }
}
