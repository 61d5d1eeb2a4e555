use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::card::qr::QrError;
use crate::card::validation::ValidationError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(ValidationError),
    MethodNotAllowed,
    PayloadTooLarge,
    QrEncoding(QrError),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Validation(err) => write!(f, "Validation failed: {err}"),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::PayloadTooLarge => write!(f, "Request body too large"),
            AppError::QrEncoding(err) => write!(f, "QR encoding failed: {err}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::QrEncoding(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON error body. Internal details are logged here and never sent.
    pub fn body(&self) -> serde_json::Value {
        match self {
            AppError::BadRequest(msg) => json!({ "error": msg }),
            AppError::Validation(err) => json!({
                "error": err.message(),
                "field": err.field(),
            }),
            AppError::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            AppError::PayloadTooLarge => json!({ "error": "Request body too large" }),
            AppError::QrEncoding(err) => {
                tracing::error!("Failed to generate QR code: {err}");
                json!({ "error": "Failed to generate QR code" })
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                json!({ "error": "Internal server error" })
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), axum::Json(self.body())).into_response()
    }
}

impl From<QrError> for AppError {
    fn from(err: QrError) -> Self {
        AppError::QrEncoding(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}
