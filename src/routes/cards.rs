use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::card::service;
use crate::cors;
use crate::error::AppError;
use crate::models::IdCard;
use crate::state::SharedState;

pub async fn generate(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<IdCard>, AppError> {
    let request = service::parse_request(&body)?;
    let card = service::issue(&state, request)?;
    Ok(Json(card))
}

pub async fn preflight(State(state): State<SharedState>) -> Response {
    (
        StatusCode::OK,
        cors::preflight_headers(cors::origin(&state.config.cors_origin)),
    )
        .into_response()
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// The body limit answers with a plain-text 413; card clients expect `{error}`.
pub async fn payload_too_large_as_json(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge.into_response()
    } else {
        response
    }
}
