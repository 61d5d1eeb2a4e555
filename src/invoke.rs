//! On-demand invocation adapter: one call per request, no listener.
//!
//! Hosts that hand a function the method and body of a single request (and
//! expect status, headers and body back) call [`handle`]. The card logic is
//! the same [`service::issue`] the HTTP router uses.

use axum::body::Bytes;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};

use crate::card::service;
use crate::cors;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct Invocation {
    pub method: Method,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct InvocationResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl InvocationResponse {
    /// Parse the body as JSON; `None` for an empty or non-JSON body.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

pub fn handle(state: &AppState, invocation: Invocation) -> InvocationResponse {
    let origin = cors::origin(&state.config.cors_origin);

    if invocation.method == Method::OPTIONS {
        let mut headers = HeaderMap::new();
        for (name, value) in cors::preflight_headers(origin) {
            headers.insert(name, value);
        }
        return InvocationResponse {
            status: StatusCode::OK,
            headers,
            body: Bytes::new(),
        };
    }

    let result = if invocation.method != Method::POST {
        Err(AppError::MethodNotAllowed)
    } else if invocation.body.len() > state.config.max_body_size {
        Err(AppError::PayloadTooLarge)
    } else {
        service::parse_request(&invocation.body).and_then(|request| service::issue(state, request))
    };

    let (status, body) = match result {
        Ok(card) => match serde_json::to_vec(&card) {
            Ok(bytes) => (StatusCode::OK, bytes),
            Err(e) => error_body(AppError::Internal(format!("Failed to serialize card: {e}"))),
        },
        Err(err) => error_body(err),
    };

    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    InvocationResponse {
        status,
        headers,
        body: Bytes::from(body),
    }
}

fn error_body(err: AppError) -> (StatusCode, Vec<u8>) {
    // A json! value always serializes.
    (err.status(), serde_json::to_vec(&err.body()).unwrap_or_default())
}
