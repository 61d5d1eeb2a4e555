pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod notice;
pub mod card;
pub mod cors;
pub mod routes;
pub mod views;
pub mod invoke;
pub mod client;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::card::qr::{PngQrEncoder, QrEncoder};
use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    let encoder = Arc::new(PngQrEncoder::new(&config.qr));
    build_app_with_encoder(config, encoder)
}

/// Same as [`build_app`] with a caller-supplied QR encoder.
pub fn build_app_with_encoder(config: Config, encoder: Arc<dyn QrEncoder>) -> Router {
    let allow_origin = cors::origin(&config.cors_origin);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState::new(config, encoder));

    Router::new()
        .merge(routes::card_routes(allow_origin, max_body_size))
        .merge(views::view_routes(max_body_size))
        .route("/health", axum::routing::get(health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
