pub mod cards;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::middleware;
use axum::routing::post;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::SharedState;

/// Paths the card endpoint answers on. The `/api` form matches how on-demand
/// hosts mount functions.
pub const CARD_PATHS: [&str; 2] = ["/generate-id-card", "/api/generate-id-card"];

/// Card endpoint routes. The body limit sits below the allow-origin header
/// so oversized requests still get the header and a JSON error.
pub fn card_routes(allow_origin: HeaderValue, max_body_size: usize) -> Router<SharedState> {
    let card = post(cards::generate)
        .options(cards::preflight)
        .fallback(cards::method_not_allowed);

    CARD_PATHS
        .iter()
        .fold(Router::new(), |router, path| router.route(path, card.clone()))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::map_response(cards::payload_too_large_as_json))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            allow_origin,
        ))
}
