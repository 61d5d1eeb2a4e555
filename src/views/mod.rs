pub mod form;
pub mod upload;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::limit::RequestBodyLimitLayer;

use crate::state::SharedState;

pub fn view_routes(max_body_size: usize) -> Router<SharedState> {
    Router::new()
        .route("/", get(form::form_page))
        .route("/card", post(form::submit))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(DefaultBodyLimit::disable())
}
