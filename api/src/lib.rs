pub mod auth;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;
use util::state::AppState;

use crate::{auth::middleware::log_request, routes::routes};

/// Assembles the full application: `/api` routes, request logging and CORS.
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes())
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}
