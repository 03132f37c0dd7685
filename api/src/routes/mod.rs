//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/admin` → Administrative endpoints (admin session required)

use crate::auth::guards::allow_admin;
use crate::routes::{admin::admin_routes, health::health_routes};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod admin;
pub mod health;

/// Builds the router for everything under `/api`.
///
/// The admin guard is attached with `route_layer`, so it runs only for
/// requests that matched an admin route; unknown paths still answer `404`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/admin", admin_routes().route_layer(from_fn(allow_admin)))
}
