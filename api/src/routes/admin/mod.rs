//! # Admin Routes Module
//!
//! Route groups mounted under `/api/admin`. The whole group is wrapped by the
//! `allow_admin` guard in [`crate::routes::routes`], so handlers in here never
//! repeat the session check.

use axum::Router;
use util::state::AppState;

pub mod tempat_pkl;

use tempat_pkl::tempat_pkl_routes;

pub fn admin_routes() -> Router<AppState> {
    Router::new().merge(tempat_pkl_routes())
}
