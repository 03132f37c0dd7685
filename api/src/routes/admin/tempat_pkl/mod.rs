//! # Tempat PKL Routes Module
//!
//! CRUD for internship placement locations at `/api/admin/tempat-pkl`.
//!
//! ## Structure
//! - `get.rs` — list placements with their student counts
//! - `post.rs` — create a placement
//! - `put.rs` — update a placement (id in the body)
//! - `delete.rs` — delete a placement (id in the query string)
//! - `common.rs` — request/response DTOs and shared error responses

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_tempat_pkl;
use get::list_tempat_pkl;
use post::create_tempat_pkl;
use put::update_tempat_pkl;

/// Builds the `/tempat-pkl` routes.
///
/// - `GET /tempat-pkl` → `list_tempat_pkl`
/// - `POST /tempat-pkl` → `create_tempat_pkl`
/// - `PUT /tempat-pkl` → `update_tempat_pkl`
/// - `DELETE /tempat-pkl?id=...` → `delete_tempat_pkl`
pub fn tempat_pkl_routes() -> Router<AppState> {
    Router::new().route(
        "/tempat-pkl",
        get(list_tempat_pkl)
            .post(create_tempat_pkl)
            .put(update_tempat_pkl)
            .delete(delete_tempat_pkl),
    )
}
