use super::common::{DeleteTempatPklQuery, error_response, internal_error};
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::tempat_pkl::{Model as TempatPklModel, TempatPklError};
use util::state::AppState;

/// DELETE /api/admin/tempat-pkl?id={id}
///
/// Deletes a placement location that has no students assigned to it.
///
/// ### Query Parameters
/// - `id` — ID of the placement to delete (required)
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Tempat PKL deleted successfully"
/// }
/// ```
/// - `400 Bad Request` — `id` missing, or students are still assigned
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Cannot delete location with assigned students"
/// }
/// ```
/// - `401 Unauthorized`
/// - `404 Not Found` — no placement with that id
/// - `500 Internal Server Error`
pub async fn delete_tempat_pkl(
    State(app_state): State<AppState>,
    Query(params): Query<DeleteTempatPklQuery>,
) -> Response {
    let id = match params.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => return error_response(StatusCode::BAD_REQUEST, "ID is required"),
    };

    match TempatPklModel::delete(app_state.db(), &id).await {
        Ok(()) => {
            tracing::info!(tempat_pkl_id = %id, "Deleted tempat PKL");
            (
                StatusCode::OK,
                Json(ApiResponse::success((), "Tempat PKL deleted successfully")),
            )
                .into_response()
        }
        Err(TempatPklError::HasAssignedStudents) => error_response(
            StatusCode::BAD_REQUEST,
            "Cannot delete location with assigned students",
        ),
        Err(TempatPklError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Tempat PKL not found")
        }
        Err(e) => internal_error("Error deleting tempat PKL", e),
    }
}
