use super::common::{TempatPklResponse, internal_error};
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::tempat_pkl::Model as TempatPklModel;
use util::state::AppState;

/// GET /api/admin/tempat-pkl
///
/// Lists every placement location ordered by name, each with the number of
/// students assigned to it.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": "4f1c…",
///       "name": "PT Maju Jaya",
///       "address": "Jl. Merdeka 1",
///       "phone": null,
///       "email": null,
///       "contactName": null,
///       "assignedStudentCount": 3,
///       "createdAt": "2025-07-01T08:00:00+00:00",
///       "updatedAt": "2025-07-01T08:00:00+00:00"
///     }
///   ],
///   "message": "Tempat PKL retrieved successfully"
/// }
/// ```
///
/// - `401 Unauthorized` — no session or not an admin
/// - `500 Internal Server Error` — generic message, details are only logged
pub async fn list_tempat_pkl(State(app_state): State<AppState>) -> Response {
    match TempatPklModel::list_with_student_counts(app_state.db()).await {
        Ok(rows) => {
            let data: Vec<TempatPklResponse> = rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Tempat PKL retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error fetching tempat PKL", e),
    }
}
