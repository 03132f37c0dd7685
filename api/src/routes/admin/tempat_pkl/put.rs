use super::common::{
    TempatPklResponse, UpdateTempatPklRequest, body_rejection, error_response, internal_error,
    validation_failure,
};
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::tempat_pkl::{Model as TempatPklModel, TempatPklError};
use util::state::AppState;
use validator::Validate;

/// PUT /api/admin/tempat-pkl
///
/// Replaces the writable fields of an existing placement. The target is named
/// by `id` in the body; optional fields left out are cleared.
///
/// ### Request Body
/// ```json
/// {
///   "id": "4f1c…",
///   "name": "Company X2",
///   "address": "Street 2"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` — `data` is the updated placement including `assignedStudentCount`
/// - `400 Bad Request` — malformed body or failed validation (field map in `data`)
/// - `401 Unauthorized`
/// - `404 Not Found` — no placement with that id
/// - `500 Internal Server Error`
pub async fn update_tempat_pkl(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateTempatPklRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return body_rejection(rejection),
    };

    if let Err(errors) = req.validate() {
        return validation_failure(&errors);
    }

    let (id, fields) = req.into_parts();

    match TempatPklModel::update(app_state.db(), &id, fields).await {
        Ok(updated) => {
            tracing::info!(tempat_pkl_id = %id, "Updated tempat PKL");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    TempatPklResponse::from(updated),
                    "Tempat PKL updated successfully",
                )),
            )
                .into_response()
        }
        Err(TempatPklError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Tempat PKL not found")
        }
        Err(e) => internal_error("Error updating tempat PKL", e),
    }
}
