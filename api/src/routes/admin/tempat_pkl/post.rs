use super::common::{
    CreateTempatPklRequest, TempatPklResponse, body_rejection, internal_error, validation_failure,
};
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::tempat_pkl::{Model as TempatPklModel, WithStudentCount};
use util::state::AppState;
use validator::Validate;

/// POST /api/admin/tempat-pkl
///
/// Creates a placement location.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Company X",
///   "address": "Street 1",
///   "phone": "021-5550101",
///   "email": "hr@companyx.co.id",
///   "contactName": "Budi"
/// }
/// ```
///
/// ### Validation Rules
/// * `name`: required, not blank
/// * `address`: required, not blank
/// * `phone`, `email`, `contactName`: optional strings
///
/// ### Responses
///
/// - `201 Created` — `data` is the new placement with `assignedStudentCount: 0`
/// - `400 Bad Request`
/// ```json
/// {
///   "success": false,
///   "data": { "address": ["Address is required"] },
///   "message": "Address is required"
/// }
/// ```
/// - `401 Unauthorized`
/// - `500 Internal Server Error`
pub async fn create_tempat_pkl(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateTempatPklRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return body_rejection(rejection),
    };

    if let Err(errors) = req.validate() {
        return validation_failure(&errors);
    }

    match TempatPklModel::create(app_state.db(), req.into_fields()).await {
        Ok(tempat_pkl) => {
            tracing::info!(tempat_pkl_id = %tempat_pkl.id, "Created tempat PKL");
            let data = TempatPklResponse::from(WithStudentCount {
                tempat_pkl,
                student_count: 0,
            });
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(data, "Tempat PKL created successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error creating tempat PKL", e),
    }
}
