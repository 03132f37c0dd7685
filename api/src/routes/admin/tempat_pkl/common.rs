//! # Tempat PKL DTOs
//!
//! Request payloads, the response shape, and the error responses shared by
//! the four handlers. Wire names are camelCase.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{format_validation_errors, validation_error_map};
use db::models::tempat_pkl::{TempatPklFields, WithStudentCount};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use validator::{ValidationError, ValidationErrors};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Blank optional text is stored as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Body of `POST /api/admin/tempat-pkl`.
///
/// `name` and `address` are `Option` so that a missing key is reported as a
/// field-level validation error instead of a deserialization failure.
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTempatPklRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Address is required"),
        custom(function = "validate_not_blank", message = "Address is required")
    )]
    pub address: Option<String>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
}

impl CreateTempatPklRequest {
    pub fn into_fields(self) -> TempatPklFields {
        TempatPklFields {
            name: self.name.unwrap_or_default().trim().to_owned(),
            address: self.address.unwrap_or_default().trim().to_owned(),
            phone: non_blank(self.phone),
            email: non_blank(self.email),
            contact_name: non_blank(self.contact_name),
        }
    }
}

/// Body of `PUT /api/admin/tempat-pkl`: the create payload plus `id`.
#[derive(Debug, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTempatPklRequest {
    #[validate(
        required(message = "ID is required"),
        custom(function = "validate_not_blank", message = "ID is required")
    )]
    pub id: Option<String>,

    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Address is required"),
        custom(function = "validate_not_blank", message = "Address is required")
    )]
    pub address: Option<String>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
}

impl UpdateTempatPklRequest {
    /// Splits the payload into the target id and the fields to write.
    pub fn into_parts(self) -> (String, TempatPklFields) {
        let id = self.id.unwrap_or_default().trim().to_owned();
        let fields = CreateTempatPklRequest {
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            contact_name: self.contact_name,
        }
        .into_fields();
        (id, fields)
    }
}

/// Query string of `DELETE /api/admin/tempat-pkl`.
#[derive(Debug, Deserialize)]
pub struct DeleteTempatPklQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempatPklResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
    pub assigned_student_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WithStudentCount> for TempatPklResponse {
    fn from(value: WithStudentCount) -> Self {
        let WithStudentCount {
            tempat_pkl,
            student_count,
        } = value;
        Self {
            id: tempat_pkl.id,
            name: tempat_pkl.name,
            address: tempat_pkl.address,
            phone: tempat_pkl.phone,
            email: tempat_pkl.email,
            contact_name: tempat_pkl.contact_name,
            assigned_student_count: student_count,
            created_at: tempat_pkl.created_at.to_rfc3339(),
            updated_at: tempat_pkl.updated_at.to_rfc3339(),
        }
    }
}

/// `400` carrying a field -> messages map in `data`.
pub fn validation_failure(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error_with_data(
            validation_error_map(errors),
            format_validation_errors(errors),
        )),
    )
        .into_response()
}

/// `400` for bodies that are not valid JSON or have wrongly typed fields.
pub fn body_rejection(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
        .into_response()
}

/// Plain error envelope with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

/// Logs the underlying failure and answers with a generic `500`.
pub fn internal_error(context: &str, err: impl Display) -> Response {
    tracing::error!(error = %err, "{}", context);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
