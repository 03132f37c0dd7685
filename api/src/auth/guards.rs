use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

#[derive(serde::Serialize, Default)]
pub struct Empty;

type GuardRejection = (StatusCode, Json<ApiResponse<Empty>>);

fn unauthorized(message: &str) -> GuardRejection {
    (StatusCode::UNAUTHORIZED, Json(ApiResponse::error(message)))
}

/// Helper to extract and validate the user, then insert it back into the request extensions.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), GuardRejection> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|(_, reason)| {
            tracing::debug!(reason, "Rejected unauthenticated request");
            unauthorized("Unauthorized")
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Admin-only guard.
///
/// Callers without a session and callers whose session lacks the admin role
/// are both answered with `401 Unauthorized`; the handler never runs.
pub async fn allow_admin(req: Request<Body>, next: Next) -> Result<Response, GuardRejection> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !user.is_admin() {
        tracing::warn!(user_id = user.0.sub, "Non-admin attempted admin route");
        return Err(unauthorized("Unauthorized"));
    }

    Ok(next.run(req).await)
}
