#[cfg(test)]
mod tests {
    use crate::helpers::{
        TEST_JWT_SECRET, admin_token, empty_request, get_json_body, make_test_app,
    };
    use api::auth::Claims;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serial_test::serial;
    use tower::ServiceExt;

    const URI: &str = "/api/admin/tempat-pkl";

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_expired_admin_token_is_rejected() {
        let (app, _) = make_test_app().await;

        let token = sign(
            &Claims {
                sub: 1,
                admin: true,
                exp: (Utc::now().timestamp() - 3600) as usize,
            },
            TEST_JWT_SECRET,
        );
        let response = app
            .oneshot(empty_request("GET", URI, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let (app, _) = make_test_app().await;

        let token = sign(
            &Claims {
                sub: 1,
                admin: true,
                exp: (Utc::now().timestamp() + 3600) as usize,
            },
            "some-other-secret",
        );
        let response = app
            .oneshot(empty_request("DELETE", &format!("{URI}?id=x"), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_malformed_authorization_header_is_rejected() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri(URI)
            .header("Authorization", "Token abc")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_admin_path_is_not_guarded() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(empty_request("GET", "/api/admin/nope", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_token_reaches_handler() {
        let (app, _) = make_test_app().await;

        let token = admin_token();
        let response = app
            .oneshot(empty_request("GET", URI, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
