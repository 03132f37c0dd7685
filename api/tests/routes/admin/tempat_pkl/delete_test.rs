#[cfg(test)]
mod tests {
    use crate::helpers::{admin_token, empty_request, get_json_body, make_test_app, user_token};
    use axum::http::StatusCode;
    use db::models::{
        student::Model as StudentModel,
        tempat_pkl::{Model as TempatPklModel, TempatPklFields},
    };
    use serial_test::serial;
    use tower::ServiceExt;

    async fn seed(db: &sea_orm::DatabaseConnection, name: &str) -> TempatPklModel {
        TempatPklModel::create(
            db,
            TempatPklFields {
                name: name.into(),
                address: "Street 7".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
    }

    fn uri(id: &str) -> String {
        format!("/api/admin/tempat-pkl?id={}", id)
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_tempat_pkl_success() {
        let (app, app_state) = make_test_app().await;
        let existing = seed(app_state.db(), "Empty Place").await;

        let token = admin_token();
        let response = app
            .oneshot(empty_request("DELETE", &uri(&existing.id), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Tempat PKL deleted successfully");
        assert!(json["data"].is_null());

        let gone = TempatPklModel::find_by_id(app_state.db(), &existing.id)
            .await
            .unwrap();
        assert!(gone.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_refused_with_assigned_students() {
        let (app, app_state) = make_test_app().await;
        let existing = seed(app_state.db(), "Busy Place").await;
        for name in ["Ani", "Budi", "Citra"] {
            StudentModel::create(app_state.db(), name, Some(&existing.id))
                .await
                .unwrap();
        }

        let token = admin_token();
        let response = app
            .oneshot(empty_request("DELETE", &uri(&existing.id), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "Cannot delete location with assigned students"
        );

        let still_there = TempatPklModel::find_by_id(app_state.db(), &existing.id)
            .await
            .unwrap();
        assert!(still_there.is_some());
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_requires_id() {
        let (app, _) = make_test_app().await;

        let token = admin_token();
        for path in ["/api/admin/tempat-pkl", "/api/admin/tempat-pkl?id="] {
            let response = app
                .clone()
                .oneshot(empty_request("DELETE", path, Some(&token)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = get_json_body(response).await;
            assert_eq!(json["message"], "ID is required");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_unknown_id_not_found() {
        let (app, _) = make_test_app().await;

        let token = admin_token();
        let response = app
            .oneshot(empty_request("DELETE", &uri("missing"), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_unauthorized_for_non_admin() {
        let (app, app_state) = make_test_app().await;
        let existing = seed(app_state.db(), "Protected").await;

        let token = user_token();
        let response = app
            .oneshot(empty_request("DELETE", &uri(&existing.id), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let still_there = TempatPklModel::find_by_id(app_state.db(), &existing.id)
            .await
            .unwrap();
        assert!(still_there.is_some());
    }
}
