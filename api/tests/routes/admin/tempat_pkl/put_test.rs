#[cfg(test)]
mod tests {
    use crate::helpers::{admin_token, get_json_body, json_request, make_test_app, user_token};
    use axum::http::StatusCode;
    use db::models::{
        student::Model as StudentModel,
        tempat_pkl::{Model as TempatPklModel, TempatPklFields},
    };
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    const URI: &str = "/api/admin/tempat-pkl";

    async fn seed(db: &sea_orm::DatabaseConnection) -> TempatPklModel {
        TempatPklModel::create(
            db,
            TempatPklFields {
                name: "Company X".into(),
                address: "Street 1".into(),
                phone: Some("0800".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_update_tempat_pkl_success() {
        let (app, app_state) = make_test_app().await;
        let existing = seed(app_state.db()).await;
        StudentModel::create(app_state.db(), "Eka", Some(&existing.id))
            .await
            .unwrap();

        let token = admin_token();
        let body = json!({ "id": existing.id, "name": "Company X2", "address": "Street 2" });
        let response = app
            .oneshot(json_request("PUT", URI, Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Tempat PKL updated successfully");
        assert_eq!(json["data"]["id"], existing.id.as_str());
        assert_eq!(json["data"]["name"], "Company X2");
        assert_eq!(json["data"]["address"], "Street 2");
        assert_eq!(json["data"]["assignedStudentCount"], 1);

        let stored = TempatPklModel::find_by_id(app_state.db(), &existing.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Company X2");
        assert_eq!(stored.phone, None);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_unknown_id_not_found() {
        let (app, _) = make_test_app().await;

        let token = admin_token();
        let body = json!({ "id": "does-not-exist", "name": "A", "address": "B" });
        let response = app
            .oneshot(json_request("PUT", URI, Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Tempat PKL not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_missing_name_leaves_record_untouched() {
        let (app, app_state) = make_test_app().await;
        let existing = seed(app_state.db()).await;

        let token = admin_token();
        let body = json!({ "id": existing.id, "address": "Street 2" });
        let response = app
            .oneshot(json_request("PUT", URI, Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], json!(["Name is required"]));

        let stored = TempatPklModel::find_by_id(app_state.db(), &existing.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, existing.name);
        assert_eq!(stored.address, existing.address);
        assert_eq!(stored.phone, existing.phone);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_missing_id() {
        let (app, _) = make_test_app().await;

        let token = admin_token();
        let body = json!({ "name": "A", "address": "B" });
        let response = app
            .oneshot(json_request("PUT", URI, Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "ID is required");
        assert_eq!(json["data"]["id"], json!(["ID is required"]));
    }

    #[tokio::test]
    #[serial]
    async fn test_update_unauthorized_for_non_admin() {
        let (app, app_state) = make_test_app().await;
        let existing = seed(app_state.db()).await;

        let token = user_token();
        let body = json!({ "id": existing.id, "name": "Hijacked", "address": "Nowhere" });
        let response = app
            .oneshot(json_request("PUT", URI, Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let stored = TempatPklModel::find_by_id(app_state.db(), &existing.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Company X");
    }
}
