//! Integration tests for authentication and role enforcement.

mod helpers;

use axum::http::StatusCode;
use dochub_entity::user::UserRole;

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/files", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/files", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_viewer_cannot_create_files() {
    let app = helpers::TestApp::new().await;
    let (_, token) = app.user_with_token("reader", UserRole::Viewer).await;

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({ "name": "nope.txt", "content": "x" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_editor_cannot_save_someone_elses_file() {
    let app = helpers::TestApp::new().await;
    let (_, owner_token) = app.user_with_token("owner", UserRole::Editor).await;
    let (_, intruder_token) = app.user_with_token("intruder", UserRole::Editor).await;

    let created = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({ "name": "mine.txt", "content": "original" })),
            Some(&owner_token),
        )
        .await;
    let file_id = created.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/files/{}", file_id),
            Some(serde_json::json!({ "content": "hijacked" })),
            Some(&intruder_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The file content must be untouched.
    let fetched = app
        .request(
            "GET",
            &format!("/api/files/{}", file_id),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(fetched.data()["content"], "original");
}

#[tokio::test]
async fn test_admin_saves_any_file_without_taking_ownership() {
    let app = helpers::TestApp::new().await;
    let (owner_id, owner_token) = app.user_with_token("owner", UserRole::Editor).await;
    let (_, admin_token) = app.user_with_token("root", UserRole::Admin).await;

    let created = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({ "name": "mine.txt", "content": "original" })),
            Some(&owner_token),
        )
        .await;
    let file_id = created.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/files/{}", file_id),
            Some(serde_json::json!({ "content": "moderated" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["content"], "moderated");
    assert_eq!(
        response.data()["author_id"].as_str().unwrap(),
        owner_id.to_string()
    );
}

#[tokio::test]
async fn test_force_update_is_admin_only() {
    let app = helpers::TestApp::new().await;
    let (_, editor_token) = app.user_with_token("owner", UserRole::Editor).await;
    let (_, admin_token) = app.user_with_token("root", UserRole::Admin).await;

    let created = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({ "name": "mine.txt", "content": "v1" })),
            Some(&editor_token),
        )
        .await;
    let file_id = created.data()["id"].as_str().unwrap().to_string();

    // Even the file's own author cannot use the force endpoint.
    let response = app
        .request(
            "PUT",
            &format!("/api/files/{}/force", file_id),
            Some(serde_json::json!({ "content": "v2" })),
            Some(&editor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/files/{}/force", file_id),
            Some(serde_json::json!({ "content": "v2" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["content"], "v2");
}
