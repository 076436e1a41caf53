//! Integration tests for the login flow against a real user table.

mod helpers;

use axum::http::StatusCode;
use smthub_entity::user::UserRole;

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_inactive_user_cannot_login() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("retired", "password123", UserRole::Operator, false)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "retired",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_login_with_wrong_password_fails() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("operator", "operator123", UserRole::Operator, true)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "operator",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_me_reports_roles_from_the_database() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "admin123", UserRole::Admin, true)
        .await;
    let token = app.login("admin", "admin123").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "admin");
    assert_eq!(response.body["data"]["authorities"][0], "ROLE_ADMIN");
}
