//! Integration tests for the factory hierarchy rules: the per-parent
//! capacity limit and the blocked-versus-cascade delete semantics.

mod helpers;

use axum::http::StatusCode;
use smthub_entity::user::UserRole;

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_eleventh_line_on_a_floor_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "admin123", UserRole::Admin, true)
        .await;
    let token = app.login("admin", "admin123").await;
    let floor_id = app.create_floor(&token, "Hall 1").await;

    for i in 1..=10 {
        let response = app.add_line(&token, floor_id, &format!("Line {i}")).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Line {i} failed: {:?}",
            response.body
        );
    }

    let response = app.add_line(&token, floor_id, "Line 11").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(app.count_rows("lines").await, 10);
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_eleventh_machine_on_a_line_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "admin123", UserRole::Admin, true)
        .await;
    let token = app.login("admin", "admin123").await;
    let floor_id = app.create_floor(&token, "Hall 1").await;
    let line_id = app.create_line(&token, floor_id, "Line 1").await;

    for i in 1..=10 {
        let response = app
            .add_machine(&token, line_id, &format!("SN-{i:03}"))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Machine {i} failed: {:?}",
            response.body
        );
    }

    let response = app.add_machine(&token, line_id, "SN-011").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(app.count_rows("machines").await, 10);
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_deleting_a_floor_with_lines_is_blocked() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "admin123", UserRole::Admin, true)
        .await;
    let token = app.login("admin", "admin123").await;
    let floor_id = app.create_floor(&token, "Hall 1").await;
    app.create_line(&token, floor_id, "Line 1").await;

    let response = app
        .request("DELETE", &format!("/api/floors/{floor_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(app.count_rows("floors").await, 1);
    assert_eq!(app.count_rows("lines").await, 1);
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_deleting_a_line_with_machines_is_blocked() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "admin123", UserRole::Admin, true)
        .await;
    let token = app.login("admin", "admin123").await;
    let floor_id = app.create_floor(&token, "Hall 1").await;
    let line_id = app.create_line(&token, floor_id, "Line 1").await;
    app.add_machine(&token, line_id, "SN-001").await;

    let response = app
        .request("DELETE", &format!("/api/lines/{line_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(app.count_rows("lines").await, 1);
    assert_eq!(app.count_rows("machines").await, 1);
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_cascade_delete_removes_all_descendants() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("admin", "admin123", UserRole::Admin, true)
        .await;
    let token = app.login("admin", "admin123").await;
    let floor_id = app.create_floor(&token, "Hall 1").await;
    let line_id = app.create_line(&token, floor_id, "Line 1").await;
    app.add_machine(&token, line_id, "SN-001").await;
    app.add_machine(&token, line_id, "SN-002").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/floors/{floor_id}/cascade"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.count_rows("floors").await, 0);
    assert_eq!(app.count_rows("lines").await, 0);
    assert_eq!(app.count_rows("machines").await, 0);
}

#[tokio::test]
#[ignore = "needs a live Postgres (set SMTHUB_TEST_DATABASE_URL)"]
async fn test_operator_cannot_create_a_floor() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("operator", "operator123", UserRole::Operator, true)
        .await;
    let token = app.login("operator", "operator123").await;

    let response = app
        .request(
            "POST",
            "/api/floors",
            Some(serde_json::json!({ "name": "Hall 1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(app.count_rows("floors").await, 0);
}
