//! Shared helpers for the live-database integration tests.
//!
//! These tests need a running Postgres. Point `SMTHUB_TEST_DATABASE_URL`
//! at an empty test database and run `cargo test -- --ignored`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use smthub_auth::password::hasher::PasswordHasher;
use smthub_core::config::AppConfig;
use smthub_core::config::app::ServerConfig;
use smthub_core::config::auth::AuthConfig;
use smthub_core::config::database::DatabaseConfig;
use smthub_core::config::logging::LoggingConfig;
use smthub_database::repositories::user::UserRepository;
use smthub_entity::user::{CreateUser, UserRole};

/// Test application context backed by a real database.
pub struct TestApp {
    /// Router for making test requests.
    pub router: Router,
    /// Pool for direct queries and cleanup.
    pub db_pool: PgPool,
}

impl TestApp {
    /// Connect, migrate, wipe the data tables and build a router.
    pub async fn new() -> Self {
        let url = std::env::var("SMTHUB_TEST_DATABASE_URL")
            .expect("SMTHUB_TEST_DATABASE_URL must point at a test database");

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                acquire_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db_pool = smthub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        smthub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = smthub_api::AppState::build(config, db_pool.clone());
        let router = smthub_api::build_router(state);

        Self { router, db_pool }
    }

    /// Wipe data tables in FK order. Role rows are kept.
    async fn clean_database(pool: &PgPool) {
        for table in ["machines", "lines", "floors", "user_roles", "users"] {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a user with one role and return their username.
    pub async fn create_test_user(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
        active: bool,
    ) {
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");
        let repo = UserRepository::new(self.db_pool.clone());
        repo.ensure_role(role).await.expect("Failed to ensure role");
        repo.create(&CreateUser {
            username: username.to_string(),
            password_hash: hash,
            active,
            roles: vec![role],
        })
        .await
        .expect("Failed to create test user");
    }

    /// Login and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Create a floor via the API and return its ID.
    pub async fn create_floor(&self, token: &str, name: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/floors",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Floor creation failed: {:?}",
            response.body
        );
        extract_id(&response.body)
    }

    /// Create a line under a floor via the API and return its ID.
    pub async fn create_line(&self, token: &str, floor_id: Uuid, name: &str) -> Uuid {
        let response = self.add_line(token, floor_id, name).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Line creation failed: {:?}",
            response.body
        );
        extract_id(&response.body)
    }

    /// POST a line under a floor, returning the raw response.
    pub async fn add_line(&self, token: &str, floor_id: Uuid, name: &str) -> TestResponse {
        self.request(
            "POST",
            &format!("/api/floors/{floor_id}/lines"),
            Some(serde_json::json!({
                "name": name,
                "lane": "single",
                "direction": "left_to_right",
            })),
            Some(token),
        )
        .await
    }

    /// POST a machine under a line, returning the raw response.
    pub async fn add_machine(&self, token: &str, line_id: Uuid, serial: &str) -> TestResponse {
        self.request(
            "POST",
            &format!("/api/lines/{line_id}/machines"),
            Some(serde_json::json!({
                "serial": serial,
                "model": "SPI-9000",
                "machine_type": "spi",
                "year": 2021,
                "manufacturer": "Koh Young",
            })),
            Some(token),
        )
        .await
    }

    /// Count rows in a table.
    pub async fn count_rows(&self, table: &str) -> i64 {
        let query = format!("SELECT COUNT(*) FROM {table}");
        sqlx::query_scalar(&query)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count rows")
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| b.to_string())
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn extract_id(body: &Value) -> Uuid {
    body["data"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("Response carries no ID")
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
