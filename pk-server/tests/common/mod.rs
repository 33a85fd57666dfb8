#![allow(dead_code)]

//! Test infrastructure for pk-server API tests

use pk_db::SqliteProfileRepository;
use pk_server::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_BASE_URL: &str = "https://parkmemo.test";

/// Create a test pool with in-memory SQLite and migrations run
pub async fn create_test_pool() -> SqlitePool {
    // In-memory needs a single connection: each new connection would see its
    // own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/pk-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        store: Arc::new(SqliteProfileRepository::new(pool)),
        public_base_url: TEST_BASE_URL.to_string(),
    }
}

/// Owner key unique to the calling test
pub fn unique_owner_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// PUT /api/v1/profile request for the given owner
pub fn save_request(owner_key: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/api/v1/profile")
        .header("X-Owner-Key", owner_key)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// GET /api/v1/profile request for the given owner
pub fn get_profile_request(owner_key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/v1/profile")
        .header("X-Owner-Key", owner_key)
        .body(Body::empty())
        .unwrap()
}

/// GET /api/v1/info/{key} request (anonymous, no headers)
pub fn get_info_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/v1/info/{}", key))
        .body(Body::empty())
        .unwrap()
}

/// Body with every field filled in
pub fn full_profile_body() -> serde_json::Value {
    serde_json::json!({
        "fields": {
            "comment": "Back in 10 minutes",
            "vehicleNumber": "12가3456",
            "nickname": "Minsu",
            "visitPlace": "Building A",
            "phoneNumber": "010-1234-5678",
            "memo": "Call before towing",
            "kakaoOpenChatUrl": "https://open.kakao.com/o/abc123"
        },
        "visibility": {}
    })
}
