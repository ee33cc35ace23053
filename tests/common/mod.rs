use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use schoolhouse::modules::schools::School;
use schoolhouse::modules::schools::repository::mock::InMemorySchoolRepository;
use schoolhouse::router::init_router;
use schoolhouse::schoolhouse_auth::create_access_token;
use schoolhouse::schoolhouse_config::{CorsConfig, JwtConfig};
use schoolhouse::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn school(id: &str, name: &str) -> School {
    let now = Utc::now();
    School {
        id: id.to_string(),
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[allow(dead_code)]
pub fn test_state(schools: Vec<School>) -> AppState {
    AppState::new(
        Arc::new(InMemorySchoolRepository::with_items(schools)),
        test_jwt_config(),
        CorsConfig::from_list("http://localhost:3000"),
    )
}

/// Router backed by an in-memory repository holding `schools`.
#[allow(dead_code)]
pub fn setup_test_app(schools: Vec<School>) -> Router {
    init_router(test_state(schools), None)
}

#[allow(dead_code)]
pub fn auth_token() -> String {
    create_access_token("operator-1", "Test Operator", &test_jwt_config()).unwrap()
}

/// Sends one request and returns the status plus the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
