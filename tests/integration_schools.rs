mod common;

use axum::http::StatusCode;
use common::{auth_token, school, send, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_school_api_scenario() {
    let app = setup_test_app(vec![school("123", "school123")]);
    let token = auth_token();
    let token = Some(token.as_str());

    // get all
    let (status, body) = send(&app, "GET", "/school", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["items"][0]["id"], "123");

    // get 123
    let (status, body) = send(&app, "GET", "/school/123", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "123");
    assert_eq!(body["name"], "school123");

    // get unknown
    let (status, _) = send(&app, "GET", "/school/1234", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // create ok
    let (status, body) = send(&app, "POST", "/school", Some(r#"{"name":"test"}"#), token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "test");
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["created_at"], body["updated_at"]);

    // create auth error
    let (status, _) = send(&app, "POST", "/school", Some(r#"{"name":"test"}"#), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // auth is checked before the body is decoded
    let (status, _) = send(&app, "POST", "/school", Some(r#""name":"x"}"#), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // create input error
    let (status, body) = send(&app, "POST", "/school", Some(r#""name":"test"}"#), token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request");

    // update ok
    let (status, body) = send(
        &app,
        "PUT",
        "/school/123",
        Some(r#"{"name":"school xyz"}"#),
        token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "123");
    assert_eq!(body["name"], "school xyz");

    // update verify
    let (status, body) = send(&app, "GET", "/school/123", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "school xyz");

    // update auth error
    let (status, _) = send(
        &app,
        "PUT",
        "/school/123",
        Some(r#"{"name":"school xyz"}"#),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "PUT", "/school/123", Some(r#""name":"x"}"#), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // update input error
    let (status, _) = send(&app, "PUT", "/school/123", Some(r#""name":"school xyz"}"#), token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // delete ok
    let (status, body) = send(&app, "DELETE", "/school/123", None, token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "123");
    assert_eq!(body["name"], "school xyz");

    // delete verify
    let (status, _) = send(&app, "DELETE", "/school/123", None, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // delete auth error
    let (status, _) = send(&app, "DELETE", "/school/123", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_query_schools_pagination() {
    let schools = (1..=5)
        .map(|i| school(&format!("id-{}", i), &format!("school {}", i)))
        .collect();
    let app = setup_test_app(schools);

    let (status, body) = send(&app, "GET", "/school?page=2&per_page=2", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["page_count"], 3);
    assert_eq!(body["total_count"], 5);
    let ids: Vec<_> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["id-3", "id-4"]);

    // past the last page clamps to it
    let (status, body) = send(&app, "GET", "/school?page=9&per_page=2", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/school?page=two", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_schools_empty_store() {
    let app = setup_test_app(Vec::new());

    let (status, body) = send(&app, "GET", "/school", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 100);
    assert_eq!(body["page_count"], 0);
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_create_school_validation_error() {
    let app = setup_test_app(Vec::new());
    let token = auth_token();

    let (status, body) = send(&app, "POST", "/school", Some(r#"{"name":""}"#), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["name"].is_array());

    let too_long = json!({ "name": "x".repeat(129) }).to_string();
    let (status, _) = send(&app, "POST", "/school", Some(&too_long), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // missing name is a validation failure, not a decode failure
    let (status, body) = send(&app, "POST", "/school", Some("{}"), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["name"].is_array());

    let (_, body) = send(&app, "GET", "/school", None, None).await;
    assert_eq!(body["total_count"], 0);
}

#[tokio::test]
async fn test_update_unknown_school() {
    let app = setup_test_app(Vec::new());
    let token = auth_token();

    let (status, body) = send(
        &app,
        "PUT",
        "/school/missing",
        Some(r#"{"name":"anything"}"#),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "School not found");
}

#[tokio::test]
async fn test_invalid_update_of_unknown_school_reports_validation() {
    let app = setup_test_app(Vec::new());
    let token = auth_token();

    let (status, body) = send(
        &app,
        "PUT",
        "/school/missing",
        Some(r#"{"name":""}"#),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let app = setup_test_app(Vec::new());

    let (status, _) = send(
        &app,
        "POST",
        "/school",
        Some(r#"{"name":"test"}"#),
        Some("not-a-jwt"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_created_school_is_listed() {
    let app = setup_test_app(Vec::new());
    let token = auth_token();

    let (_, created) = send(&app, "POST", "/school", Some(r#"{"name":"listed"}"#), Some(&token)).await;
    let (status, body) = send(&app, "GET", "/school", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["items"][0], created);
}
