//! Integration tests for the category proxy routes.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_requires_slug() {
    let test_app = common::build_test_app();

    let (status, json) = common::post_json(
        test_app.app,
        "/api/categories",
        &json!({ "name": "News", "description": "Product news" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert!(test_app.upstream.forwarded().is_empty());
}

#[tokio::test]
async fn test_valid_create_is_forwarded() {
    let test_app = common::build_test_app();
    test_app.upstream.push_response(201, json!({ "name": "News" }));

    let (status, json) = common::post_json(
        test_app.app,
        "/api/categories",
        &json!({ "name": "News", "description": "Product news", "slug": "news" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["name"], "News");
    assert_eq!(test_app.upstream.forwarded()[0].path, "/api/categories");
}

#[tokio::test]
async fn test_list_is_public_passthrough() {
    let test_app = common::build_test_app();
    test_app
        .upstream
        .push_response(200, json!([{ "name": "News", "slug": "news" }]));

    let (status, json) = common::get_json(test_app.app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["slug"], "news");
}
