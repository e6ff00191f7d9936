//! Integration tests for the blog proxy routes.

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn valid_post() -> serde_json::Value {
    json!({
        "title": "Hello",
        "description": "World",
        "image": "img.png",
        "category": "News"
    })
}

#[tokio::test]
async fn test_create_with_empty_title_is_rejected_before_any_backend_call() {
    let test_app = common::build_test_app();

    let mut body = valid_post();
    body["title"] = json!("");
    let (status, json) = common::post_json(test_app.app, "/api/blog", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert!(test_app.upstream.forwarded().is_empty());
}

#[tokio::test]
async fn test_valid_create_relays_backend_status_and_body() {
    let test_app = common::build_test_app();
    test_app
        .upstream
        .push_response(201, json!({ "id": "p1", "slug": "hello", "title": "Hello" }));

    let (status, json) = common::post_json(test_app.app, "/api/blog", &valid_post()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["slug"], "hello");

    let forwarded = test_app.upstream.forwarded();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].method, http::Method::POST);
    assert_eq!(forwarded[0].path, "/api/blog");
    assert_eq!(forwarded[0].body.as_ref().unwrap()["title"], "Hello");
}

#[tokio::test]
async fn test_list_relays_backend_failure_verbatim() {
    let test_app = common::build_test_app();
    test_app
        .upstream
        .push_response(503, json!({ "message": "maintenance" }));

    let (status, json) = common::get_json(test_app.app, "/api/blog").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["message"], "maintenance");
}

#[tokio::test]
async fn test_get_by_slug_forwards_slug_and_credential() {
    let test_app = common::build_test_app();
    test_app.upstream.push_response(200, json!({ "slug": "my-post" }));

    let (status, _) = common::request(
        test_app.app,
        "GET",
        "/api/blog/my-post",
        Some("Bearer tok"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let forwarded = test_app.upstream.forwarded();
    assert_eq!(forwarded[0].path, "/api/blog/my-post");
    assert_eq!(forwarded[0].bearer.as_deref(), Some("Bearer tok"));
}

#[tokio::test]
async fn test_update_validates_before_forwarding() {
    let test_app = common::build_test_app();

    let (status, _) = common::request(
        test_app.app,
        "PUT",
        "/api/blog/my-post",
        None,
        Some(&json!({ "title": "only a title" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(test_app.upstream.forwarded().is_empty());
}

#[tokio::test]
async fn test_delete_relays_backend_response() {
    let test_app = common::build_test_app();
    test_app.upstream.push_response(200, json!({ "success": true }));

    let (status, json) =
        common::request(test_app.app, "DELETE", "/api/blog/my-post", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        test_app.upstream.forwarded()[0].method,
        http::Method::DELETE
    );
}

#[tokio::test]
async fn test_unreachable_backend_yields_generic_500() {
    let app = common::build_failing_app();

    let (status, json) = common::get_json(app, "/api/blog").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "upstream_unreachable");
    // The transport detail is logged, not leaked.
    assert!(!json["message"].as_str().unwrap().contains("refused"));
}
