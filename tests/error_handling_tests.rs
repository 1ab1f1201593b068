// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Failure paths: database errors and malformed input all surface as 500.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_text, empty_request, json_request};

#[tokio::test]
async fn test_offline_db_create_is_500() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/create",
            json!({"collection": "users", "data": {"name": "John"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error creating document");
}

#[tokio::test]
async fn test_offline_db_read_is_500_not_404() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(empty_request("GET", "/api/read/users/abc123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error reading document");
}

#[tokio::test]
async fn test_offline_db_update_is_500() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/update/users/abc123",
            json!({"data": {"age": 31}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error updating document");
}

#[tokio::test]
async fn test_offline_db_delete_is_500() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(empty_request("DELETE", "/api/delete/users/abc123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error deleting document");
}

#[tokio::test]
async fn test_create_missing_collection_is_500() {
    let app = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/create",
            json!({"data": {"name": "John"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error creating document");
}

#[tokio::test]
async fn test_create_non_object_data_is_500() {
    let app = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/create",
            json!({"collection": "users", "data": [1, 2, 3]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_empty_collection_name_is_500() {
    let app = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/create",
            json!({"collection": "", "data": {}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error creating document");
}

#[tokio::test]
async fn test_update_missing_data_is_500() {
    let app = common::create_test_app();

    let response = app
        .oneshot(json_request("PUT", "/api/update/users/abc", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error updating document");
}

#[tokio::test]
async fn test_invalid_json_body_is_500() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_missing_content_type_is_500() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create")
                .body(Body::from(
                    json!({"collection": "users", "data": {}}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_server_keeps_serving_after_failures() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/create", json!({"bogus": true})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/create",
            json!({"collection": "users", "data": {"ok": true}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
