//! REST API Tests
//!
//! Drives the full router against a private in-memory store:
//! - Create, read, partial update and delete for every resource
//! - Constraint violations map to 409 and 422
//! - Bad input never reaches the store and always gets a JSON error body

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use campus::http_server::{HttpServer, HttpServerConfig};
use campus::store::Store;

// =============================================================================
// Helper Functions
// =============================================================================

async fn setup_app() -> Router {
    let store = Store::in_memory().await.unwrap();
    store.bootstrap_schema().await.unwrap();
    HttpServer::with_config(HttpServerConfig::default(), store).router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_subject(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, Method::POST, "/subjects", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_teacher(app: &Router, email: &str, subject_id: i64) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/teachers",
        Some(json!({ "name": "A", "email": email, "subject_id": subject_id })),
    )
    .await
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

/// Subject, teacher, phone patch, delete, then gone.
#[tokio::test]
async fn test_teacher_lifecycle() {
    let app = setup_app().await;
    let subject_id = create_subject(&app, "Math").await;

    let (status, teacher) = create_teacher(&app, "a@x.io", subject_id).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(teacher["qualification"], "Graduate");
    assert_eq!(teacher["weekly_load"], 20);
    assert_eq!(teacher["phone"], Value::Null);
    let id = teacher["id"].as_i64().unwrap();
    let uri = format!("/teachers/{id}");

    let (status, updated) = send(&app, Method::PATCH, &uri, Some(json!({ "phone": "555" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["phone"], "555");
    assert_eq!(updated["email"], "a@x.io");
    assert_eq!(updated["created_at"], teacher["created_at"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Teacher not found");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_student_create_trims_and_lists_newest_first() {
    let app = setup_app().await;

    let (status, first) = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({ "name": "  Ana  ", "age": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["name"], "Ana");

    let (_, second) = send(&app, Method::POST, "/students", Some(json!({ "name": "Bo", "age": 0 }))).await;
    assert_ne!(first["id"], second["id"]);

    let (status, list) = send(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], second["id"]);
}

/// Ids of deleted rows are never handed out again.
#[tokio::test]
async fn test_ids_are_not_reused() {
    let app = setup_app().await;

    let (_, first) = send(&app, Method::POST, "/students", Some(json!({ "name": "Ana", "age": 9 }))).await;
    let uri = format!("/students/{}", first["id"]);
    send(&app, Method::DELETE, &uri, None).await;

    let (_, second) = send(&app, Method::POST, "/students", Some(json!({ "name": "Ana", "age": 9 }))).await;
    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

// =============================================================================
// Partial Update Tests
// =============================================================================

#[tokio::test]
async fn test_empty_patch_rejected_and_row_unchanged() {
    let app = setup_app().await;
    let (_, student) = send(&app, Method::POST, "/students", Some(json!({ "name": "Ana", "age": 9 }))).await;
    let uri = format!("/students/{}", student["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Nothing to update");

    let (_, after) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(after, student);
}

/// A missing id wins over any payload problem.
#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let app = setup_app().await;

    for payload in [json!({}), json!({ "age": -1 }), json!({ "age": 3 })] {
        let (status, _) = send(&app, Method::PATCH, "/students/999", Some(payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_explicit_null_phone_clears_it() {
    let app = setup_app().await;
    let subject_id = create_subject(&app, "Art").await;
    let (_, teacher) = send(
        &app,
        Method::POST,
        "/teachers",
        Some(json!({ "name": "B", "email": "b@x.io", "subject_id": subject_id, "phone": "123" })),
    )
    .await;
    let uri = format!("/teachers/{}", teacher["id"]);

    let (_, unchanged) = send(&app, Method::PATCH, &uri, Some(json!({ "weekly_load": 12 }))).await;
    assert_eq!(unchanged["phone"], "123");
    assert_eq!(unchanged["weekly_load"], 12);

    let (status, cleared) = send(&app, Method::PATCH, &uri, Some(json!({ "phone": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["phone"], Value::Null);
}

#[tokio::test]
async fn test_null_on_required_field_rejected() {
    let app = setup_app().await;
    let (_, student) = send(&app, Method::POST, "/students", Some(json!({ "name": "Ana", "age": 9 }))).await;
    let uri = format!("/students/{}", student["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "name": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "name");
}

// =============================================================================
// Constraint Tests
// =============================================================================

#[tokio::test]
async fn test_duplicate_subject_name_conflicts() {
    let app = setup_app().await;
    create_subject(&app, "Math").await;

    let (status, body) = send(&app, Method::POST, "/subjects", Some(json!({ "name": "Math" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);
}

#[tokio::test]
async fn test_duplicate_teacher_email_conflicts() {
    let app = setup_app().await;
    let subject_id = create_subject(&app, "Math").await;
    create_teacher(&app, "a@x.io", subject_id).await;

    let (status, body) = create_teacher(&app, "a@x.io", subject_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_unknown_subject_reference_creates_nothing() {
    let app = setup_app().await;

    let (status, _) = create_teacher(&app, "a@x.io", 404).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, Method::GET, "/teachers", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_subject_in_use_cannot_be_deleted() {
    let app = setup_app().await;
    let subject_id = create_subject(&app, "Math").await;
    create_teacher(&app, "a@x.io", subject_id).await;

    let uri = format!("/subjects/{subject_id}");
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_patch_teacher_to_taken_email_conflicts() {
    let app = setup_app().await;
    let subject_id = create_subject(&app, "Math").await;
    create_teacher(&app, "a@x.io", subject_id).await;
    let (_, other) = create_teacher(&app, "b@x.io", subject_id).await;
    let uri = format!("/teachers/{}", other["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "email": "a@x.io" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");

    let (_, after) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(after["email"], "b@x.io");
}

#[tokio::test]
async fn test_patch_teacher_to_unknown_subject_leaves_row() {
    let app = setup_app().await;
    let subject_id = create_subject(&app, "Math").await;
    let (_, teacher) = create_teacher(&app, "a@x.io", subject_id).await;
    let uri = format!("/teachers/{}", teacher["id"]);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "subject_id": 404 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, after) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(after, teacher);
}

#[tokio::test]
async fn test_rename_subject_to_taken_name_conflicts() {
    let app = setup_app().await;
    create_subject(&app, "Math").await;
    let art = create_subject(&app, "Art").await;
    let uri = format!("/subjects/{art}");

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "name": "Math" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, after) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(after["name"], "Art");
}

#[tokio::test]
async fn test_put_subject_inactive() {
    let app = setup_app().await;
    let id = create_subject(&app, "Math").await;
    let uri = format!("/subjects/{id}");

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({ "active": false }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["active"], false);
    assert_eq!(updated["name"], "Math");

    let (_, after) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(after["active"], false);

    let (_, active) = send(&app, Method::GET, "/subjects?active_only=true", None).await;
    assert_eq!(active, json!([]));
}

// =============================================================================
// Input Rejection Tests
// =============================================================================

#[tokio::test]
async fn test_validation_lists_every_bad_field() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/teachers",
        Some(json!({ "name": " ", "email": "nope", "weekly_load": -2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    for field in ["name", "email", "subject_id", "weekly_load"] {
        assert!(fields.contains(&field), "missing {field} in {fields:?}");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = setup_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/students")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_unknown_field_is_bad_request() {
    let app = setup_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({ "name": "Ana", "age": 9, "grade": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = setup_app().await;
    let (status, body) = send(&app, Method::GET, "/subjects/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// Subject Filter Tests
// =============================================================================

#[tokio::test]
async fn test_active_only_filter() {
    let app = setup_app().await;
    create_subject(&app, "Math").await;
    send(&app, Method::POST, "/subjects", Some(json!({ "name": "Latin", "active": 0 }))).await;

    let (_, all) = send(&app, Method::GET, "/subjects", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, active) = send(&app, Method::GET, "/subjects?active_only=1", None).await;
    let active = active.as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "Math");
    assert_eq!(active[0]["active"], true);

    let (status, _) = send(&app, Method::GET, "/subjects?active_only=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Service Route Tests
// =============================================================================

#[tokio::test]
async fn test_banner_and_health() {
    let app = setup_app().await;

    let (status, banner) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banner["ok"], true);

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["database"], "ok");
}
