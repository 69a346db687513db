//! Router-level tests exercising the JSON surface end to end against an
//! in-memory database.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use campus_db::DbPool;
use campus_web::state::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let pool = DbPool::in_memory().unwrap();
    campus_db::migrations::run_migrations(&pool).unwrap();
    campus_web::create_router(AppState::new(Arc::new(pool)))
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn student_body() -> Value {
    json!({
        "first_name": "Ilyas",
        "last_name": "Nasirov",
        "middle_name": "U",
        "age": 25
    })
}

fn teacher_body() -> Value {
    json!({
        "first_name": "Aidar",
        "last_name": "Ivanov",
        "middle_name": "K",
        "age": 40
    })
}

#[tokio::test]
async fn create_student_then_fetch_it() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request(Method::POST, "/api/students", Some(student_body())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["first_name"], "Ilyas");

    let response = app
        .oneshot(request(Method::GET, "/api/students/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn missing_student_is_404_with_message() {
    let app = app();

    let response = app
        .oneshot(request(Method::GET, "/api/students/999", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("999"));
}

#[tokio::test]
async fn invalid_payload_is_400_with_field_map() {
    let app = app();

    let response = app
        .oneshot(request(Method::POST, "/api/students", Some(json!({"age": 0}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let errors = body_json(response).await;
    assert_eq!(errors["first_name"], "First name cannot be null");
    assert_eq!(errors["last_name"], "Last name cannot be null");
    assert_eq!(errors["middle_name"], "Middle name cannot be null");
    assert_eq!(errors["age"], "Age must be greater than 0");
}

#[tokio::test]
async fn duplicate_association_is_409() {
    let app = app();

    app.clone()
        .oneshot(request(Method::POST, "/api/students", Some(student_body())))
        .await
        .unwrap();
    app.clone()
        .oneshot(request(Method::POST, "/api/teachers", Some(teacher_body())))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request(Method::PUT, "/api/students/1/teachers?teacher_id=1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(Method::PUT, "/api/students/1/teachers?teacher_id=1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn subject_add_list_remove_cycle() {
    let app = app();

    app.clone()
        .oneshot(request(Method::POST, "/api/students", Some(student_body())))
        .await
        .unwrap();
    app.clone()
        .oneshot(request(Method::POST, "/api/subjects", Some(json!({"name": "Math"}))))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request(Method::PUT, "/api/students/1/subjects?subject_id=1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/students/1/subjects", None))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!([{"id": 1, "name": "Math"}])
    );

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, "/api/students/1/subjects?subject_id=1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(Method::GET, "/api/students/1/subjects", None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn teacher_is_reachable_by_name_or_id() {
    let app = app();

    app.clone()
        .oneshot(request(Method::POST, "/api/teachers", Some(teacher_body())))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/teachers/ivanov", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 1);

    let response = app
        .oneshot(request(Method::GET, "/api/teachers/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_subject_name_on_teacher_is_409() {
    let app = app();

    app.clone()
        .oneshot(request(Method::POST, "/api/teachers", Some(teacher_body())))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/teachers/1/subjects",
            Some(json!({"name": "Math"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            Method::PUT,
            "/api/teachers/1/subjects",
            Some(json!({"name": "math"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_then_404() {
    let app = app();

    app.clone()
        .oneshot(request(Method::POST, "/api/students", Some(student_body())))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, "/api/students/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(Method::DELETE, "/api/students/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
