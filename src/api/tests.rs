//! Router-level tests for the task API.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::router;
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::services::TaskStoreService;

#[fixture]
fn app() -> Router {
    router(TaskStoreService::new(Arc::new(InMemoryTaskRepository::new())))
}

fn list_request() -> Request<Body> {
    Request::builder()
        .uri("/api/task")
        .body(Body::empty())
        .expect("request should build")
}

fn create_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/task")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_empty_array_for_a_new_store(app: Router) {
    let response = app
        .oneshot(list_request())
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_creates_a_record_and_returns_201(app: Router) {
    let response = app
        .oneshot(create_request(&json!({"name": "Write report"})))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        read_json(response).await,
        json!({"id": 1, "name": "Write report"})
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_stores_the_trimmed_name(app: Router) {
    let response = app
        .oneshot(create_request(&json!({"name": " Buy milk "})))
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await, json!({"id": 1, "name": "Buy milk"}));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_rejects_blank_name_and_leaves_the_store_unchanged(app: Router) {
    let rejected = app
        .clone()
        .oneshot(create_request(&json!({"name": "   "})))
        .await
        .expect("request should succeed");

    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(rejected).await,
        json!({"error": "Task name is required"})
    );

    let listed = app
        .oneshot(list_request())
        .await
        .expect("request should succeed");
    assert_eq!(read_json(listed).await, json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_list_in_insertion_order_with_dense_identifiers(app: Router) {
    for name in ["first", "second", "third"] {
        let created = app
            .clone()
            .oneshot(create_request(&json!({"name": name})))
            .await
            .expect("request should succeed");
        assert_eq!(created.status(), StatusCode::CREATED);
    }

    let listed = app
        .oneshot(list_request())
        .await
        .expect("request should succeed");
    assert_eq!(
        read_json(listed).await,
        json!([
            {"id": 1, "name": "first"},
            {"id": 2, "name": "second"},
            {"id": 3, "name": "third"}
        ])
    );
}
