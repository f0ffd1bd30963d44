// Whole-router CRUD flow over the in-memory store.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::entries::store::in_memory::InMemoryEntryStore;
use crate::shared::auth::HeaderIdentity;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> axum::Router {
    let store = Arc::new(InMemoryEntryStore::new());
    router(AppState::new(Arc::new(HeaderIdentity), store))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &axum::Router, user_id: &str, name: &str, category: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::post("/entries")
                .header("content-type", "application/json")
                .header("x-user-id", user_id)
                .body(Body::from(format!(
                    r#"{{"name":"{name}","category":"{category}"}}"#
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn list(app: &axum::Router, user_id: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::get("/entries")
                .header("x-user-id", user_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn crud_flow_stays_scoped_to_the_caller() {
    let app = app();

    let first = create(&app, "user-a", "Annie", "Actor").await;
    let second = create(&app, "user-a", "Daniel", "Director").await;
    create(&app, "user-b", "Someone Else", "Producer").await;

    // List: only the caller's entries, newest first.
    let listed = list(&app, "user-a").await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["id"], second["id"]);
    assert_eq!(listed[1]["id"], first["id"]);

    // Update an owned entry.
    let response = app
        .clone()
        .oneshot(
            Request::put("/entries")
                .header("content-type", "application/json")
                .header("x-user-id", "user-a")
                .body(Body::from(format!(
                    r#"{{"id":{},"name":"Annie Golden","notes":"Assassins","category":"Actor"}}"#,
                    first["id"]
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Annie Golden");
    assert_eq!(updated["notes"], "Assassins");
    assert_eq!(updated["created_at"], first["created_at"]);

    // Cross-user update with a stolen id is a silent no-op.
    let response = app
        .clone()
        .oneshot(
            Request::put("/entries")
                .header("content-type", "application/json")
                .header("x-user-id", "user-b")
                .body(Body::from(format!(
                    r#"{{"id":{},"name":"Hijacked","category":"Other"}}"#,
                    first["id"]
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_null());

    // Cross-user delete reports success and removes nothing.
    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/entries?id={}", first["id"].as_str().unwrap()))
                .header("x-user-id", "user-b")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list(&app, "user-a").await.as_array().unwrap().len(), 2);

    // Owner delete, twice: both report success.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/entries?id={}", first["id"].as_str().unwrap()))
                    .header("x-user-id", "user-a")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": true })
        );
    }

    let remaining = list(&app, "user-a").await;
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["id"], second["id"]);

    // The other owner's entry was never visible to user-a and is intact.
    let other = list(&app, "user-b").await;
    assert_eq!(other.as_array().unwrap().len(), 1);
    assert_eq!(other[0]["name"], "Someone Else");
}

#[tokio::test]
async fn every_operation_requires_an_identity() {
    let app = app();

    let requests = [
        Request::get("/entries").body(Body::empty()).unwrap(),
        Request::post("/entries")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"X","category":"Actor"}"#))
            .unwrap(),
        Request::put("/entries")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"id":"x","name":"X","category":"Actor"}"#))
            .unwrap(),
        Request::delete("/entries?id=x").body(Body::empty()).unwrap(),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
