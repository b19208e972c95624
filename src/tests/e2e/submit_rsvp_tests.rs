// End to end tests over the real router with in memory infrastructure:
// the scenarios a guest actually produces from the form.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::rsvp::core::event::RsvpResponse;
use crate::modules::rsvp::use_cases::submit_rsvp::handler::SubmitRsvpHandler;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::notifier::in_memory::RecordingNotifier;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell;
use crate::shell::state::AppState;

struct TestApp {
    router: Router,
    store: Arc<InMemoryRecordStore>,
    notifier: Arc<RecordingNotifier>,
}

fn make_app() -> TestApp {
    let store = Arc::new(InMemoryRecordStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let submit_handler = Arc::new(SubmitRsvpHandler::new(
        store.clone() as Arc<dyn RecordStore>,
        notifier.clone() as Arc<dyn Notifier>,
    ));
    let state = AppState {
        store: store.clone(),
        submit_handler,
    };
    TestApp {
        router: shell::http::router(state),
        store,
        notifier,
    }
}

async fn post_rsvp(router: Router, body: &str) -> axum::response::Response {
    router
        .oneshot(
            Request::post("/rsvp")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn it_should_record_an_acceptance_end_to_end() {
    let app = make_app();

    let response = post_rsvp(app.router, r#"{"name":"Ada","response":"accepted"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json.get("ok"), Some(&serde_json::json!(true)));
    assert_eq!(
        json.get("tally"),
        Some(&serde_json::json!({"accepted": 1, "declined": 0}))
    );

    let events = app.store.events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Ada");
    assert_eq!(events[0].response, RsvpResponse::Accepted);
    assert_eq!(
        json.get("timestamp").and_then(|v| v.as_str()),
        Some(events[0].timestamp_string().as_str())
    );
    assert_eq!(app.notifier.sent.lock().await.len(), 1);
}

#[tokio::test]
async fn it_should_reject_an_empty_name_without_side_effects() {
    let app = make_app();

    let response = post_rsvp(app.router, r#"{"name":"","response":"declined"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({"error": "Invalid payload"}));

    assert!(app.store.events().await.is_empty());
    assert!(app.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn it_should_return_405_for_get_without_side_effects() {
    let app = make_app();

    let response = app
        .router
        .oneshot(Request::get("/rsvp").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(app.store.events().await.is_empty());
    assert!(app.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn it_should_expose_the_running_tally_after_a_mixed_sequence() {
    let app = make_app();

    let submissions = [
        r#"{"name":"Ada","response":"accepted"}"#,
        r#"{"name":"Grace","response":"declined"}"#,
        r#"{"name":"Edsger","response":"accepted"}"#,
    ];
    for body in submissions {
        let response = post_rsvp(app.router.clone(), body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .router
        .oneshot(Request::get("/tally").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({"accepted": 2, "declined": 1}));
    assert_eq!(app.store.events().await.len(), 3);
}
