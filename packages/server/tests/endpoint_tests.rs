// HTTP-level tests: the real router bound to an ephemeral port, driven with
// reqwest, with mock collaborators behind it.

use std::sync::Arc;

use waitlist_core::kernel::{MockNotifier, MockRecordStore, TestDependencies};
use waitlist_core::server::build_app;

/// Bind the app to an ephemeral local port and return its base URL plus the
/// mock handles for assertions.
async fn spawn_app(test_deps: &TestDependencies) -> String {
    let app = build_app(Arc::new(test_deps.deps()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn non_post_methods_get_405_with_json_body() {
    let test_deps = TestDependencies::new();
    let base = spawn_app(&test_deps).await;
    let client = reqwest::Client::new();

    for method in [
        reqwest::Method::GET,
        reqwest::Method::PUT,
        reqwest::Method::DELETE,
        reqwest::Method::PATCH,
    ] {
        let resp = client
            .request(method.clone(), format!("{base}/api/waitlist"))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 405, "method {method} should be rejected");
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Method not allowed");
    }

    assert!(test_deps.record_store.calls().is_empty());
}

#[tokio::test]
async fn invalid_email_gets_400_and_no_downstream_calls() {
    let test_deps = TestDependencies::new();
    let base = spawn_app(&test_deps).await;
    let client = reqwest::Client::new();

    for payload in [
        serde_json::json!({}),
        serde_json::json!({ "email": "" }),
        serde_json::json!({ "email": "not-an-email" }),
        serde_json::json!({ "email": "user@example" }),
    ] {
        let resp = client
            .post(format!("{base}/api/waitlist"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 400, "payload {payload} should be rejected");
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Please provide a valid email address.");
    }

    assert!(test_deps.record_store.calls().is_empty());
    assert!(test_deps.notifier.sent().is_empty());
}

#[tokio::test]
async fn valid_email_gets_200_and_reaches_both_collaborators() {
    let test_deps = TestDependencies::new();
    let base = spawn_app(&test_deps).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/waitlist"))
        .json(&serde_json::json!({ "email": "User@Example.COM " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "You're on the list! Check your inbox for a welcome email."
    );

    assert!(test_deps.record_store.was_recorded("user@example.com"));
    assert!(test_deps.notifier.was_notified("user@example.com"));
}

#[tokio::test]
async fn malformed_body_gets_500_with_generic_message() {
    let test_deps = TestDependencies::new();
    let base = spawn_app(&test_deps).await;
    let client = reqwest::Client::new();

    // Invalid JSON, and valid JSON with the wrong shape: both are faults
    // outside the guarded downstream calls.
    for body in ["{not json", r#"{"email": 123}"#] {
        let resp = client
            .post(format!("{base}/api/waitlist"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 500, "body {body:?} should be a fault");
        let payload: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            payload["error"],
            "Something went wrong. Please try again in a moment."
        );
    }

    assert!(test_deps.record_store.calls().is_empty());
}

#[tokio::test]
async fn downstream_failures_still_answer_200() {
    let test_deps = TestDependencies::new()
        .with_record_store(MockRecordStore::new().with_failure())
        .with_notifier(MockNotifier::new().with_failure());
    let base = spawn_app(&test_deps).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/waitlist"))
        .json(&serde_json::json!({ "email": "user@example.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn health_endpoint_answers_200() {
    let test_deps = TestDependencies::new();
    let base = spawn_app(&test_deps).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}
