// src/tests/router_tests/donation_progress_tests.rs

use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, service_with, StubSource, SAMPLE_PAGE};
use serde_json::Value;
use std::time::Duration;

#[test]
fn donation_progress_returns_snapshot_json() {
    let (stub, _) = StubSource::ok(SAMPLE_PAGE);
    let svc = service_with(stub, Duration::ZERO);

    let mut resp = handle(get("/api/donation-progress"), &svc).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"].to_str().unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["collected"], 1500.0);
    assert_eq!(body["minGoal"], 550.0);
    assert_eq!(body["optGoal"], 1625.0);
    assert_eq!(body["daysLeft"], 25);
    assert_eq!(body["donors"], 10);

    let last_updated = body["lastUpdated"].as_str().unwrap();
    assert_eq!(last_updated.len(), 8);
    assert_eq!(last_updated.matches(':').count(), 2);
}

#[test]
fn unrecognised_page_still_answers_with_fallbacks() {
    let (stub, _) = StubSource::ok("<html><body>Maintenance</body></html>");
    let svc = service_with(stub, Duration::ZERO);

    let mut resp = handle(get("/api/donation-progress"), &svc).unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["collected"], 0.0);
    assert_eq!(body["minGoal"], 550.0);
    assert_eq!(body["optGoal"], 1625.0);
    assert_eq!(body["provenance"]["optGoal"], "fallback");
}

#[test]
fn transport_failure_is_generic_500() {
    let (stub, _) = StubSource::failing();
    let svc = service_with(stub, Duration::ZERO);

    let err = handle(get("/api/donation-progress"), &svc).err().unwrap();
    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 500);

    let body: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["error"], "Failed to fetch donation data");
    assert!(body.get("collected").is_none());
    assert!(!body.to_string().contains("connection refused"));
}

#[test]
fn health_and_unknown_routes() {
    let (stub, calls) = StubSource::ok(SAMPLE_PAGE);
    let svc = service_with(stub, Duration::ZERO);

    let mut resp = handle(get("/health"), &svc).unwrap();
    assert_eq!(body_string(&mut resp), r#"{"status":"ok"}"#);

    let err = handle(get("/api/nope"), &svc).err().unwrap();
    assert_eq!(error_to_response(err).status(), 404);

    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}
