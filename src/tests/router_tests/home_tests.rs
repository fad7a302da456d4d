use crate::router::handle;
use crate::tests::utils::{body_string, get, service_with, StubSource, SAMPLE_PAGE};
use std::time::Duration;

#[test]
fn home_page_shows_campaign_figures() {
    let (stub, _) = StubSource::ok(SAMPLE_PAGE);
    let svc = service_with(stub, Duration::ZERO);

    let mut resp = handle(get("/"), &svc).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("1500€ récoltés"), "{body}");
    assert!(body.contains("550€"));
    assert!(body.contains("1625€"));
    assert!(body.contains("Donateurs"));
    // 1500 / 1625 of the bar
    assert!(body.contains("width: 92.3%"));
    assert!(body.contains(r#"http-equiv="refresh""#));
    assert!(!body.contains("Sync..."));
}

#[test]
fn home_page_uses_placeholders_when_fetch_fails() {
    let (stub, _) = StubSource::failing();
    let svc = service_with(stub, Duration::ZERO);

    let mut resp = handle(get("/"), &svc).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Live : Sync..."), "{body}");
    assert!(!body.contains("récoltés"));
}
