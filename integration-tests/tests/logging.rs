use integration_tests::harness::{TestServer, captured_events};
use reqwest::StatusCode;

/// Each generated image emits a structured event with its seed
#[test]
fn image_generation_is_logged() {
    let srv = TestServer::start();

    let res = srv.get("/cache-test?maxAge=90").send().unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_owned();

    let event = captured_events()
        .into_iter()
        .find(|e| e.message == "image generated" && e.field("request_id") == Some(&request_id))
        .expect("no image generated event for request");

    assert_eq!(event.level, tracing::Level::INFO);
    assert_eq!(event.field("route"), Some("cache-test"));
    assert_eq!(event.field("cache_control"), Some("public, max-age=90"));
    assert!(event.field("seed").is_some());
}

/// Rejected requests are logged as warnings
#[test]
fn rejected_request_is_logged_as_warning() {
    let srv = TestServer::start();

    let res = srv.get("/cache-test?maxAge=-1").send().unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let found = captured_events().into_iter().any(|e| {
        e.message == "request rejected"
            && e.level == tracing::Level::WARN
            && e.field("path") == Some("/cache-test")
    });
    assert!(found, "no warning event for rejected request");
}
