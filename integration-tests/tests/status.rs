use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

/// Fresh server reports zero image requests
#[test]
fn status_starts_at_zero() {
    let srv = TestServer::start();

    let res = srv.get("/status").send().unwrap();
    let status = res.status();
    let body: serde_json::Value = res.json().unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["totalRequests"], 0);
    assert!(body["serverTime"].as_str().unwrap().ends_with('Z'));
    assert!(body["endpoints"].is_object());
}

/// Image routes advance the counter, status and index do not
#[test]
fn status_counts_image_requests_only() {
    let srv = TestServer::start();

    srv.get("/cache-test").send().unwrap();
    srv.get("/cache-test/no-cache").send().unwrap();
    srv.get("/cache-test/max-age/30").send().unwrap();
    srv.get("/").send().unwrap();
    srv.get("/status").send().unwrap();

    assert_eq!(srv.total_requests(), 3);
}

/// Index page links every route and shows the count
#[test]
fn index_page_lists_routes() {
    let srv = TestServer::start();
    srv.get("/cache-test").send().unwrap();

    let res = srv.get("/").send().unwrap();
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = res.text().unwrap();

    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    for link in [
        "/cache-test",
        "/cache-test/no-cache",
        "/cache-test/max-age/3600",
        "/status",
    ] {
        assert!(body.contains(link), "index page is missing {link}: {body}");
    }
    assert!(body.contains("Total image requests: 1"), "{body}");
}
