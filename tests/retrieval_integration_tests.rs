use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use signpost::core::filter::QueryScope;
use signpost::retrieval::{
    DataLoader, HttpProvider, LoadOutcome, LoadState, ResourceProvider, RetrievalError,
};
use signpost::tui::components::ResultsState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

const RECV_WINDOW: Duration = Duration::from_millis(2000);

/// A one-record feed whose id/title identify which endpoint served it.
fn feed_body(id: &str) -> String {
    format!(
        r#"[{{
            "id": "{id}",
            "title": "{id} listing",
            "summary": "Drop-in support",
            "category": "Academic",
            "location": "Main Hall",
            "openNow": true,
            "virtual": false
        }}]"#
    )
}

fn loader() -> (DataLoader, mpsc::Receiver<LoadOutcome>) {
    let (tx, rx) = mpsc::channel();
    (DataLoader::new(Arc::new(HttpProvider::new()), tx), rx)
}

// ============================================================================
// HttpProvider Tests
// ============================================================================

#[tokio::test]
async fn test_http_provider_fetches_and_decodes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resources"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_body("a")))
        .mount(&mock_server)
        .await;

    let store = HttpProvider::new()
        .fetch(&format!("{}/resources", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store[0].id, "a");
    assert_eq!(store[0].title, "a listing");
    assert!(store[0].open_now);
}

#[tokio::test]
async fn test_http_provider_surfaces_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resources"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = HttpProvider::new()
        .fetch(&format!("{}/resources", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, RetrievalError::Http { status: 503 }));
}

#[tokio::test]
async fn test_http_provider_surfaces_decode_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resources"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a feed</html>"))
        .mount(&mock_server)
        .await;

    let err = HttpProvider::new()
        .fetch(&format!("{}/resources", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, RetrievalError::Decode(_)));
}

// ============================================================================
// DataLoader Tests (over real HTTP)
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_loader_commits_store_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_body("a")))
        .mount(&mock_server)
        .await;

    let (mut loader, rx) = loader();
    let mut results = ResultsState::new(QueryScope::AllFields);

    loader.set_source(&format!("{}/feed", mock_server.uri()));
    let outcome = rx.recv_timeout(RECV_WINDOW).unwrap();
    if let Some(store) = loader.commit(outcome) {
        results.set_resources(store);
    }

    assert_eq!(*loader.state(), LoadState::Loaded);
    assert_eq!(results.resources().len(), 1);
    assert_eq!(results.filtered().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_loader_requests_same_source_once() {
    let mock_server = MockServer::start().await;
    // expect(1): the mock server itself verifies no second request arrives.
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_body("a")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (mut loader, rx) = loader();
    let source = format!("{}/feed", mock_server.uri());

    loader.set_source(&source);
    loader.set_source(&source);
    let outcome = rx.recv_timeout(RECV_WINDOW).unwrap();
    loader.commit(outcome).unwrap();
    loader.set_source(&source);

    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_requested_source_wins_the_race() {
    let mock_server = MockServer::start().await;
    // The first-requested feed answers slowly; the second answers at once.
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(feed_body("stale"))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_body("fresh")))
        .mount(&mock_server)
        .await;

    let (mut loader, rx) = loader();
    let mut results = ResultsState::new(QueryScope::AllFields);

    loader.set_source(&format!("{}/slow", mock_server.uri()));
    loader.set_source(&format!("{}/fast", mock_server.uri()));

    // Completions arrive inverted: fast first, superseded slow second.
    let first = rx.recv_timeout(RECV_WINDOW).unwrap();
    let second = rx.recv_timeout(RECV_WINDOW).unwrap();

    for outcome in [first, second] {
        if let Some(store) = loader.commit(outcome) {
            results.set_resources(store);
        }
    }

    // Only the latest request may shape what is displayed.
    assert_eq!(*loader.state(), LoadState::Loaded);
    assert_eq!(results.resources().len(), 1);
    assert_eq!(results.resources()[0].id, "fresh");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_reload_keeps_previous_store_displayed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/good"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed_body("good")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (mut loader, rx) = loader();
    let mut results = ResultsState::new(QueryScope::AllFields);

    loader.set_source(&format!("{}/good", mock_server.uri()));
    let outcome = rx.recv_timeout(RECV_WINDOW).unwrap();
    results.set_resources(loader.commit(outcome).unwrap());

    loader.set_source(&format!("{}/broken", mock_server.uri()));
    let outcome = rx.recv_timeout(RECV_WINDOW).unwrap();
    assert!(loader.commit(outcome).is_none());

    // The failure is observable, and the last good list is still there.
    assert!(matches!(loader.state(), LoadState::Failed(_)));
    assert_eq!(results.resources().len(), 1);
    assert_eq!(results.resources()[0].id, "good");
    assert!(results.select_by_id("good").is_some());
}
