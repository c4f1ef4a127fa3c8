//! Integration tests using mock HTTP server
//!
//! Tests the full flow: feed config → Pager → MediaClient → HTTP → merged id list

use media_pager::{Cursor, FeedConfig, LoadOutcome, MediaId, Pager, ResponseContract};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ids(raw: &[&str]) -> Vec<MediaId> {
    raw.iter().map(|s| MediaId::from(*s)).collect()
}

async fn mount_page(server: &MockServer, begin: Option<&str>, body: serde_json::Value) {
    let mock = Mock::given(method("GET")).and(path("/media/ids"));
    let mock = match begin {
        Some(begin) => mock.and(query_param("begin", begin)),
        None => mock.and(query_param_is_missing("begin")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_response(server: &MockServer, begin: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param("begin", begin))
        .respond_with(response)
        .mount(server)
        .await;
}

fn pager_for(server: &MockServer, page_size: u32) -> Pager<media_pager::MediaClient> {
    let config = FeedConfig::new(server.uri()).with_page_size(page_size);
    Pager::from_config(&config).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_two_pages_with_overlap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param("count", "2"))
        .and(query_param_is_missing("begin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ids": ["a", "b"],
            "last": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param("count", "2"))
        .and(query_param("begin", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ids": ["b", "c"],
            "last": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pager = pager_for(&server, 2);

    pager.initialize().await;
    assert_eq!(pager.ids().await, ids(&["a", "b"]));
    assert_eq!(pager.cursor().await, Some(Cursor::new(2)));

    pager.load_next().await;
    assert_eq!(pager.ids().await, ids(&["a", "b", "c"]));
    assert_eq!(pager.cursor().await, Some(Cursor::new(3)));
}

#[tokio::test]
async fn test_server_error_leaves_state_unchanged() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["a", "b"], "last": 2})).await;
    mount_response(&server, "2", ResponseTemplate::new(500)).await;

    let pager = pager_for(&server, 2);
    pager.initialize().await;
    let before = pager.snapshot().await;

    let outcome = pager.load_next().await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(pager.snapshot().await, before);
}

#[tokio::test]
async fn test_non_json_body_leaves_state_unchanged() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["a", "b"], "last": 2})).await;
    mount_response(
        &server,
        "2",
        ResponseTemplate::new(200).set_body_string("<!doctype html><p>maintenance</p>"),
    )
    .await;

    let pager = pager_for(&server, 2);
    pager.initialize().await;
    let before = pager.snapshot().await;

    assert!(pager.load_next().await.is_failed());
    assert_eq!(pager.snapshot().await, before);
    assert_eq!(pager.cursor().await, Some(Cursor::new(2)));
}

#[tokio::test]
async fn test_recovery_after_failure_reuses_cursor() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["a", "b"], "last": 2})).await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param("begin", "2"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_page(&server, Some("2"), json!({"ids": ["c"], "last": 3})).await;

    let pager = pager_for(&server, 2);
    pager.initialize().await;

    assert!(pager.load_next().await.is_failed());
    assert_eq!(pager.load_next().await.added(), 1);
    assert_eq!(pager.ids().await, ids(&["a", "b", "c"]));
}

#[tokio::test]
async fn test_schema_mismatch_is_a_failed_load() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["a", 7], "last": 2})).await;

    let pager = pager_for(&server, 2);

    assert!(pager.initialize().await.is_failed());
    assert!(pager.ids().await.is_empty());
    assert!(pager.cursor().await.is_none());
}

#[tokio::test]
async fn test_caller_drains_until_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["m5", "m4"], "last": 500})).await;
    mount_page(&server, Some("500"), json!({"ids": ["m4", "m3"], "last": 400})).await;
    mount_page(&server, Some("400"), json!({"ids": ["m2", "m1"], "last": 200})).await;
    mount_page(&server, Some("200"), json!({"ids": [], "last": 200})).await;

    let pager = pager_for(&server, 2);
    let mut outcome = pager.initialize().await;
    let mut loads = 1;
    while !outcome.is_empty_page() && !outcome.is_failed() && loads < 10 {
        outcome = pager.load_next().await;
        loads += 1;
    }

    assert_eq!(loads, 4);
    assert_eq!(pager.ids().await, ids(&["m5", "m4", "m3", "m2", "m1"]));
    assert_eq!(pager.cursor().await, Some(Cursor::new(200)));
}

#[tokio::test]
async fn test_concurrent_load_more_is_idempotent() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["a", "b"], "last": 2})).await;
    mount_page(&server, Some("2"), json!({"ids": ["c", "d"], "last": 4})).await;

    let pager = pager_for(&server, 2);
    pager.initialize().await;

    let (first, second) = futures::join!(pager.load_next(), pager.load_next());

    assert_eq!(first.added() + second.added(), 2);
    assert_eq!(pager.ids().await, ids(&["a", "b", "c", "d"]));
    assert_eq!(pager.cursor().await, Some(Cursor::new(4)));
}

#[tokio::test]
async fn test_simple_contract_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param_is_missing("begin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ids": ["x", "y"]})))
        .expect(2)
        .mount(&server)
        .await;

    let config = FeedConfig::new(server.uri()).with_contract(ResponseContract::Simple);
    let pager = Pager::from_config(&config).unwrap();

    pager.initialize().await;
    let outcome = pager.load_next().await;

    assert_eq!(outcome.added(), 0);
    assert_eq!(pager.ids().await, ids(&["x", "y"]));
    assert!(pager.cursor().await.is_none());
}

#[tokio::test]
async fn test_subscriber_follows_loads() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"ids": ["a"], "last": 1})).await;
    mount_page(&server, Some("1"), json!({"ids": ["b"], "last": 0})).await;

    let pager = pager_for(&server, 1);
    let mut rx = pager.subscribe();

    pager.initialize().await;
    pager.load_next().await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), ids(&["a", "b"]));
}

#[tokio::test]
async fn test_config_file_drives_pager() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param("count", "7"))
        .and(wiremock::matchers::header("X-Client", "gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ids": ["a"], "last": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("feed.yaml");
    std::fs::write(
        &file,
        format!(
            "base_url: {}\npage_size: 7\nheaders:\n  X-Client: gallery\n",
            server.uri()
        ),
    )
    .unwrap();

    let config = FeedConfig::from_file(&file).unwrap();
    let pager = Pager::from_config(&config).unwrap();

    assert_eq!(pager.initialize().await.added(), 1);
}
