//! Tests for the HTTP client module

use super::*;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    let config = HttpClientConfig::builder().no_rate_limit().build();
    HttpClient::with_config(config).unwrap()
}

fn url_for(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{path}", server.uri())).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("media-pager/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::new(2, 2))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 2)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("count", 100)
        .query_opt("begin", None::<u64>)
        .query_opt("end", Some(5_u64))
        .header("X-Request-Id", "abc123")
        .timeout(Duration::from_secs(10));

    assert_eq!(
        config.query,
        vec![
            ("count".to_string(), "100".to_string()),
            ("end".to_string(), "5".to_string()),
        ]
    );
    assert_eq!(config.query_value("count"), Some("100"));
    assert_eq!(config.query_value("begin"), None);
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_http_client_default_has_no_rate_limiter() {
    let client = HttpClient::new().unwrap();
    assert!(!client.has_rate_limiter());

    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::new(5, 1))
        .build();
    assert!(HttpClient::with_config(config).unwrap().has_rate_limiter());
}

#[tokio::test]
async fn test_http_client_requests_the_url_as_given() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gallery/media/ids"))
        .respond_with(ResponseTemplate::new(200).set_body_string("prefixed"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client()
        .get_text(
            &url_for(&mock_server, "/gallery/media/ids"),
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert_eq!(body, "prefixed");
}

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ids": ["a"]
        })))
        .mount(&mock_server)
        .await;

    let response = client()
        .get(&url_for(&mock_server, "/media/ids"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(query_param("count", "2"))
        .and(query_param("begin", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let body = client()
        .get_text(
            &url_for(&mock_server, "/media/ids"),
            RequestConfig::new().query("count", 2).query("begin", 42),
        )
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .and(header("X-Client", "gallery"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-Client", "gallery")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get_with_config(
            &url_for(&mock_server, "/media/ids"),
            RequestConfig::new().header("X-Request-Id", "req-456"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client()
        .get(&url_for(&mock_server, "/media/ids"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        crate::error::Error::HttpStatus { status: 500, ref body } if body == "boom"
    ));
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/meta/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = client()
        .get(&url_for(&mock_server, "/media/meta/missing"))
        .await;

    assert!(matches!(
        result,
        Err(crate::error::Error::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/ids"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let err = client()
        .get_with_config(
            &url_for(&mock_server, "/media/ids"),
            RequestConfig::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), crate::error::FailureKind::Transport);
}

#[tokio::test]
async fn test_http_client_connection_refused() {
    let url = Url::parse("http://127.0.0.1:1/media/ids").unwrap();
    let err = client().get(&url).await.unwrap_err();
    assert!(matches!(err, crate::error::Error::Http(_)));
}
