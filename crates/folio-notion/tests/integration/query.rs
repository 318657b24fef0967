//! Database query tests.

use folio_notion::{DocumentSource, Error};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{DATABASE_ID, client_for, list, page};

fn query_path() -> String {
    format!("/v1/databases/{DATABASE_ID}/query")
}

#[tokio::test]
async fn test_query_sends_filter_sort_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .and(header("authorization", "Bearer secret_test_token"))
        .and(header("notion-version", "2022-06-28"))
        .and(body_partial_json(json!({
            "filter": { "property": "Status", "select": { "equals": "Published" } },
            "sorts": [ { "property": "Published Date", "direction": "descending" } ],
            "page_size": 100
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list(
                vec![page("p1", "First", "2024-02-01")],
                None,
            )),
        )
        .expect(1)
        .mount(&server)
        .await;

    let docs = client_for(&server).fetch_published_documents().await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "p1");
    assert_eq!(
        docs[0].properties.get("Name").unwrap().as_title(),
        Some("First")
    );
}

#[tokio::test]
async fn test_query_follows_pagination() {
    let server = MockServer::start().await;

    // Cursor-specific page is mounted first so it wins for the second call.
    Mock::given(method("POST"))
        .and(path(query_path()))
        .and(body_partial_json(json!({ "start_cursor": "cursor-2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![page("p3", "Third", "2024-01-01")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![
                page("p1", "First", "2024-03-01"),
                page("p2", "Second", "2024-02-01"),
            ],
            Some("cursor-2"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let docs = client_for(&server).query_published().await.unwrap();
    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn test_query_empty_database() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(Vec::new(), None)))
        .mount(&server)
        .await;

    let docs = client_for(&server).query_published().await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_query_retries_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "object": "error",
            "status": 429,
            "code": "rate_limited",
            "message": "Slow down"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![page("p1", "First", "2024-02-01")],
            None,
        )))
        .mount(&server)
        .await;

    let docs = client_for(&server).query_published().await.unwrap();
    assert_eq!(docs.len(), 1);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_query_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find database"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).query_published().await.unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "object_not_found");
            assert_eq!(message, "Could not find database");
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_server_error_gives_up() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).query_published().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 503, .. }));
    assert!(err.is_retryable());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() > 1, "Expected at least one retry");
}

#[tokio::test]
async fn test_query_unauthorized_maps_status_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).query_published().await.unwrap_err();
    match err {
        Error::Api { status, code, message } => {
            assert_eq!(status, 401);
            assert_eq!(code, "");
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}
