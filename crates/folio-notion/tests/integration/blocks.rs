//! Block listing tests.

use folio_core::{Block, InlineSpan};
use folio_notion::DocumentSource;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, list, paragraph, rich};

#[tokio::test]
async fn test_blocks_follow_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/blocks/page-1/children"))
        .and(query_param("start_cursor", "next"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list(vec![paragraph("Two")], None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/blocks/page-1/children"))
        .and(query_param("page_size", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list(vec![paragraph("One")], Some("next"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let blocks = client_for(&server).fetch_blocks("page-1").await.unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::paragraph(vec![InlineSpan::plain("One")]),
            Block::paragraph(vec![InlineSpan::plain("Two")]),
        ]
    );
}

#[tokio::test]
async fn test_blocks_degrade_unknown_and_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/blocks/page-1/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list(
            vec![
                json!({ "type": "heading_1", "heading_1": { "rich_text": [rich("Title")] } }),
                json!({ "type": "toggle", "toggle": { "rich_text": [rich("hidden")] }, "has_children": true }),
                json!({ "type": "paragraph", "paragraph": "not an object" }),
                json!({ "type": "divider", "divider": {} }),
            ],
            None,
        )))
        .mount(&server)
        .await;

    let blocks = client_for(&server).block_children("page-1").await.unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::Heading1 {
                spans: vec![InlineSpan::plain("Title")]
            },
            Block::unsupported("toggle"),
            Block::unsupported("paragraph"),
            Block::Divider,
        ]
    );
}

#[tokio::test]
async fn test_blocks_missing_page_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/blocks/missing/children"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find block"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_blocks("missing").await.unwrap_err();
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("object_not_found"));
}
