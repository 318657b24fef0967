//! Common test utilities for folio-notion integration tests.

use folio_notion::{NotionClient, NotionSettings};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Token used by every test client.
pub const TOKEN: &str = "secret_test_token";

/// Database id used by every test client.
pub const DATABASE_ID: &str = "db-1";

/// Settings pointing at `server` with fast retries.
pub fn settings_for(server: &MockServer) -> NotionSettings {
    let mut settings = NotionSettings::new(TOKEN, DATABASE_ID);
    settings.api_base = format!("{}/v1", server.uri());
    settings.max_retries = 2;
    settings.retry_delay_ms = 1;
    settings
}

/// A client talking to `server`.
pub fn client_for(server: &MockServer) -> NotionClient {
    NotionClient::new(settings_for(server)).expect("valid test settings")
}

/// A plain rich-text object.
pub fn rich(text: &str) -> Value {
    json!({
        "type": "text",
        "text": { "content": text, "link": null },
        "annotations": {
            "bold": false, "italic": false, "strikethrough": false,
            "underline": false, "code": false, "color": "default"
        },
        "plain_text": text,
        "href": null
    })
}

/// A database row with a title and publish date.
pub fn page(id: &str, title: &str, date: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Name": { "id": "title", "type": "title", "title": [rich(title)] },
            "Published Date": { "id": "d", "type": "date", "date": { "start": date } },
            "Status": { "id": "s", "type": "select", "select": { "name": "Published" } }
        }
    })
}

/// A paragraph block.
pub fn paragraph(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "has_children": false,
        "paragraph": { "rich_text": [rich(text)], "color": "default" }
    })
}

/// A list response envelope.
pub fn list(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "has_more": next_cursor.is_some(),
        "next_cursor": next_cursor,
    })
}
