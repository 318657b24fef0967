//! End-to-end sync tests.

use folio_cli::Error;
use folio_core::{Block, InlineSpan, Properties, PropertyValue, SourceDocument};

use crate::common::{MemorySource, post, split_post, syncer};

fn paragraph(text: &str) -> Block {
    Block::paragraph(vec![InlineSpan::plain(text)])
}

#[tokio::test]
async fn test_sync_writes_every_post() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = MemorySource::new()
        .with_document(
            post("p1", "Hello World", "2024-05-02"),
            vec![
                Block::Heading1 {
                    spans: vec![InlineSpan::plain("Intro")],
                },
                paragraph("First post."),
            ],
        )
        .with_document(post("p2", "Second Post", "2024-05-01"), vec![paragraph("Two.")]);

    let report = syncer(source, dir.path()).run().await.unwrap();

    assert_eq!(report.found, 2);
    assert!(report.is_clean());
    assert_eq!(
        report.written,
        vec![dir.path().join("hello-world.md"), dir.path().join("second-post.md")]
    );

    let text = std::fs::read_to_string(dir.path().join("hello-world.md")).unwrap();
    assert_eq!(
        text,
        "---\n\
         title: \"Hello World\"\n\
         date: 2024-05-02\n\
         description: \"\"\n\
         tags: []\n\
         categories: [\"Uncategorized\"]\n\
         draft: false\n\
         ---\n\
         ## Intro\n\
         \n\
         First post.\n"
    );
}

#[tokio::test]
async fn test_sync_continues_after_document_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = MemorySource::new()
        .with_failing_document(post("bad", "Broken Post", "2024-05-03"))
        .with_document(post("good", "Good Post", "2024-05-02"), vec![paragraph("ok")]);

    let report = syncer(source, dir.path()).run().await.unwrap();

    assert_eq!(report.found, 2);
    assert_eq!(report.written, vec![dir.path().join("good-post.md")]);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.document_id, "bad");
    assert_eq!(failure.title, "Broken Post");
    assert!(matches!(
        failure.error,
        Error::Notion(folio_notion::Error::Api { status: 404, .. })
    ));
    assert!(!dir.path().join("broken-post.md").exists());
}

#[tokio::test]
async fn test_sync_listing_failure_aborts() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = MemorySource::new()
        .with_document(post("p1", "Never Written", "2024-05-02"), Vec::new())
        .failing_list();

    let err = syncer(source, dir.path()).run().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Notion(folio_notion::Error::Api { status: 401, .. })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_sync_empty_source() {
    let dir = tempfile::TempDir::new().unwrap();
    let report = syncer(MemorySource::new(), dir.path()).run().await.unwrap();

    assert_eq!(report.found, 0);
    assert!(report.written.is_empty());
    assert!(report.is_clean());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("posts");
    let source =
        MemorySource::new().with_document(post("p1", "Draft Run", "2024-05-02"), Vec::new());

    let report = syncer(source, &out).dry_run(true).run().await.unwrap();

    assert!(report.dry_run);
    assert_eq!(report.written, vec![out.join("draft-run.md")]);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_untitled_post_uses_document_id_and_clock() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = MemorySource::new().with_document(
        SourceDocument::new("ab12-cd34", Properties::new()),
        vec![Block::unsupported("table"), paragraph("Only this.")],
    );

    let report = syncer(source, dir.path()).run().await.unwrap();
    let path = dir.path().join("ab12cd34.md");
    assert_eq!(report.written, vec![path.clone()]);

    let text = std::fs::read_to_string(path).unwrap();
    let (header, body) = split_post(&text);
    assert_eq!(header["title"].as_str(), Some(""));
    assert_eq!(body, "Only this.\n");
    assert!(text.contains("date: 2024-06-01T12:00:00Z\n"));
}

#[tokio::test]
async fn test_rich_post_round_trips_through_front_matter() {
    let dir = tempfile::TempDir::new().unwrap();
    let document = SourceDocument::new(
        "p1",
        Properties::new()
            .with("Title", PropertyValue::Title("Quotes \"and\" Things".to_string()))
            .with("Slug", PropertyValue::RichText("custom-slug".to_string()))
            .with("Description", PropertyValue::RichText("A summary".to_string()))
            .with(
                "Tags",
                PropertyValue::MultiSelect(vec!["rust".to_string(), "notion".to_string()]),
            )
            .with("Category", PropertyValue::Select("Engineering".to_string())),
    );
    let source = MemorySource::new().with_document(
        document,
        vec![
            Block::code("rust", vec![InlineSpan::plain("fn main() {}")]),
            Block::Divider,
        ],
    );

    let report = syncer(source, dir.path()).run().await.unwrap();
    let text = std::fs::read_to_string(&report.written[0]).unwrap();
    let (header, body) = split_post(&text);

    assert_eq!(report.written[0], dir.path().join("custom-slug.md"));
    assert_eq!(header["title"].as_str(), Some("Quotes \"and\" Things"));
    assert_eq!(header["description"].as_str(), Some("A summary"));
    assert_eq!(header["tags"][0].as_str(), Some("rust"));
    assert_eq!(header["tags"][1].as_str(), Some("notion"));
    assert_eq!(header["categories"][0].as_str(), Some("Engineering"));
    assert_eq!(body, "```rust\nfn main() {}\n```\n\n---\n");
}

#[tokio::test]
async fn test_multiline_description_keeps_header_intact() {
    let dir = tempfile::TempDir::new().unwrap();
    let document = SourceDocument::new(
        "p1",
        Properties::new()
            .with("Name", PropertyValue::Title("Two Lines".to_string()))
            .with(
                "Description",
                PropertyValue::RichText("first\n---\nsecond: \"x\"".to_string()),
            ),
    );
    let source = MemorySource::new().with_document(document, vec![paragraph("Body.")]);

    let report = syncer(source, dir.path()).run().await.unwrap();
    let text = std::fs::read_to_string(&report.written[0]).unwrap();
    let (header, body) = split_post(&text);

    assert_eq!(
        header["description"].as_str(),
        Some("first\n---\nsecond: \"x\"")
    );
    assert_eq!(header["draft"].as_bool(), Some(false));
    assert_eq!(body, "Body.\n");
}
