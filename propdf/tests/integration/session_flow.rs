//! Integration tests for opening documents.

use propdf::io::PdfReader;
use propdf::session::DocumentSession;
use tempfile::TempDir;

use crate::common::{FakeRenderer, write_pdf};

#[tokio::test]
async fn test_open_reports_pages_and_first_page_text() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "report.pdf", &["Introduction", "Body", "Appendix"]);

    let session = DocumentSession::open(&path, &PdfReader::new(), &FakeRenderer::default(), 0.2)
        .await
        .unwrap();

    assert_eq!(session.source(), path);
    assert_eq!(session.page_count(), 3);
    assert!(session.first_page_text().contains("Introduction"));
    assert!(!session.first_page_text().contains("Body"));
    assert!(session.page_text(3).contains("Appendix"));
}

#[tokio::test]
async fn test_thumbnail_scales_page_one() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "a.pdf", &["text"]);

    let session = DocumentSession::open(&path, &PdfReader::new(), &FakeRenderer::default(), 0.5)
        .await
        .unwrap();

    let thumbnail = session.thumbnail().unwrap();
    assert_eq!((thumbnail.width, thumbnail.height), (306, 396));
}

#[tokio::test]
async fn test_render_failure_keeps_session() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "a.pdf", &["still readable"]);

    let session = DocumentSession::open(&path, &PdfReader::new(), &FakeRenderer { fail: true }, 0.2)
        .await
        .unwrap();

    assert!(session.thumbnail().is_none());
    assert!(session.render_error().unwrap().contains("no rasterizer"));
    assert!(session.first_page_text().contains("still readable"));
}

#[tokio::test]
async fn test_summary_serializes() {
    let dir = TempDir::new().unwrap();
    let path = write_pdf(&dir, "a.pdf", &["one", "two"]);

    let session = DocumentSession::open(&path, &PdfReader::new(), &FakeRenderer::default(), 0.2)
        .await
        .unwrap();

    let json = propdf::output::to_json(&session.summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["page_count"], 2);
}
