//! Integration tests for merging.

use propdf::PropdfError;
use propdf::config::CompressionLevel;
use propdf::io::PdfReader;
use propdf::merge::merge_files;
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{page_texts, write_bytes, write_pdf};

#[tokio::test]
async fn test_merge_concatenates_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["A1", "A2"]);
    let b = write_pdf(&dir, "b.pdf", &["B1", "B2", "B3"]);
    let output = dir.path().join("out.pdf");

    let report = merge_files(&[a.clone(), b.clone()], &output, CompressionLevel::Standard)
        .await
        .unwrap();

    assert_eq!(report.merged_files, vec![a, b]);
    assert_eq!(report.statistics.files_merged, 2);
    assert_eq!(report.statistics.total_pages, 5);
    assert_eq!(report.write.output_path, output);

    let merged = PdfReader::new().load(&output).await.unwrap();
    assert_eq!(merged.page_count, 5);

    let texts = page_texts(&merged.document);
    for (text, expected) in texts.iter().zip(["A1", "A2", "B1", "B2", "B3"]) {
        assert!(text.contains(expected), "{text:?} should contain {expected}");
    }
}

#[tokio::test]
async fn test_merge_reversed_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["first"]);
    let b = write_pdf(&dir, "b.pdf", &["second"]);
    let output = dir.path().join("out.pdf");

    merge_files(&[b, a], &output, CompressionLevel::None)
        .await
        .unwrap();

    let merged = PdfReader::new().load(&output).await.unwrap();
    let texts = page_texts(&merged.document);
    assert!(texts[0].contains("second"));
    assert!(texts[1].contains("first"));
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
#[tokio::test]
async fn test_merge_compression_levels(#[case] level: CompressionLevel) {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["one", "two"]);
    let output = dir.path().join("out.pdf");

    let report = merge_files(&[a.clone(), a], &output, level).await.unwrap();
    assert_eq!(report.statistics.total_pages, 4);
    assert_eq!(report.write.compressed, level != CompressionLevel::None);

    let merged = PdfReader::new().load(&output).await.unwrap();
    assert_eq!(merged.page_count, 4);
}

#[tokio::test]
async fn test_merge_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["new content"]);
    let output = write_bytes(&dir, "out.pdf", b"old bytes");

    merge_files(&[a], &output, CompressionLevel::Standard)
        .await
        .unwrap();

    let merged = PdfReader::new().load(&output).await.unwrap();
    assert_eq!(merged.page_count, 1);
}

#[tokio::test]
async fn test_failed_merge_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["ok"]);
    let bad = write_bytes(&dir, "bad.pdf", b"%PDF-1.4 truncated");
    let output = dir.path().join("out.pdf");

    let result = merge_files(&[a, bad], &output, CompressionLevel::Standard).await;

    assert!(matches!(result, Err(PropdfError::FailedToLoadPdf { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_merge_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.pdf");

    let result = merge_files(&[], &output, CompressionLevel::Standard).await;
    assert!(matches!(result, Err(PropdfError::NoFilesToMerge)));
    assert!(!output.exists());
}
