//! Shared fixtures for the integration tests.
//!
//! Documents are generated with lopdf at test time; nothing is read from a
//! fixtures directory and no pdfium library is needed.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use propdf::render::{PageRenderer, Thumbnail};
use propdf::{Dialogs, PropdfError};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a document with one text line per page.
pub fn build_pdf(pages: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 18.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        // Resources on each page, unlike the unit fixtures, so merged
        // documents exercise both layouts.
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a generated document into `dir` and return its path.
pub fn write_pdf(dir: &TempDir, name: &str, pages: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    build_pdf(pages).save(&path).expect("Failed to write fixture");
    path
}

/// Write arbitrary bytes into `dir` and return the path.
pub fn write_bytes(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// Page texts of a document, in page order.
pub fn page_texts(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .into_keys()
        .map(|n| doc.extract_text(&[n]).unwrap_or_default())
        .collect()
}

/// Renderer that returns a small blank thumbnail, or fails on demand.
#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub fail: bool,
}

impl PageRenderer for FakeRenderer {
    fn render_first_page(&self, _path: &Path, scale: f32) -> propdf::Result<Thumbnail> {
        if self.fail {
            return Err(PropdfError::render_failed("no rasterizer in tests"));
        }
        Ok(Thumbnail::blank(
            (612.0 * scale).round() as u32,
            (792.0 * scale).round() as u32,
        ))
    }
}

/// One dialog the application showed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: &'static str,
    pub title: String,
    pub message: String,
}

/// Dialogs answered from queued responses. An exhausted queue cancels.
#[derive(Debug, Default)]
pub struct QueuedDialogs {
    pub open: VecDeque<PathBuf>,
    pub merge_inputs: VecDeque<Vec<PathBuf>>,
    pub save_paths: VecDeque<PathBuf>,
    pub queries: VecDeque<String>,
    pub notices: Vec<Notice>,
}

impl QueuedDialogs {
    /// The most recent notice.
    pub fn last(&self) -> &Notice {
        self.notices.last().expect("No dialog was shown")
    }

    fn push(&mut self, kind: &'static str, title: &str, message: &str) {
        self.notices.push(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Dialogs for QueuedDialogs {
    fn pick_file(&mut self) -> Option<PathBuf> {
        self.open.pop_front()
    }

    fn pick_files(&mut self) -> Vec<PathBuf> {
        self.merge_inputs.pop_front().unwrap_or_default()
    }

    fn save_as(&mut self, _default_extension: &str) -> Option<PathBuf> {
        self.save_paths.pop_front()
    }

    fn ask_string(&mut self, _title: &str, _prompt: &str) -> Option<String> {
        self.queries.pop_front()
    }

    fn info(&mut self, title: &str, message: &str) {
        self.push("info", title, message);
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.push("warning", title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        self.push("error", title, message);
    }
}
