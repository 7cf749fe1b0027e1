//! Fixture builders shared by unit tests.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::app::Dialogs;
use crate::render::{PageRenderer, Thumbnail};
use crate::{PropdfError, Result};

/// Build a document with one Helvetica text line per page.
pub fn build_pdf(pages: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

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
    build_pdf(pages).save(&path).unwrap();
    path
}

/// Renderer that returns a fixed-size blank thumbnail, or fails on demand.
#[derive(Debug, Default)]
pub struct StubRenderer {
    pub fail: bool,
}

impl PageRenderer for StubRenderer {
    fn render_first_page(&self, _path: &Path, scale: f32) -> Result<Thumbnail> {
        if self.fail {
            return Err(PropdfError::render_failed("stub renderer unavailable"));
        }
        let width = (595.0 * scale).round() as u32;
        let height = (842.0 * scale).round() as u32;
        Ok(Thumbnail::blank(width, height))
    }
}

/// Dialogs that answer from queued responses and record every notice.
///
/// `files` feeds both `pick_file` (first entry) and `pick_files`. An
/// exhausted queue behaves like a cancelled prompt.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub files: VecDeque<Vec<PathBuf>>,
    pub save_paths: VecDeque<Option<PathBuf>>,
    pub answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
    pub shown: Vec<(&'static str, String, String)>,
}

impl Dialogs for ScriptedDialogs {
    fn pick_file(&mut self) -> Option<PathBuf> {
        self.files.pop_front()?.into_iter().next()
    }

    fn pick_files(&mut self) -> Vec<PathBuf> {
        self.files.pop_front().unwrap_or_default()
    }

    fn save_as(&mut self, _default_extension: &str) -> Option<PathBuf> {
        self.save_paths.pop_front().flatten()
    }

    fn ask_string(&mut self, _title: &str, prompt: &str) -> Option<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().flatten()
    }

    fn info(&mut self, title: &str, message: &str) {
        self.shown.push(("info", title.to_string(), message.to_string()));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.shown.push(("warning", title.to_string(), message.to_string()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.shown.push(("error", title.to_string(), message.to_string()));
    }
}
