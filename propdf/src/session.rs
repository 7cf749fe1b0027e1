//! The document session: the single currently-open PDF.
//!
//! A session is built in one piece by [`DocumentSession::open`] and never
//! updated afterwards. Opening another file produces a new session that the
//! owner swaps in; if the open fails, nothing is swapped and the old session
//! stays usable.

use lopdf::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::io::PdfReader;
use crate::render::{PageRenderer, Thumbnail};

/// The currently-open document and what was derived from it at open time.
#[derive(Debug)]
pub struct DocumentSession {
    source: PathBuf,
    document: Document,
    page_count: usize,
    first_page_text: String,
    thumbnail: Option<Thumbnail>,
    render_error: Option<String>,
    load_time: Duration,
}

/// Serializable view of a session, for one-shot output.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Path the session was opened from.
    pub source: PathBuf,
    /// Number of pages.
    pub page_count: usize,
    /// Extracted text of page 1.
    pub first_page_text: String,
    /// Thumbnail dimensions, when rendering succeeded.
    pub thumbnail: Option<Thumbnail>,
}

impl DocumentSession {
    /// Open `path`: parse it, count pages, extract page 1 text and render
    /// page 1 as a thumbnail at `thumbnail_scale`.
    ///
    /// A thumbnail failure does not fail the open; the reason is kept in
    /// [`render_error`](Self::render_error).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not a PDF,
    /// encrypted, or has no pages.
    pub async fn open<R>(
        path: &Path,
        reader: &PdfReader,
        renderer: &R,
        thumbnail_scale: f32,
    ) -> Result<Self>
    where
        R: PageRenderer + ?Sized,
    {
        let loaded = reader.load(path).await?;
        let first_page_text = extract_page_text(&loaded.document, 1);

        let (thumbnail, render_error) = match renderer.render_first_page(path, thumbnail_scale) {
            Ok(thumbnail) => (Some(thumbnail), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Ok(Self {
            source: loaded.path,
            page_count: loaded.page_count,
            document: loaded.document,
            first_page_text,
            thumbnail,
            render_error,
            load_time: loaded.load_time,
        })
    }

    /// Path the session was opened from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Text of page 1, cached at open time.
    pub fn first_page_text(&self) -> &str {
        &self.first_page_text
    }

    /// Thumbnail of page 1, if rendering succeeded.
    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    /// Why the thumbnail is missing, if it is.
    pub fn render_error(&self) -> Option<&str> {
        self.render_error.as_deref()
    }

    /// Time spent reading and parsing the file.
    pub fn load_time(&self) -> Duration {
        self.load_time
    }

    /// Extract the text of a 1-based page. Not cached.
    pub fn page_text(&self, page_number: u32) -> String {
        extract_page_text(&self.document, page_number)
    }

    /// Serializable view of this session.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            source: self.source.clone(),
            page_count: self.page_count,
            first_page_text: self.first_page_text.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// Text of a 1-based page; pages whose content cannot be decoded read as empty.
pub(crate) fn extract_page_text(document: &Document, page_number: u32) -> String {
    document.extract_text(&[page_number]).unwrap_or_default()
}
