//! PDF reading and loading operations.
//!
//! Files are read with `tokio::fs` and parsed in memory with lopdf. Each
//! load is awaited to completion before the caller continues; nothing is
//! loaded in the background.
//!
//! # Examples
//!
//! ```no_run
//! use propdf::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf")).await?;
//! println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PropdfError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to read and parse the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader that rejects documents without pages.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist or is a directory
    /// - The file cannot be read
    /// - The file is not a valid PDF, or is encrypted
    /// - The document has no pages
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        Self::check_path_exists(path)?;

        let start = Instant::now();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PropdfError::failed_to_load_pdf(path.to_path_buf(), e.to_string()))?;

        let document = Self::parse(path, &bytes)?;
        let page_count = document.get_pages().len();

        if page_count == 0 {
            return Err(PropdfError::empty_document(path.to_path_buf()));
        }

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            load_time: start.elapsed(),
            file_size: bytes.len() as u64,
        })
    }

    /// Parse an in-memory PDF, attributing failures to `path`.
    pub fn parse(path: &Path, bytes: &[u8]) -> Result<Document> {
        Document::load_mem(bytes).map_err(|e| {
            let err_msg = e.to_string();
            let lower = err_msg.to_lowercase();
            if lower.contains("encrypt") || lower.contains("password") {
                PropdfError::encrypted_pdf(path.to_path_buf())
            } else {
                PropdfError::failed_to_load_pdf(path.to_path_buf(), err_msg)
            }
        })
    }

    /// Check that `path` exists and is not a directory.
    pub fn check_path_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let exists = path.try_exists()?;
        if !exists {
            return Err(PropdfError::file_not_found(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(PropdfError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }
}
