//! I/O operations for propdf.
//!
//! This module handles all file I/O:
//! - Loading PDF documents from disk
//! - Writing PDFs atomically to disk
//! - Normalizing save-as paths
//!
//! # Examples
//!
//! ```no_run
//! use propdf::io::{PdfReader, PdfWriter};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(&PathBuf::from("input.pdf")).await?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&loaded.document, &PathBuf::from("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};

use std::path::{Path, PathBuf};

/// Append `extension` to `path` when it has none.
///
/// Mirrors a save-as dialog's default extension: `merged` becomes
/// `merged.pdf`, while `merged.PDF` and `notes.txt` are left alone.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if path.extension().is_some() || extension.is_empty() {
        return path.to_path_buf();
    }
    path.with_extension(extension)
}

/// Whether `path` names a PDF file (case-insensitive `.pdf` suffix).
pub fn is_pdf_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .to_string_lossy()
        .to_lowercase()
        .ends_with(".pdf")
}

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
