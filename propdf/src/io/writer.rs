//! PDF writing and saving operations.
//!
//! Writes are atomic by default: the document is serialized to a temporary
//! sibling of the destination and renamed into place, so a failed write never
//! leaves a truncated output behind.
//!
//! # Examples
//!
//! ```no_run
//! use propdf::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(&doc, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::config::CompressionLevel;
use crate::error::{PropdfError, Result};
use crate::io::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compression applied before writing.
    pub compression: CompressionLevel,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compression: CompressionLevel::Standard,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone, Serialize)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer applying the given compression level.
    pub fn with_compression(compression: CompressionLevel) -> Self {
        Self {
            options: WriteOptions {
                compression,
                ..Default::default()
            },
        }
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be created, written or renamed
    /// into place.
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).await.map(|_| ())
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// The document is cloned and serialized on the blocking pool; the call
    /// does not return until the file is on disk.
    pub async fn save_with_stats(&self, doc: &Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();
        let mut doc_clone = doc.clone();

        task::spawn_blocking(move || write_document(&mut doc_clone, path_buf, &options))
            .await
            .map_err(|e| PropdfError::other(format!("Write task failed: {e}")))?
    }

    /// Check if output file exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

fn write_document(doc: &mut Document, path: PathBuf, options: &WriteOptions) -> Result<WriteStatistics> {
    let start = Instant::now();

    let compressed = match options.compression {
        CompressionLevel::None => false,
        CompressionLevel::Standard => {
            doc.compress();
            true
        }
        CompressionLevel::Maximum => {
            doc.prune_objects();
            doc.compress();
            true
        }
    };

    let write_path = if options.atomic {
        temp_path_for(&path)
    } else {
        path.clone()
    };

    let file = std::fs::File::create(&write_path).map_err(|e| PropdfError::FailedToCreateOutput {
        path: write_path.clone(),
        source: e,
    })?;

    let mut writer = std::io::BufWriter::with_capacity(options.buffer_size, file);

    let written = doc
        .save_to(&mut writer)
        .map_err(|e| PropdfError::FailedToWrite {
            path: write_path.clone(),
            source: std::io::Error::other(e),
        })
        .and_then(|_| {
            writer.flush().map_err(|e| PropdfError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })
        });

    if let Err(err) = written {
        if options.atomic {
            let _ = std::fs::remove_file(&write_path);
        }
        return Err(err);
    }
    drop(writer);

    if options.atomic {
        std::fs::rename(&write_path, &path).map_err(|e| PropdfError::FailedToWrite {
            path: path.clone(),
            source: e,
        })?;
    }

    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    Ok(WriteStatistics {
        write_time: start.elapsed(),
        file_size,
        output_path: path,
        compressed,
    })
}

/// `out.pdf` is staged as `out.pdf.tmp` next to it.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
