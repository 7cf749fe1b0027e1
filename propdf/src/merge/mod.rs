//! PDF merging operations.
//!
//! Merging concatenates the full page sequence of each input, in the order
//! given, into one document that is written once at the end. Any input that
//! cannot be loaded aborts the whole merge before anything is written.
//!
//! # Examples
//!
//! ```no_run
//! use propdf::config::CompressionLevel;
//! use propdf::merge::merge_files;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let report = merge_files(&inputs, Path::new("merged.pdf"), CompressionLevel::Standard).await?;
//! println!("Merged {} pages", report.statistics.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;

pub use merger::{MergeResult, MergeStatistics, Merger};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::CompressionLevel;
use crate::error::Result;
use crate::io::{PdfWriter, WriteStatistics};

/// Outcome of a merge that was written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    /// Files merged, in order.
    pub merged_files: Vec<PathBuf>,
    /// Statistics about building the merged document.
    pub statistics: MergeStatistics,
    /// Statistics about writing it.
    pub write: WriteStatistics,
}

/// Merge `inputs` in order and write the result to `output`.
///
/// # Errors
///
/// Returns an error if `inputs` is empty, any input cannot be loaded, or the
/// output cannot be written.
pub async fn merge_files(
    inputs: &[PathBuf],
    output: &Path,
    compression: CompressionLevel,
) -> Result<MergeReport> {
    let result = Merger::new().merge(inputs).await?;
    let write = PdfWriter::with_compression(compression)
        .save_with_stats(&result.document, output)
        .await?;

    Ok(MergeReport {
        merged_files: result.merged_files,
        statistics: result.statistics,
        write,
    })
}
