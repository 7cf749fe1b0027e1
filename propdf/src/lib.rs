//! propdf - open, search and merge PDF documents.
//!
//! This library is the core of a small PDF desktop tool. It provides:
//!
//! - A document session: the one open PDF, its page count, the text of
//!   page 1 and a thumbnail of page 1
//! - Case-insensitive text search across every page of the open document
//! - Merging of several PDFs, in order, into one output file
//! - A merge queue fed by opens and drag-and-drop
//! - An application core ([`app::App`]) that drives all of the above through
//!   host-provided dialogs and an output surface
//!
//! # Examples
//!
//! ## Open and search
//!
//! ```no_run
//! use propdf::io::PdfReader;
//! use propdf::render::PdfiumRenderer;
//! use propdf::search::search;
//! use propdf::session::DocumentSession;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = DocumentSession::open(
//!     Path::new("report.pdf"),
//!     &PdfReader::new(),
//!     &PdfiumRenderer::new(),
//!     0.2,
//! )
//! .await?;
//!
//! let result = search(Some(&session), "revenue")?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Merge
//!
//! ```no_run
//! use propdf::config::CompressionLevel;
//! use propdf::merge::merge_files;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let report = merge_files(&inputs, Path::new("out.pdf"), CompressionLevel::Standard).await?;
//! println!("Created {} page document", report.statistics.total_pages);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod queue;
pub mod render;
pub mod search;
pub mod session;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use app::{Action, App, AppState, Dialogs, Outcome, Surface};
pub use config::Config;
pub use error::{PropdfError, Result};
pub use queue::MergeQueue;
pub use session::DocumentSession;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
