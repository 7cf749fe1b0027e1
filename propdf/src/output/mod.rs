//! Output formatting and display for propdf.
//!
//! This module handles user-facing console output for the one-shot
//! commands:
//! - Leveled status messages with quiet and verbose modes
//! - Summaries of sessions, searches and merges, as text or JSON

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{PropdfError, Result};
use crate::merge::MergeReport;
use crate::session::DocumentSession;

/// Serialize `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PropdfError::other(format!("Failed to serialize output: {e}")))
}

/// Text shown in the output pane when a document is opened.
pub fn session_text(session: &DocumentSession) -> String {
    format!(
        "Opened: {}\nTotal Pages: {}\n\n\nPage 1 Content:\n{}\n",
        session.source().display(),
        session.page_count(),
        session.first_page_text()
    )
}

/// Display a session either as the opened-document text or as JSON.
pub fn display_session(
    formatter: &OutputFormatter,
    session: &DocumentSession,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(&session.summary())?),
        OutputFormat::Text => {
            print!("{}", session_text(session));
            if let Some(thumb) = session.thumbnail() {
                formatter.detail("Thumbnail", &format!("{}x{} px", thumb.width, thumb.height));
            }
            if let Some(reason) = session.render_error() {
                formatter.warning(&format!("Thumbnail unavailable: {reason}"));
            }
            formatter.detail(
                "Load time",
                &format!("{:.2}s", session.load_time().as_secs_f64()),
            );
            formatter.detail("Objects", &session.document().objects.len().to_string());
        }
    }
    Ok(())
}

/// Display merge statistics.
pub fn display_merge_report(
    formatter: &OutputFormatter,
    report: &MergeReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(report)?),
        OutputFormat::Text => {
            formatter.success(&format!(
                "Merged PDFs into {} ({})",
                report.write.output_path.display(),
                report.write.format_file_size()
            ));
            if formatter.is_verbose() {
                formatter.section("Statistics");
                for (index, path) in report.merged_files.iter().enumerate() {
                    formatter.list_item(index + 1, &path.display().to_string());
                }
                formatter.detail("Input files", &report.statistics.files_merged.to_string());
                formatter.detail("Total pages", &report.statistics.total_pages.to_string());
                formatter.detail("Input size", &report.statistics.format_input_size());
                formatter.detail(
                    "Load time",
                    &format!("{:.2}s", report.statistics.load_time.as_secs_f64()),
                );
                formatter.detail(
                    "Merge time",
                    &format!("{:.2}s", report.statistics.merge_time.as_secs_f64()),
                );
                formatter.detail(
                    "Compression",
                    if report.write.compressed { "Yes" } else { "No" },
                );
            }
        }
    }
    Ok(())
}
