//! CLI argument parsing for propdf.
//!
//! This module only describes the command line; turning it into a library
//! `Config` happens in `main.rs`. It is also compiled by `build.rs` to
//! render the man page, so it depends on nothing but `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Open, search and merge PDF documents.
///
/// Without a subcommand propdf starts an interactive shell with the same
/// actions as the desktop window: open a PDF, search it, merge PDFs, and
/// queue dropped files.
#[derive(Parser, Debug)]
#[command(name = "propdf")]
#[command(version)]
#[command(about = "Open, search and merge PDF documents", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Action to run (defaults to the interactive shell)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Scale used to render the page 1 thumbnail
    ///
    /// Must be greater than 0 and at most 4. The default of 0.2 gives a
    /// roughly 120x170 pixel thumbnail for an A4 page.
    #[arg(long, global = true, value_name = "SCALE", default_value_t = 0.2)]
    pub thumbnail_scale: f32,

    /// Write the page 1 thumbnail to this PNG file
    ///
    /// The file is replaced every time a document is opened.
    #[arg(long, global = true, value_name = "FILE")]
    pub thumbnail: Option<PathBuf>,

    /// Path to the pdfium shared library used for thumbnails
    ///
    /// When omitted, pdfium is looked up next to the executable, in the
    /// working directory, and then system-wide.
    #[arg(long, global = true, value_name = "FILE")]
    pub pdfium_library: Option<PathBuf>,

    /// Compression level for merged output
    ///
    /// - none: No compression (preserves exact structure)
    /// - standard: Compress streams (default)
    /// - maximum: Compress streams and drop unused objects
    #[arg(short, long, global = true, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Extension added to save paths that have none
    #[arg(long, global = true, value_name = "EXT", default_value = "pdf")]
    pub default_extension: String,

    /// Output format for one-shot commands
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    #[arg(value_parser = ["text", "json"])]
    pub format: String,

    /// Verbose output - show timings and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// propdf actions.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the interactive shell (default)
    Shell,

    /// Open a PDF and print its page count and page 1 text
    Open {
        /// PDF file to open
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Search a PDF for text (case-insensitive)
    Search {
        /// PDF file to search
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text to look for
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Merge PDFs, in the order given, into one file
    ///
    /// Examples:
    ///   propdf merge a.pdf b.pdf -o combined.pdf
    ///   propdf merge 'chapter*.pdf' -o book
    Merge(MergeArgs),
}

/// Arguments of the `merge` subcommand.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct MergeArgs {
    /// Input PDF files or glob patterns, in merge order
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    ///
    /// The default extension is added when the path has none.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Overwrite an existing output file without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite an existing output file
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,
}
