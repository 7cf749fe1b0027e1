//! propdf - open, search and merge PDF documents.
//!
//! Without a subcommand this runs an interactive shell that stands in for
//! the desktop window; the `open`, `search` and `merge` subcommands run a
//! single action and exit.

mod cli;
mod terminal;

use clap::Parser;
use std::path::Path;
use std::process;
use std::str::FromStr;

use crate::cli::{Cli, Command, MergeArgs};
use crate::terminal::{TerminalDialogs, TerminalSurface};
use propdf::app::{Action, App, Outcome};
use propdf::config::{CompressionLevel, Config, OutputFormat, OverwriteMode};
use propdf::error::PropdfError;
use propdf::io::{PdfReader, PdfWriter, with_default_extension};
use propdf::merge::merge_files;
use propdf::output::{OutputFormatter, display_merge_report, display_session, to_json};
use propdf::render::PdfiumRenderer;
use propdf::search::search;
use propdf::session::DocumentSession;
use propdf::utils::collect_paths_for_patterns;

const SHELL_HELP: &str = "\
Commands:
  open            Open a PDF and show page 1
  merge           Merge PDFs into a new file
  search          Search the open PDF
  drop <paths>    Queue dropped PDF paths ({braces} keep spaces)
  queue           List queued PDFs
  help            Show this help
  exit            Quit";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("{}: {err}", error_label(&err));
        process::exit(err.exit_code());
    }
}

/// Unmet preconditions (no files, empty query) are reported as warnings.
fn error_label(err: &PropdfError) -> &'static str {
    if err.is_precondition() {
        "Warning"
    } else {
        "Error"
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PropdfError> {
    let config = build_config(&cli)?;
    let formatter = OutputFormatter::from_config(&config);
    let renderer = match &cli.pdfium_library {
        Some(path) => PdfiumRenderer::with_library(path),
        None => PdfiumRenderer::new(),
    };

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(config, renderer, formatter).await,
        Command::Open { file } => run_open(&config, &renderer, &formatter, &file).await,
        Command::Search { file, query } => {
            run_search(&config, &renderer, &formatter, &file, &query).await
        }
        Command::Merge(args) => run_merge(&config, &formatter, &args).await,
    }
}

/// Convert CLI arguments into a validated Config.
fn build_config(cli: &Cli) -> Result<Config, PropdfError> {
    let compression = CompressionLevel::from_str(&cli.compression)?;
    let output_format = OutputFormat::from_str(&cli.format)?;

    // Determine overwrite mode
    let overwrite_mode = match &cli.command {
        Some(Command::Merge(args)) if args.force => OverwriteMode::Force,
        Some(Command::Merge(args)) if args.no_clobber => OverwriteMode::NoClobber,
        _ => OverwriteMode::Prompt,
    };

    let config = Config {
        thumbnail_scale: cli.thumbnail_scale,
        thumbnail_output: cli.thumbnail.clone(),
        default_extension: cli.default_extension.clone(),
        compression,
        overwrite_mode,
        output_format,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    // Validate the configuration
    config.validate().map_err(|e| {
        PropdfError::invalid_config(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Interactive loop over the application core.
async fn run_shell(
    config: Config,
    renderer: PdfiumRenderer,
    formatter: OutputFormatter,
) -> Result<(), PropdfError> {
    let surface = TerminalSurface::stdout(config.thumbnail_output.clone(), formatter.clone());
    let mut app = App::new(config, renderer, TerminalDialogs::stdio(), surface);

    if formatter.should_print() {
        formatter.section(&format!("{} v{}", propdf::NAME, propdf::VERSION));
        println!("{SHELL_HELP}");
        formatter.blank_line();
    }

    loop {
        // End of input quits like the exit action
        let Some(line) = app.dialogs_mut().read_line("propdf> ") else {
            break;
        };
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line.as_str(), ""));

        let action = match command.to_lowercase().as_str() {
            "" => continue,
            "open" | "o" => Action::Open,
            "merge" | "m" => Action::Merge,
            "search" | "s" => Action::Search,
            "exit" | "quit" | "q" => Action::Exit,
            "drop" | "d" => {
                let added = app.handle_drop(rest);
                formatter.debug(&format!("{added} PDF(s) added to the merge queue"));
                continue;
            }
            "queue" => {
                if app.queue().is_empty() {
                    formatter.info("The merge queue is empty");
                }
                for (index, path) in app.queue().iter().enumerate() {
                    println!("  {}. {}", index + 1, path.display());
                }
                continue;
            }
            "help" | "?" => {
                println!("{SHELL_HELP}");
                continue;
            }
            other => {
                formatter.warning(&format!("Unknown command: {other} (try 'help')"));
                continue;
            }
        };

        if app.perform(action).await == Outcome::Exit {
            break;
        }
    }

    Ok(())
}

/// Open one document and print it.
async fn run_open(
    config: &Config,
    renderer: &PdfiumRenderer,
    formatter: &OutputFormatter,
    file: &Path,
) -> Result<(), PropdfError> {
    let session =
        DocumentSession::open(file, &PdfReader::new(), renderer, config.thumbnail_scale).await?;

    if let (Some(path), Some(thumbnail)) = (&config.thumbnail_output, session.thumbnail()) {
        thumbnail.save_png(path)?;
        formatter.debug(&format!("Thumbnail saved to {}", path.display()));
    }

    display_session(formatter, &session, config.output_format)
}

/// Search one document and print the matching pages.
async fn run_search(
    config: &Config,
    renderer: &PdfiumRenderer,
    formatter: &OutputFormatter,
    file: &Path,
    query: &str,
) -> Result<(), PropdfError> {
    let session =
        DocumentSession::open(file, &PdfReader::new(), renderer, config.thumbnail_scale).await?;
    let result = search(Some(&session), query)?;

    match config.output_format {
        OutputFormat::Json => println!("{}", to_json(&result)?),
        OutputFormat::Text => {
            formatter.debug(&format!(
                "Searched {} page(s) of {}",
                session.page_count(),
                file.display()
            ));
            println!("{result}");
        }
    }
    Ok(())
}

/// Merge the given files into one output.
async fn run_merge(
    config: &Config,
    formatter: &OutputFormatter,
    args: &MergeArgs,
) -> Result<(), PropdfError> {
    let inputs = collect_paths_for_patterns(&args.inputs)?;
    if inputs.is_empty() {
        return Err(PropdfError::NoFilesToMerge);
    }

    let output = with_default_extension(&args.output, config.extension());
    handle_output_overwrite(config, formatter, &output).await?;

    formatter.info(&format!("Merging {} file(s)...", inputs.len()));
    let report = merge_files(&inputs, &output, config.compression).await?;

    display_merge_report(formatter, &report, config.output_format)
}

/// Handle output file overwrite scenarios.
async fn handle_output_overwrite(
    config: &Config,
    formatter: &OutputFormatter,
    output: &Path,
) -> Result<(), PropdfError> {
    // Check if output exists
    if !PdfWriter::new().exists(output).await {
        return Ok(());
    }

    match config.overwrite_mode {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(PropdfError::output_exists(output.to_path_buf())),
        OverwriteMode::Prompt => {
            // In quiet mode, treat as no-clobber
            if formatter.is_quiet() {
                return Err(PropdfError::output_exists(output.to_path_buf()));
            }

            formatter.warning(&format!("Output file already exists: {}", output.display()));

            // Simple yes/no prompt
            use std::io::{self, Write};
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| PropdfError::other(format!("Failed to read input: {err}")))?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PropdfError::Cancelled)
            }
        }
    }
}
