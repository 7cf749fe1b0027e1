//! Terminal implementations of the host services.
//!
//! [`TerminalDialogs`] asks its questions on a line-oriented stream and
//! [`TerminalSurface`] prints the output pane. Both are generic over their
//! streams so tests can drive them with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use propdf::app::split_drop_list;
use propdf::io::with_default_extension;
use propdf::output::OutputFormatter;
use propdf::render::Thumbnail;
use propdf::utils::collect_paths_for_patterns;
use propdf::{Dialogs, Surface};

/// Prompts answered one line at a time.
///
/// End of input and read errors count as a cancelled prompt.
pub struct TerminalDialogs<I, O> {
    input: I,
    output: O,
}

impl TerminalDialogs<io::StdinLock<'static>, io::Stdout> {
    /// Dialogs on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> TerminalDialogs<I, O> {
    /// Dialogs over arbitrary streams.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.read_raw(prompt).map(|line| line.trim().to_string())
    }

    /// Print `prompt` and read one line with only its terminator removed.
    fn read_raw(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{prompt}").ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    /// Read a single path; quotes or braces around it are removed.
    fn read_path(&mut self, prompt: &str) -> Option<PathBuf> {
        let line = self.read_line(prompt)?;
        if line.is_empty() {
            return None;
        }
        match split_drop_list(&line).as_slice() {
            [single] => Some(single.clone()),
            _ => Some(PathBuf::from(line)),
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.read_line(&format!("{question} [y/N]: "))
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn notice(&mut self, title: &str, message: &str) {
        // A closed output has nowhere to report to
        let _ = writeln!(self.output, "[{title}] {message}");
    }

    /// The output stream.
    pub fn output(&self) -> &O {
        &self.output
    }
}

impl<I: BufRead, O: Write> Dialogs for TerminalDialogs<I, O> {
    fn pick_file(&mut self) -> Option<PathBuf> {
        self.read_path("PDF file to open: ")
    }

    fn pick_files(&mut self) -> Vec<PathBuf> {
        let Some(line) = self.read_line("PDF files to merge (in order, globs allowed): ") else {
            return Vec::new();
        };

        let patterns = split_drop_list(&line)
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect::<Vec<_>>();

        match collect_paths_for_patterns(&patterns) {
            Ok(paths) => paths,
            Err(err) => {
                self.notice("Error", &format!("Invalid file pattern: {err}"));
                Vec::new()
            }
        }
    }

    fn save_as(&mut self, default_extension: &str) -> Option<PathBuf> {
        let path = self.read_path("Save merged PDF as: ")?;

        let target = with_default_extension(&path, default_extension);
        if target.exists()
            && !self.confirm(&format!("{} already exists. Replace it?", target.display()))
        {
            return None;
        }
        Some(path)
    }

    fn ask_string(&mut self, title: &str, prompt: &str) -> Option<String> {
        // Queries are matched as typed, surrounding spaces included
        self.read_raw(&format!("{title}: {prompt} "))
    }

    fn info(&mut self, title: &str, message: &str) {
        self.notice(title, message);
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.notice(title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        self.notice(title, message);
    }
}

/// Output pane printed to a stream, with the thumbnail optionally kept as a
/// PNG file.
pub struct TerminalSurface<W> {
    output: W,
    thumbnail_path: Option<PathBuf>,
    formatter: OutputFormatter,
}

impl TerminalSurface<io::Stdout> {
    /// Surface on the process's stdout.
    pub fn stdout(thumbnail_path: Option<PathBuf>, formatter: OutputFormatter) -> Self {
        Self::new(io::stdout(), thumbnail_path, formatter)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface over an arbitrary stream.
    pub fn new(output: W, thumbnail_path: Option<PathBuf>, formatter: OutputFormatter) -> Self {
        Self {
            output,
            thumbnail_path,
            formatter,
        }
    }

    /// The output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn write(&mut self, text: &str) {
        if self.output.write_all(text.as_bytes()).is_err() || self.output.flush().is_err() {
            self.formatter.error("Failed to write to the terminal");
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn replace_text(&mut self, text: &str) {
        self.write("\n");
        self.write(text);
    }

    fn append_text(&mut self, text: &str) {
        self.write(text);
    }

    fn show_thumbnail(&mut self, thumbnail: &Thumbnail) {
        let Some(path) = self.thumbnail_path.clone() else {
            self.formatter.debug(&format!(
                "Thumbnail rendered ({}x{} px)",
                thumbnail.width, thumbnail.height
            ));
            return;
        };

        match thumbnail.save_png(&path) {
            Ok(()) => self.formatter.info(&format!(
                "Thumbnail ({}x{} px) saved to {}",
                thumbnail.width,
                thumbnail.height,
                path.display()
            )),
            Err(err) => self.formatter.warning(&format!("Could not save thumbnail: {err}")),
        }
    }

    fn clear_thumbnail(&mut self) {
        if let Some(path) = &self.thumbnail_path
            && path.exists()
            && let Err(err) = std::fs::remove_file(path)
        {
            self.formatter
                .warning(&format!("Could not remove stale thumbnail: {err}"));
        }
    }
}
