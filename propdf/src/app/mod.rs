//! The application core behind the window.
//!
//! [`App`] owns the only [`DocumentSession`] and the [`MergeQueue`] and
//! turns the four user actions (open, merge, search, exit) plus file drops
//! into library calls. Hosts supply the [`Dialogs`] and the [`Surface`];
//! every action runs to completion before it returns, so a host that awaits
//! actions one at a time never has two in flight.
//!
//! State is `Idle` until the first successful open and `DocumentOpen`
//! afterwards. There is no transition back to `Idle`.

pub mod dialogs;
pub mod drop;
pub mod surface;

pub use dialogs::Dialogs;
pub use drop::split_drop_list;
pub use surface::{Surface, TextOutput};

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::io::{PdfReader, is_pdf_path, with_default_extension};
use crate::merge::merge_files;
use crate::output::{OutputFormatter, session_text};
use crate::queue::MergeQueue;
use crate::render::PageRenderer;
use crate::search::search;
use crate::session::DocumentSession;

/// Whether a document is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Nothing has been opened yet.
    Idle,
    /// A document session is active.
    DocumentOpen,
}

/// The user-facing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open PDF
    Open,
    /// Merge PDFs
    Merge,
    /// Search Text
    Search,
    /// Exit
    Exit,
}

impl Action {
    /// All actions in display order.
    pub const ALL: [Action; 4] = [Action::Open, Action::Merge, Action::Search, Action::Exit];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open PDF",
            Self::Merge => "Merge PDFs",
            Self::Search => "Search Text",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action did its work.
    Completed,
    /// The user dismissed a prompt; nothing was shown.
    Cancelled,
    /// A precondition was not met; a warning was shown.
    Rejected,
    /// The library reported an error; an error was shown.
    Failed,
    /// The user asked to quit.
    Exit,
}

/// Application state plus the host services it talks to.
pub struct App<R, D, S> {
    config: Config,
    reader: PdfReader,
    renderer: R,
    dialogs: D,
    surface: S,
    formatter: OutputFormatter,
    session: Option<DocumentSession>,
    queue: MergeQueue,
}

impl<R, D, S> App<R, D, S>
where
    R: PageRenderer,
    D: Dialogs,
    S: Surface,
{
    /// Create an idle application.
    pub fn new(config: Config, renderer: R, dialogs: D, surface: S) -> Self {
        let formatter = OutputFormatter::from_config(&config);
        Self {
            config,
            reader: PdfReader::new(),
            renderer,
            dialogs,
            surface,
            formatter,
            session: None,
            queue: MergeQueue::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> AppState {
        if self.session.is_some() {
            AppState::DocumentOpen
        } else {
            AppState::Idle
        }
    }

    /// The open document, if any.
    pub fn session(&self) -> Option<&DocumentSession> {
        self.session.as_ref()
    }

    /// Paths collected from opens and drops.
    pub fn queue(&self) -> &MergeQueue {
        &self.queue
    }

    /// The host's dialogs.
    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// The host's dialogs, mutably.
    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    /// The host's surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one action to completion.
    pub async fn perform(&mut self, action: Action) -> Outcome {
        match action {
            Action::Open => self.open_pdf().await,
            Action::Merge => self.merge_pdfs().await,
            Action::Search => self.search_text(),
            Action::Exit => Outcome::Exit,
        }
    }

    /// Ask for a file and open it.
    pub async fn open_pdf(&mut self) -> Outcome {
        match self.dialogs.pick_file() {
            Some(path) => self.open_path(&path).await,
            None => Outcome::Cancelled,
        }
    }

    /// Open `path`, replacing the current session on success.
    ///
    /// On failure an error dialog is shown and the previous session, text
    /// and thumbnail are left as they were.
    pub async fn open_path(&mut self, path: &Path) -> Outcome {
        let opened = DocumentSession::open(
            path,
            &self.reader,
            &self.renderer,
            self.config.thumbnail_scale,
        )
        .await;

        let session = match opened {
            Ok(session) => session,
            Err(err) => {
                self.dialogs
                    .error("Error", &format!("Error opening PDF: {err}"));
                return Outcome::Failed;
            }
        };

        self.surface.replace_text(&session_text(&session));
        match (session.thumbnail(), session.render_error()) {
            (Some(thumbnail), _) => self.surface.show_thumbnail(thumbnail),
            (None, reason) => {
                self.surface.clear_thumbnail();
                self.formatter.warning(&format!(
                    "Thumbnail unavailable: {}",
                    reason.unwrap_or("unknown error")
                ));
            }
        }
        self.formatter.debug(&format!(
            "Loaded {} ({} pages) in {:.2}s",
            session.source().display(),
            session.page_count(),
            session.load_time().as_secs_f64()
        ));

        let source = session.source().to_path_buf();
        self.session = Some(session);

        if self.queue.add_if_absent(source.clone()) {
            self.surface
                .append_text(&format!("\nFile Added for Merging: {}\n", source.display()));
        }

        Outcome::Completed
    }

    /// Ask for input files and an output path, then merge.
    ///
    /// The merge queue is not consulted; the user picks the inputs afresh.
    pub async fn merge_pdfs(&mut self) -> Outcome {
        let files = self.dialogs.pick_files();
        if files.is_empty() {
            return Outcome::Cancelled;
        }

        let Some(output) = self.dialogs.save_as(self.config.extension()) else {
            return Outcome::Cancelled;
        };
        let output = with_default_extension(&output, self.config.extension());

        match merge_files(&files, &output, self.config.compression).await {
            Ok(report) => {
                self.formatter.debug(&format!(
                    "Merged {} file(s), {} pages in {:.2}s",
                    report.statistics.files_merged,
                    report.statistics.total_pages,
                    report.statistics.merge_time.as_secs_f64()
                ));
                let message = format!("Merged PDFs into {}", output.display());
                self.surface.append_text(&format!("\n{message}\n"));
                self.dialogs.info("Success", &message);
                Outcome::Completed
            }
            Err(err) => {
                self.dialogs
                    .error("Error", &format!("Failed to merge PDFs: {err}"));
                Outcome::Failed
            }
        }
    }

    /// Ask for a query and search the open document.
    pub fn search_text(&mut self) -> Outcome {
        let Some(session) = self.session.as_ref() else {
            self.dialogs.warning("Warning", "Please open a PDF first!");
            return Outcome::Rejected;
        };

        let query = match self.dialogs.ask_string("Search PDF", "Enter text to search:") {
            Some(query) if !query.is_empty() => query,
            _ => return Outcome::Cancelled,
        };

        match search(Some(session), &query) {
            Ok(result) => {
                let message = result.to_string();
                self.surface
                    .append_text(&format!("\nSearch \"{query}\": {message}\n"));
                self.dialogs.info("Search Results", &message);
                Outcome::Completed
            }
            Err(err) => {
                self.dialogs.error("Error", &format!("Search failed: {err}"));
                Outcome::Failed
            }
        }
    }

    /// Queue every dropped `.pdf` path that is not already queued.
    ///
    /// Other paths are ignored silently. Returns how many were added.
    pub fn handle_drop(&mut self, data: &str) -> usize {
        let mut added = 0;
        for path in split_drop_list(data) {
            if is_pdf_path(&path) && self.queue.add_if_absent(path.clone()) {
                self.surface
                    .append_text(&format!("\nAdded PDF: {}\n", path.display()));
                added += 1;
            }
        }
        added
    }
}
