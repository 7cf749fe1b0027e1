//! Host dialog services.

use std::path::PathBuf;

/// Dialogs the application asks its host to show.
///
/// Every prompt returns `None` (or an empty selection) when the user
/// cancels; the application then abandons the action without further
/// dialogs.
pub trait Dialogs {
    /// Ask for one PDF file to open.
    fn pick_file(&mut self) -> Option<PathBuf>;

    /// Ask for one or more PDF files, in merge order.
    fn pick_files(&mut self) -> Vec<PathBuf>;

    /// Ask where to save. `default_extension` is appended by the caller when
    /// the answer has none.
    fn save_as(&mut self, default_extension: &str) -> Option<PathBuf>;

    /// Ask for a line of text.
    fn ask_string(&mut self, title: &str, prompt: &str) -> Option<String>;

    /// Show an informational notice.
    fn info(&mut self, title: &str, message: &str);

    /// Show a warning notice.
    fn warning(&mut self, title: &str, message: &str);

    /// Show an error notice.
    fn error(&mut self, title: &str, message: &str);
}
