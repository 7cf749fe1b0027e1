//! Case-insensitive text search over the open document.
//!
//! Every call re-extracts the text of every page in ascending order; nothing
//! is cached between searches.

use serde::Serialize;
use std::fmt;

use crate::error::{PropdfError, Result};
use crate::session::{DocumentSession, extract_page_text};

/// Pages on which a query was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The query as entered.
    pub query: String,
    /// Ascending 1-based page numbers. Empty means no matches.
    pub pages: Vec<u32>,
}

impl SearchResult {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pages.is_empty() {
            return write!(f, "No matches found.");
        }
        let pages = self
            .pages
            .iter()
            .map(|page| format!("Page {page}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Text found on pages: {pages}")
    }
}

/// Search the open document for `query`.
///
/// A page matches when the lowercased query is a substring of the lowercased
/// page text.
///
/// # Errors
///
/// - [`PropdfError::NoActiveSession`] if `session` is `None`; no document
///   access is attempted.
/// - [`PropdfError::EmptyQuery`] if `query` is empty.
pub fn search(session: Option<&DocumentSession>, query: &str) -> Result<SearchResult> {
    let session = session.ok_or(PropdfError::NoActiveSession)?;
    if query.is_empty() {
        return Err(PropdfError::EmptyQuery);
    }

    let needle = query.to_lowercase();
    let pages = session
        .document()
        .get_pages()
        .into_keys()
        .filter(|&page_number| {
            extract_page_text(session.document(), page_number)
                .to_lowercase()
                .contains(&needle)
        })
        .collect();

    Ok(SearchResult {
        query: query.to_string(),
        pages,
    })
}
