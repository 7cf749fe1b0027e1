//! Where the application puts text and the thumbnail.

use crate::render::Thumbnail;

/// Output area of the host window.
pub trait Surface {
    /// Replace the whole text output.
    fn replace_text(&mut self, text: &str);

    /// Append to the text output.
    fn append_text(&mut self, text: &str);

    /// Replace the displayed thumbnail.
    fn show_thumbnail(&mut self, thumbnail: &Thumbnail);

    /// Remove the displayed thumbnail.
    fn clear_thumbnail(&mut self);
}

/// In-memory surface that keeps the text output and the latest thumbnail.
#[derive(Debug, Default, Clone)]
pub struct TextOutput {
    text: String,
    thumbnail: Option<Thumbnail>,
}

impl TextOutput {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The thumbnail currently shown, if any.
    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }
}

impl Surface for TextOutput {
    fn replace_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn show_thumbnail(&mut self, thumbnail: &Thumbnail) {
        self.thumbnail = Some(thumbnail.clone());
    }

    fn clear_thumbnail(&mut self) {
        self.thumbnail = None;
    }
}
