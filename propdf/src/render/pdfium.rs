use pdfium_render::prelude::{PdfBitmapFormat, PdfRenderConfig, Pdfium};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::{PageRenderer, Thumbnail};
use crate::error::{PropdfError, Result};

enum PdfiumState {
    Uninitialized,
    Available(Pdfium),
    Unavailable(String),
}

/// Renders thumbnails with the pdfium shared library.
///
/// The library is bound on first use. A failed bind is remembered, so every
/// later render fails fast with the same message instead of probing the
/// filesystem again.
pub struct PdfiumRenderer {
    library_path: Option<PathBuf>,
    state: RefCell<PdfiumState>,
}

impl PdfiumRenderer {
    /// Bind to pdfium next to the executable, in the working directory, or
    /// system-wide.
    pub fn new() -> Self {
        Self {
            library_path: None,
            state: RefCell::new(PdfiumState::Uninitialized),
        }
    }

    /// Bind to the pdfium library at an explicit path.
    pub fn with_library(path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: Some(path.into()),
            state: RefCell::new(PdfiumState::Uninitialized),
        }
    }

    fn with_pdfium<T>(&self, f: impl FnOnce(&Pdfium) -> Result<T>) -> Result<T> {
        let mut state = self.state.borrow_mut();
        if let PdfiumState::Uninitialized = *state {
            *state = match bind_pdfium(self.library_path.as_deref()) {
                Ok(pdfium) => PdfiumState::Available(pdfium),
                Err(reason) => PdfiumState::Unavailable(reason),
            };
        }

        match &*state {
            PdfiumState::Available(pdfium) => f(pdfium),
            PdfiumState::Unavailable(reason) => Err(PropdfError::render_failed(reason.clone())),
            PdfiumState::Uninitialized => Err(PropdfError::render_failed("pdfium not bound")),
        }
    }
}

impl Default for PdfiumRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render_first_page(&self, path: &Path, scale: f32) -> Result<Thumbnail> {
        self.with_pdfium(|pdfium| {
            let document = pdfium
                .load_pdf_from_file(path, None)
                .map_err(|e| PropdfError::render_failed(e.to_string()))?;

            let page = document
                .pages()
                .get(0)
                .map_err(|e| PropdfError::render_failed(e.to_string()))?;

            let render_config = PdfRenderConfig::new()
                .scale_page_by_factor(scale)
                .render_form_data(false)
                .set_reverse_byte_order(false)
                .set_format(PdfBitmapFormat::BGRA);

            let bitmap = page
                .render_with_config(&render_config)
                .map_err(|e| PropdfError::render_failed(e.to_string()))?;

            let width = bitmap.width().max(0) as u32;
            let height = bitmap.height().max(0) as u32;
            let bgra = bitmap.as_raw_bytes();
            let stride = if height == 0 {
                0
            } else {
                bgra.len() / height as usize
            };

            Ok(Thumbnail::from_bgra(width, height, stride, &bgra))
        })
    }
}

fn bind_pdfium(explicit: Option<&Path>) -> std::result::Result<Pdfium, String> {
    if let Some(path) = explicit {
        return Pdfium::bind_to_library(path)
            .map(Pdfium::new)
            .map_err(|e| format!("Failed to load pdfium from {}: {e}", path.display()));
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(Pdfium::pdfium_platform_library_name_at_path(dir));
    }
    candidates.push(Pdfium::pdfium_platform_library_name_at_path(Path::new(".")));

    for path in candidates {
        if let Ok(bindings) = Pdfium::bind_to_library(&path) {
            return Ok(Pdfium::new(bindings));
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| {
            format!(
                "{e}; pdfium library not found. Install it system-wide or place {} next to the executable",
                Pdfium::pdfium_platform_library_name().to_string_lossy()
            )
        })
}
