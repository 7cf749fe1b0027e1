//! Page rasterization for thumbnails.
//!
//! Rendering is a seam: the session only needs *some* [`PageRenderer`] that
//! can turn page 1 into pixels. [`PdfiumRenderer`] is the production
//! implementation; tests substitute their own.

mod pdfium;

pub use pdfium::PdfiumRenderer;

use serde::Serialize;
use std::path::Path;

use crate::error::{PropdfError, Result};

/// Renders the first page of a PDF file to an RGB raster.
pub trait PageRenderer {
    /// Rasterize page 1 of the PDF at `path`, scaled by `scale`
    /// (1.0 = one pixel per PDF point).
    fn render_first_page(&self, path: &Path, scale: f32) -> Result<Thumbnail>;
}

impl<R: PageRenderer + ?Sized> PageRenderer for &R {
    fn render_first_page(&self, path: &Path, scale: f32) -> Result<Thumbnail> {
        (**self).render_first_page(path, scale)
    }
}

/// Low-resolution RGB8 rendering of a document's first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGB8 pixels, `width * height * 3` bytes.
    #[serde(skip)]
    pub pixels: Vec<u8>,
}

impl Thumbnail {
    /// A white thumbnail of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width as usize * height as usize * 3],
        }
    }

    /// Convert a BGRA bitmap with the given row stride into RGB.
    ///
    /// Bytes missing from a short buffer are treated as white.
    pub fn from_bgra(width: u32, height: u32, stride: usize, bgra: &[u8]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height as usize {
            let base = y.saturating_mul(stride);
            for x in 0..width as usize {
                let idx = base.saturating_add(x.saturating_mul(4));
                let b = bgra.get(idx).copied().unwrap_or(255);
                let g = bgra.get(idx + 1).copied().unwrap_or(255);
                let r = bgra.get(idx + 2).copied().unwrap_or(255);
                pixels.extend_from_slice(&[r, g, b]);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Write the thumbnail as a PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let image = image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| PropdfError::render_failed("thumbnail buffer does not match size"))?;
        image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| PropdfError::render_failed(format!("{}: {e}", path.display())))
    }
}
