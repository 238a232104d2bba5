//! Page rasterization
//!
//! Source pages reach the composer as pixel buffers. This module holds the
//! `PageSource` seam, the quarter-turn rotation applied to every page, and
//! (with the `pdfium` feature) the Pdfium-backed source.

#[cfg(feature = "pdfium")]
mod pdfium;
mod rotate;

#[cfg(feature = "pdfium")]
pub use pdfium::{PdfiumSource, init_pdfium};
pub use rotate::rotate;

use crate::types::Result;
use image::DynamicImage;

/// Something that can hand out rasterized pages of one source document.
pub trait PageSource {
    /// Number of pages in the source document
    fn page_count(&self) -> usize;

    /// Render one 0-based page to a pixel buffer
    fn rasterize(&mut self, page_index: usize) -> Result<DynamicImage>;
}

impl<S: PageSource + ?Sized> PageSource for &mut S {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn rasterize(&mut self, page_index: usize) -> Result<DynamicImage> {
        (**self).rasterize(page_index)
    }
}
