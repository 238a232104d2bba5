//! Pdfium-backed page source

use crate::constants::pt_to_px;
use crate::types::{BookletError, ColorMode, Result};
use image::{DynamicImage, RgbaImage};
use pdfium_render::prelude::*;
use std::path::Path;

use super::PageSource;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> Result<Pdfium> {
    // When running from cargo, the working directory is the workspace root
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Ok(Pdfium::bind_to_system_library().map(Pdfium::new)?)
}

/// Renders pages of one open document at a fixed resolution.
pub struct PdfiumSource<'a> {
    document: PdfDocument<'a>,
    dpi: u32,
    color_mode: ColorMode,
}

impl<'a> PdfiumSource<'a> {
    /// Open a source document
    pub fn open(
        pdfium: &'a Pdfium,
        path: impl AsRef<Path>,
        dpi: u32,
        color_mode: ColorMode,
    ) -> Result<Self> {
        let path = path.as_ref();
        let document = pdfium.load_pdf_from_file(path, None).map_err(|e| {
            BookletError::Io(std::io::Error::other(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        })?;
        log::debug!(
            "Opened {} ({} pages)",
            path.display(),
            document.pages().len()
        );
        Ok(Self {
            document,
            dpi,
            color_mode,
        })
    }

    fn render(&self, page_index: usize) -> Result<DynamicImage> {
        let index = page_index_u16(page_index)?;
        let page = self.document.pages().get(index)?;

        let width = pt_to_px(page.width().value, self.dpi).round().max(1.0) as i32;
        let height = pt_to_px(page.height().value, self.dpi).round().max(1.0) as i32;
        let config = PdfRenderConfig::new()
            .set_target_width(width)
            .set_target_height(height);

        let bitmap = page.render_with_config(&config)?;
        let rgba = RgbaImage::from_raw(
            bitmap.width() as u32,
            bitmap.height() as u32,
            bitmap.as_rgba_bytes().to_vec(),
        )
        .ok_or_else(|| BookletError::Render {
            page: page_index,
            message: "bitmap size does not match its pixel data".to_string(),
        })?;

        let image = DynamicImage::ImageRgba8(rgba);
        Ok(match self.color_mode {
            ColorMode::Gray => DynamicImage::ImageLuma8(image.to_luma8()),
            ColorMode::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
        })
    }
}

/// Pdfium addresses pages with a `u16`
fn page_index_u16(page_index: usize) -> Result<u16> {
    u16::try_from(page_index).map_err(|_| BookletError::Render {
        page: page_index,
        message: format!("page index exceeds Pdfium's limit of {}", u16::MAX),
    })
}

impl PageSource for PdfiumSource<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn rasterize(&mut self, page_index: usize) -> Result<DynamicImage> {
        self.render(page_index).map_err(|e| match e {
            BookletError::Render { .. } => e,
            other => BookletError::Render {
                page: page_index,
                message: other.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_in_range() {
        assert_eq!(page_index_u16(0).unwrap(), 0);
        assert_eq!(page_index_u16(65_535).unwrap(), u16::MAX);
    }

    #[test]
    fn test_page_index_overflow_is_an_error() {
        match page_index_u16(65_536) {
            Err(BookletError::Render { page, .. }) => assert_eq!(page, 65_536),
            other => panic!("Expected Render error, got {:?}", other),
        }
    }
}
