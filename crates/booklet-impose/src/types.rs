use thiserror::Error;

use crate::constants::mm_to_pt;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Degenerate geometry: {width}x{height} has no area")]
    DegenerateGeometry { width: f32, height: f32 },
    #[error("Failed to render page {page}: {message}")]
    Render { page: usize, message: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[cfg(feature = "pdfium")]
    #[error("Pdfium error: {0}")]
    Pdfium(#[from] pdfium_render::prelude::PdfiumError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Booklet generation was cancelled")]
    Cancelled,
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Standard paper sizes for the output sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    #[default]
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Portrait dimensions (width, height) in points
    pub fn dimensions_pt(self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }
}

/// Pixel format used when rasterizing source pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    /// 8-bit grayscale (smaller output, the usual choice for booklets)
    #[default]
    Gray,
    /// 8-bit RGB
    Rgb,
}

/// What to do with a sheet side that ends up with no pages on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlankSheetPolicy {
    /// Keep the blank side so the physical sheet count stays predictable
    #[default]
    Emit,
    /// Leave wholly blank sides out of the output
    Skip,
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Which half of a sheet side a page lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Top,
    Bottom,
}

/// Direction of a 90° page turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    Clockwise,
    CounterClockwise,
}

impl QuarterTurn {
    /// The turn that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            QuarterTurn::Clockwise => QuarterTurn::CounterClockwise,
            QuarterTurn::CounterClockwise => QuarterTurn::Clockwise,
        }
    }
}

/// Statistics about a booklet run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Number of source pages in the selected range
    pub source_pages: usize,
    /// Number of signatures (the last one may be short)
    pub signatures: usize,
    /// Number of physical output sheets
    pub sheets: usize,
    /// Output page count (two sides per sheet)
    pub output_pages: usize,
    /// Half-sheet slots left blank by a short final signature
    pub blank_slots: usize,
}
