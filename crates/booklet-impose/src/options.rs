use crate::constants::{DEFAULT_DPI, MAX_DPI};
use crate::layout::PageRange;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet generation settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Rasterization
    pub dpi: u32,
    pub color_mode: ColorMode,

    // Output sheet
    pub paper_size: PaperSize,
    pub blank_sheets: BlankSheetPolicy,

    // Imposition
    pub sheets_per_signature: usize,
    pub rotate_back: bool,

    // Page selection (0-based, last exclusive); `None` means the document edge
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            color_mode: ColorMode::Gray,
            paper_size: PaperSize::Letter,
            blank_sheets: BlankSheetPolicy::Emit,
            sheets_per_signature: 1,
            rotate_back: true,
            first_page: None,
            last_page: None,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes).map_err(|e| {
            BookletError::InvalidConfiguration(format!("Failed to parse config: {}", e))
        })?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            BookletError::InvalidConfiguration(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.sheets_per_signature == 0 {
            return Err(BookletError::InvalidConfiguration(
                "Sheets per signature must be at least 1".to_string(),
            ));
        }

        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(BookletError::InvalidConfiguration(format!(
                "Resolution must be between 1 and {} dpi, got {}",
                MAX_DPI, self.dpi
            )));
        }

        if let (Some(first), Some(last)) = (self.first_page, self.last_page) {
            if first > last {
                return Err(BookletError::InvalidConfiguration(format!(
                    "First page {} is after last page {}",
                    first, last
                )));
            }
        }

        let (width, height) = self.paper_size.dimensions_mm();
        if !(width > 0.0 && height > 0.0) {
            return Err(BookletError::InvalidConfiguration(format!(
                "Paper size must be positive, got {}x{} mm",
                width, height
            )));
        }

        Ok(())
    }

    /// The page range for a document with `total_pages` pages.
    ///
    /// Bounds beyond the document are clamped rather than rejected.
    pub fn page_range(&self, total_pages: usize) -> PageRange {
        let mut range = PageRange::full(total_pages);
        if let Some(first) = self.first_page {
            range.set_first(first);
        }
        if let Some(last) = self.last_page {
            range.set_last(last);
        }
        range
    }

    /// Output sheet size in points
    pub fn sheet_size_pt(&self) -> (f32, f32) {
        self.paper_size.dimensions_pt()
    }
}
