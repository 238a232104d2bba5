//! Sheet composition
//!
//! Drives the per-page chain for every sheet side in an imposition plan:
//! rasterize the source page, give it a quarter turn, fit it into its half of
//! the sheet, and hand the finished side to a `SheetSink`.

use crate::layout::{FitTransform, ImpositionPlan, SheetAssignment, Viewport};
use crate::progress::{Progress, ProgressReporter};
use crate::raster::{PageSource, rotate};
use crate::types::*;
use image::{DynamicImage, GenericImageView};

/// A rotated page image and where it goes on its sheet side
#[derive(Debug, Clone)]
pub struct PlacedImage {
    /// 0-based source page index
    pub source_page: usize,
    pub slot: Slot,
    /// The page after rotation
    pub image: DynamicImage,
    /// The half-sheet the image was fitted into
    pub viewport: Viewport,
    pub transform: FitTransform,
}

impl PlacedImage {
    /// Drawn rectangle `(x, y, width, height)` in sheet coordinates
    pub fn draw_rect(&self) -> (f32, f32, f32, f32) {
        let (w, h) = self.image.dimensions();
        let (width, height) = self.transform.scaled_size(w as f32, h as f32);
        (
            self.viewport.x + self.transform.offset_x,
            self.viewport.y + self.transform.offset_y,
            width,
            height,
        )
    }
}

/// One fully composed side of an output sheet
#[derive(Debug, Clone)]
pub struct ComposedSide {
    pub sheet: usize,
    pub side: SheetSide,
    /// Sheet size in points
    pub width_pt: f32,
    pub height_pt: f32,
    /// Zero, one or two images; empty for a blank side
    pub placements: Vec<PlacedImage>,
}

/// Receives composed sheet sides in output order.
pub trait SheetSink {
    fn emit_side(&mut self, side: ComposedSide) -> Result<()>;
}

/// Counters describing what a composition run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeSummary {
    /// Sides handed to the sink
    pub sides_written: usize,
    /// Blank sides left out under `BlankSheetPolicy::Skip`
    pub sides_skipped: usize,
    /// Pages drawn onto a sheet
    pub pages_placed: usize,
    /// Pages that failed to rasterize and were left blank
    pub pages_failed: usize,
    /// Pages whose image had no area and were left blank
    pub pages_degenerate: usize,
}

/// Places rasterized pages onto the halves of output sheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetComposer {
    sheet_width_pt: f32,
    sheet_height_pt: f32,
    blank_sheets: BlankSheetPolicy,
}

impl SheetComposer {
    pub fn new(sheet_width_pt: f32, sheet_height_pt: f32) -> Self {
        Self {
            sheet_width_pt,
            sheet_height_pt,
            blank_sheets: BlankSheetPolicy::default(),
        }
    }

    pub fn with_blank_sheets(mut self, policy: BlankSheetPolicy) -> Self {
        self.blank_sheets = policy;
        self
    }

    /// The half-sheet a slot maps to
    pub fn viewport(&self, slot: Slot) -> Viewport {
        Viewport::half_sheet(self.sheet_width_pt, self.sheet_height_pt, slot)
    }

    /// Compose every side of `plan` into `sink`.
    ///
    /// Progress is reported and cancellation checked once per physical sheet,
    /// so a sink never sees half of a sheet from a cancelled run.
    pub fn compose<S, K>(
        &self,
        plan: &ImpositionPlan,
        source: &mut S,
        sink: &mut K,
        reporter: &ProgressReporter,
    ) -> Result<ComposeSummary>
    where
        S: PageSource + ?Sized,
        K: SheetSink + ?Sized,
    {
        let available = source.page_count();
        if plan.range().last() > available {
            return Err(BookletError::InvalidConfiguration(format!(
                "Page range ends at {} but the source has {} pages",
                plan.range().last(),
                available
            )));
        }

        let mut summary = ComposeSummary::default();
        let mut progress = Progress {
            total_pages: plan.page_count(),
            total_sheets: plan.sheet_count(),
            ..Default::default()
        };
        reporter.report(progress);

        for side_plan in plan.sides() {
            if side_plan.side == SheetSide::Front && reporter.is_cancelled() {
                log::info!("Cancelled before sheet {}", side_plan.sheet + 1);
                return Err(BookletError::Cancelled);
            }

            let mut placements = Vec::with_capacity(2);
            for assignment in side_plan.slots() {
                let Some(page) = assignment.source_page else {
                    continue;
                };
                progress.completed_pages += 1;

                match self.place_page(source, page, &assignment) {
                    Ok(placed) => placements.push(placed),
                    Err(BookletError::DegenerateGeometry { width, height }) => {
                        log::warn!(
                            "Skipping page {}: rendered image is {}x{}",
                            page + 1,
                            width,
                            height
                        );
                        summary.pages_degenerate += 1;
                    }
                    Err(e) => {
                        log::warn!("Leaving page {} blank: {}", page + 1, e);
                        summary.pages_failed += 1;
                    }
                }
            }

            if placements.is_empty() && self.blank_sheets == BlankSheetPolicy::Skip {
                log::debug!(
                    "Skipping blank {:?} of sheet {}",
                    side_plan.side,
                    side_plan.sheet + 1
                );
                summary.sides_skipped += 1;
            } else {
                log::debug!(
                    "Sheet {} {:?}: {} page(s)",
                    side_plan.sheet + 1,
                    side_plan.side,
                    placements.len()
                );
                summary.pages_placed += placements.len();
                sink.emit_side(ComposedSide {
                    sheet: side_plan.sheet,
                    side: side_plan.side,
                    width_pt: self.sheet_width_pt,
                    height_pt: self.sheet_height_pt,
                    placements,
                })?;
                summary.sides_written += 1;
            }

            if side_plan.side == SheetSide::Back {
                progress.completed_sheets += 1;
                reporter.report(progress);
            }
        }

        Ok(summary)
    }

    /// Rasterize, rotate and fit one page
    fn place_page<S>(
        &self,
        source: &mut S,
        page: usize,
        assignment: &SheetAssignment,
    ) -> Result<PlacedImage>
    where
        S: PageSource + ?Sized,
    {
        let raster = source.rasterize(page)?;
        let image = rotate(&raster, assignment.turn());
        let viewport = self.viewport(assignment.slot);
        let (w, h) = image.dimensions();
        let transform = viewport.fit(w as f32, h as f32)?;

        Ok(PlacedImage {
            source_page: page,
            slot: assignment.slot,
            image,
            viewport,
            transform,
        })
    }
}
