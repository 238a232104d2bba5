//! Fit-and-center geometry
//!
//! A page image is scaled uniformly so it fits entirely inside a half-sheet
//! viewport, then centered along the axis that has slack.

use crate::types::{BookletError, Result, Slot};

/// A rectangular half of one sheet side, in points.
///
/// `x`/`y` is the lower-left corner in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The top or bottom half of a sheet of the given size
    pub fn half_sheet(sheet_width: f32, sheet_height: f32, slot: Slot) -> Self {
        let half = sheet_height / 2.0;
        match slot {
            Slot::Top => Self::new(0.0, half, sheet_width, half),
            Slot::Bottom => Self::new(0.0, 0.0, sheet_width, half),
        }
    }

    /// Fit an image of the given pixel size into this viewport
    pub fn fit(&self, image_width: f32, image_height: f32) -> Result<FitTransform> {
        fit(image_width, image_height, self.width, self.height)
    }
}

/// Uniform scale plus centering offsets placing an image inside a viewport.
///
/// Offsets are relative to the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl FitTransform {
    /// Size of the image once scaled
    pub fn scaled_size(&self, image_width: f32, image_height: f32) -> (f32, f32) {
        (image_width * self.scale, image_height * self.scale)
    }
}

/// Compute the fit transform for an image inside a viewport.
///
/// If the image is relatively narrower than the viewport, height limits the
/// scale and the image is centered horizontally; otherwise width limits it and
/// the image is centered vertically.
pub fn fit(
    image_width: f32,
    image_height: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<FitTransform> {
    if !has_area(image_width, image_height) {
        return Err(BookletError::DegenerateGeometry {
            width: image_width,
            height: image_height,
        });
    }
    if !has_area(viewport_width, viewport_height) {
        return Err(BookletError::DegenerateGeometry {
            width: viewport_width,
            height: viewport_height,
        });
    }

    let image_aspect = image_width / image_height;
    let viewport_aspect = viewport_width / viewport_height;

    Ok(if image_aspect < viewport_aspect {
        let scale = viewport_height / image_height;
        FitTransform {
            scale,
            offset_x: (viewport_width - image_width * scale) / 2.0,
            offset_y: 0.0,
        }
    } else {
        let scale = viewport_width / image_width;
        FitTransform {
            scale,
            offset_x: 0.0,
            offset_y: (viewport_height - image_height * scale) / 2.0,
        }
    })
}

fn has_area(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
