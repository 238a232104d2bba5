//! Shared constants for booklet imposition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = POINTS_PER_INCH / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert a length in points to pixels at the given resolution
#[inline]
pub fn pt_to_px(pt: f32, dpi: u32) -> f32 {
    pt / POINTS_PER_INCH * dpi as f32
}

// =============================================================================
// Imposition
// =============================================================================

/// Source pages carried by one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Sheet sides per physical sheet
pub const SIDES_PER_SHEET: usize = 2;

/// Default rasterization resolution
pub const DEFAULT_DPI: u32 = 300;

/// Upper bound on the rasterization resolution
pub const MAX_DPI: u32 = 2400;

/// Tolerance used when comparing fitted geometry
pub const GEOMETRY_EPSILON: f32 = 1e-3;
