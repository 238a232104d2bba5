//! Layout calculation modules for booklet imposition
//!
//! This module handles all the geometric calculations:
//! - Page range selection and clamping
//! - Signature sequencing (which source page goes where)
//! - Fitting a page image into a half-sheet viewport

mod geometry;
mod range;
mod signature;
mod types;

pub use geometry::*;
pub use range::*;
pub use signature::*;
pub use types::*;
