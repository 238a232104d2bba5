//! Layout data types for booklet imposition
//!
//! These types sit between signature sequencing and sheet composition.

use crate::constants::SIDES_PER_SHEET;
use crate::types::{QuarterTurn, SheetSide, Slot};

use super::PageRange;

/// Where one source page goes in the booklet.
///
/// `source_page` is `None` for the unfilled slots of a short final signature;
/// those halves stay blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetAssignment {
    /// 0-based index into the source document
    pub source_page: Option<usize>,
    /// 0-based physical output sheet
    pub sheet: usize,
    /// Top or bottom half of the side
    pub slot: Slot,
    /// Front or back of the sheet
    pub side: SheetSide,
    /// Turn the page clockwise rather than counter-clockwise
    pub rotate: bool,
}

impl SheetAssignment {
    pub fn is_absent(&self) -> bool {
        self.source_page.is_none()
    }

    /// The quarter turn that brings the page's long edge in line with the
    /// half-sheet's long edge.
    pub fn turn(&self) -> QuarterTurn {
        if self.rotate {
            QuarterTurn::Clockwise
        } else {
            QuarterTurn::CounterClockwise
        }
    }
}

/// Both halves of one side of one output sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidePlan {
    pub sheet: usize,
    pub side: SheetSide,
    pub top: SheetAssignment,
    pub bottom: SheetAssignment,
}

impl SidePlan {
    /// True when neither half carries a page
    pub fn is_blank(&self) -> bool {
        self.top.is_absent() && self.bottom.is_absent()
    }

    /// The two halves, top first
    pub fn slots(&self) -> [SheetAssignment; 2] {
        [self.top, self.bottom]
    }
}

/// The full ordered assignment list for one booklet run
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionPlan {
    pub(crate) range: PageRange,
    pub(crate) signature_size: usize,
    pub(crate) assignments: Vec<SheetAssignment>,
}

impl ImpositionPlan {
    pub fn range(&self) -> &PageRange {
        &self.range
    }

    /// Sheets per signature
    pub fn signature_size(&self) -> usize {
        self.signature_size
    }

    /// Assignments in output order: sheet by sheet, front before back,
    /// top before bottom.
    pub fn assignments(&self) -> &[SheetAssignment] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Sheet sides in output order
    pub fn sides(&self) -> impl Iterator<Item = SidePlan> + '_ {
        self.assignments.chunks_exact(2).map(|pair| SidePlan {
            sheet: pair[0].sheet,
            side: pair[0].side,
            top: pair[0],
            bottom: pair[1],
        })
    }

    /// Number of sheet sides (output pages)
    pub fn side_count(&self) -> usize {
        self.assignments.len() / 2
    }

    /// Number of physical sheets
    pub fn sheet_count(&self) -> usize {
        self.side_count() / SIDES_PER_SHEET
    }

    pub fn signature_count(&self) -> usize {
        self.sheet_count() / self.signature_size
    }

    /// Number of assignments that carry a source page
    pub fn page_count(&self) -> usize {
        self.assignments.iter().filter(|a| !a.is_absent()).count()
    }
}
