//! Signature sequencing for saddle-stitch booklets
//!
//! A signature is a stack of sheets folded together. With `n` sheets it
//! carries `4n` pages. Sheets are nested, so sheet `k` (counting from the
//! outside) carries the `k`-th pair of pages from the front and from the back
//! of the signature:
//!
//! ```text
//!  sheet k, front:  top = LAST-1-2k   bottom = 2k
//!  sheet k, back:   top = 2k+1        bottom = LAST-2-2k
//! ```
//!
//! **Single sheet (4 pages):**
//! - Front: top = page 4, bottom = page 1
//! - Back:  top = page 2, bottom = page 3
//!
//! **Two sheets (8 pages):**
//! - Sheet 1 front: [8, 1], back: [2, 7]
//! - Sheet 2 front: [6, 3], back: [4, 5]

use crate::constants::PAGES_PER_SHEET;
use crate::types::{BookletError, Result, SheetSide, Slot};

use super::{ImpositionPlan, PageRange, SheetAssignment};

/// Calculate the relative page order for one signature.
///
/// Returns 0-based page indices relative to the signature start, in output
/// order (sheet by sheet; front top, front bottom, back top, back bottom).
pub fn signature_page_order(signature_size: usize) -> Vec<usize> {
    let pages_per_sig = PAGES_PER_SHEET * signature_size;
    let mut order = Vec::with_capacity(pages_per_sig);
    for k in 0..signature_size {
        let first = 2 * k;
        let last = pages_per_sig - 1 - first;
        order.extend([last, first, first + 1, last - 1]);
    }
    order
}

/// Build the imposition plan for a page range.
///
/// `rotate_back` is the rotation flag carried by back-side assignments;
/// front-side assignments never carry it.
pub fn sequence(
    range: &PageRange,
    signature_size: usize,
    rotate_back: bool,
) -> Result<ImpositionPlan> {
    if signature_size == 0 {
        return Err(BookletError::InvalidConfiguration(
            "Sheets per signature must be at least 1".to_string(),
        ));
    }

    let pages_per_sig = PAGES_PER_SHEET * signature_size;
    let order = signature_page_order(signature_size);
    let signatures = range.len().div_ceil(pages_per_sig);
    let mut assignments = Vec::with_capacity(signatures * pages_per_sig);

    for sig in 0..signatures {
        let sig_start = range.first() + sig * pages_per_sig;

        for (position, &relative) in order.iter().enumerate() {
            let absolute = sig_start + relative;
            let side = if position % 4 < 2 {
                SheetSide::Front
            } else {
                SheetSide::Back
            };
            let slot = if position % 2 == 0 {
                Slot::Top
            } else {
                Slot::Bottom
            };

            assignments.push(SheetAssignment {
                source_page: (absolute < range.last()).then_some(absolute),
                sheet: sig * signature_size + position / PAGES_PER_SHEET,
                slot,
                side,
                rotate: side == SheetSide::Back && rotate_back,
            });
        }
    }

    Ok(ImpositionPlan {
        range: *range,
        signature_size,
        assignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sheet_order() {
        assert_eq!(signature_page_order(1), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_two_sheet_order() {
        // Outer sheet carries 8/1 and 2/7, inner sheet 6/3 and 4/5
        assert_eq!(signature_page_order(2), vec![7, 0, 1, 6, 5, 2, 3, 4]);
    }

    #[test]
    fn test_order_is_a_permutation() {
        for size in 1..6 {
            let mut order = signature_page_order(size);
            order.sort_unstable();
            assert_eq!(order, (0..4 * size).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_zero_signature_size_rejected() {
        let range = PageRange::full(8);
        assert!(matches!(
            sequence(&range, 0, true),
            Err(BookletError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_range() {
        let range = PageRange::new(3, 3, 8).unwrap();
        let plan = sequence(&range, 1, true).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.side_count(), 0);
    }

    #[test]
    fn test_range_offset_is_applied() {
        let range = PageRange::new(2, 6, 10).unwrap();
        let plan = sequence(&range, 1, true).unwrap();
        let pages: Vec<_> = plan.assignments().iter().map(|a| a.source_page).collect();
        assert_eq!(pages, vec![Some(5), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn test_rotate_back_disabled() {
        let range = PageRange::full(4);
        let plan = sequence(&range, 1, false).unwrap();
        assert!(plan.assignments().iter().all(|a| !a.rotate));
    }
}
