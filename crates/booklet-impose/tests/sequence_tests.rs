use booklet_impose::layout::sequence;
use booklet_impose::*;

fn pages(plan: &ImpositionPlan) -> Vec<Option<usize>> {
    plan.assignments().iter().map(|a| a.source_page).collect()
}

#[test]
fn test_four_pages_single_sheet() {
    let plan = sequence(&PageRange::full(4), 1, true).unwrap();
    let sides: Vec<SidePlan> = plan.sides().collect();

    assert_eq!(plan.sheet_count(), 1);
    assert_eq!(sides.len(), 2);

    let front = &sides[0];
    assert_eq!(front.side, SheetSide::Front);
    assert_eq!(front.top.source_page, Some(3));
    assert_eq!(front.bottom.source_page, Some(0));
    assert!(!front.top.rotate);
    assert!(!front.bottom.rotate);

    let back = &sides[1];
    assert_eq!(back.side, SheetSide::Back);
    assert_eq!(back.top.source_page, Some(1));
    assert_eq!(back.bottom.source_page, Some(2));
    assert!(back.top.rotate);
    assert!(back.bottom.rotate);
}

#[test]
fn test_six_pages_leaves_two_slots_blank() {
    let plan = sequence(&PageRange::full(6), 1, true).unwrap();

    assert_eq!(plan.sheet_count(), 2);
    assert_eq!(
        pages(&plan),
        vec![
            Some(3),
            Some(0),
            Some(1),
            Some(2),
            // second sheet: pages 5 and 6 exist, 7 and 8 do not
            None,
            Some(4),
            Some(5),
            None,
        ]
    );
    assert!(plan.assignments()[4..].iter().all(|a| a.sheet == 1));
}

#[test]
fn test_multi_sheet_signature_nesting() {
    let plan = sequence(&PageRange::full(8), 2, true).unwrap();
    let sides: Vec<SidePlan> = plan.sides().collect();

    assert_eq!(plan.signature_count(), 1);
    assert_eq!(plan.sheet_count(), 2);

    // Outer sheet: 8/1 on the front, 2/7 on the back
    assert_eq!((sides[0].sheet, sides[0].side), (0, SheetSide::Front));
    assert_eq!(
        (sides[0].top.source_page, sides[0].bottom.source_page),
        (Some(7), Some(0))
    );
    assert_eq!(
        (sides[1].top.source_page, sides[1].bottom.source_page),
        (Some(1), Some(6))
    );

    // Inner sheet: 6/3 on the front, 4/5 on the back
    assert_eq!((sides[2].sheet, sides[2].side), (1, SheetSide::Front));
    assert_eq!(
        (sides[2].top.source_page, sides[2].bottom.source_page),
        (Some(5), Some(2))
    );
    assert_eq!(
        (sides[3].top.source_page, sides[3].bottom.source_page),
        (Some(3), Some(4))
    );
}

#[test]
fn test_slots_alternate_top_bottom() {
    let plan = sequence(&PageRange::full(12), 3, true).unwrap();
    for side in plan.sides() {
        assert_eq!(side.top.slot, Slot::Top);
        assert_eq!(side.bottom.slot, Slot::Bottom);
        assert_eq!(side.top.side, side.bottom.side);
        assert_eq!(side.top.sheet, side.bottom.sheet);
    }
}

#[test]
fn test_side_count_and_single_appearance() {
    for total in 0..40 {
        for first in 0..=total.min(6) {
            for last in first..=total {
                let range = PageRange::new(first, last, total).unwrap();
                for size in 1..5 {
                    let plan = sequence(&range, size, true).unwrap();
                    let len = last - first;

                    let expected_sides = len.div_ceil(4 * size) * 2 * size;
                    assert_eq!(plan.side_count(), expected_sides);

                    let mut seen: Vec<usize> =
                        plan.assignments().iter().filter_map(|a| a.source_page).collect();
                    seen.sort_unstable();
                    assert_eq!(seen, (first..last).collect::<Vec<_>>());
                }
            }
        }
    }
}

#[test]
fn test_sheets_are_in_order() {
    let plan = sequence(&PageRange::full(21), 2, true).unwrap();
    let sheets: Vec<usize> = plan.sides().map(|s| s.sheet).collect();
    assert_eq!(sheets, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);

    let sides: Vec<SheetSide> = plan.sides().map(|s| s.side).collect();
    assert!(
        sides
            .chunks(2)
            .all(|pair| pair[0] == SheetSide::Front && pair[1] == SheetSide::Back)
    );
}

#[test]
fn test_blank_sides_in_short_signature() {
    // 9 pages with 2-sheet signatures: second signature holds one page
    let plan = sequence(&PageRange::full(9), 2, true).unwrap();
    let blank: Vec<bool> = plan.sides().map(|s| s.is_blank()).collect();

    // Sheet 3 front has page 9 at the bottom; everything after it is empty
    assert_eq!(
        blank,
        vec![false, false, false, false, false, true, true, true]
    );
}
