use booklet_impose::*;

#[test]
fn test_stats_exact_signatures() {
    let options = BookletOptions::default();
    let stats = calculate_statistics(&PageRange::full(8), &options).unwrap();

    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.signatures, 2);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.blank_slots, 0);
}

#[test]
fn test_stats_short_final_signature() {
    let options = BookletOptions::default();
    let stats = calculate_statistics(&PageRange::full(6), &options).unwrap();

    assert_eq!(stats.signatures, 2);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.blank_slots, 2);
}

#[test]
fn test_stats_multi_sheet_signatures() {
    let options = BookletOptions {
        sheets_per_signature: 3,
        ..Default::default()
    };
    // 12 pages per signature: 20 pages -> 2 signatures, 6 sheets
    let stats = calculate_statistics(&PageRange::full(20), &options).unwrap();

    assert_eq!(stats.signatures, 2);
    assert_eq!(stats.sheets, 6);
    assert_eq!(stats.output_pages, 12);
    assert_eq!(stats.blank_slots, 4);
}

#[test]
fn test_stats_respect_page_range() {
    let options = BookletOptions::default();
    let range = PageRange::new(10, 15, 40).unwrap();
    let stats = calculate_statistics(&range, &options).unwrap();

    assert_eq!(stats.source_pages, 5);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.blank_slots, 3);
}

#[test]
fn test_stats_empty_range() {
    let options = BookletOptions::default();
    let stats = calculate_statistics(&PageRange::full(0), &options).unwrap();

    assert_eq!(stats.source_pages, 0);
    assert_eq!(stats.sheets, 0);
    assert_eq!(stats.output_pages, 0);
}

#[test]
fn test_stats_invalid_options() {
    let options = BookletOptions {
        sheets_per_signature: 0,
        ..Default::default()
    };
    assert!(matches!(
        calculate_statistics(&PageRange::full(8), &options),
        Err(BookletError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_stats_match_plan() {
    for total in 0..30 {
        for sheets_per_signature in 1..4 {
            let options = BookletOptions {
                sheets_per_signature,
                ..Default::default()
            };
            let range = PageRange::full(total);
            let stats = calculate_statistics(&range, &options).unwrap();
            let plan = layout::sequence(&range, sheets_per_signature, true).unwrap();

            assert_eq!(stats.output_pages, plan.side_count());
            assert_eq!(stats.sheets, plan.sheet_count());
            assert_eq!(stats.signatures, plan.signature_count());
        }
    }
}
