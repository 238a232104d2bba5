use crate::constants::{PAGES_PER_SHEET, SIDES_PER_SHEET};
use crate::layout::PageRange;
use crate::options::BookletOptions;
use crate::types::*;

/// Calculate statistics for a booklet run without rendering anything
pub fn calculate_statistics(
    range: &PageRange,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let source_pages = range.len();
    let pages_per_sig = PAGES_PER_SHEET * options.sheets_per_signature;

    let signatures = source_pages.div_ceil(pages_per_sig);
    let sheets = signatures * options.sheets_per_signature;
    let output_pages = sheets * SIDES_PER_SHEET;
    let blank_slots = signatures * pages_per_sig - source_pages;

    Ok(BookletStatistics {
        source_pages,
        signatures,
        sheets,
        output_pages,
        blank_slots,
    })
}
