//! Saddle-stitch imposition (nested folded sheets, 4 pages per sheet)
//!
//! The booklet is padded to a multiple of 4 and ordered outside-in as one
//! signature. Each sheet takes the next four entries of that order on a 2x2
//! grid:
//!
//! ```text
//! +-------+-------+
//! |  P-2s | 2s+1  |  <- outer face
//! +-------+-------+
//! | 2s+2↓ |P-2s-1↓|  <- inner face, rotated 180°
//! +-------+-------+
//! ```
//!
//! For an 8-page booklet: sheet 1 = [8, 1, 2, 7], sheet 2 = [6, 3, 4, 5].

use super::{sheet_efficiency, validate_geometry, validate_page_count};
use crate::layout::{
    GridSize, ImpositionResult, SheetLayout, SheetSide, Side, SignatureSequence,
    ensure_grid_fits, place_slot, usable_area,
};
use crate::types::*;

/// Pages carried by one saddle-stitched sheet
pub const PAGES_PER_SHEET: usize = 4;

/// Columns of the 2x2 sheet grid
const SHEET_COLUMNS: usize = 2;

/// Impose a saddle-stitched booklet.
///
/// Slots whose page falls past `page_count` (padding to a multiple of 4) are
/// kept as blank slots and left out of the placements.
pub fn layout_saddle_stitch(
    page_count: usize,
    page_size: Dimensions,
    sheet_size: Dimensions,
    margins: Margins,
    gutters: Gutters,
) -> Result<ImpositionResult> {
    validate_page_count(page_count)?;
    validate_geometry(&page_size, &sheet_size, &margins, &gutters)?;

    let usable = usable_area(&sheet_size, &margins);
    let grid = GridSize::new(SHEET_COLUMNS, PAGES_PER_SHEET / SHEET_COLUMNS);
    ensure_grid_fits(grid, &page_size, &gutters, &usable)?;

    let padded = page_count.div_ceil(PAGES_PER_SHEET) * PAGES_PER_SHEET;
    let sheet_count = padded / PAGES_PER_SHEET;
    let sequence = SignatureSequence::new(padded)?;

    log::debug!(
        "Saddle-stitch: {} pages padded to {} on {} sheets",
        page_count,
        padded,
        sheet_count
    );

    let sheets: Vec<SheetLayout> = sequence
        .sheets(PAGES_PER_SHEET)
        .enumerate()
        .map(|(sheet_idx, order)| {
            let slots = order
                .iter()
                .enumerate()
                .map(|(slot, &page)| {
                    // Bottom row is bound head-to-head with the top row
                    let rotation = if slot >= SHEET_COLUMNS {
                        Rotation::Clockwise180
                    } else {
                        Rotation::None
                    };
                    place_slot(
                        slot,
                        SHEET_COLUMNS,
                        &page_size,
                        &gutters,
                        &usable,
                        rotation,
                        (page <= page_count).then_some(page),
                    )
                })
                .collect();

            SheetLayout {
                number: sheet_idx + 1,
                front: SheetSide::from_slots(Side::Front, slots),
                back: None,
            }
        })
        .collect();

    let efficiency = sheet_efficiency(&sheets, &page_size, &sheet_size);

    Ok(ImpositionResult {
        binding: BindingType::SaddleStitch,
        sheet_count,
        page_count,
        padded_page_count: padded,
        signature_size: None,
        grid,
        sheet_size,
        page_size,
        margins,
        sheets,
        efficiency,
    })
}
