//! Perfect-binding imposition (gathered signatures, glued spine)
//!
//! Every signature of `n` pages is printed on one sheet: the first half of the
//! outside-in order on the front, the second half on the back. Slots wrap at
//! four columns.
//!
//! **16-page signature:**
//! - Front: [16, 1, 2, 15] / [14, 3, 4, 13]
//! - Back:  [12↓, 5↓, 6↓, 11↓] / [10↓, 7↓, 8↓, 9↓]
//! - Back side rotated 180°

use super::{sheet_efficiency, validate_geometry, validate_page_count};
use crate::layout::{
    GridSize, ImpositionResult, PlacedPage, SheetLayout, SheetSide, Side,
    SignatureSequence, absolute_page, ensure_grid_fits, place_slot, usable_area,
    validate_signature_size,
};
use crate::types::*;

/// Slots per row before wrapping
const SIGNATURE_COLUMNS: usize = 4;

/// Impose a perfect-bound book in signatures of `signature_size` pages.
///
/// The final signature may hold fewer real pages than slots; slots mapping
/// past `page_count` are kept as blank slots and left out of the placements.
pub fn layout_perfect_binding(
    page_count: usize,
    page_size: Dimensions,
    sheet_size: Dimensions,
    margins: Margins,
    gutters: Gutters,
    signature_size: usize,
) -> Result<ImpositionResult> {
    validate_page_count(page_count)?;
    validate_signature_size(signature_size)?;
    validate_geometry(&page_size, &sheet_size, &margins, &gutters)?;

    let usable = usable_area(&sheet_size, &margins);
    let per_side = signature_size / 2;
    let grid = GridSize::new(
        per_side.min(SIGNATURE_COLUMNS),
        per_side.div_ceil(SIGNATURE_COLUMNS),
    );
    ensure_grid_fits(grid, &page_size, &gutters, &usable)?;

    let signatures = page_count.div_ceil(signature_size);
    // The order depends only on the signature size; every signature shares it
    let sequence = SignatureSequence::new(signature_size)?;
    let (front_order, back_order) = sequence.halves();

    log::debug!(
        "Perfect binding: {} pages in {} signatures of {} ({}x{} per side)",
        page_count,
        signatures,
        signature_size,
        grid.across,
        grid.down
    );

    let place_side = |order: &[usize], sig_start: usize, last_page: usize, rotation: Rotation| {
        order
            .iter()
            .enumerate()
            .map(|(idx, &relative)| {
                place_slot(
                    idx,
                    SIGNATURE_COLUMNS,
                    &page_size,
                    &gutters,
                    &usable,
                    rotation,
                    absolute_page(sig_start, relative, last_page),
                )
            })
            .collect::<Vec<PlacedPage>>()
    };

    let sheets: Vec<SheetLayout> = (0..signatures)
        .map(|sig| {
            let sig_start = sig * signature_size + 1;
            let last_page = (sig_start + signature_size - 1).min(page_count);

            let front = place_side(front_order, sig_start, last_page, Rotation::None);
            // Back is printed from the reverse; content is inverted
            let back = place_side(back_order, sig_start, last_page, Rotation::Clockwise180);

            SheetLayout {
                number: sig + 1,
                front: SheetSide::from_slots(Side::Front, front),
                back: Some(SheetSide::from_slots(Side::Back, back)),
            }
        })
        .collect();

    let efficiency = sheet_efficiency(&sheets, &page_size, &sheet_size);

    Ok(ImpositionResult {
        binding: BindingType::PerfectBinding,
        sheet_count: signatures,
        page_count,
        padded_page_count: signatures * signature_size,
        signature_size: Some(signature_size),
        grid,
        sheet_size,
        page_size,
        margins,
        sheets,
        efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(page_count: usize, signature_size: usize) -> Result<ImpositionResult> {
        layout_perfect_binding(
            page_count,
            Dimensions::new(5.5, 8.5),
            Dimensions::new(25.0, 38.0),
            Margins::uniform(0.75),
            Gutters::uniform(0.125),
            signature_size,
        )
    }

    #[test]
    fn test_single_full_signature() {
        let result = book(16, 16).unwrap();
        assert_eq!(result.sheet_count, 1);
        let sheet = &result.sheets[0];
        assert_eq!(sheet.front.page_numbers(), vec![16, 1, 2, 15, 14, 3, 4, 13]);
        assert_eq!(
            sheet.back.as_ref().unwrap().page_numbers(),
            vec![12, 5, 6, 11, 10, 7, 8, 9]
        );
    }

    #[test]
    fn test_thirty_pages_partial_signature() {
        let result = book(30, 16).unwrap();
        assert_eq!(result.sheet_count, 2);
        assert_eq!(result.padded_page_count, 32);

        let second: Vec<usize> = result.sheets[1]
            .sides()
            .flat_map(|side| side.page_numbers())
            .collect();
        assert_eq!(second.len(), 14);
        assert!(second.iter().all(|&p| (17..=30).contains(&p)));

        let blanks: usize = result.sheets[1].sides().map(|s| s.blank_slots.len()).sum();
        assert_eq!(blanks, 2);
        // 32 and 31 land on the front side, 32 in the first slot
        assert_eq!(result.sheets[1].front.blank_slots[0].x, 0.75);
    }

    #[test]
    fn test_side_rotation() {
        let result = book(40, 8).unwrap();
        for sheet in &result.sheets {
            assert!(sheet.front.placements.iter().all(|p| p.rotation == Rotation::None));
            let back = sheet.back.as_ref().unwrap();
            assert!(back.placements.iter().all(|p| p.rotation == Rotation::Clockwise180));
        }
    }

    #[test]
    fn test_four_column_wrap() {
        let result = book(16, 16).unwrap();
        let front = &result.sheets[0].front.placements;
        assert_eq!(result.grid, GridSize::new(4, 2));
        assert_eq!(front[3].x, 0.75 + 3.0 * 5.625);
        assert_eq!(front[4].x, 0.75);
        assert_eq!(front[4].y, 0.75 + 8.625);
    }

    #[test]
    fn test_small_signature_grid() {
        let result = book(4, 4).unwrap();
        assert_eq!(result.grid, GridSize::new(2, 1));
        assert_eq!(result.sheets[0].front.page_numbers(), vec![4, 1]);
        assert_eq!(result.sheets[0].back.as_ref().unwrap().page_numbers(), vec![2, 3]);
    }

    #[test]
    fn test_invalid_signature_size() {
        assert!(matches!(book(30, 11), Err(ImposeError::InvalidSignatureSize(11))));
        assert!(matches!(book(30, 2), Err(ImposeError::InvalidSignatureSize(2))));
    }

    #[test]
    fn test_signature_too_large_for_sheet() {
        // 64-page signature needs 8 rows of 8.5in pages
        assert!(matches!(book(64, 64), Err(ImposeError::SheetTooSmall { .. })));
    }
}
