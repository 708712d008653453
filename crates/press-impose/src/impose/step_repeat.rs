//! Step-and-repeat imposition (one design tiled across the sheet)

use super::{sheet_efficiency, validate_geometry};
use crate::layout::{
    ImpositionResult, SheetLayout, SheetSide, Side, fit_grid, place_slot, usable_area,
};
use crate::types::*;

/// Most instances a single step-and-repeat side may hold
pub const MAX_STEP_REPEAT_INSTANCES: usize = 100_000;

/// Tile one page design as many times as fits the usable sheet area.
///
/// Instances are placed row-major from the top-left of the usable area, all
/// carrying logical page 1 and no rotation. A page larger than the usable
/// area yields zero instances and efficiency 0; that is a valid result.
/// A page so small that more than `MAX_STEP_REPEAT_INSTANCES` would fit is
/// rejected with `InvalidDimension`.
pub fn layout_step_and_repeat(
    page_size: Dimensions,
    sheet_size: Dimensions,
    margins: Margins,
    gutters: Gutters,
) -> Result<ImpositionResult> {
    validate_geometry(&page_size, &sheet_size, &margins, &gutters)?;

    let usable = usable_area(&sheet_size, &margins);
    let grid = fit_grid(&usable, &page_size, &gutters);
    let instances = grid
        .capacity()
        .filter(|&count| count <= MAX_STEP_REPEAT_INSTANCES)
        .ok_or_else(|| {
            ImposeError::InvalidDimension(format!(
                "page {}x{} too small: {} x {} instances exceed the limit of {}",
                page_size.width,
                page_size.height,
                grid.across,
                grid.down,
                MAX_STEP_REPEAT_INSTANCES
            ))
        })?;

    let slots = (0..instances)
        .map(|idx| {
            place_slot(
                idx,
                grid.across,
                &page_size,
                &gutters,
                &usable,
                Rotation::None,
                Some(1),
            )
        })
        .collect();

    if instances == 0 {
        log::warn!(
            "Page {}x{} does not fit usable area {}x{}",
            page_size.width,
            page_size.height,
            usable.width,
            usable.height
        );
    } else {
        log::debug!(
            "Step-and-repeat: {} across x {} down = {} instances",
            grid.across,
            grid.down,
            instances
        );
    }

    let sheets = vec![SheetLayout {
        number: 1,
        front: SheetSide::from_slots(Side::Front, slots),
        back: None,
    }];
    let efficiency = sheet_efficiency(&sheets, &page_size, &sheet_size);

    Ok(ImpositionResult {
        binding: BindingType::StepAndRepeat,
        sheet_count: 1,
        page_count: 1,
        padded_page_count: 1,
        signature_size: None,
        grid,
        sheet_size,
        page_size,
        margins,
        sheets,
        efficiency,
    })
}
