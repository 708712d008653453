//! Grid layout calculation
//!
//! This module handles the geometry shared by every planner: the usable area
//! inside the sheet margins, how many cells fit across and down, and where a
//! cell lands for a given slot index.

use crate::types::{Dimensions, GEOMETRY_EPSILON, Gutters, ImposeError, Margins, Result, Rotation};

use super::{GridSize, PlacedPage, Rect};

// =============================================================================
// Usable Area
// =============================================================================

/// The sheet area inside the margins, positioned at (left, top).
pub fn usable_area(sheet: &Dimensions, margins: &Margins) -> Rect {
    Rect::new(
        margins.left,
        margins.top,
        sheet.width - margins.left - margins.right,
        sheet.height - margins.top - margins.bottom,
    )
}

/// How many cells of `cell` length separated by `gutter` fit in `usable`.
///
/// Computed as `floor((usable + gutter) / (cell + gutter))`: n cells need
/// n gutters minus one. A count rounded up by the tolerance is kept only if
/// its span still fits `usable` to within `GEOMETRY_EPSILON` inches.
pub fn fit_count(usable: f64, cell: f64, gutter: f64) -> usize {
    let ratio = (usable + gutter) / (cell + gutter);
    if !ratio.is_finite() || ratio < 1.0 - GEOMETRY_EPSILON {
        return 0;
    }
    let count = (ratio + GEOMETRY_EPSILON).floor() as usize;
    if count > 0 && span(count, cell, gutter) > usable + GEOMETRY_EPSILON {
        count - 1
    } else {
        count
    }
}

/// Length of `count` cells with a gutter between each pair
fn span(count: usize, cell: f64, gutter: f64) -> f64 {
    if count == 0 {
        0.0
    } else {
        count as f64 * cell + (count - 1) as f64 * gutter
    }
}

/// Cells that fit across and down the usable area.
pub fn fit_grid(usable: &Rect, page: &Dimensions, gutters: &Gutters) -> GridSize {
    GridSize::new(
        fit_count(usable.width, page.width, gutters.x),
        fit_count(usable.height, page.height, gutters.y),
    )
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Total width and height occupied by a grid of pages and the gutters between them.
pub fn grid_extent(grid: GridSize, page: &Dimensions, gutters: &Gutters) -> Dimensions {
    Dimensions::new(
        span(grid.across, page.width, gutters.x),
        span(grid.down, page.height, gutters.y),
    )
}

/// Fail with `SheetTooSmall` if a fixed grid cannot fit the usable area.
///
/// Step-and-repeat derives its grid from the space available; the binding
/// planners use a fixed cell count and must check it before placing anything.
pub fn ensure_grid_fits(
    grid: GridSize,
    page: &Dimensions,
    gutters: &Gutters,
    usable: &Rect,
) -> Result<()> {
    let extent = grid_extent(grid, page, gutters);
    if extent.width > usable.width + GEOMETRY_EPSILON
        || extent.height > usable.height + GEOMETRY_EPSILON
    {
        return Err(ImposeError::SheetTooSmall {
            cols: grid.across,
            rows: grid.down,
            required_width: extent.width,
            required_height: extent.height,
            usable_width: usable.width,
            usable_height: usable.height,
        });
    }
    Ok(())
}

/// Row-major (col, row) of a slot in a grid `columns` wide.
pub fn wrap_position(index: usize, columns: usize) -> (usize, usize) {
    (index % columns, index / columns)
}

/// Build the placement for one slot of a row-major grid anchored at `origin`.
pub fn place_slot(
    index: usize,
    columns: usize,
    page: &Dimensions,
    gutters: &Gutters,
    origin: &Rect,
    rotation: Rotation,
    page_number: Option<usize>,
) -> PlacedPage {
    let (col, row) = wrap_position(index, columns);
    PlacedPage {
        x: origin.x + col as f64 * (page.width + gutters.x),
        y: origin.y + row as f64 * (page.height + gutters.y),
        width: page.width,
        height: page.height,
        rotation,
        page: page_number,
    }
}

// =============================================================================
// Tests
// =============================================================================
