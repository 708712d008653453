//! Imposition planners
//!
//! Each planner is a pure function of its geometry: it validates its inputs,
//! derives the grid, and returns a fresh `ImpositionResult`. Nothing is cached
//! between calls, so planners may run concurrently without coordination.
//!
//! 1. Validate page count, signature size and geometry
//! 2. Derive the grid and check it fits the usable area
//! 3. Map logical pages to slots and place them

mod perfect;
mod saddle;
mod step_repeat;

pub use perfect::layout_perfect_binding;
pub use saddle::layout_saddle_stitch;
pub use step_repeat::{MAX_STEP_REPEAT_INSTANCES, layout_step_and_repeat};

use crate::layout::SheetLayout;
use crate::options::JobConfig;
use crate::types::*;

/// Run the planner selected by the job's binding type
pub fn plan(config: &JobConfig) -> Result<crate::layout::ImpositionResult> {
    log::debug!("Planning '{}' as {:?}", config.name, config.binding);
    match config.binding {
        BindingType::StepAndRepeat => layout_step_and_repeat(
            config.page_size,
            config.sheet_size,
            config.margins,
            config.gutters,
        ),
        BindingType::SaddleStitch => layout_saddle_stitch(
            config.page_count,
            config.page_size,
            config.sheet_size,
            config.margins,
            config.gutters,
        ),
        BindingType::PerfectBinding => layout_perfect_binding(
            config.page_count,
            config.page_size,
            config.sheet_size,
            config.margins,
            config.gutters,
            config.signature_size,
        ),
    }
}

/// Run one job on the blocking pool
pub async fn plan_async(config: JobConfig) -> Result<crate::layout::ImpositionResult> {
    tokio::task::spawn_blocking(move || plan(&config)).await?
}

/// Run every job concurrently and return the results in input order
pub async fn plan_batch(configs: Vec<JobConfig>) -> Vec<Result<crate::layout::ImpositionResult>> {
    let handles: Vec<_> = configs
        .into_iter()
        .map(|config| tokio::task::spawn_blocking(move || plan(&config)))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.map_err(ImposeError::from).and_then(|r| r));
    }
    results
}

// =============================================================================
// Shared validation
// =============================================================================

pub(crate) fn validate_geometry(
    page_size: &Dimensions,
    sheet_size: &Dimensions,
    margins: &Margins,
    gutters: &Gutters,
) -> Result<()> {
    page_size.validate("page")?;
    sheet_size.validate("sheet")?;
    margins.validate(sheet_size)?;
    gutters.validate()
}

pub(crate) fn validate_page_count(page_count: usize) -> Result<()> {
    if page_count < 1 {
        return Err(ImposeError::InvalidPageCount(page_count));
    }
    Ok(())
}

/// Placed page area over the area of every printed side
pub(crate) fn sheet_efficiency(sheets: &[SheetLayout], page: &Dimensions, sheet: &Dimensions) -> f64 {
    let sides = sheets.iter().flat_map(SheetLayout::sides).count();
    if sides == 0 {
        return 0.0;
    }
    let placed = sheets
        .iter()
        .flat_map(SheetLayout::sides)
        .map(|side| side.placements.len())
        .sum::<usize>();
    (placed as f64 * page.area()) / (sides as f64 * sheet.area())
}
