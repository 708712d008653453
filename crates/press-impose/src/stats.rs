use crate::layout::ImpositionResult;
use crate::types::*;

/// Summarize a planned imposition
pub fn calculate_statistics(result: &ImpositionResult) -> ImpositionStatistics {
    let printed_sides = result.side_count();
    let placed_instances = result.instance_count();

    // Step-and-repeat places copies of one page; nothing is padded
    let blank_pages_added = match result.binding {
        BindingType::StepAndRepeat => 0,
        BindingType::SaddleStitch | BindingType::PerfectBinding => {
            result.padded_page_count - result.page_count
        }
    };

    let signatures = match result.binding {
        BindingType::PerfectBinding => Some(result.sheet_count),
        BindingType::StepAndRepeat | BindingType::SaddleStitch => None,
    };

    log::debug!(
        "{:?}: {} sheets, {} sides, {} instances, {:.1}% efficient",
        result.binding,
        result.sheet_count,
        printed_sides,
        placed_instances,
        result.efficiency * 100.0
    );

    ImpositionStatistics {
        logical_pages: result.page_count,
        padded_pages: result.padded_page_count,
        blank_pages_added,
        output_sheets: result.sheet_count,
        signatures,
        printed_sides,
        placed_instances,
        efficiency: result.efficiency,
    }
}
