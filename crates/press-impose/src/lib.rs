mod constants;
pub mod impose;
pub mod layout;
pub mod marks;
mod options;
pub mod render;
mod stats;
mod types;

pub use impose::{
    MAX_STEP_REPEAT_INSTANCES, layout_perfect_binding, layout_saddle_stitch,
    layout_step_and_repeat, plan, plan_async, plan_batch,
};
pub use layout::{
    GridSize, ImpositionResult, PlacedPage, Rect, SheetLayout, SheetSide, Side,
    generate_signature_sequence,
};
pub use marks::{SheetMarks, generate_marks};
pub use options::*;
pub use render::{load_pdf, render_proof, save_pdf};
pub use stats::calculate_statistics;
pub use types::*;
