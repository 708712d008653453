//! PDF proof rendering
//!
//! This module turns a planned layout into a proof document:
//! - One PDF page per printed sheet side, in print order
//! - Placements drawn as labelled, colored rectangles
//! - Blank slots, reference grid and printer's marks
//!
//! Layout coordinates are inches from the sheet's top-left; conversion to
//! PDF points (bottom-left origin) happens only here.

mod io;
mod proof;

pub use io::{load_pdf, save_pdf};
pub use proof::render_proof;
