//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations for page imposition:
//! - Signature ordering (which logical page goes in which slot)
//! - Grid layout (usable area, fit counts, cell positions)

mod grid;
mod signature;
mod types;

pub use grid::*;
pub use signature::*;
pub use types::*;
