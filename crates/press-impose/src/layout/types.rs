//! Layout data types for imposition
//!
//! Every value here is produced fresh by one planner call and never mutated
//! afterwards. Coordinates are inches with the origin at the sheet's top-left
//! corner, y growing downward.

use crate::types::{BindingType, Dimensions, GEOMETRY_EPSILON, Margins, Rotation};

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// A rectangular area in inches, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies inside this rect, allowing for float drift
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x - GEOMETRY_EPSILON
            && other.y >= self.y - GEOMETRY_EPSILON
            && other.right() <= self.right() + GEOMETRY_EPSILON
            && other.bottom() <= self.bottom() + GEOMETRY_EPSILON
    }
}

/// Number of cells across and down used by a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub across: usize,
    pub down: usize,
}

impl GridSize {
    pub fn new(across: usize, down: usize) -> Self {
        Self { across, down }
    }

    /// Cells in the grid, or `None` if the product overflows
    pub fn capacity(&self) -> Option<usize> {
        self.across.checked_mul(self.down)
    }
}

/// One page instance on one sheet side
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedPage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
    /// 1-based logical page number (None = blank padding slot)
    pub page: Option<usize>,
}

impl PlacedPage {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_blank(&self) -> bool {
        self.page.is_none()
    }
}

/// One printable face of one physical sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSide {
    pub side: Side,
    /// Placements carrying content, in slot order
    pub placements: Vec<PlacedPage>,
    /// Padding slots: geometry reserved, no page content
    pub blank_slots: Vec<PlacedPage>,
}

impl SheetSide {
    /// Split a full slot list into content placements and blank slots,
    /// keeping slot order within each.
    pub fn from_slots(side: Side, slots: Vec<PlacedPage>) -> Self {
        let (placements, blank_slots) = slots.into_iter().partition(|slot| !slot.is_blank());
        Self {
            side,
            placements,
            blank_slots,
        }
    }

    /// Total slots reserved on this side, blank or not
    pub fn slot_count(&self) -> usize {
        self.placements.len() + self.blank_slots.len()
    }

    /// Logical page numbers in placement order
    pub fn page_numbers(&self) -> Vec<usize> {
        self.placements.iter().filter_map(|p| p.page).collect()
    }
}

/// Both faces of one physical sheet (or one signature for perfect binding)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetLayout {
    /// 1-based sheet or signature number
    pub number: usize,
    pub front: SheetSide,
    pub back: Option<SheetSide>,
}

impl SheetLayout {
    /// Printed sides in print order (front first)
    pub fn sides(&self) -> impl Iterator<Item = &SheetSide> {
        std::iter::once(&self.front).chain(self.back.as_ref())
    }
}

/// Output of a planner
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionResult {
    pub binding: BindingType,
    /// Physical sheets, or signatures for perfect binding
    pub sheet_count: usize,
    /// Logical pages accounted for (1 for step-and-repeat)
    pub page_count: usize,
    /// Page slots after padding to the binding's multiple
    pub padded_page_count: usize,
    /// Pages per signature, when the binding gathers signatures
    pub signature_size: Option<usize>,
    /// Cells across and down on each printed side
    pub grid: GridSize,
    pub sheet_size: Dimensions,
    pub page_size: Dimensions,
    pub margins: Margins,
    pub sheets: Vec<SheetLayout>,
    /// Placed page area over printed sheet area, in [0, 1]
    pub efficiency: f64,
}

impl ImpositionResult {
    /// Every content placement, sheet by sheet, front before back
    pub fn placements(&self) -> impl Iterator<Item = &PlacedPage> {
        self.sides().flat_map(|side| side.placements.iter())
    }

    /// Every printed side in output order
    pub fn sides(&self) -> impl Iterator<Item = &SheetSide> {
        self.sheets.iter().flat_map(SheetLayout::sides)
    }

    pub fn instance_count(&self) -> usize {
        self.placements().count()
    }

    pub fn side_count(&self) -> usize {
        self.sides().count()
    }

    /// Area inside the margins where placements may land
    pub fn printable_area(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.sheet_size.width - self.margins.left - self.margins.right,
            self.sheet_size.height - self.margins.top - self.margins.bottom,
        )
    }

    /// True when nothing could be placed (page larger than the usable area)
    pub fn is_degenerate(&self) -> bool {
        self.instance_count() == 0
    }
}
