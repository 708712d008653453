//! Printer's marks geometry
//!
//! Marks are computed in sheet inches (top-left origin) around the printable
//! area, the sheet inset by its margins. Crop and registration marks sit
//! outside that area and may extend past the sheet edge when margins are
//! narrow; the proof renderer pads the page to keep them visible.

use crate::constants::{
    CROP_MARK_LENGTH, CROP_MARK_OFFSET, REFERENCE_GRID_SPACING, REGISTRATION_INNER_RATIO,
    REGISTRATION_MARK_OFFSET, REGISTRATION_MARK_RADIUS,
};
use crate::layout::{ImpositionResult, Rect};
use crate::types::{Dimensions, GEOMETRY_EPSILON, PrinterMarks};

/// A straight stroke from (x1, y1) to (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Unit direction pointing away from the area at this corner
    fn outward(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// L-shaped trim mark; both arms start at `vertex` and run away from the area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropMark {
    pub corner: Corner,
    pub vertex: (f64, f64),
    pub horizontal: Line,
    pub vertical: Line,
}

/// Circle-and-crosshair target used to check plate alignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationMark {
    pub edge: Edge,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub inner_radius: f64,
}

impl RegistrationMark {
    /// Horizontal and vertical strokes through the center, one radius each way
    pub fn crosshair(&self) -> [Line; 2] {
        let (cx, cy, r) = (self.center_x, self.center_y, self.radius);
        [
            Line::new(cx - r, cy, cx + r, cy),
            Line::new(cx, cy - r, cx, cy + r),
        ]
    }
}

/// Every mark to draw on one sheet side
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetMarks {
    pub crop_marks: Vec<CropMark>,
    pub registration_marks: Vec<RegistrationMark>,
    pub grid_lines: Vec<Line>,
}

impl SheetMarks {
    pub fn is_empty(&self) -> bool {
        self.crop_marks.is_empty() && self.registration_marks.is_empty() && self.grid_lines.is_empty()
    }
}

/// Crop marks at the four corners of `area`
pub fn crop_marks(area: &Rect) -> Vec<CropMark> {
    Corner::ALL
        .into_iter()
        .map(|corner| {
            let (cx, cy) = match corner {
                Corner::TopLeft => (area.x, area.y),
                Corner::TopRight => (area.right(), area.y),
                Corner::BottomLeft => (area.x, area.bottom()),
                Corner::BottomRight => (area.right(), area.bottom()),
            };
            let (dx, dy) = corner.outward();
            let vx = cx + dx * CROP_MARK_OFFSET;
            let vy = cy + dy * CROP_MARK_OFFSET;
            CropMark {
                corner,
                vertex: (vx, vy),
                horizontal: Line::new(vx, vy, vx + dx * CROP_MARK_LENGTH, vy),
                vertical: Line::new(vx, vy, vx, vy + dy * CROP_MARK_LENGTH),
            }
        })
        .collect()
}

/// Registration targets centered outside the midpoint of each edge of `area`
pub fn registration_marks(area: &Rect) -> Vec<RegistrationMark> {
    Edge::ALL
        .into_iter()
        .map(|edge| {
            let (center_x, center_y) = match edge {
                Edge::Top => (area.center_x(), area.y - REGISTRATION_MARK_OFFSET),
                Edge::Bottom => (area.center_x(), area.bottom() + REGISTRATION_MARK_OFFSET),
                Edge::Left => (area.x - REGISTRATION_MARK_OFFSET, area.center_y()),
                Edge::Right => (area.right() + REGISTRATION_MARK_OFFSET, area.center_y()),
            };
            RegistrationMark {
                edge,
                center_x,
                center_y,
                radius: REGISTRATION_MARK_RADIUS,
                inner_radius: REGISTRATION_MARK_RADIUS * REGISTRATION_INNER_RATIO,
            }
        })
        .collect()
}

/// Vertical then horizontal lines every inch across the whole sheet,
/// including both edges when the size is a whole number of inches
pub fn reference_grid(sheet: &Dimensions) -> Vec<Line> {
    let steps = |extent: f64| {
        let count = (extent / REFERENCE_GRID_SPACING + GEOMETRY_EPSILON).floor() as usize;
        (0..=count).map(|i| i as f64 * REFERENCE_GRID_SPACING)
    };

    let vertical = steps(sheet.width).map(|x| Line::new(x, 0.0, x, sheet.height));
    let horizontal = steps(sheet.height).map(|y| Line::new(0.0, y, sheet.width, y));
    vertical.chain(horizontal).collect()
}

/// Marks for every side of `result`; all sides share the same sheet geometry
pub fn generate_marks(result: &ImpositionResult, marks: &PrinterMarks) -> SheetMarks {
    if !marks.any() {
        return SheetMarks::default();
    }
    let area = result.printable_area();
    SheetMarks {
        crop_marks: if marks.crop_marks { crop_marks(&area) } else { Vec::new() },
        registration_marks: if marks.registration_marks {
            registration_marks(&area)
        } else {
            Vec::new()
        },
        grid_lines: if marks.reference_grid {
            reference_grid(&result.sheet_size)
        } else {
            Vec::new()
        },
    }
}
