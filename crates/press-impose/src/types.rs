use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Invalid signature size {0}: must be even and at least 4")]
    InvalidSignatureSize(usize),
    #[error("Invalid page count {0}: at least one page is required")]
    InvalidPageCount(usize),
    #[error(
        "Sheet too small: {cols}x{rows} grid needs {required_width:.3}in x {required_height:.3}in, \
         usable area is {usable_width:.3}in x {usable_height:.3}in"
    )]
    SheetTooSmall {
        cols: usize,
        rows: usize,
        required_width: f64,
        required_height: f64,
        usable_width: f64,
        usable_height: f64,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Tolerance used when comparing accumulated inch offsets against sheet bounds
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Named sheet sizes found in print shops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetPreset {
    Letter,
    Legal,
    Tabloid,
    /// 12 x 18 digital press sheet
    Press12x18,
    /// 13 x 19 digital press sheet
    Press13x19,
    /// 25 x 38 offset sheet
    Press25x38,
    /// 26 x 40 offset sheet
    Press26x40,
}

impl SheetPreset {
    /// Base dimensions in inches (always portrait: width < height)
    pub fn dimensions(self) -> Dimensions {
        let (width, height) = match self {
            SheetPreset::Letter => (8.5, 11.0),
            SheetPreset::Legal => (8.5, 14.0),
            SheetPreset::Tabloid => (11.0, 17.0),
            SheetPreset::Press12x18 => (12.0, 18.0),
            SheetPreset::Press13x19 => (13.0, 19.0),
            SheetPreset::Press25x38 => (25.0, 38.0),
            SheetPreset::Press26x40 => (26.0, 40.0),
        };
        Dimensions::new(width, height)
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> Dimensions {
        let dims = self.dimensions();
        match orientation {
            Orientation::Portrait => dims,
            Orientation::Landscape => dims.swapped(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SheetPreset::Letter => "Letter",
            SheetPreset::Legal => "Legal",
            SheetPreset::Tabloid => "Tabloid",
            SheetPreset::Press12x18 => "12 x 18",
            SheetPreset::Press13x19 => "13 x 19",
            SheetPreset::Press25x38 => "25 x 38",
            SheetPreset::Press26x40 => "26 x 40",
        }
    }
}

/// Bindery workflows supported by the planners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingType {
    /// One design tiled across the sheet (business cards, labels)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "step-repeat"))]
    StepAndRepeat,
    /// Folded sheets stapled through the fold, 4 pages per sheet
    #[cfg_attr(feature = "serde", serde(rename = "saddle"))]
    SaddleStitch,
    /// Gathered signatures glued at a flat spine
    #[cfg_attr(feature = "serde", serde(rename = "perfect"))]
    PerfectBinding,
}

impl BindingType {
    /// Whether the binding follows the outside-in signature order
    pub fn requires_folding(self) -> bool {
        !matches!(self, BindingType::StepAndRepeat)
    }
}

/// Rotation for placed pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    pub fn is_rotated(self) -> bool {
        self != Rotation::None
    }
}

/// Width x height in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Same size turned a quarter
    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Fails with `InvalidDimension` unless both sides are finite and positive
    pub fn validate(&self, what: &str) -> Result<()> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ImposeError::InvalidDimension(format!(
                    "{what} {axis} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Sheet-edge insets in inches
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }

    /// Check the margins against the sheet they inset.
    ///
    /// Every margin must be finite and non-negative, and none may exceed half
    /// of the sheet dimension it cuts into.
    pub fn validate(&self, sheet: &Dimensions) -> Result<()> {
        let sides = [
            ("top", self.top, sheet.height),
            ("bottom", self.bottom, sheet.height),
            ("left", self.left, sheet.width),
            ("right", self.right, sheet.width),
        ];
        for (side, value, extent) in sides {
            if !value.is_finite() || value < 0.0 {
                return Err(ImposeError::InvalidDimension(format!(
                    "{side} margin must be non-negative, got {value}"
                )));
            }
            if value > extent / 2.0 {
                return Err(ImposeError::InvalidDimension(format!(
                    "{side} margin {value} exceeds half of the sheet ({extent})"
                )));
            }
        }
        Ok(())
    }
}

/// Spacing between adjacent page instances, in inches
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gutters {
    pub x: f64,
    pub y: f64,
}

impl Gutters {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(gutter: f64) -> Self {
        Self::new(gutter, gutter)
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ImposeError::InvalidDimension(format!(
                    "gutter {axis} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Printer's marks options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrinterMarks {
    /// Add crop marks (L-shaped corner marks)
    pub crop_marks: bool,
    /// Add registration targets on each edge midpoint
    pub registration_marks: bool,
    /// Draw a one-inch reference grid over the sheet
    pub reference_grid: bool,
}

impl PrinterMarks {
    pub fn any(&self) -> bool {
        self.crop_marks || self.registration_marks || self.reference_grid
    }
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionStatistics {
    /// Logical pages requested by the job
    pub logical_pages: usize,
    /// Page slots after padding to the binding's multiple
    pub padded_pages: usize,
    /// Slots left empty by padding
    pub blank_pages_added: usize,
    /// Physical sheets (signatures for perfect binding)
    pub output_sheets: usize,
    /// Signatures, if the binding gathers them
    pub signatures: Option<usize>,
    /// Printed sheet sides
    pub printed_sides: usize,
    /// Page instances placed across every side
    pub placed_instances: usize,
    /// Placed page area over printed sheet area
    pub efficiency: f64,
}
