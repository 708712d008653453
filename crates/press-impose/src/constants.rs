//! Shared constants for marks and proof rendering
//!
//! Mark geometry is in inches like the rest of the layout model; only the
//! proof renderer converts to points.

// =============================================================================
// Unit Conversion
// =============================================================================

/// PDF user-space units per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f64) -> f32 {
    (inches * POINTS_PER_INCH as f64) as f32
}

// =============================================================================
// Printer's Marks (inches)
// =============================================================================

/// Length of each arm of a crop mark
pub const CROP_MARK_LENGTH: f64 = 0.5;

/// Distance from the printable-area corner to the start of a crop mark
pub const CROP_MARK_OFFSET: f64 = 0.25;

/// Outer radius of a registration target
pub const REGISTRATION_MARK_RADIUS: f64 = 0.4;

/// Distance from the printable-area edge to a registration target's center
pub const REGISTRATION_MARK_OFFSET: f64 = 1.0;

/// Inner ring radius as a fraction of the outer radius
pub const REGISTRATION_INNER_RATIO: f64 = 1.0 / 3.0;

/// Spacing of the reference grid
pub const REFERENCE_GRID_SPACING: f64 = 1.0;

// =============================================================================
// Proof Rendering (points)
// =============================================================================

/// Stroke width for crop and registration marks
pub const MARK_LINE_WIDTH: f32 = 0.25;

/// Stroke width for placement outlines
pub const OUTLINE_WIDTH: f32 = 0.75;

/// Stroke width for the reference grid
pub const GRID_LINE_WIDTH: f32 = 0.2;

/// Dash pattern (on, off) for blank slots
pub const BLANK_DASH: (f32, f32) = (4.0, 3.0);

/// Font size for placement labels
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Space around the sheet on a proof page, room for marks outside the sheet
pub const PROOF_PADDING: f32 = 108.0;

/// Fill colors cycled by logical page number
pub const PAGE_COLORS: [(f32, f32, f32); 5] = [
    (0.890, 0.949, 0.992),
    (0.953, 0.898, 0.961),
    (0.910, 0.961, 0.910),
    (1.000, 0.953, 0.878),
    (0.988, 0.894, 0.925),
];

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// This magic number comes from: 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f32 = 0.552284749831;
