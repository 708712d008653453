//! Proof page drawing

use crate::constants::{
    BEZIER_CIRCLE_FACTOR, BLANK_DASH, GRID_LINE_WIDTH, HELVETICA_CHAR_WIDTH_RATIO,
    LABEL_FONT_SIZE, MARK_LINE_WIDTH, OUTLINE_WIDTH, PAGE_COLORS, PROOF_PADDING, in_to_pt,
};
use crate::layout::{ImpositionResult, PlacedPage, SheetLayout, SheetSide, Side};
use crate::marks::{Line, RegistrationMark, SheetMarks, generate_marks};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Maps sheet inches (top-left origin) to proof-page points (bottom-left origin)
#[derive(Debug, Clone, Copy)]
struct ProofSpace {
    sheet_height: f64,
}

impl ProofSpace {
    fn point(&self, x: f64, y: f64) -> (f32, f32) {
        (
            PROOF_PADDING + in_to_pt(x),
            PROOF_PADDING + in_to_pt(self.sheet_height - y),
        )
    }

    /// Lower-left corner plus size of a top-left-anchored rect, in points
    fn rect(&self, x: f64, y: f64, width: f64, height: f64) -> (f32, f32, f32, f32) {
        let (px, py) = self.point(x, y + height);
        (px, py, in_to_pt(width), in_to_pt(height))
    }
}

/// Render one proof page per printed side of `result`.
///
/// Every side shares the sheet size, so the marks are computed once.
pub fn render_proof(result: &ImpositionResult, marks: &PrinterMarks) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    let font_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));

    let sheet_marks = generate_marks(result, marks);
    let space = ProofSpace {
        sheet_height: result.sheet_size.height,
    };
    let page_width = in_to_pt(result.sheet_size.width) + 2.0 * PROOF_PADDING;
    let page_height = in_to_pt(result.sheet_size.height) + 2.0 * PROOF_PADDING;

    let mut page_refs = Vec::new();
    for sheet in &result.sheets {
        for side in sheet.sides() {
            let content = side_content(result, sheet, side, &sheet_marks, space);
            let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

            let page_id = output.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_tree_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(page_width),
                        Object::Real(page_height),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
                (
                    "Resources",
                    Object::Dictionary(Dictionary::from_iter(vec![(
                        "Font",
                        Object::Dictionary(Dictionary::from_iter(vec![(
                            "F1",
                            Object::Reference(font_id),
                        )])),
                    )])),
                ),
            ]));
            page_refs.push(Object::Reference(page_id));
        }
    }

    log::debug!(
        "Rendered {} proof pages for {:?}{}",
        page_refs.len(),
        result.binding,
        if sheet_marks.is_empty() { " without marks" } else { "" }
    );

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Content stream for one sheet side
fn side_content(
    result: &ImpositionResult,
    sheet: &SheetLayout,
    side: &SheetSide,
    marks: &SheetMarks,
    space: ProofSpace,
) -> String {
    let mut ops = String::new();

    // Sheet
    let (x, y, w, h) = space.rect(0.0, 0.0, result.sheet_size.width, result.sheet_size.height);
    ops.push_str("q\n1 1 1 rg\n0 0 0 RG\n");
    ops.push_str(&format!("{} w\n{} {} {} {} re B\nQ\n", OUTLINE_WIDTH, x, y, w, h));

    if !marks.grid_lines.is_empty() {
        ops.push_str(&format!("q\n0.8 G\n{} w\n", GRID_LINE_WIDTH));
        for line in &marks.grid_lines {
            ops.push_str(&stroke_line(line, space));
        }
        ops.push_str("Q\n");
    }

    for placement in &side.blank_slots {
        ops.push_str(&draw_blank_slot(placement, space));
    }
    for placement in &side.placements {
        ops.push_str(&draw_placement(placement, space));
    }

    if !marks.crop_marks.is_empty() || !marks.registration_marks.is_empty() {
        ops.push_str(&format!("q\n0 0 0 RG\n{} w\n", MARK_LINE_WIDTH));
        for crop in &marks.crop_marks {
            ops.push_str(&stroke_line(&crop.horizontal, space));
            ops.push_str(&stroke_line(&crop.vertical, space));
        }
        for target in &marks.registration_marks {
            ops.push_str(&draw_registration_mark(target, space));
        }
        ops.push_str("Q\n");
    }

    // Caption above the sheet
    let side_name = match side.side {
        Side::Front => "Front",
        Side::Back => "Back",
    };
    let caption = format!("Sheet {} {}", sheet.number, side_name);
    let (cx, cy) = space.point(0.0, 0.0);
    ops.push_str(&format!(
        "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
        LABEL_FONT_SIZE,
        cx,
        cy + LABEL_FONT_SIZE,
        caption
    ));

    ops
}

/// Filled, outlined rectangle with a "P{n}" label turned with the placement
fn draw_placement(placement: &PlacedPage, space: ProofSpace) -> String {
    let mut ops = String::new();
    let (x, y, w, h) = space.rect(placement.x, placement.y, placement.width, placement.height);

    let (r, g, b) = placement
        .page
        .map(|page| PAGE_COLORS[(page.saturating_sub(1)) % PAGE_COLORS.len()])
        .unwrap_or((1.0, 1.0, 1.0));
    ops.push_str(&format!("q\n{} {} {} rg\n0.2 G\n{} w\n", r, g, b, OUTLINE_WIDTH));
    ops.push_str(&format!("{} {} {} {} re B\n", x, y, w, h));

    if let Some(page) = placement.page {
        let label = format!("P{}", page);
        let text_width = label.len() as f32 * LABEL_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;

        // Clockwise on the sheet is clockwise on the page; PDF angles run counter-clockwise
        let radians = -(placement.rotation.degrees() as f32).to_radians();
        let (sin, cos) = radians.sin_cos();
        let (cx, cy) = space.point(
            placement.x + placement.width / 2.0,
            placement.y + placement.height / 2.0,
        );
        ops.push_str(&format!(
            "0 g\n{} {} {} {} {} {} cm\nBT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            cos,
            sin,
            -sin,
            cos,
            cx,
            cy,
            LABEL_FONT_SIZE,
            -text_width / 2.0,
            -LABEL_FONT_SIZE / 3.0,
            label
        ));
    }

    ops.push_str("Q\n");
    ops
}

/// Dashed outline marking reserved padding
fn draw_blank_slot(placement: &PlacedPage, space: ProofSpace) -> String {
    let (x, y, w, h) = space.rect(placement.x, placement.y, placement.width, placement.height);
    format!(
        "q\n0.6 G\n{} w\n[{} {}] 0 d\n{} {} {} {} re S\nQ\n",
        OUTLINE_WIDTH, BLANK_DASH.0, BLANK_DASH.1, x, y, w, h
    )
}

fn stroke_line(line: &Line, space: ProofSpace) -> String {
    let (x1, y1) = space.point(line.x1, line.y1);
    let (x2, y2) = space.point(line.x2, line.y2);
    format!("{} {} m {} {} l S\n", x1, y1, x2, y2)
}

/// Outer circle, inner ring and crosshair
fn draw_registration_mark(target: &RegistrationMark, space: ProofSpace) -> String {
    let mut ops = String::new();
    let (cx, cy) = space.point(target.center_x, target.center_y);

    for radius in [target.radius, target.inner_radius] {
        ops.push_str(&circle(cx, cy, in_to_pt(radius)));
    }
    for line in target.crosshair() {
        ops.push_str(&stroke_line(&line, space));
    }
    ops
}

/// Stroked circle from four cubic Bezier arcs
fn circle(cx: f32, cy: f32, r: f32) -> String {
    let k = r * BEZIER_CIRCLE_FACTOR;
    let mut ops = format!("{} {} m\n", cx + r, cy);
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx + r,
        cy + k,
        cx + k,
        cy + r,
        cx,
        cy + r
    ));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx - k,
        cy + r,
        cx - r,
        cy + k,
        cx - r,
        cy
    ));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx - r,
        cy - k,
        cx - k,
        cy - r,
        cx,
        cy - r
    ));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx + k,
        cy - r,
        cx + r,
        cy - k,
        cx + r,
        cy
    ));
    ops.push_str("S\n");
    ops
}

/// Create pages tree and catalog
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impose::{layout_perfect_binding, layout_step_and_repeat};

    fn page_text(doc: &Document, index: usize) -> String {
        let pages = doc.get_pages();
        let page_id = *pages.values().nth(index).unwrap();
        String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap()
    }

    #[test]
    fn test_one_page_per_side() {
        let result = layout_perfect_binding(
            30,
            Dimensions::new(5.5, 8.5),
            Dimensions::new(25.0, 38.0),
            Margins::uniform(0.75),
            Gutters::uniform(0.125),
            16,
        )
        .unwrap();
        let doc = render_proof(&result, &PrinterMarks::default()).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }

    #[test]
    fn test_labels_and_blank_slots() {
        let result = layout_perfect_binding(
            30,
            Dimensions::new(5.5, 8.5),
            Dimensions::new(25.0, 38.0),
            Margins::uniform(0.75),
            Gutters::uniform(0.125),
            16,
        )
        .unwrap();
        let doc = render_proof(&result, &PrinterMarks::default()).unwrap();

        let front = page_text(&doc, 0);
        assert!(front.contains("(P16) Tj"));
        assert!(front.contains("(Sheet 1 Front) Tj"));
        assert!(!front.contains("[4 3] 0 d"));

        // Second signature front carries the two padding slots
        let padded = page_text(&doc, 2);
        assert!(padded.contains("[4 3] 0 d"));
        assert!(!padded.contains("(P32) Tj"));
    }

    #[test]
    fn test_back_labels_are_inverted() {
        let result = layout_perfect_binding(
            16,
            Dimensions::new(5.5, 8.5),
            Dimensions::new(25.0, 38.0),
            Margins::uniform(0.75),
            Gutters::uniform(0.125),
            16,
        )
        .unwrap();
        let doc = render_proof(&result, &PrinterMarks::default()).unwrap();
        let back = page_text(&doc, 1);
        assert!(back.contains("(Sheet 1 Back) Tj"));
        assert!(back.contains("-1 "));
    }

    #[test]
    fn test_marks_drawn_when_enabled() {
        let result = layout_step_and_repeat(
            Dimensions::new(3.5, 2.0),
            Dimensions::new(12.0, 18.0),
            Margins::uniform(1.0),
            Gutters::default(),
        )
        .unwrap();

        let plain = render_proof(&result, &PrinterMarks::default()).unwrap();
        assert!(!page_text(&plain, 0).contains(" c\n"));

        let marks = PrinterMarks {
            crop_marks: true,
            registration_marks: true,
            reference_grid: true,
        };
        let marked = render_proof(&result, &marks).unwrap();
        let text = page_text(&marked, 0);
        // 4 targets, 2 circles each, 4 arcs per circle
        assert_eq!(text.matches(" c\n").count(), 32);
        assert!(text.contains("0.8 G"));
    }

    #[test]
    fn test_degenerate_result_renders_empty_sheet() {
        let result = layout_step_and_repeat(
            Dimensions::new(20.0, 20.0),
            Dimensions::new(8.5, 11.0),
            Margins::default(),
            Gutters::default(),
        )
        .unwrap();
        let doc = render_proof(&result, &PrinterMarks::default()).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(!page_text(&doc, 0).contains("(P1)"));
    }
}
