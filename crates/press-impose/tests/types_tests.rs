use press_impose::*;

#[test]
fn test_sheet_preset_dimensions() {
    assert_eq!(SheetPreset::Letter.dimensions(), Dimensions::new(8.5, 11.0));
    assert_eq!(SheetPreset::Legal.dimensions(), Dimensions::new(8.5, 14.0));
    assert_eq!(SheetPreset::Tabloid.dimensions(), Dimensions::new(11.0, 17.0));
    assert_eq!(SheetPreset::Press12x18.dimensions(), Dimensions::new(12.0, 18.0));
    assert_eq!(SheetPreset::Press13x19.dimensions(), Dimensions::new(13.0, 19.0));
    assert_eq!(SheetPreset::Press25x38.dimensions(), Dimensions::new(25.0, 38.0));
    assert_eq!(SheetPreset::Press26x40.dimensions(), Dimensions::new(26.0, 40.0));
}

#[test]
fn test_sheet_preset_orientation() {
    let landscape = SheetPreset::Letter.dimensions_with_orientation(Orientation::Landscape);
    assert_eq!(landscape, Dimensions::new(11.0, 8.5));
    let portrait = SheetPreset::Letter.dimensions_with_orientation(Orientation::Portrait);
    assert_eq!(portrait, SheetPreset::Letter.dimensions());
}

#[test]
fn test_rotation_degrees() {
    assert_eq!(Rotation::None.degrees(), 0);
    assert_eq!(Rotation::Clockwise90.degrees(), 90);
    assert_eq!(Rotation::Clockwise180.degrees(), 180);
    assert_eq!(Rotation::Clockwise270.degrees(), 270);
    assert!(!Rotation::None.is_rotated());
    assert!(Rotation::Clockwise180.is_rotated());
}

#[test]
fn test_binding_folding() {
    assert!(!BindingType::StepAndRepeat.requires_folding());
    assert!(BindingType::SaddleStitch.requires_folding());
    assert!(BindingType::PerfectBinding.requires_folding());
    assert_eq!(BindingType::default(), BindingType::StepAndRepeat);
}

#[test]
fn test_margins_default() {
    let margins = Margins::default();
    assert_eq!(margins.top, 0.0);
    assert_eq!(margins.bottom, 0.0);
    assert_eq!(margins.left, 0.0);
    assert_eq!(margins.right, 0.0);
}

#[test]
fn test_margins_validate_against_sheet() {
    let sheet = Dimensions::new(8.5, 11.0);
    assert!(Margins::uniform(4.25).validate(&sheet).is_ok());
    assert!(Margins::uniform(4.3).validate(&sheet).is_err());
    assert!(Margins::uniform(f64::NAN).validate(&sheet).is_err());
}

#[test]
fn test_dimension_validation() {
    assert!(Dimensions::new(1.0, 1.0).validate("page").is_ok());
    for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        match Dimensions::new(bad, 1.0).validate("page") {
            Err(ImposeError::InvalidDimension(msg)) => assert!(msg.starts_with("page width")),
            other => panic!("expected InvalidDimension for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn test_printer_marks_default() {
    let marks = PrinterMarks::default();
    assert!(!marks.crop_marks);
    assert!(!marks.registration_marks);
    assert!(!marks.reference_grid);
    assert!(!marks.any());
}

#[test]
fn test_signature_sequence_export() {
    assert_eq!(
        generate_signature_sequence(8).unwrap(),
        vec![8, 1, 2, 7, 6, 3, 4, 5]
    );
}

#[test]
fn test_sheet_too_small_message() {
    let err = layout_saddle_stitch(
        4,
        Dimensions::new(8.5, 11.0),
        SheetPreset::Letter.dimensions(),
        Margins::default(),
        Gutters::default(),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("Sheet too small: 2x2 grid"));
}
