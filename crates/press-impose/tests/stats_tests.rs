use press_impose::*;

fn book(page_count: usize, signature_size: usize) -> ImpositionResult {
    layout_perfect_binding(
        page_count,
        Dimensions::new(5.5, 8.5),
        SheetPreset::Press25x38.dimensions(),
        Margins::uniform(0.75),
        Gutters::uniform(0.125),
        signature_size,
    )
    .unwrap()
}

#[test]
fn test_stats_step_and_repeat() {
    let result = layout_step_and_repeat(
        Dimensions::new(2.0, 2.0),
        SheetPreset::Letter.dimensions(),
        Margins::uniform(0.5),
        Gutters::default(),
    )
    .unwrap();

    let stats = calculate_statistics(&result);
    assert_eq!(stats.logical_pages, 1);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.output_sheets, 1);
    assert_eq!(stats.signatures, None);
    assert_eq!(stats.printed_sides, 1);
    assert_eq!(stats.placed_instances, 15);
    assert!((stats.efficiency - 0.6417).abs() < 1e-4);
}

#[test]
fn test_stats_degenerate_step_and_repeat() {
    let result = layout_step_and_repeat(
        Dimensions::new(12.0, 12.0),
        SheetPreset::Letter.dimensions(),
        Margins::default(),
        Gutters::default(),
    )
    .unwrap();

    let stats = calculate_statistics(&result);
    assert_eq!(stats.placed_instances, 0);
    assert_eq!(stats.efficiency, 0.0);
}

#[test]
fn test_stats_saddle_stitch() {
    let result = layout_saddle_stitch(
        10,
        Dimensions::new(5.5, 8.5),
        SheetPreset::Tabloid.dimensions(),
        Margins::default(),
        Gutters::default(),
    )
    .unwrap();

    let stats = calculate_statistics(&result);
    assert_eq!(stats.logical_pages, 10);
    // 10 pages padded to 12 (3 sheets of 4)
    assert_eq!(stats.padded_pages, 12);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.output_sheets, 3);
    assert_eq!(stats.signatures, None);
    assert_eq!(stats.printed_sides, 3);
    assert_eq!(stats.placed_instances, 10);
}

#[test]
fn test_stats_perfect_binding() {
    let stats = calculate_statistics(&book(30, 16));
    assert_eq!(stats.padded_pages, 32);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.signatures, Some(2));
    assert_eq!(stats.output_sheets, 2);
    // front and back of each signature sheet
    assert_eq!(stats.printed_sides, 4);
    assert_eq!(stats.placed_instances, 30);
}

#[test]
fn test_stats_exact_signature_fit() {
    let stats = calculate_statistics(&book(64, 16));
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.signatures, Some(4));
}

#[test]
fn test_efficiency_counts_both_sides() {
    let full = book(16, 16);
    let expected = 16.0 * 5.5 * 8.5 / (2.0 * 25.0 * 38.0);
    assert!((calculate_statistics(&full).efficiency - expected).abs() < 1e-12);

    // Padding slots do not count as placed area
    let partial = book(14, 16);
    assert!(calculate_statistics(&partial).efficiency < calculate_statistics(&full).efficiency);
}
