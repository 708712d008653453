use press_impose::*;

fn press_sheet() -> Dimensions {
    SheetPreset::Press25x38.dimensions()
}

fn saddle(page_count: usize) -> Result<ImpositionResult> {
    layout_saddle_stitch(
        page_count,
        Dimensions::new(8.5, 11.0),
        press_sheet(),
        Margins::uniform(1.0),
        Gutters::uniform(0.25),
    )
}

fn perfect(page_count: usize, signature_size: usize) -> Result<ImpositionResult> {
    layout_perfect_binding(
        page_count,
        Dimensions::new(5.5, 8.5),
        press_sheet(),
        Margins::uniform(0.75),
        Gutters::uniform(0.125),
        signature_size,
    )
}

fn assert_within_printable_area(result: &ImpositionResult) {
    let area = result.printable_area();
    for side in result.sides() {
        for slot in side.placements.iter().chain(side.blank_slots.iter()) {
            assert!(
                area.contains(&slot.rect()),
                "{:?} slot {:?} escapes {:?}",
                result.binding,
                slot,
                area
            );
        }
    }
}

fn assert_pages_once(result: &ImpositionResult) {
    let mut pages: Vec<usize> = result.placements().filter_map(|p| p.page).collect();
    pages.sort_unstable();
    assert_eq!(pages, (1..=result.page_count).collect::<Vec<_>>());
}

#[test]
fn test_business_cards_on_press_sheet() {
    let result = layout_step_and_repeat(
        Dimensions::new(3.5, 2.0),
        SheetPreset::Press12x18.dimensions(),
        Margins::uniform(0.5),
        Gutters::uniform(0.125),
    )
    .unwrap();

    assert_eq!(result.grid, GridSize::new(3, 8));
    assert_eq!(result.instance_count(), 24);
    assert_within_printable_area(&result);
    assert!((result.efficiency - 24.0 * 7.0 / 216.0).abs() < 1e-12);
}

#[test]
fn test_step_repeat_sweep_stays_in_bounds() {
    let sheets = [
        SheetPreset::Letter.dimensions(),
        SheetPreset::Tabloid.dimensions(),
        SheetPreset::Press13x19.dimensions_with_orientation(Orientation::Landscape),
    ];
    for sheet in sheets {
        for tenths in 5..=60 {
            let side = tenths as f64 / 10.0;
            let result = layout_step_and_repeat(
                Dimensions::new(side, side * 0.75),
                sheet,
                Margins::uniform(0.3),
                Gutters::uniform(0.1),
            )
            .unwrap();
            assert_within_printable_area(&result);
            assert!((0.0..=1.0).contains(&result.efficiency));
            assert_eq!(Some(result.instance_count()), result.grid.capacity());
        }
    }
}

#[test]
fn test_saddle_covers_every_page_once() {
    for page_count in 1..=48 {
        let result = saddle(page_count).unwrap();
        assert_eq!(result.sheet_count, page_count.div_ceil(4));
        assert_eq!(result.padded_page_count % 4, 0);
        assert_pages_once(&result);
        assert_within_printable_area(&result);
    }
}

#[test]
fn test_saddle_sheet_pairs_share_the_fold() {
    let result = saddle(16).unwrap();
    for sheet in &result.sheets {
        let pages = sheet.front.page_numbers();
        assert_eq!(pages[0] + pages[1], 17);
        assert_eq!(pages[2] + pages[3], 17);
    }
}

#[test]
fn test_perfect_covers_every_page_once() {
    // 6 and 10 leave 3 and 5 slots per side across the 4-column wrap
    for signature_size in [4, 6, 8, 10, 12, 16] {
        for page_count in 1..=70 {
            let result = perfect(page_count, signature_size).unwrap();
            assert_eq!(result.sheet_count, page_count.div_ceil(signature_size));
            assert_eq!(result.signature_size, Some(signature_size));
            assert_pages_once(&result);
            assert_within_printable_area(&result);
        }
    }
}

#[test]
fn test_perfect_signatures_stay_contiguous() {
    let result = perfect(48, 16).unwrap();
    for (idx, sheet) in result.sheets.iter().enumerate() {
        let first = idx * 16 + 1;
        for page in sheet.sides().flat_map(|s| s.page_numbers()) {
            assert!((first..first + 16).contains(&page));
        }
    }
}

#[test]
fn test_planners_are_idempotent() {
    assert_eq!(saddle(22).unwrap(), saddle(22).unwrap());
    assert_eq!(perfect(37, 8).unwrap(), perfect(37, 8).unwrap());
}

#[test]
fn test_plan_dispatches_on_binding() {
    let mut config = JobConfig::new("booklet", BindingType::SaddleStitch, 12);
    config.page_size = Dimensions::new(5.0, 8.0);
    config.sheet_size = SheetPreset::Tabloid.dimensions();
    config.margins = Margins::uniform(0.25);

    let result = plan(&config).unwrap();
    assert_eq!(result.binding, BindingType::SaddleStitch);
    assert_eq!(result.sheet_count, 3);

    config.binding = BindingType::PerfectBinding;
    config.signature_size = 4;
    let result = plan(&config).unwrap();
    assert_eq!(result.binding, BindingType::PerfectBinding);
    assert_eq!(result.sheet_count, 3);

    config.binding = BindingType::StepAndRepeat;
    let result = plan(&config).unwrap();
    assert_eq!(result.page_count, 1);
    assert_eq!(result.sheets.len(), 1);
}

#[test]
fn test_plan_rejects_bad_signature_size() {
    let mut config = JobConfig::new("novel", BindingType::PerfectBinding, 100);
    config.signature_size = 7;
    assert!(matches!(plan(&config), Err(ImposeError::InvalidSignatureSize(7))));
}

#[tokio::test]
async fn test_plan_async() {
    let config = JobConfig::default();
    let result = plan_async(config.clone()).await.unwrap();
    assert_eq!(result, plan(&config).unwrap());
}

#[tokio::test]
async fn test_plan_batch_keeps_input_order() {
    let configs = vec![
        JobConfig::new("cards", BindingType::StepAndRepeat, 1),
        JobConfig::new("empty", BindingType::SaddleStitch, 0),
        JobConfig {
            page_size: Dimensions::new(5.5, 8.5),
            sheet_size: press_sheet(),
            ..JobConfig::new("book", BindingType::PerfectBinding, 64)
        },
    ];

    let results = plan_batch(configs).await;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().binding, BindingType::StepAndRepeat);
    assert!(matches!(results[1], Err(ImposeError::InvalidPageCount(0))));
    assert_eq!(results[2].as_ref().unwrap().sheet_count, 4);
}
