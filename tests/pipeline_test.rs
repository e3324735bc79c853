//! End-to-end palette extraction tests: rasters in, document palette out.

mod common;

use brandscope::{analyze_document, AnalysisOptions, Rgb};
use common::{page_from_runs, solid_page};
use pretty_assertions::assert_eq;

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

#[test]
fn test_two_page_aggregation_scenario() {
    // Page 1: 100px red. Page 2: 50px red + 50px green.
    let pages = vec![
        page_from_runs(&[(RED, 100)]),
        page_from_runs(&[(RED, 50), (GREEN, 50)]),
    ];

    let result = analyze_document(pages, &[], &AnalysisOptions::default()).unwrap();

    assert_eq!(result.total_colors, 2);
    assert_eq!(result.colors[0].hex, "#ff0000");
    assert_eq!(result.colors[0].appearance_percent, 75.0);
    assert_eq!(result.colors[1].hex, "#00ff00");
    assert_eq!(result.colors[1].appearance_percent, 25.0);
}

#[test]
fn test_white_background_is_invisible_to_the_palette() {
    // A mostly-white page with a small red block: the palette sees only
    // the red, at 100% share.
    let pages = vec![page_from_runs(&[(WHITE, 900), (RED, 100)])];
    let result = analyze_document(pages, &[], &AnalysisOptions::default()).unwrap();

    assert_eq!(result.total_colors, 1);
    assert_eq!(result.colors[0].hex, "#ff0000");
    assert_eq!(result.colors[0].appearance_percent, 100.0);
}

#[test]
fn test_custom_white_threshold() {
    // 240-grey counts as background only once the threshold drops to 240.
    let grey = Rgb::new(240, 240, 240);
    let pages = vec![page_from_runs(&[(grey, 50), (RED, 50)])];

    let default_options = AnalysisOptions::default();
    let result = analyze_document(pages.clone(), &[], &default_options).unwrap();
    assert_eq!(result.total_colors, 2);

    let strict = AnalysisOptions {
        white_threshold: 240,
        ..Default::default()
    };
    let result = analyze_document(pages, &[], &strict).unwrap();
    assert_eq!(result.total_colors, 1);
    assert_eq!(result.colors[0].hex, "#ff0000");
}

#[test]
fn test_spot_color_hint_and_declared_spaces() {
    let declared = vec![
        vec!["/DeviceRGB".to_string()],
        vec!["/DeviceCMYK".to_string()],
        vec!["/Separation".to_string(), "/PANTONE 485 C".to_string(), "/DeviceCMYK".to_string()],
    ];
    let pages = vec![solid_page(8, 8, RED)];
    let result = analyze_document(pages, &declared, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.declared_color_spaces, vec!["CMYK", "RGB", "Separation"]);
    assert_eq!(result.detected_spot_colors, vec!["PANTONE 485 C"]);
    assert_eq!(result.colors[0].pms.as_deref(), Some("PANTONE 485 C"));
}

#[test]
fn test_multi_spot_document_gets_no_pms_hint() {
    let declared = vec![
        vec!["/Separation".to_string(), "/Amber".to_string()],
        vec!["/Separation".to_string(), "/Zinc".to_string()],
    ];
    let pages = vec![solid_page(8, 8, RED)];
    let result = analyze_document(pages, &declared, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.detected_spot_colors, vec!["Amber", "Zinc"]);
    assert_eq!(result.colors[0].pms, None);
}

#[test]
fn test_busy_page_respects_max_colors() {
    // A large page with many distinct colors: the palette is clustered
    // down to at most max_colors entries and shares still sum to ~100.
    let pixels: Vec<Rgb> = (0..40_000)
        .map(|i| {
            Rgb::new(
                (i * 7 % 230) as u8,
                (i * 13 % 230) as u8,
                (i * 29 % 230) as u8,
            )
        })
        .collect();
    let page = brandscope::RasterPage::new(200, 200, pixels).unwrap();
    let options = AnalysisOptions {
        max_colors: 6,
        ..Default::default()
    };
    let result = analyze_document(vec![page], &[], &options).unwrap();

    assert!(result.total_colors <= 6, "got {} colors", result.total_colors);
    assert!(result.total_colors >= 2);
    let sum: f32 = result.colors.iter().map(|c| c.appearance_percent).sum();
    assert!((sum - 100.0).abs() <= 0.5, "shares sum to {sum}");

    // Descending usage order
    for pair in result.colors.windows(2) {
        assert!(pair[0].appearance_percent >= pair[1].appearance_percent);
    }
}

#[test]
fn test_analysis_is_deterministic_across_runs() {
    let build_pages = || {
        vec![
            brandscope::RasterPage::new(
                100,
                100,
                (0..10_000)
                    .map(|i| {
                        Rgb::new(
                            (i * 3 % 220) as u8,
                            (i * 11 % 220) as u8,
                            (i * 19 % 220) as u8,
                        )
                    })
                    .collect(),
            )
            .unwrap(),
            solid_page(20, 20, GREEN),
        ]
    };

    let a = analyze_document(build_pages(), &[], &AnalysisOptions::default()).unwrap();
    let b = analyze_document(build_pages(), &[], &AnalysisOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_document_palette_wire_shape() {
    let pages = vec![page_from_runs(&[(RED, 3)])];
    let result = analyze_document(pages, &[], &AnalysisOptions::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["declared_color_spaces"].is_array());
    assert!(json["detected_spot_colors"].is_array());
    assert_eq!(json["total_colors"], 1);
    let color = &json["colors"][0];
    assert_eq!(color["hex"], "#ff0000");
    assert_eq!(color["appearance_percent"], 100.0);
    assert!(color.get("pms").is_none());
    assert_eq!(color["cmyk"]["m"], 100.0);
}
