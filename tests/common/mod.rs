//! Common test infrastructure for brandscope integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use brandscope::{RasterPage, Rgb};

/// A page filled with one color.
pub fn solid_page(width: u32, height: u32, color: Rgb) -> RasterPage {
    RasterPage::new(width, height, vec![color; (width * height) as usize]).unwrap()
}

/// A page built from explicit (color, pixel count) runs.
pub fn page_from_runs(runs: &[(Rgb, usize)]) -> RasterPage {
    let pixels: Vec<Rgb> = runs
        .iter()
        .flat_map(|&(color, count)| std::iter::repeat(color).take(count))
        .collect();
    let width = pixels.len() as u32;
    RasterPage::new(width, 1, pixels).unwrap()
}

/// Brand specification used across the compliance tests.
pub const ACME_BRAND_YAML: &str = r#"
name: Acme
colors:
  - hex: "#007bc0"
    name: Acme Blue
  - hex: "#e2001a"
    name: Acme Red
  - hex: "#000000"
    name: Acme Ink
approved_fonts:
  - Helvetica
  - Univers
"#;
