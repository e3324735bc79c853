//! brandscope - document palette extraction and brand compliance scoring.
//!
//! Given the rasterized pages of a rendered document, this crate
//! extracts the dominant color palette with per-color usage shares,
//! detects declared colorspaces and spot-color names, and scores how
//! well the palette (and a supplied font-usage list) conforms to an
//! official brand specification.
//!
//! # Pipeline
//!
//! ```text
//! declared resources ──> colorspace scan ─────────────┐
//!                                                     v
//! page rasters ──> per-page quantization ──> hex-keyed aggregation
//!   (parallel)       (fixed-seed k-means)            │
//!                                                     v
//! brand spec ─────────────────────────────> compliance scoring
//! ```
//!
//! Rasterization and transport are external collaborators: callers hand
//! in pages as RGB buffers and get serializable results back. Every
//! numeric step is deterministic, so repeated analyses of the same
//! document produce identical palettes and scores.
//!
//! # Example
//!
//! ```
//! use brandscope::{analyze_document, score_colors, AnalysisOptions, BrandSpec, RasterPage, Rgb};
//!
//! let page = RasterPage::new(2, 2, vec![Rgb::new(0, 123, 192); 4])?;
//! let palette = analyze_document(vec![page], &[], &AnalysisOptions::default())?;
//! assert_eq!(palette.colors[0].hex, "#007bc0");
//!
//! let brand = BrandSpec::from_yaml(
//!     "name: Acme\ncolors:\n  - { hex: \"#007bc0\", name: Acme Blue }\n",
//! )?;
//! let verdict = score_colors(&palette.colors, &brand.colors, 0.75)?;
//! assert_eq!(verdict.score, 100);
//! # Ok::<(), brandscope::AnalysisError>(())
//! ```

pub mod analysis;
pub mod color;
pub mod compliance;
pub mod error;
pub mod models;

pub use analysis::{aggregate, analyze_document, cluster_count, quantize, scan};
pub use color::{Cmyk, Hsv, ParseColorError, Rgb};
pub use compliance::{color_similarity, score_colors, score_document, score_fonts};
pub use error::AnalysisError;
pub use models::{
    AggregatedColor, AnalysisOptions, BrandPaletteEntry, BrandSpec, ColorCluster, ColorSpaceInfo,
    ColorVerdict, ComplianceStatus, DocumentPalette, DocumentVerdict, FontUsage, FontVerdict,
    RasterPage,
};
