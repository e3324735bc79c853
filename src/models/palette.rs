//! Palette-side data model: raster input, per-page clusters and the
//! aggregated document palette.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::color::{Cmyk, Rgb};
use crate::error::AnalysisError;

/// One rendered page's pixels.
///
/// Ephemeral: owned by the quantization call that consumes it and
/// discarded after clustering.
#[derive(Debug, Clone)]
pub struct RasterPage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl RasterPage {
    /// Build a page, rejecting a pixel buffer that does not match the
    /// stated dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, AnalysisError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(AnalysisError::InvalidArgument(format!(
                "pixel buffer length {} does not match {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    /// Build a page from a packed RGB byte buffer, as delivered by a
    /// rendering engine.
    pub fn from_raw_rgb(width: u32, height: u32, raw: &[u8]) -> Result<Self, AnalysisError> {
        let expected = width as usize * height as usize * 3;
        if raw.len() != expected {
            return Err(AnalysisError::InvalidArgument(format!(
                "raw buffer length {} does not match {width}x{height} RGB",
                raw.len()
            )));
        }
        let pixels = raw
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self { width, height, pixels })
    }
}

/// A representative color found on one page, with its pixel support.
///
/// `hex` is derived from `rgb` by rounding and is the join key for
/// aggregation: clusters from different pages merge iff their hex
/// values match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorCluster {
    pub rgb: Rgb,
    pub hex: String,
    /// Pixels assigned to this cluster's center.
    pub pixel_count: u64,
    /// Total non-white pixels on the page; shared across the page's clusters.
    pub colored_pixel_total: u64,
    /// width x height, before background filtering.
    pub page_pixel_total: u64,
}

/// Declared colorspace families and spot-color names for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorSpaceInfo {
    pub declared_spaces: BTreeSet<String>,
    pub spot_names: BTreeSet<String>,
}

/// A document-level palette entry with its usage share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedColor {
    pub hex: String,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    /// Spot-color hint. Only set when the document declares exactly one
    /// spot name, in which case every aggregated color carries it; this
    /// is a deliberately conservative, low-confidence attribution, not
    /// ground truth. Multi-spot documents get no hint at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pms: Option<String>,
    /// Share of all colored pixels across the document, one-decimal
    /// rounded. Sums to 100 (plus or minus rounding) over the palette.
    pub appearance_percent: f32,
}

/// The document-level analysis result handed back to the request layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentPalette {
    pub declared_color_spaces: Vec<String>,
    pub detected_spot_colors: Vec<String>,
    pub colors: Vec<AggregatedColor>,
    pub total_colors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_page_dimension_check() {
        let page = RasterPage::new(2, 2, vec![Rgb::new(0, 0, 0); 4]);
        assert!(page.is_ok());

        let short = RasterPage::new(2, 2, vec![Rgb::new(0, 0, 0); 3]);
        assert!(matches!(short, Err(AnalysisError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_raw_rgb() {
        let raw = [255u8, 0, 0, 0, 255, 0];
        let page = RasterPage::from_raw_rgb(2, 1, &raw).unwrap();
        assert_eq!(page.pixels, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);

        let truncated = RasterPage::from_raw_rgb(2, 1, &raw[..5]);
        assert!(matches!(truncated, Err(AnalysisError::InvalidArgument(_))));
    }

    #[test]
    fn test_aggregated_color_serializes_without_unset_pms() {
        let color = AggregatedColor {
            hex: "#ff0000".into(),
            rgb: Rgb::new(255, 0, 0),
            cmyk: Rgb::new(255, 0, 0).to_cmyk(),
            pms: None,
            appearance_percent: 100.0,
        };
        let json = serde_json::to_value(&color).unwrap();
        assert!(json.get("pms").is_none());
        assert_eq!(json["hex"], "#ff0000");
    }
}
