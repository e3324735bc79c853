//! Per-page color quantization.
//!
//! Filters near-white background pixels, then reduces the remainder to
//! a bounded set of representative colors with pixel counts. The
//! cluster budget scales with how much colored content the page
//! actually has, so a sparse letterhead gets 2 clusters while a dense
//! infographic gets up to `max_colors`.

use std::collections::HashMap;

use crate::analysis::kmeans::{self, CLUSTER_SEED};
use crate::color::Rgb;
use crate::error::AnalysisError;
use crate::models::ColorCluster;

/// Colored-pixel mass per 3-cluster step in the budget formula.
const PIXELS_PER_CLUSTER_STEP: f64 = 15_000.0;
const CLUSTERS_PER_STEP: u32 = 3;
const MIN_CLUSTERS: u32 = 2;

/// Data-dependent cluster budget:
/// `min(max_colors, max(2, round(sqrt(colored / 15000)) * 3))`.
///
/// Sparse colored regions need few clusters; dense, colorful pages need
/// more, capped by the caller's `max_colors`.
pub fn cluster_count(colored_pixels: u64, max_colors: u32) -> u32 {
    let steps = (colored_pixels as f64 / PIXELS_PER_CLUSTER_STEP).sqrt().round() as u32;
    (steps * CLUSTERS_PER_STEP).max(MIN_CLUSTERS).min(max_colors)
}

/// Cluster one page's pixels into representative colors.
///
/// Pixels with all three channels at or above `white_threshold` are
/// treated as background and excluded. A page with no colored pixels
/// yields an empty list, which is a valid outcome and not an error.
///
/// Output is ordered by descending `pixel_count`; ties keep center
/// order (stable, not re-sorted by value).
///
/// # Errors
///
/// [`AnalysisError::InvalidArgument`] for `max_colors < 1`;
/// [`AnalysisError::ClusteringFailed`] if the underlying clustering
/// errors, which callers recover by treating the page as contributing
/// no clusters.
pub fn quantize(
    pixels: &[Rgb],
    max_colors: u32,
    white_threshold: u8,
) -> Result<Vec<ColorCluster>, AnalysisError> {
    if max_colors < 1 {
        return Err(AnalysisError::InvalidArgument(format!(
            "max_colors must be at least 1, got {max_colors}"
        )));
    }

    let page_pixel_total = pixels.len() as u64;
    let colored: Vec<Rgb> = pixels
        .iter()
        .copied()
        .filter(|p| !is_near_white(*p, white_threshold))
        .collect();
    if colored.is_empty() {
        return Ok(Vec::new());
    }

    let colored_pixel_total = colored.len() as u64;
    let n = cluster_count(colored_pixel_total, max_colors) as usize;

    let assemble = |rgb: Rgb, pixel_count: u64| ColorCluster {
        hex: rgb.to_hex(),
        rgb,
        pixel_count,
        colored_pixel_total,
        page_pixel_total,
    };

    let mut clusters: Vec<ColorCluster> = match distinct_counts(&colored, n) {
        // The page has no more distinct colors than the cluster budget:
        // every distinct color is its own exact cluster.
        Some(distinct) => distinct
            .into_iter()
            .map(|(rgb, count)| assemble(rgb, count))
            .collect(),
        None => {
            let points: Vec<[f32; 3]> = colored
                .iter()
                .map(|p| [p.r as f32, p.g as f32, p.b as f32])
                .collect();
            let centers = kmeans::cluster(&points, n, CLUSTER_SEED)
                .map_err(AnalysisError::ClusteringFailed)?;
            centers
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(center, count)| assemble(Rgb::from_centroid(center), count))
                .collect()
        }
    };

    clusters.sort_by(|a, b| b.pixel_count.cmp(&a.pixel_count));
    tracing::debug!(
        clusters = clusters.len(),
        colored = colored_pixel_total,
        total = page_pixel_total,
        "quantized page"
    );
    Ok(clusters)
}

#[inline]
fn is_near_white(p: Rgb, threshold: u8) -> bool {
    p.r >= threshold && p.g >= threshold && p.b >= threshold
}

/// Count distinct colors in first-seen order, giving up with `None` as
/// soon as more than `limit` distinct colors appear.
fn distinct_counts(pixels: &[Rgb], limit: usize) -> Option<Vec<(Rgb, u64)>> {
    let mut index: HashMap<Rgb, usize> = HashMap::new();
    let mut out: Vec<(Rgb, u64)> = Vec::new();
    for &p in pixels {
        match index.get(&p) {
            Some(&i) => out[i].1 += 1,
            None => {
                if out.len() == limit {
                    return None;
                }
                index.insert(p, out.len());
                out.push((p, 1));
            }
        }
    }
    Some(out)
}
