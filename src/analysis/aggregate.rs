//! Cross-page palette aggregation.
//!
//! Merges per-page cluster lists into one document-level palette. The
//! merge key is the cluster's hex string, deliberately not its float
//! RGB: grouping by the derived hex avoids floating-point equality
//! pitfalls in the merge step.

use std::collections::HashMap;

use crate::color::{round1, Rgb};
use crate::models::{AggregatedColor, ColorCluster, ColorSpaceInfo};

/// Merge per-page clusters into a document palette with usage shares.
///
/// For each unique hex across all pages the pixel counts are summed;
/// the grand total is the sum of every cluster's `pixel_count` (not the
/// per-page `colored_pixel_total`, which would double count). Output is
/// sorted by descending appearance share, ties keeping first-seen order.
///
/// The spot-color hint is attached per the single-spot heuristic: when
/// the document declares exactly one spot name, every aggregated color
/// carries it; with zero or multiple names, none do. See
/// [`AggregatedColor::pms`] for why this is a low-confidence hint.
pub fn aggregate(per_page: &[Vec<ColorCluster>], spaces: &ColorSpaceInfo) -> Vec<AggregatedColor> {
    let mut merged: Vec<(String, Rgb, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut grand_total = 0u64;

    for page in per_page {
        for cluster in page {
            grand_total += cluster.pixel_count;
            match index.get(&cluster.hex) {
                Some(&i) => merged[i].2 += cluster.pixel_count,
                None => {
                    index.insert(cluster.hex.clone(), merged.len());
                    merged.push((cluster.hex.clone(), cluster.rgb, cluster.pixel_count));
                }
            }
        }
    }

    merged.sort_by(|a, b| b.2.cmp(&a.2));

    let pms_hint = single_spot_hint(spaces);
    merged
        .into_iter()
        .map(|(hex, rgb, count)| {
            let appearance_percent = if grand_total == 0 {
                0.0
            } else {
                round1(count as f32 / grand_total as f32 * 100.0)
            };
            AggregatedColor {
                hex,
                rgb,
                cmyk: rgb.to_cmyk(),
                pms: pms_hint.clone(),
                appearance_percent,
            }
        })
        .collect()
}

fn single_spot_hint(spaces: &ColorSpaceInfo) -> Option<String> {
    if spaces.spot_names.len() == 1 {
        spaces.spot_names.iter().next().cloned()
    } else {
        None
    }
}
