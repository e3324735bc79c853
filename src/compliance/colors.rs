//! Color compliance scoring against a brand palette.
//!
//! Each extracted color is bucketed as approved (exact hex match),
//! similar (within the HSV similarity threshold of some brand color) or
//! non-compliant. The score weights buckets by usage share: exact
//! matches earn full credit, similar matches 70%.

use std::str::FromStr;

use crate::color::{Hsv, Rgb};
use crate::error::AnalysisError;
use crate::models::{
    AggregatedColor, ApprovedColor, BrandPaletteEntry, ColorVerdict, ComplianceStatus,
    NonCompliantColor, SimilarColor,
};

use super::usage_score;

const HUE_WEIGHT: f32 = 0.6;
const SATURATION_WEIGHT: f32 = 0.3;
const VALUE_WEIGHT: f32 = 0.1;

/// Credit granted to similar (non-exact) matches.
const SIMILAR_CREDIT: f64 = 0.7;

/// Weighted HSV similarity in `[0, 1]`.
///
/// Hue is circular, so its difference wraps: `min(|h1-h2|, 1-|h1-h2|)`.
/// Hue dominates the weighting because a hue shift reads as a different
/// brand color far sooner than a saturation or value shift does.
pub fn color_similarity(a: Hsv, b: Hsv) -> f32 {
    let raw = (a.h - b.h).abs();
    let h_diff = raw.min(1.0 - raw);
    let s_diff = (a.s - b.s).abs();
    let v_diff = (a.v - b.v).abs();
    (1.0 - (HUE_WEIGHT * h_diff + SATURATION_WEIGHT * s_diff + VALUE_WEIGHT * v_diff))
        .clamp(0.0, 1.0)
}

struct Candidate {
    hex: String,
    name: String,
    hsv: Hsv,
}

/// Score an extracted palette against the brand palette.
///
/// # Errors
///
/// [`AnalysisError::InvalidArgument`] when any palette entry or
/// extracted color carries an unparsable hex; rejected before any
/// bucketing, never partially applied.
pub fn score_colors(
    extracted: &[AggregatedColor],
    palette: &[BrandPaletteEntry],
    similarity_threshold: f32,
) -> Result<ColorVerdict, AnalysisError> {
    let candidates = palette
        .iter()
        .map(|entry| {
            let rgb = Rgb::from_str(&entry.hex).map_err(|e| {
                AnalysisError::InvalidArgument(format!("palette entry {:?}: {e}", entry.name))
            })?;
            Ok(Candidate {
                hex: rgb.to_hex(),
                name: entry.name.clone(),
                hsv: rgb.to_hsv(),
            })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    let mut approved = Vec::new();
    let mut similar = Vec::new();
    let mut non_compliant = Vec::new();
    let mut approved_usage = 0f64;
    let mut similar_usage = 0f64;
    let mut total_usage = 0f64;

    for color in extracted {
        let rgb = Rgb::from_str(&color.hex).map_err(|e| {
            AnalysisError::InvalidArgument(format!("extracted color {:?}: {e}", color.hex))
        })?;
        let hex = rgb.to_hex();
        let usage = color.appearance_percent;
        total_usage += usage as f64;

        if let Some(entry) = candidates.iter().find(|c| c.hex == hex) {
            approved_usage += usage as f64;
            approved.push(ApprovedColor {
                hex,
                brand_name: entry.name.clone(),
                usage_percent: usage,
            });
            continue;
        }

        // Similarity is only attempted when there is no exact match.
        // Strict > keeps the first-seen candidate on ties.
        let hsv = rgb.to_hsv();
        let mut best: Option<&Candidate> = None;
        let mut best_similarity = -1.0f32;
        for candidate in &candidates {
            let similarity = color_similarity(hsv, candidate.hsv);
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some(candidate);
            }
        }

        match best {
            Some(entry) if best_similarity >= similarity_threshold => {
                similar_usage += usage as f64;
                similar.push(SimilarColor {
                    hex,
                    matched_hex: entry.hex.clone(),
                    matched_name: entry.name.clone(),
                    similarity: best_similarity,
                    usage_percent: usage,
                });
            }
            _ => non_compliant.push(NonCompliantColor {
                hex,
                usage_percent: usage,
            }),
        }
    }

    let score = usage_score(approved_usage + similar_usage * SIMILAR_CREDIT, total_usage);
    let status = ComplianceStatus::for_dimension(score);
    let recommendations = recommendations(&similar, &non_compliant);

    tracing::debug!(
        approved = approved.len(),
        similar = similar.len(),
        non_compliant = non_compliant.len(),
        score,
        "scored colors"
    );
    Ok(ColorVerdict {
        approved,
        similar,
        non_compliant,
        score,
        status,
        recommendations,
    })
}

/// Deterministic template strings driven by bucket membership.
fn recommendations(similar: &[SimilarColor], non_compliant: &[NonCompliantColor]) -> Vec<String> {
    let mut recs = Vec::new();
    if !non_compliant.is_empty() {
        let hexes: Vec<&str> = non_compliant.iter().map(|c| c.hex.as_str()).collect();
        recs.push(format!(
            "Replace non-brand colors {} with the closest approved palette entries.",
            hexes.join(", ")
        ));
    }
    if !similar.is_empty() {
        let pairs: Vec<String> = similar
            .iter()
            .map(|c| format!("{} (near {})", c.hex, c.matched_name))
            .collect();
        recs.push(format!(
            "Adjust near-brand colors {} to their exact brand values.",
            pairs.join(", ")
        ));
    }
    if recs.is_empty() {
        recs.push("All extracted colors match the approved brand palette.".to_string());
    }
    recs
}
