//! Brand compliance scoring.
//!
//! Colors and fonts are scored independently and combined into a
//! document verdict. Scoring is pure: the same inputs always produce
//! the same buckets, score and recommendation strings, and nothing here
//! holds state across calls.

pub mod colors;
pub mod fonts;

pub use colors::{color_similarity, score_colors};
pub use fonts::score_fonts;

use crate::models::{ColorVerdict, ComplianceStatus, DocumentVerdict, FontVerdict};

/// Usage-weighted score: `floor(credited / total * 100)`.
///
/// A zero total means there was nothing to judge, which is vacuously
/// compliant, not a failure.
pub(crate) fn usage_score(credited: f64, total: f64) -> u8 {
    if total <= 0.0 {
        return 100;
    }
    ((credited * 100.0 / total).floor() as u8).min(100)
}

/// Combine color and font verdicts into the document-level verdict.
///
/// The combined score is the integer average of the two sub-scores;
/// recommendations are both sub-lists concatenated with duplicates
/// removed, order preserved.
pub fn score_document(colors: ColorVerdict, fonts: FontVerdict) -> DocumentVerdict {
    let score = ((colors.score as u16 + fonts.score as u16) / 2) as u8;
    let status = ComplianceStatus::for_document(score);

    let mut recommendations: Vec<String> = Vec::new();
    for rec in colors.recommendations.iter().chain(fonts.recommendations.iter()) {
        if !recommendations.contains(rec) {
            recommendations.push(rec.clone());
        }
    }

    DocumentVerdict {
        colors,
        fonts,
        score,
        status,
        recommendations,
    }
}
