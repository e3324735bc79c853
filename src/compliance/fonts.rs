//! Font compliance scoring against an approved family list.
//!
//! Matching is substring containment, not distance: a used family is
//! approved when any approved family name appears in it
//! case-insensitively, so `Helvetica-Bold` and `Helvetica Neue` both
//! match an approved `Helvetica`.

use crate::models::{ApprovedFont, ComplianceStatus, FontUsage, FontVerdict, NonCompliantFont};

use super::usage_score;

/// Score used font families against the approved list.
///
/// Weights are the reported usage shares where present; a missing
/// `usage_percent` weights that family at 1.0, so unweighted callers
/// get equal-per-family scoring. Empty approved names are ignored
/// rather than matching everything.
pub fn score_fonts(used: &[FontUsage], approved: &[String]) -> FontVerdict {
    let families: Vec<&String> = approved
        .iter()
        .filter(|name| !name.trim().is_empty())
        .collect();

    let mut ok = Vec::new();
    let mut bad = Vec::new();
    let mut approved_weight = 0f64;
    let mut total_weight = 0f64;

    for font in used {
        let weight = font.usage_percent.unwrap_or(1.0);
        total_weight += weight as f64;

        let needle = font.family.to_lowercase();
        match families
            .iter()
            .find(|family| needle.contains(&family.to_lowercase()))
        {
            Some(family) => {
                approved_weight += weight as f64;
                ok.push(ApprovedFont {
                    family: font.family.clone(),
                    matched_family: (*family).clone(),
                    usage_weight: weight,
                });
            }
            None => bad.push(NonCompliantFont {
                family: font.family.clone(),
                usage_weight: weight,
            }),
        }
    }

    let score = usage_score(approved_weight, total_weight);
    let status = ComplianceStatus::for_dimension(score);
    let recommendations = recommendations(&bad);

    FontVerdict {
        approved: ok,
        non_compliant: bad,
        score,
        status,
        recommendations,
    }
}

fn recommendations(non_compliant: &[NonCompliantFont]) -> Vec<String> {
    if non_compliant.is_empty() {
        vec!["All fonts are from the approved brand set.".to_string()]
    } else {
        let families: Vec<&str> = non_compliant.iter().map(|f| f.family.as_str()).collect();
        vec![format!(
            "Replace non-approved fonts {} with brand typefaces.",
            families.join(", ")
        )]
    }
}
