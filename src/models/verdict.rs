//! Compliance verdict model: match buckets, scores and statuses.

use serde::{Deserialize, Serialize};

/// Compliance level for a score.
///
/// Color and font sub-scores use the three-level mapping
/// ([`ComplianceStatus::for_dimension`]); the combined document verdict
/// uses the four-level mapping ([`ComplianceStatus::for_document`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    MostlyCompliant,
    PartiallyCompliant,
    NeedsImprovement,
    NonCompliant,
}

impl ComplianceStatus {
    /// Status thresholds for a single scoring dimension (colors, fonts).
    pub fn for_dimension(score: u8) -> Self {
        if score >= 90 {
            Self::Compliant
        } else if score >= 70 {
            Self::MostlyCompliant
        } else {
            Self::NeedsImprovement
        }
    }

    /// Status thresholds for the combined document verdict.
    pub fn for_document(score: u8) -> Self {
        if score >= 90 {
            Self::Compliant
        } else if score >= 70 {
            Self::MostlyCompliant
        } else if score >= 50 {
            Self::PartiallyCompliant
        } else {
            Self::NonCompliant
        }
    }
}

/// An extracted color that matches a brand color exactly (by hex).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovedColor {
    pub hex: String,
    pub brand_name: String,
    pub usage_percent: f32,
}

/// An extracted color within the similarity threshold of a brand color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarColor {
    pub hex: String,
    pub matched_hex: String,
    pub matched_name: String,
    pub similarity: f32,
    pub usage_percent: f32,
}

/// An extracted color with no acceptable brand match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonCompliantColor {
    pub hex: String,
    pub usage_percent: f32,
}

/// Color-dimension compliance verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorVerdict {
    #[serde(rename = "approved_colors")]
    pub approved: Vec<ApprovedColor>,
    #[serde(rename = "similar_colors")]
    pub similar: Vec<SimilarColor>,
    #[serde(rename = "non_compliant_colors")]
    pub non_compliant: Vec<NonCompliantColor>,
    pub score: u8,
    pub status: ComplianceStatus,
    pub recommendations: Vec<String>,
}

/// A used font family matched against the approved list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovedFont {
    pub family: String,
    pub matched_family: String,
    pub usage_weight: f32,
}

/// A used font family with no approved match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonCompliantFont {
    pub family: String,
    pub usage_weight: f32,
}

/// Font-dimension compliance verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontVerdict {
    #[serde(rename = "approved_fonts")]
    pub approved: Vec<ApprovedFont>,
    #[serde(rename = "non_compliant_fonts")]
    pub non_compliant: Vec<NonCompliantFont>,
    pub score: u8,
    pub status: ComplianceStatus,
    pub recommendations: Vec<String>,
}

/// Combined document verdict: integer average of the color and font
/// sub-scores, with both sub-verdicts attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentVerdict {
    pub colors: ColorVerdict,
    pub fonts: FontVerdict,
    pub score: u8,
    pub status: ComplianceStatus,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_thresholds() {
        assert_eq!(ComplianceStatus::for_dimension(100), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::for_dimension(90), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::for_dimension(89), ComplianceStatus::MostlyCompliant);
        assert_eq!(ComplianceStatus::for_dimension(70), ComplianceStatus::MostlyCompliant);
        assert_eq!(ComplianceStatus::for_dimension(69), ComplianceStatus::NeedsImprovement);
        assert_eq!(ComplianceStatus::for_dimension(0), ComplianceStatus::NeedsImprovement);
    }

    #[test]
    fn test_document_thresholds() {
        assert_eq!(ComplianceStatus::for_document(90), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::for_document(89), ComplianceStatus::MostlyCompliant);
        assert_eq!(ComplianceStatus::for_document(70), ComplianceStatus::MostlyCompliant);
        assert_eq!(ComplianceStatus::for_document(69), ComplianceStatus::PartiallyCompliant);
        assert_eq!(ComplianceStatus::for_document(50), ComplianceStatus::PartiallyCompliant);
        assert_eq!(ComplianceStatus::for_document(49), ComplianceStatus::NonCompliant);
        assert_eq!(ComplianceStatus::for_document(0), ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ComplianceStatus::MostlyCompliant).unwrap();
        assert_eq!(json, "\"mostly_compliant\"");
        let json = serde_json::to_string(&ComplianceStatus::NeedsImprovement).unwrap();
        assert_eq!(json, "\"needs_improvement\"");
    }
}
