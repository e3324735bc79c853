use serde::Deserialize;

use crate::error::AnalysisError;

/// Tunables for a single analysis request.
///
/// Passed explicitly into each call so the quantizer, aggregator and
/// scorer stay pure and independently testable; there is no process-wide
/// configuration state.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisOptions {
    /// Upper bound on clusters per page.
    #[serde(default = "default_max_colors")]
    pub max_colors: u32,

    /// Pixels with all three channels at or above this value are treated
    /// as near-white background and excluded from clustering.
    #[serde(default = "default_white_threshold")]
    pub white_threshold: u8,

    /// Minimum HSV similarity for a color to count as a near-brand match.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
}

fn default_max_colors() -> u32 {
    12
}

fn default_white_threshold() -> u8 {
    245
}

fn default_similarity_threshold() -> f32 {
    0.75
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
            white_threshold: default_white_threshold(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl AnalysisOptions {
    /// Reject invalid option combinations before any processing starts.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.max_colors < 1 {
            return Err(AnalysisError::InvalidArgument(format!(
                "max_colors must be at least 1, got {}",
                self.max_colors
            )));
        }
        if !self.similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.similarity_threshold)
        {
            return Err(AnalysisError::InvalidArgument(format!(
                "similarity_threshold must be within 0.0..=1.0, got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}
