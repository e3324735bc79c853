//! Brand reference data: the official palette and approved fonts.
//!
//! Brand specifications arrive as YAML assets maintained alongside the
//! brand guidelines. Loading validates everything up front; a malformed
//! entry rejects the whole spec rather than producing a partially
//! applied palette.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Cmyk, Rgb};
use crate::error::AnalysisError;

/// One official brand color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandPaletteEntry {
    /// Canonical lowercase `#rrggbb`.
    pub hex: String,
    pub name: String,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
}

impl BrandPaletteEntry {
    /// Build an entry from a hex string, canonicalizing and deriving the
    /// RGB/CMYK forms.
    pub fn new(hex: &str, name: &str) -> Result<Self, AnalysisError> {
        let rgb = Rgb::from_str(hex).map_err(|e| {
            AnalysisError::InvalidArgument(format!("palette entry {name:?}: {e}"))
        })?;
        Ok(Self {
            hex: rgb.to_hex(),
            name: name.to_string(),
            rgb,
            cmyk: rgb.to_cmyk(),
        })
    }
}

/// A used font family with an optional usage share, as reported by the
/// external typography subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontUsage {
    pub family: String,
    /// Weighting for scoring. Absent values weight the family at 1.0 so
    /// unweighted callers get equal-per-family scoring.
    #[serde(default)]
    pub usage_percent: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct BrandSpecFile {
    name: String,
    #[serde(default)]
    colors: Vec<BrandColorFile>,
    #[serde(default)]
    approved_fonts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BrandColorFile {
    hex: String,
    name: String,
}

/// A complete brand specification: official palette plus approved fonts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSpec {
    pub name: String,
    pub colors: Vec<BrandPaletteEntry>,
    pub approved_fonts: Vec<String>,
}

impl BrandSpec {
    /// Load and validate a brand specification from YAML.
    ///
    /// ```yaml
    /// name: Acme
    /// colors:
    ///   - { hex: "#007bc0", name: Acme Blue }
    ///   - { hex: "#e2001a", name: Acme Red }
    /// approved_fonts:
    ///   - Helvetica
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, AnalysisError> {
        let file: BrandSpecFile = serde_yaml::from_str(content)
            .map_err(|e| AnalysisError::InvalidArgument(format!("brand spec: {e}")))?;

        let mut colors = Vec::with_capacity(file.colors.len());
        for color in &file.colors {
            colors.push(BrandPaletteEntry::new(&color.hex, &color.name)?);
        }
        for family in &file.approved_fonts {
            if family.trim().is_empty() {
                return Err(AnalysisError::InvalidArgument(
                    "brand spec: empty font family name".into(),
                ));
            }
        }

        tracing::debug!(
            brand = %file.name,
            colors = colors.len(),
            fonts = file.approved_fonts.len(),
            "loaded brand spec"
        );
        Ok(Self {
            name: file.name,
            colors,
            approved_fonts: file.approved_fonts,
        })
    }
}
