//! RGB to CMYK conversion for print-facing palette output.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;
use super::round1;

/// Threshold above which the black component is treated as total
/// coverage, short-circuiting to `(0, 0, 0, 100)` before the `1 - k`
/// denominator degenerates.
const PURE_BLACK_EPSILON: f32 = 1e-9;

/// A color in CMYK space, components as percentages rounded to one
/// decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

impl Rgb {
    /// Convert to CMYK percentages.
    pub fn to_cmyk(self) -> Cmyk {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 - PURE_BLACK_EPSILON {
            return Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 100.0 };
        }

        let c = (1.0 - r - k) / (1.0 - k);
        let m = (1.0 - g - k) / (1.0 - k);
        let y = (1.0 - b - k) / (1.0 - k);

        Cmyk {
            c: round1(c * 100.0),
            m: round1(m * 100.0),
            y: round1(y * 100.0),
            k: round1(k * 100.0),
        }
    }
}
