//! RGB to HSV conversion.
//!
//! Hue is normalized to `[0, 1)` rather than degrees because the
//! similarity formula treats hue as a circular unit interval
//! (`min(|h1-h2|, 1-|h1-h2|)`).

use super::rgb::Rgb;

/// A color in HSV space, all components in `[0, 1]` (hue in `[0, 1)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Rgb {
    /// Convert to HSV.
    ///
    /// Achromatic colors (zero delta) get hue 0 and saturation 0, so
    /// greys compare against each other purely on value.
    pub fn to_hsv(self) -> Hsv {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else {
            let sector = if max == r {
                (g - b) / delta
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            let h = sector / 6.0;
            if h < 0.0 {
                h + 1.0
            } else {
                h
            }
        };

        Hsv { h, s, v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, what: &str) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_primaries() {
        let red = Rgb::new(255, 0, 0).to_hsv();
        assert_close(red.h, 0.0, "red hue");
        assert_close(red.s, 1.0, "red saturation");
        assert_close(red.v, 1.0, "red value");

        let green = Rgb::new(0, 255, 0).to_hsv();
        assert_close(green.h, 1.0 / 3.0, "green hue");

        let blue = Rgb::new(0, 0, 255).to_hsv();
        assert_close(blue.h, 2.0 / 3.0, "blue hue");
    }

    #[test]
    fn test_achromatic() {
        let black = Rgb::new(0, 0, 0).to_hsv();
        assert_eq!(black, Hsv { h: 0.0, s: 0.0, v: 0.0 });

        let white = Rgb::new(255, 255, 255).to_hsv();
        assert_close(white.h, 0.0, "white hue");
        assert_close(white.s, 0.0, "white saturation");
        assert_close(white.v, 1.0, "white value");

        let grey = Rgb::new(128, 128, 128).to_hsv();
        assert_close(grey.s, 0.0, "grey saturation");
        assert_close(grey.v, 128.0 / 255.0, "grey value");
    }

    #[test]
    fn test_hue_wraps_into_unit_interval() {
        // Magenta-ish colors put max == r with g < b, which produces a
        // negative sector before wrapping.
        let magenta = Rgb::new(255, 0, 255).to_hsv();
        assert_close(magenta.h, 5.0 / 6.0, "magenta hue");
        assert!(magenta.h >= 0.0 && magenta.h < 1.0);
    }

    #[test]
    fn test_mid_saturation() {
        // (128, 64, 64): max 128, min 64, delta 64
        let hsv = Rgb::new(128, 64, 64).to_hsv();
        assert_close(hsv.h, 0.0, "hue");
        assert_close(hsv.s, 0.5, "saturation");
        assert_close(hsv.v, 128.0 / 255.0, "value");
    }
}
