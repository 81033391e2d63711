//! OKLab Color Space
//!
//! OKLab is a perceptually uniform Cartesian space built on an LMS cone
//! response with cube-root non-linearity.
//!
//! - L: Lightness (0 = black, 1 = white)
//! - a: Green-red axis (negative = green, positive = red)
//! - b: Blue-yellow axis (negative = blue, positive = yellow)

use crate::color::{LinearRgb, OklchColor};
use crate::math::{LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, OKLAB_TO_LMS};

/// OKLab color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Lightness (0 to 1)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Oklab {
    /// Create a new OKLab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Polar → Cartesian; alpha is dropped
    pub fn from_oklch(lch: OklchColor) -> Self {
        let h = lch.h.to_radians();
        Self {
            l: lch.l,
            a: lch.c * h.cos(),
            b: lch.c * h.sin(),
        }
    }

    /// Cartesian → polar with the given alpha
    pub fn to_oklch(&self, alpha: f64) -> OklchColor {
        OklchColor::with_alpha(self.l, self.chroma(), self.hue_degrees(), alpha)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Get hue angle in degrees (0-360)
    ///
    /// atan2(0, 0) is 0, so neutral colors get hue 0.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Convert to linear sRGB (unclamped)
    pub fn to_linear_srgb(&self) -> LinearRgb {
        let [l_, m_, s_] = OKLAB_TO_LMS.multiply_vec([self.l, self.a, self.b]);
        let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
        LinearRgb::from_array(LMS_TO_LINEAR_SRGB.multiply_vec(lms))
    }

    /// Convert from linear sRGB
    ///
    /// Uses the real cube root, so slightly negative LMS (from out-of-gamut
    /// input) stays negative instead of turning into NaN.
    pub fn from_linear_srgb(rgb: LinearRgb) -> Self {
        let [l, m, s] = LINEAR_SRGB_TO_LMS.multiply_vec(rgb.to_array());
        let [l, a, b] = LMS_TO_OKLAB.multiply_vec([l.cbrt(), m.cbrt(), s.cbrt()]);
        Self { l, a, b }
    }

    /// Euclidean distance in OKLab (ΔE_OK)
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Check if approximately equal to another OKLab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<OklchColor> for Oklab {
    fn from(lch: OklchColor) -> Self {
        Self::from_oklch(lch)
    }
}
