//! OKLCH Color Space
//!
//! OKLCH is the cylindrical form of OKLab:
//!
//! - L: Lightness (0 = black, 1 = white; larger values are legal but out of gamut)
//! - C: Chroma (0 = gray, unbounded; ~0.4 covers sRGB)
//! - H: Hue angle in degrees, normalized into [0, 360)
//!
//! Values are immutable. Constructors normalize hue and clamp alpha so every
//! `OklchColor` in circulation satisfies those invariants.

use std::fmt;
use std::str::FromStr;

use crate::color::RgbColor;
use crate::error::Error;

/// A color in the OKLCH perceptual color space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OklchColor {
    /// Lightness (nominally 0 to 1)
    pub l: f64,
    /// Chroma (0 and up)
    pub c: f64,
    /// Hue in degrees [0, 360)
    pub h: f64,
    /// Opacity [0, 1]
    pub alpha: f64,
}

impl OklchColor {
    /// Opaque black
    pub const BLACK: Self = Self {
        l: 0.0,
        c: 0.0,
        h: 0.0,
        alpha: 1.0,
    };

    /// Create an opaque color
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self::with_alpha(l, c, h, 1.0)
    }

    /// Create a color with explicit alpha
    ///
    /// Hue is wrapped into [0, 360) and alpha is clamped into [0, 1].
    #[inline]
    pub fn with_alpha(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
            alpha: clamp_alpha(alpha),
        }
    }

    /// True when alpha is exactly 1
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Convert to 8-bit sRGB (see [`crate::convert::to_rgb`])
    #[inline]
    pub fn to_rgb(self) -> RgbColor {
        crate::convert::to_rgb(self)
    }

    /// Check whether this color maps into sRGB without clipping
    pub fn is_in_srgb_gamut(&self) -> bool {
        crate::color::Oklab::from_oklch(*self)
            .to_linear_srgb()
            .is_in_gamut()
    }

    /// Check if approximately equal to another color
    ///
    /// Hue is compared on the circle, so 359.9 and 0.0 are close.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && hue_distance(self.h, other.h) < epsilon
            && (self.alpha - other.alpha).abs() < epsilon
    }
}

impl Default for OklchColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for OklchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_oklch(*self))
    }
}

impl FromStr for OklchColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::try_parse_oklch(s)
    }
}

impl TryFrom<&str> for OklchColor {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        crate::parse::try_parse_oklch(value)
    }
}

impl From<RgbColor> for OklchColor {
    fn from(rgb: RgbColor) -> Self {
        crate::convert::to_oklch(rgb)
    }
}

/// Wrap a hue angle into [0, 360)
///
/// Never returns `-0.0` or `360.0`, so formatted output is stable.
/// Non-finite angles map to 0.
#[inline]
pub fn normalize_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let h = degrees % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h + 0.0 };
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest angular distance between two hues, in degrees
#[inline]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[inline]
pub(crate) fn clamp_alpha(alpha: f64) -> f64 {
    // NaN falls back to opaque
    if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) }
}
