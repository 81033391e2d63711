//! RGB Color Primitives
//!
//! - [`RgbColor`]: quantized 8-bit sRGB plus alpha, the display-side value
//! - [`LinearRgb`]: unclamped linear-light sRGB, the intermediate between
//!   OKLab and gamma encoding

use crate::color::{OklchColor, oklch::clamp_alpha};
use crate::math::{expand_u8, quantize_u8, srgb_gamma_decode, srgb_gamma_encode};

/// Gamut tolerance in linear light
const GAMUT_EPSILON: f64 = 1e-9;

/// 8-bit sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity [0, 1]
    pub alpha: f64,
}

impl RgbColor {
    /// Create an opaque color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Create a color with explicit alpha, clamped into [0, 1]
    #[inline]
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Create from unit-range floats as a color picker reports them
    ///
    /// Each channel is `round(x * 255)` clipped into [0, 255].
    pub fn from_unit(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::with_alpha(quantize_u8(r), quantize_u8(g), quantize_u8(b), alpha)
    }

    /// Channels and alpha as unit-range floats `[r, g, b, alpha]`
    pub fn to_unit(&self) -> [f64; 4] {
        [
            expand_u8(self.r),
            expand_u8(self.g),
            expand_u8(self.b),
            self.alpha,
        ]
    }

    /// Channels as an array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// True when alpha is exactly 1
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Convert to OKLCH (see [`crate::convert::to_oklch`])
    #[inline]
    pub fn to_oklch(self) -> OklchColor {
        crate::convert::to_oklch(self)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r,
                self.g,
                self.b,
                quantize_u8(self.alpha)
            )
        }
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<OklchColor> for RgbColor {
    fn from(oklch: OklchColor) -> Self {
        crate::convert::to_rgb(oklch)
    }
}

/// Linear RGB color value (not gamma-encoded, not clamped)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Create a new linear RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from an array [r, g, b]
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an array [r, g, b]
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Decode 8-bit sRGB channels to linear light
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb_gamma_decode(expand_u8(r)),
            g: srgb_gamma_decode(expand_u8(g)),
            b: srgb_gamma_decode(expand_u8(b)),
        }
    }

    /// Gamma-encode and quantize to 8 bits, clipping out-of-gamut channels
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            quantize_u8(srgb_gamma_encode(self.r)),
            quantize_u8(srgb_gamma_encode(self.g)),
            quantize_u8(srgb_gamma_encode(self.b)),
        ]
    }

    /// Check if all components are in [0, 1]
    pub fn is_in_gamut(&self) -> bool {
        let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
        range.contains(&self.r) && range.contains(&self.g) && range.contains(&self.b)
    }
}
