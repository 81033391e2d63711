//! OKLCH ↔ sRGB conversion
//!
//! Forward: OKLCH → OKLab → LMS → linear sRGB → gamma encode → 8-bit.
//! Inverse: 8-bit → gamma decode → linear sRGB → LMS → OKLab → OKLCH.
//!
//! Both directions are total. Out-of-gamut results are clipped per channel
//! when quantizing, not gamut-mapped. Alpha passes through unchanged.

use crate::color::{LinearRgb, Oklab, OklchColor, RgbColor};

/// Convert an OKLCH color to 8-bit sRGB
///
/// ```
/// use oklch_core::{OklchColor, RgbColor, convert::to_rgb};
///
/// let rgb = to_rgb(OklchColor::new(0.7, 0.1, 200.0));
/// assert_eq!(rgb, RgbColor::new(64, 177, 183));
/// ```
pub fn to_rgb(color: OklchColor) -> RgbColor {
    let [r, g, b] = Oklab::from_oklch(color).to_linear_srgb().to_rgb8();
    RgbColor::with_alpha(r, g, b, color.alpha)
}

/// Convert an 8-bit sRGB color to OKLCH
///
/// Black maps to hue 0 (atan2 of a zero vector).
pub fn to_oklch(color: RgbColor) -> OklchColor {
    let linear = LinearRgb::from_rgb8(color.r, color.g, color.b);
    Oklab::from_linear_srgb(linear).to_oklch(color.alpha)
}

/// Convert unit-range RGBA floats to OKLCH
///
/// Channels are quantized to 8 bits first, matching what a color picker hands
/// back after an edit.
pub fn unit_rgba_to_oklch(rgba: [f64; 4]) -> OklchColor {
    to_oklch(RgbColor::from_unit(rgba[0], rgba[1], rgba[2], rgba[3]))
}
