//! Reference conversions via the `palette` crate
//!
//! palette implements OKLab independently, so agreement within 8-bit
//! quantization is strong evidence the coefficients and transfer functions
//! are wired up correctly.

use oklch_core::{OklchColor, RgbColor};
use palette::{FromColor, Oklch, Srgb};

/// OKLCH → 8-bit sRGB using palette (clamped into gamut)
pub fn reference_to_rgb(color: OklchColor) -> RgbColor {
    let srgb: Srgb<f64> = Srgb::from_color(Oklch::new(color.l, color.c, color.h));
    let srgb: Srgb<u8> = srgb.into_format();
    RgbColor::with_alpha(srgb.red, srgb.green, srgb.blue, color.alpha)
}

/// 8-bit sRGB → OKLCH using palette
pub fn reference_to_oklch(color: RgbColor) -> OklchColor {
    let srgb: Srgb<f64> = Srgb::new(color.r, color.g, color.b).into_format();
    let lch = Oklch::<f64>::from_color(srgb);
    OklchColor::with_alpha(
        lch.l,
        lch.chroma,
        lch.hue.into_positive_degrees(),
        color.alpha,
    )
}
