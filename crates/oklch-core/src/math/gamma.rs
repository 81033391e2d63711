//! sRGB transfer function
//!
//! This module provides:
//! - sRGB gamma encode/decode (IEC 61966-2-1 piecewise curve)
//! - 8-bit quantization of encoded values

/// Linear-segment threshold on the encoded side
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear-segment threshold on the linear-light side
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value [0,1] to linear light [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light [0,1] to an sRGB-encoded value [0,1].
/// Inputs outside [0,1] are not clamped here; negative values stay on the
/// linear segment.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Quantize an encoded value to 8 bits
///
/// Scales by 255, rounds to nearest, then clips into [0, 255].
/// NaN maps to 0.
#[inline]
pub fn quantize_u8(encoded: f64) -> u8 {
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Expand an 8-bit channel to an encoded value in [0,1]
#[inline]
pub fn expand_u8(channel: u8) -> f64 {
    channel as f64 / 255.0
}
