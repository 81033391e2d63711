//! Canonical `oklch()` text
//!
//! Precision is fixed so identical colors always produce identical text:
//! lightness and chroma to 3 places, hue to 1, alpha to 2. The alpha clause
//! appears only for translucent colors and `%` is never emitted.

use std::fmt::Write;

use crate::color::OklchColor;

/// Fractional digits for lightness and chroma
pub const LC_PRECISION: usize = 3;
/// Fractional digits for hue
pub const HUE_PRECISION: usize = 1;
/// Fractional digits for alpha
pub const ALPHA_PRECISION: usize = 2;

/// Render a color as a canonical `oklch()` literal
///
/// Every component is rounded half away from zero to its precision before
/// it is written. The alpha clause is left out when the rounded alpha is 1,
/// so 0.996 is written as opaque.
///
/// ```
/// use oklch_core::{OklchColor, format::format_oklch};
///
/// assert_eq!(format_oklch(OklchColor::new(0.7, 0.1, 200.0)), "oklch(0.700 0.100 200.0)");
/// assert_eq!(
///     format_oklch(OklchColor::with_alpha(0.7, 0.1, 200.0, 0.5)),
///     "oklch(0.700 0.100 200.0 / 0.50)"
/// );
/// ```
pub fn format_oklch(color: OklchColor) -> String {
    let mut out = String::with_capacity(32);
    out.push_str("oklch(");
    push_fixed(&mut out, round_to(color.l, LC_PRECISION), LC_PRECISION);
    out.push(' ');
    push_fixed(&mut out, round_to(color.c, LC_PRECISION), LC_PRECISION);
    out.push(' ');
    // A hue that rounds up to 360 is written as 0
    let hue = round_to(color.h, HUE_PRECISION);
    push_fixed(&mut out, if hue >= 360.0 { 0.0 } else { hue }, HUE_PRECISION);
    let alpha = round_to(color.alpha, ALPHA_PRECISION);
    if alpha < 1.0 {
        out.push_str(" / ");
        push_fixed(&mut out, alpha, ALPHA_PRECISION);
    }
    out.push(')');
    out
}

fn round_to(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // Only values far past 2^53 overflow, and those have no fraction left
    if scaled.is_finite() { scaled.round() / scale } else { value }
}

/// Append `value` with `digits` fractional digits, dropping the sign of zero
fn push_fixed(out: &mut String, value: f64, digits: usize) {
    let start = out.len();
    // Writing to a String cannot fail
    let _ = write!(out, "{:.*}", digits, value);
    if out[start..].starts_with('-') && out[start + 1..].bytes().all(|b| b == b'0' || b == b'.') {
        out.remove(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_oklch;

    #[test]
    fn test_opaque_omits_alpha() {
        let c = OklchColor::new(0.7, 0.1, 200.0);
        assert_eq!(format_oklch(c), "oklch(0.700 0.100 200.0)");
        assert_eq!(c.to_string(), "oklch(0.700 0.100 200.0)");
    }

    #[test]
    fn test_translucent_emits_alpha() {
        let c = OklchColor::with_alpha(0.7, 0.1, 200.0, 0.5);
        assert_eq!(format_oklch(c), "oklch(0.700 0.100 200.0 / 0.50)");
        let c = OklchColor::with_alpha(0.7, 0.1, 200.0, 0.0);
        assert_eq!(format_oklch(c), "oklch(0.700 0.100 200.0 / 0.00)");
    }

    #[test]
    fn test_explicit_full_alpha_canonicalizes() {
        let c = parse_oklch("oklch(0.7 0.1 200 / 1.00)").unwrap();
        assert_eq!(format_oklch(c), "oklch(0.700 0.100 200.0)");
        let c = parse_oklch("oklch(0.7 0.1 200 / 100%)").unwrap();
        assert_eq!(format_oklch(c), "oklch(0.700 0.100 200.0)");
    }

    #[test]
    fn test_percent_not_restored() {
        let c = parse_oklch("oklch(70% 0.1 200deg / 50%)").unwrap();
        assert_eq!(format_oklch(c), "oklch(0.700 0.100 200.0 / 0.50)");
    }

    #[test]
    fn test_no_negative_zero() {
        let c = OklchColor {
            l: -0.0,
            c: -0.0001,
            h: 0.0,
            alpha: 1.0,
        };
        assert_eq!(format_oklch(c), "oklch(0.000 0.000 0.0)");

        // Real negatives keep their sign
        let c = OklchColor {
            l: -0.25,
            ..OklchColor::BLACK
        };
        assert_eq!(format_oklch(c), "oklch(-0.250 0.000 0.0)");
    }

    #[test]
    fn test_parse_format_idempotent() {
        let samples = [
            OklchColor::new(0.7, 0.1, 200.0),
            OklchColor::with_alpha(0.123, 0.321, 359.9, 0.42),
            OklchColor::new(1.0, 0.0, 0.0),
            OklchColor::with_alpha(0.5, 0.37, 12.3, 0.05),
        ];
        for x in samples {
            let text = format_oklch(x);
            let back = parse_oklch(&text).unwrap();
            assert!(x.approx_eq(&back, 1e-9), "{} -> {:?}", text, back);
            assert_eq!(format_oklch(back), text);
        }
    }

    #[test]
    fn test_rounding_edges_stay_canonical() {
        let c = OklchColor::new(0.5, 0.1, 359.97);
        assert_eq!(format_oklch(c), "oklch(0.500 0.100 0.0)");

        let c = OklchColor::with_alpha(0.5, 0.1, 10.0, 0.996);
        assert_eq!(format_oklch(c), "oklch(0.500 0.100 10.0)");

        let c = OklchColor::with_alpha(0.5, 0.1, 10.0, 0.994);
        assert_eq!(format_oklch(c), "oklch(0.500 0.100 10.0 / 0.99)");
    }

    #[test]
    fn test_huge_values_reparse() {
        let c = OklchColor::new(1e306, 0.1, 10.0);
        let text = format_oklch(c);
        assert!(!text.contains("inf"), "{}", text);
        assert_eq!(parse_oklch(&text).unwrap().l, 1e306);
    }

    #[test]
    fn test_halves_round_the_same_way() {
        // All four are exact binary halves at their precision
        let c = OklchColor::with_alpha(0.0625, 0.1875, 0.25, 0.125);
        assert_eq!(format_oklch(c), "oklch(0.063 0.188 0.3 / 0.13)");

        let c = OklchColor::new(0.1875, 0.0625, 12.75);
        assert_eq!(format_oklch(c), "oklch(0.188 0.063 12.8)");
    }
}
