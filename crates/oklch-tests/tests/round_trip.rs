//! Round-trip Tests
//!
//! sRGB → OKLCH → sRGB must be the identity on every 8-bit color.
//! OKLCH → sRGB → OKLCH can only come back to within 8-bit quantization.

use oklch_core::{OklchColor, RgbColor, format_oklch, parse_oklch, to_oklch, to_rgb};
use oklch_tests::{RoundTripStats, SamplePattern, generate_oklch, sweep_rgb_cube};

#[test]
fn test_exhaustive_rgb_cube() {
    let sweep = sweep_rgb_cube(1);
    eprintln!(
        "checked {} colors, {} mismatches",
        sweep.checked,
        sweep.mismatches.len()
    );
    assert_eq!(sweep.checked, 256 * 256 * 256);
    assert!(
        sweep.mismatches.is_empty(),
        "first mismatches: {:?}",
        &sweep.mismatches[..sweep.mismatches.len().min(8)]
    );
}

#[test]
fn test_oklch_round_trip_random() {
    let samples: Vec<_> = generate_oklch(SamplePattern::Random(2024), 20_000)
        .into_iter()
        .filter(|c| c.l >= 0.25)
        .collect();
    let stats = RoundTripStats::measure(&samples, 0.12);

    eprintln!("{:?}", stats);
    assert!(stats.count > 1000, "too few in-gamut samples: {:?}", stats);
    assert!(stats.max_dl < 0.01, "{:?}", stats);
    assert!(stats.max_dc < 0.01, "{:?}", stats);
    assert!(stats.max_dh < 1.0, "{:?}", stats);
}

#[test]
fn test_alpha_survives_both_directions() {
    for alpha in [0.0, 0.25, 0.5, 1.0] {
        let oklch = OklchColor::with_alpha(0.6, 0.1, 250.0, alpha);
        let rgb = to_rgb(oklch);
        assert_eq!(rgb.alpha, alpha);
        assert_eq!(to_oklch(rgb).alpha, alpha);
    }
}

#[test]
fn test_format_parse_is_idempotent() {
    for color in generate_oklch(SamplePattern::Random(77), 2000) {
        let once = format_oklch(color);
        let parsed = parse_oklch(&once).unwrap_or_else(|| panic!("cannot re-parse {once}"));
        let twice = format_oklch(parsed);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_canonical_text_of_rgb_is_stable() {
    // Colors whose canonical text converts back to the same channels.
    // This does not hold everywhere: 3-digit text can move a channel.
    for rgb in [
        RgbColor::new(64, 177, 183),
        RgbColor::new(255, 0, 0),
        RgbColor::new(12, 34, 56),
        RgbColor::with_alpha(64, 177, 183, 0.5),
    ] {
        let text = format_oklch(to_oklch(rgb));
        let again = to_rgb(parse_oklch(&text).unwrap());
        assert_eq!(again, rgb, "{}", text);
        assert_eq!(format_oklch(to_oklch(again)), text, "{:?}", rgb);
    }
}

#[test]
fn test_out_of_gamut_clamps() {
    for color in generate_oklch(SamplePattern::OutOfGamut, 5000) {
        // Channels are u8, so reaching here at all means no overflow
        let rgb = to_rgb(color);
        assert_eq!(rgb.alpha, color.alpha);
    }
    assert_eq!(to_rgb(OklchColor::new(1.0, 0.5, 30.0)), RgbColor::new(255, 0, 0));
    assert_eq!(to_rgb(OklchColor::new(5.0, 0.0, 0.0)), RgbColor::new(255, 255, 255));
}
