//! palette Parity Tests
//!
//! palette carries its own OKLab implementation. Agreement within one 8-bit
//! step forward, and within 1e-3 in lightness and chroma backward, is what
//! an independent implementation of the same published coefficients gives.

use oklch_core::color::hue_distance;
use oklch_core::{RgbColor, to_oklch};
use oklch_tests::patterns::generate_rgb;
use oklch_tests::reference::reference_to_oklch;
use oklch_tests::{SamplePattern, forward_parity, generate_oklch};

#[test]
fn test_forward_parity_grid() {
    let samples = generate_oklch(SamplePattern::Grid, 4096);
    let result = forward_parity("grid", &samples, 1);
    eprintln!("{}", result);
    assert!(result.delta_e.count > 0, "grid has no in-gamut samples");
    assert!(result.passed, "{}", result);
    assert!(result.delta_e.is_good(), "{:?}", result.delta_e);
}

#[test]
fn test_forward_parity_random() {
    for seed in [1, 42, 0xdead_beef] {
        let samples = generate_oklch(SamplePattern::Random(seed), 2000);
        let result = forward_parity(format!("random/{seed:#x}"), &samples, 1);
        eprintln!("{}", result);
        assert!(result.passed, "{}", result);
    }
}

#[test]
fn test_forward_parity_hue_ring() {
    let samples = generate_oklch(SamplePattern::HueRing, 360);
    let result = forward_parity("hue ring", &samples, 1);
    eprintln!("{}", result);
    assert!(result.passed, "{}", result);
    assert!(result.delta_e.is_excellent(), "{:?}", result.delta_e);
}

#[test]
fn test_forward_parity_grays_exact() {
    let samples = generate_oklch(SamplePattern::Grays, 101);
    let result = forward_parity("grays", &samples, 1);
    eprintln!("{}", result);
    assert_eq!(result.skipped, 0);
    assert!(result.passed, "{}", result);
}

#[test]
fn test_reverse_parity() {
    eprintln!("\n=== sRGB → OKLCH against palette ===");

    let mut samples = generate_rgb(SamplePattern::Random(9), 5000);
    samples.extend(generate_rgb(SamplePattern::Primaries, 0));
    samples.extend(generate_rgb(SamplePattern::Grays, 0));

    let mut worst_l = 0.0f64;
    let mut worst_c = 0.0f64;
    let mut worst_h = 0.0f64;

    for rgb in &samples {
        let ours = to_oklch(*rgb);
        let theirs = reference_to_oklch(*rgb);

        worst_l = worst_l.max((ours.l - theirs.l).abs());
        worst_c = worst_c.max((ours.c - theirs.c).abs());
        assert!(
            (ours.l - theirs.l).abs() < 1e-3 && (ours.c - theirs.c).abs() < 1e-3,
            "{:?}: ours {:?}, palette {:?}",
            rgb,
            ours,
            theirs
        );

        // Hue is meaningless for near-neutral colors
        if ours.c > 0.02 {
            let dh = hue_distance(ours.h, theirs.h);
            worst_h = worst_h.max(dh);
            assert!(dh < 0.5, "{:?}: ours {:?}, palette {:?}", rgb, ours, theirs);
        }
    }

    eprintln!(
        "{} samples: max ΔL {:.2e}, max ΔC {:.2e}, max ΔH {:.2e}°",
        samples.len(),
        worst_l,
        worst_c,
        worst_h
    );
}

#[test]
fn test_primaries_match_palette() {
    for rgb in generate_rgb(SamplePattern::Primaries, 0) {
        let oklch = to_oklch(rgb);
        let back = oklch_tests::reference::reference_to_rgb(oklch);
        assert_eq!(back, RgbColor::new(rgb.r, rgb.g, rgb.b), "{:?}", oklch);
    }
}
