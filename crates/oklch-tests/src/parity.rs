//! Parity testing framework
//!
//! Compares oklch-core output against `palette` and against itself across
//! the full 8-bit cube.

use std::fmt;

use oklch_core::{OklchColor, RgbColor, to_oklch, to_rgb};
use rayon::prelude::*;

use crate::accuracy::{DeltaEStats, compare_rgb};
use crate::reference::reference_to_rgb;

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// ΔE_OK statistics
    pub delta_e: DeltaEStats,
    /// Samples left out because they are outside sRGB
    pub skipped: usize,
    /// Whether the test passed
    pub passed: bool,
}

impl ParityResult {
    /// Check if this result indicates exact match
    pub fn is_exact(&self) -> bool {
        self.delta_e.max_channel_diff == 0
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} samples, {} skipped, ΔE_OK mean {:.5} max {:.5}, max channel diff {})",
            self.test_name,
            if self.passed { "PASS" } else { "FAIL" },
            self.delta_e.count,
            self.skipped,
            self.delta_e.mean,
            self.delta_e.max,
            self.delta_e.max_channel_diff,
        )
    }
}

/// OKLCH → sRGB against palette for the in-gamut part of `samples`
///
/// Passes when no channel differs by more than `max_channel_diff`.
pub fn forward_parity(
    name: impl Into<String>,
    samples: &[OklchColor],
    max_channel_diff: u8,
) -> ParityResult {
    let in_gamut: Vec<_> = samples.iter().copied().filter(OklchColor::is_in_srgb_gamut).collect();
    let reference: Vec<_> = in_gamut.iter().copied().map(reference_to_rgb).collect();
    let ours: Vec<_> = in_gamut.iter().copied().map(to_rgb).collect();
    let delta_e = compare_rgb(&reference, &ours);

    ParityResult {
        test_name: name.into(),
        passed: delta_e.max_channel_diff <= max_channel_diff,
        skipped: samples.len() - in_gamut.len(),
        delta_e,
    }
}

/// Outcome of an sRGB → OKLCH → sRGB sweep
#[derive(Debug, Clone, Default)]
pub struct CubeSweep {
    pub checked: usize,
    /// Colors that did not come back unchanged
    pub mismatches: Vec<RgbColor>,
}

/// Round-trip every `step`-th value of the 8-bit cube through OKLCH
///
/// Runs in parallel over the red axis. `step = 1` is exhaustive.
pub fn sweep_rgb_cube(step: u8) -> CubeSweep {
    let step = step.max(1) as usize;
    let values: Vec<u8> = (0..=255u8).step_by(step).collect();

    values
        .par_iter()
        .map(|&r| {
            let mut sweep = CubeSweep::default();
            for &g in &values {
                for &b in &values {
                    let rgb = RgbColor::new(r, g, b);
                    if to_rgb(to_oklch(rgb)) != rgb {
                        sweep.mismatches.push(rgb);
                    }
                    sweep.checked += 1;
                }
            }
            sweep
        })
        .reduce(CubeSweep::default, |mut a, b| {
            a.checked += b.checked;
            a.mismatches.extend(b.mismatches);
            a
        })
}
