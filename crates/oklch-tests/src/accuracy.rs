//! Accuracy measurement
//!
//! Uses ΔE_OK (Euclidean distance in OKLab) as the color difference metric.
//! A ΔE_OK of about 0.02 is the smallest difference most observers notice.

use oklch_core::color::hue_distance;
use oklch_core::{Oklab, OklchColor, RgbColor, to_oklch};

/// Statistics from a ΔE_OK comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean ΔE_OK across all samples
    pub mean: f64,
    /// Maximum ΔE_OK
    pub max: f64,
    /// 95th percentile ΔE_OK
    pub p95: f64,
    /// Largest single-channel difference in 8-bit units
    pub max_channel_diff: u8,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Check if all differences are imperceptible
    pub fn is_excellent(&self) -> bool {
        self.max < 0.005
    }

    /// Check if differences are barely perceptible
    pub fn is_good(&self) -> bool {
        self.max < 0.01
    }

    /// Check if differences are acceptable
    pub fn is_acceptable(&self) -> bool {
        self.max < 0.02
    }
}

/// ΔE_OK between two 8-bit colors
pub fn delta_e_ok(a: RgbColor, b: RgbColor) -> f64 {
    Oklab::from_oklch(to_oklch(a)).distance(&Oklab::from_oklch(to_oklch(b)))
}

/// Compare two color sequences and compute ΔE_OK statistics
pub fn compare_rgb(reference: &[RgbColor], result: &[RgbColor]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());

    let mut delta_es: Vec<f64> = Vec::with_capacity(reference.len());
    let mut max_channel_diff = 0u8;

    for (a, b) in reference.iter().zip(result) {
        delta_es.push(delta_e_ok(*a, *b));
        for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
            max_channel_diff = max_channel_diff.max(x.abs_diff(y));
        }
    }

    delta_es.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = delta_es.len();
    let mean = if count == 0 {
        0.0
    } else {
        delta_es.iter().sum::<f64>() / count as f64
    };
    let max = delta_es.last().copied().unwrap_or(0.0);
    let p95_idx = (count as f64 * 0.95) as usize;
    let p95 = delta_es.get(p95_idx).copied().unwrap_or(max);

    DeltaEStats {
        mean,
        max,
        p95,
        max_channel_diff,
        count,
    }
}

/// Worst-case component errors of OKLCH → sRGB → OKLCH
#[derive(Debug, Clone, Default)]
pub struct RoundTripStats {
    pub max_dl: f64,
    pub max_dc: f64,
    /// Only counted for samples with chroma at or above the hue threshold
    pub max_dh: f64,
    pub count: usize,
    /// Samples skipped for being outside sRGB
    pub out_of_gamut: usize,
}

impl RoundTripStats {
    /// Measure `samples`, checking hue only where chroma ≥ `hue_min_chroma`
    pub fn measure(samples: &[OklchColor], hue_min_chroma: f64) -> Self {
        let mut stats = Self::default();
        for x in samples {
            if !x.is_in_srgb_gamut() {
                stats.out_of_gamut += 1;
                continue;
            }
            let back = to_oklch(x.to_rgb());
            stats.max_dl = stats.max_dl.max((back.l - x.l).abs());
            stats.max_dc = stats.max_dc.max((back.c - x.c).abs());
            if x.c >= hue_min_chroma {
                stats.max_dh = stats.max_dh.max(hue_distance(back.h, x.h));
            }
            stats.count += 1;
        }
        stats
    }
}
