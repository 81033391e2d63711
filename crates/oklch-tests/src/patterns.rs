//! Sample generation
//!
//! Provides reproducible OKLCH and sRGB sample sets for accuracy runs.

use oklch_core::{OklchColor, RgbColor};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Largest chroma any sRGB color reaches (blue, ~0.313), with headroom
pub const MAX_SRGB_CHROMA: f64 = 0.37;

/// Sample set types
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// Regular grid over lightness, chroma and hue
    Grid,
    /// Uniform random samples with seed
    Random(u64),
    /// Full hue circle at fixed lightness and chroma
    HueRing,
    /// Neutral ramp (chroma 0)
    Grays,
    /// sRGB primaries and secondaries
    Primaries,
    /// Points far outside sRGB
    OutOfGamut,
}

/// Generate `count` OKLCH samples (fixed-size patterns ignore `count`)
pub fn generate_oklch(pattern: SamplePattern, count: usize) -> Vec<OklchColor> {
    match pattern {
        SamplePattern::Grid => {
            let steps = (2..).find(|s: &usize| s.pow(3) >= count).unwrap_or(2);
            let mut out = Vec::with_capacity(steps * steps * steps);
            for li in 0..steps {
                for ci in 0..steps {
                    for hi in 0..steps {
                        out.push(OklchColor::new(
                            li as f64 / (steps - 1) as f64,
                            MAX_SRGB_CHROMA * ci as f64 / (steps - 1) as f64,
                            360.0 * hi as f64 / steps as f64,
                        ));
                    }
                }
            }
            out
        }
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    OklchColor::with_alpha(
                        rng.gen_range(0.0..1.0),
                        rng.gen_range(0.0..MAX_SRGB_CHROMA),
                        rng.gen_range(0.0..360.0),
                        // A quarter of samples are translucent
                        if rng.gen_bool(0.25) {
                            rng.gen_range(0.0..1.0)
                        } else {
                            1.0
                        },
                    )
                })
                .collect()
        }
        SamplePattern::HueRing => (0..count.max(1))
            .map(|i| OklchColor::new(0.7, 0.12, 360.0 * i as f64 / count.max(1) as f64))
            .collect(),
        SamplePattern::Grays => (0..count.max(2))
            .map(|i| OklchColor::new(i as f64 / (count.max(2) - 1) as f64, 0.0, 0.0))
            .collect(),
        SamplePattern::Primaries => generate_rgb(SamplePattern::Primaries, 0)
            .into_iter()
            .map(RgbColor::to_oklch)
            .collect(),
        SamplePattern::OutOfGamut => {
            let mut rng = ChaCha8Rng::seed_from_u64(0x0c1c);
            (0..count)
                .map(|_| {
                    OklchColor::new(
                        rng.gen_range(0.0..2.0),
                        rng.gen_range(0.4..3.0),
                        rng.gen_range(0.0..360.0),
                    )
                })
                .collect()
        }
    }
}

/// Generate `count` 8-bit sRGB samples (fixed-size patterns ignore `count`)
pub fn generate_rgb(pattern: SamplePattern, count: usize) -> Vec<RgbColor> {
    match pattern {
        SamplePattern::Primaries => [
            [0, 0, 0],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 255, 255],
        ]
        .into_iter()
        .map(RgbColor::from)
        .collect(),
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| RgbColor::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
        SamplePattern::Grays => (0..=255u8).map(|v| RgbColor::new(v, v, v)).collect(),
        other => generate_oklch(other, count)
            .into_iter()
            .map(OklchColor::to_rgb)
            .collect(),
    }
}
