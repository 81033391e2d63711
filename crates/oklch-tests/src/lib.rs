//! # oklch-tests
//!
//! Parity and accuracy testing for oklch-core.
//!
//! This crate provides:
//! - Parity checks against the `palette` crate's OKLCH implementation
//! - Round-trip error statistics in OKLab units
//! - Seeded sample generators
//! - JSON fixtures for text scanning
//!
//! ## Test Categories
//!
//! 1. **Parity**: OKLCH → sRGB and sRGB → OKLCH against `palette`
//! 2. **Round trip**: exhaustive 8-bit cube and random OKLCH samples
//! 3. **Text**: scan fixtures, format/parse idempotence, concurrent scans

pub mod accuracy;
pub mod fixtures;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, RoundTripStats, compare_rgb, delta_e_ok};
pub use parity::{ParityResult, forward_parity, sweep_rgb_cube};
pub use patterns::{SamplePattern, generate_oklch};
