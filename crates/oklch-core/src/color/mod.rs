//! Color value types
//!
//! This module provides:
//! - OKLCH (cylindrical perceptual) colors
//! - OKLab (Cartesian perceptual) coordinates
//! - 8-bit sRGB and linear-light RGB primitives

pub mod oklab;
pub mod oklch;
pub mod rgb;

pub use oklab::Oklab;
pub use oklch::{OklchColor, hue_distance, normalize_hue};
pub use rgb::{LinearRgb, RgbColor};
