//! Mathematical operations for color conversion
//!
//! This module provides:
//! - 3x3 matrix operations for OKLab ↔ linear sRGB
//! - sRGB transfer function evaluation and 8-bit quantization

pub mod gamma;
pub mod matrix;

pub use gamma::{expand_u8, quantize_u8, srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{
    LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, Matrix3x3, OKLAB_TO_LMS,
};
