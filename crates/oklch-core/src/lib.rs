//! # oklch - OKLCH colors for stylesheet tooling
//!
//! Numerically faithful conversion between OKLCH and 8-bit sRGB, and exact
//! parsing and formatting of CSS `oklch()` literals in arbitrary text.
//!
//! ## Components
//!
//! - [`parse`]: finds `oklch()` literals in text and decodes them
//! - [`convert`]: OKLCH ↔ OKLab ↔ linear sRGB ↔ sRGB
//! - [`format`]: canonical literal text
//! - [`provider`]: document-color and color-presentation calls for editor hosts
//!
//! Everything is a pure function over `Copy` values. Scanning state lives in
//! the iterator returned by [`scan`], so concurrent scans never interfere.
//!
//! ## Quick Start
//!
//! ```
//! use oklch_core::{OklchColor, RgbColor, format_oklch, scan, to_oklch, to_rgb};
//!
//! let css = "a { color: oklch(70% 0.1 200) }";
//! let found = scan(css).next().unwrap();
//! assert_eq!(found.color, OklchColor::new(0.7, 0.1, 200.0));
//!
//! let rgb = to_rgb(found.color);
//! assert_eq!(rgb, RgbColor::new(64, 177, 183));
//!
//! // User picks a new color in the swatch
//! let edited = to_oklch(RgbColor::with_alpha(255, 0, 0, 0.5));
//! assert_eq!(format_oklch(edited), "oklch(0.628 0.258 29.2 / 0.50)");
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod format;
pub mod math;
pub mod parse;
pub mod provider;

pub use color::{LinearRgb, Oklab, OklchColor, RgbColor};
pub use convert::{to_oklch, to_rgb};
pub use error::{Error, Result};
pub use format::format_oklch;
pub use parse::{ColorMatch, Matches, SourceSpan, parse_oklch, scan, scan_all, try_parse_oklch};
pub use provider::{ColorPresentation, DocumentColor, TextEdit, color_presentation, document_colors};

/// Version of oklch-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
