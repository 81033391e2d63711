//! Editor-facing color provider
//!
//! The two calls an editor integration makes, without any editor types:
//!
//! - [`document_colors`]: every literal in a buffer with a display color
//! - [`color_presentation`]: the replacement text after the user picks a
//!   new color in a swatch
//!
//! Display colors are unit-range RGBA floats, which is what color pickers
//! and swatch renderers take.

use crate::convert::{to_rgb, unit_rgba_to_oklch};
use crate::error::{Error, Result};
use crate::format::format_oklch;
use crate::parse::{SourceSpan, scan};

/// Stylesheet languages whose buffers contain `oklch()` literals
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["css", "scss", "less", "stylus"];

/// Check a language identifier against [`SUPPORTED_LANGUAGES`]
pub fn is_supported_language(language_id: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|lang| lang.eq_ignore_ascii_case(language_id))
}

/// A literal's location and its color for display
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentColor {
    pub span: SourceSpan,
    /// `[r, g, b, alpha]`, each in [0, 1]
    pub rgba: [f64; 4],
}

/// A replacement of the text at `span`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: SourceSpan,
    pub new_text: String,
}

impl TextEdit {
    /// Splice `new_text` into `text`
    pub fn apply(&self, text: &str) -> Result<String> {
        let invalid = || Error::InvalidSpan {
            start: self.span.start,
            end: self.span.end,
            len: text.len(),
        };
        if self.span.start > self.span.end {
            return Err(invalid());
        }
        let head = text.get(..self.span.start).ok_or_else(invalid)?;
        let tail = text.get(self.span.end..).ok_or_else(invalid)?;

        let mut out = String::with_capacity(head.len() + self.new_text.len() + tail.len());
        out.push_str(head);
        out.push_str(&self.new_text);
        out.push_str(tail);
        Ok(out)
    }
}

/// How an edited color should be written back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPresentation {
    /// Text shown in the picker
    pub label: String,
    pub edit: TextEdit,
}

/// Find every literal in `text` and resolve it to a display color
pub fn document_colors(text: &str) -> Vec<DocumentColor> {
    let colors: Vec<_> = scan(text)
        .map(|m| DocumentColor {
            span: m.span,
            rgba: to_rgb(m.color).to_unit(),
        })
        .collect();
    log::debug!("resolved {} document colors", colors.len());
    colors
}

/// Canonical literal for a picked color, as an edit of `span`
///
/// Channels are quantized to 8 bits before conversion.
pub fn color_presentation(rgba: [f64; 4], span: SourceSpan) -> ColorPresentation {
    let label = format_oklch(unit_rgba_to_oklch(rgba));
    log::trace!("presenting {:?} as {}", rgba, label);
    ColorPresentation {
        edit: TextEdit {
            span,
            new_text: label.clone(),
        },
        label,
    }
}
