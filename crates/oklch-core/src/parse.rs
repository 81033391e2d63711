//! `oklch()` literal grammar
//!
//! Recognizes CSS Color 4 `oklch()` literals in free text:
//!
//! ```text
//! oklch( L C H [ / A ] )
//! ```
//!
//! * `L` number, optional `%` (divided by 100)
//! * `C` number
//! * `H` number, optional `deg` (value unchanged)
//! * `A` number, optional `%` (divided by 100); absent means opaque
//!
//! Numbers are unsigned decimals (`0`, `.5`, `70.25`). Matching is
//! case-insensitive. A literal with a sign, a missing component or a stray
//! unit does not match at all.
//!
//! # Usage
//!
//! ```
//! use oklch_core::parse::{parse_oklch, scan};
//!
//! let color = parse_oklch("oklch(70% 0.1 200deg / 50%)").unwrap();
//! assert_eq!(color.l, 0.7);
//! assert_eq!(color.alpha, 0.5);
//!
//! let css = "a { color: oklch(0.7 0.1 200) } b { color: oklch(0.5 0.2 90) }";
//! let spans: Vec<_> = scan(css).map(|m| m.span.slice(css).unwrap()).collect();
//! assert_eq!(spans, ["oklch(0.7 0.1 200)", "oklch(0.5 0.2 90)"]);
//! ```

use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::OklchColor;
use crate::error::{Error, Result};

/// Compiled grammar. Immutable; all cursor state lives in [`Matches`].
static OKLCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)oklch\(\s*(?P<l>[0-9]*\.?[0-9]+%?)\s+(?P<c>[0-9]*\.?[0-9]+)\s+(?P<h>[0-9]*\.?[0-9]+(?:deg)?)\s*(?:/\s*(?P<alpha>[0-9]*\.?[0-9]+%?))?\s*\)",
    )
    .expect("valid oklch regex")
});

/// Half-open byte range `[start, end)` of a literal within scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The spanned text, if the span is valid for `text`
    #[inline]
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.as_range())
    }

    /// Same span measured in `char`s instead of bytes
    pub fn char_range(&self, text: &str) -> Option<Range<usize>> {
        let start = text.get(..self.start)?.chars().count();
        let len = self.slice(text)?.chars().count();
        Some(start..start + len)
    }

    /// Same span measured in UTF-16 code units, as most editor hosts index
    pub fn utf16_range(&self, text: &str) -> Option<Range<usize>> {
        let start: usize = text.get(..self.start)?.chars().map(char::len_utf16).sum();
        let len: usize = self.slice(text)?.chars().map(char::len_utf16).sum();
        Some(start..start + len)
    }
}

impl From<SourceSpan> for Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.as_range()
    }
}

/// A literal found by [`scan`]: where it is and what it decodes to
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMatch {
    pub span: SourceSpan,
    pub color: OklchColor,
}

/// Lazy left-to-right iterator over the literals in a text
///
/// Owns its cursor. Two `Matches` over the same text never affect each
/// other, and [`Matches::restart`] starts over from the beginning.
#[derive(Debug, Clone)]
pub struct Matches<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Matches<'t> {
    fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    /// A fresh iterator over the same text
    pub fn restart(&self) -> Self {
        Self::new(self.text)
    }

    /// The text being scanned
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Byte offset the next search starts from
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Matches<'_> {
    type Item = ColorMatch;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let Some(caps) = OKLCH_PATTERN.captures_at(self.text, self.pos) else {
                self.pos = self.text.len();
                return None;
            };
            let whole = caps.get(0)?;
            self.pos = whole.end();

            if let Some(color) = decode(&caps) {
                let span = SourceSpan::new(whole.start(), whole.end());
                log::trace!("decoded {} at {}..{}", whole.as_str(), span.start, span.end);
                return Some(ColorMatch { span, color });
            }
        }
        None
    }
}

impl FusedIterator for Matches<'_> {}

/// Scan `text` for `oklch()` literals
///
/// Matches are non-overlapping and in order. Text that does not satisfy the
/// grammar is skipped silently. Every call starts from the beginning.
pub fn scan(text: &str) -> Matches<'_> {
    Matches::new(text)
}

/// Collect every literal in `text`
pub fn scan_all(text: &str) -> Vec<ColorMatch> {
    let matches: Vec<_> = scan(text).collect();
    log::debug!("found {} oklch literals in {} bytes", matches.len(), text.len());
    matches
}

/// Decode a single literal
///
/// The first literal in `literal` wins; surrounding text is ignored.
/// Returns `None` when there is no well-formed literal.
pub fn parse_oklch(literal: &str) -> Option<OklchColor> {
    scan(literal).next().map(|m| m.color)
}

/// Decode a single literal, reporting a miss as [`Error::ParseFailure`]
pub fn try_parse_oklch(literal: &str) -> Result<OklchColor> {
    parse_oklch(literal).ok_or_else(|| Error::ParseFailure(literal.to_string()))
}

/// Captures → color; `None` if a number fails to parse or overflows
fn decode(caps: &Captures<'_>) -> Option<OklchColor> {
    let l = percent_or_unit(caps.name("l")?.as_str())?;
    let c = finite(caps.name("c")?.as_str())?;
    let h = finite(strip_suffix_ignore_case(caps.name("h")?.as_str(), "deg"))?;
    let alpha = match caps.name("alpha") {
        Some(a) => percent_or_unit(a.as_str())?,
        None => 1.0,
    };
    Some(OklchColor::with_alpha(l, c, h, alpha))
}

/// `"70%"` → 0.7, `"0.7"` → 0.7
fn percent_or_unit(s: &str) -> Option<f64> {
    match s.strip_suffix('%') {
        Some(number) => finite(number).map(|v| v / 100.0),
        None => finite(s),
    }
}

/// Digit runs too long for `f64` parse as infinity
fn finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    match s.len().checked_sub(suffix.len()) {
        Some(split) if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix) => {
            &s[..split]
        }
        _ => s,
    }
}
