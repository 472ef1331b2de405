//! StyledText - The attributed-text result of [`TextBuilder`](super::TextBuilder).
//!
//! Finalization wraps the concatenated text verbatim and attaches no style.
//! Styling is layered on afterwards by whoever consumes the result, one
//! [`StyleRun`] per byte range.

use std::fmt;
use std::ops::Range;

use crate::error::StyleError;
use crate::types::{Attr, Rgba};

// =============================================================================
// TextStyle
// =============================================================================

/// Visual attributes for a run of text.
///
/// `None` colors mean "inherit from the surrounding text".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
}

impl TextStyle {
    /// Style with only a foreground color.
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attrs: Attr::NONE,
        }
    }

    /// Add text attributes to this style.
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }
}

/// A style applied to a byte range of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub style: TextStyle,
}

// =============================================================================
// StyledText
// =============================================================================

/// Text plus ordered style runs.
///
/// Runs are kept in insertion order; later runs win where they overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    runs: Vec<StyleRun>,
}

impl StyledText {
    /// Wrap plain text with no styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// The plain text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Style runs in insertion order.
    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Attach a style to `range` (byte offsets).
    ///
    /// The range must be ordered, in bounds, and on char boundaries.
    pub fn with_style(mut self, range: Range<usize>, style: TextStyle) -> Result<Self, StyleError> {
        if range.start > range.end {
            return Err(StyleError::Inverted(range));
        }
        if range.end > self.text.len() {
            return Err(StyleError::OutOfBounds {
                range,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return Err(StyleError::NotCharBoundary(range));
        }
        self.runs.push(StyleRun { range, style });
        Ok(self)
    }

    /// Style every occurrence of `needle`.
    pub fn with_style_matching(mut self, needle: &str, style: TextStyle) -> Self {
        if needle.is_empty() {
            return self;
        }
        let ranges: Vec<_> = self
            .text
            .match_indices(needle)
            .map(|(start, m)| start..start + m.len())
            .collect();
        self.runs
            .extend(ranges.into_iter().map(|range| StyleRun { range, style }));
        self
    }

    /// Effective style at byte offset `index` (last matching run wins).
    pub fn style_at(&self, index: usize) -> TextStyle {
        self.runs
            .iter()
            .rev()
            .find(|run| run.range.contains(&index))
            .map(|run| run.style)
            .unwrap_or_default()
    }

    /// Drop styling and return the plain text.
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Prints the plain text, which makes a finished `StyledText` a valid leaf of
/// another text builder. Style runs are not carried over.
impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
