#![forbid(unsafe_code)]

//! Visual width measurement with Unicode correctness.
//!
//! Everything downstream (wrapping, padding, frame composition, gradient
//! column math) is built on these functions, so they must agree with how a
//! compliant terminal renders the string:
//! - grapheme clusters are never split (emoji, ZWJ sequences, combining marks)
//! - CJK and emoji-presentation clusters are 2 cells wide
//! - combining/zero-width marks contribute 0 cells
//!
//! # Example
//! ```
//! use glowbox_text::{display_width, graphemes};
//!
//! assert_eq!(display_width("hi"), 2);
//! assert_eq!(display_width("你好"), 4);
//! assert_eq!(graphemes("e\u{0301}x").count(), 2);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Iterate over the grapheme clusters of a string, in order.
///
/// Clusters partition the string: no gaps, no overlaps.
pub fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}

/// Display width of a single grapheme cluster in cells (0, 1, or 2).
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.width()
}

/// Calculate the display width of text in cells.
///
/// The empty string has width 0. Embedded escape sequences are *not*
/// accounted for here; strip them first with [`crate::strip_ansi`].
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Check if a string contains any wide clusters (width > 1).
#[must_use]
pub fn has_wide_chars(text: &str) -> bool {
    text.graphemes(true).any(|g| g.width() > 1)
}

/// Check if a string is ASCII-only (fast path possible).
#[must_use]
pub fn is_ascii_only(text: &str) -> bool {
    text.is_ascii()
}
