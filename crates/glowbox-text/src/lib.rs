#![forbid(unsafe_code)]

//! Text measurement and styled-text primitives for glowbox.
//!
//! This crate provides the two foundations everything else builds on:
//! - [`width`] — grapheme segmentation and visual-width math
//! - [`styled`] — [`StyledLine`], a logical string plus style spans, with
//!   width-aware wrap/truncate/pad that carry styling along
//! - [`ansi`] — escape-sequence stripping and SGR parsing into spans
//!
//! # Example
//! ```
//! use glowbox_text::{Alignment, StyledLine, display_width, strip_ansi};
//!
//! // Width math ignores styling because styling is kept out of the text.
//! let line = StyledLine::from_ansi("\u{1b}[1mwide 你好\u{1b}[0m");
//! assert_eq!(line.width(), 9);
//! assert_eq!(display_width(&strip_ansi("\u{1b}[31mab\u{1b}[0m")), 2);
//!
//! // Transforms produce new values and keep spans aligned.
//! let padded = line.pad(12, Alignment::Center).unwrap();
//! assert_eq!(padded.width(), 12);
//! ```

pub mod ansi;
pub mod styled;
pub mod width;

pub use ansi::{parse_ansi, strip_ansi};
pub use styled::{Alignment, LayoutError, StyleSpan, StyledLine};
pub use width::{display_width, grapheme_width, graphemes, has_wide_chars, is_ascii_only};

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn width_of_stripped_equals_grapheme_sum() {
        let inputs = [
            "plain",
            "\u{1b}[1;31mstyled\u{1b}[0m",
            "mixed 你好 \u{1b}[4memoji 😀\u{1b}[0m",
            "",
        ];
        for input in inputs {
            let plain = strip_ansi(input);
            let sum: usize = graphemes(&plain).map(grapheme_width).sum();
            assert_eq!(display_width(&plain), sum, "input: {input:?}");
        }
    }

    #[test]
    fn from_ansi_width_matches_stripped_width() {
        let input = "\u{1b}[38;2;1;2;3mab你\u{1b}[0m";
        assert_eq!(
            StyledLine::from_ansi(input).width(),
            display_width(&strip_ansi(input))
        );
    }
}
