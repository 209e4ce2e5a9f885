#![forbid(unsafe_code)]

//! Styled single lines: plain text plus ordered style spans.
//!
//! [`StyledLine`] keeps the logical characters and the styling apart, so
//! width math never sees an escape byte. Spans cover half-open character
//! ranges; when spans overlap, the later-applied span wins per attribute.
//! Every transforming operation (wrap, truncate, pad, slice) produces a new
//! value and carries the overlapping spans along, re-based onto the result.
//!
//! # Example
//! ```
//! use glowbox_text::{Alignment, StyledLine};
//! use glowbox_style::Style;
//!
//! let line = StyledLine::styled("hello world", Style::new().bold());
//! let wrapped = line.wrap(5);
//! assert_eq!(wrapped.len(), 2);
//! assert_eq!(wrapped[0].plain(), "hello");
//!
//! let padded = StyledLine::raw("Hi").pad(8, Alignment::Center).unwrap();
//! assert_eq!(padded.plain(), "   Hi   ");
//! ```

use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;
use tracing::trace;

use crate::ansi::parse_ansi;
use crate::width::{display_width, grapheme_width, graphemes};
use glowbox_style::Style;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align text to the left.
    #[default]
    Left,
    /// Center text horizontally.
    Center,
    /// Align text to the right.
    Right,
}

/// A style applied to a half-open character range.
///
/// Indices are character positions (not bytes) into the owning line's
/// plain text. Spans may overlap; later spans take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// Start character index (inclusive).
    pub start: usize,
    /// End character index (exclusive).
    pub end: usize,
    /// Style applied over the range.
    pub style: Style,
}

impl StyleSpan {
    /// Create a new span; a reversed range is normalized.
    #[must_use]
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self {
            start: start.min(end),
            end: end.max(start),
            style,
        }
    }

    /// Check if this span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A layout operation could not satisfy its width contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The truncation marker alone is wider than the allowed width.
    MarkerTooWide {
        /// Visual width of the marker.
        marker_width: usize,
        /// Width budget the marker had to fit into.
        max_width: usize,
    },
    /// Content is wider than the padding target; truncate first.
    ContentTooWide {
        /// Visual width of the content.
        content_width: usize,
        /// Requested target width.
        target_width: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkerTooWide {
                marker_width,
                max_width,
            } => write!(
                f,
                "truncation marker (width {marker_width}) does not fit in width {max_width}"
            ),
            Self::ContentTooWide {
                content_width,
                target_width,
            } => write!(
                f,
                "content width {content_width} exceeds pad target {target_width}; truncate first"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A single line of text with style spans over character ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    plain: String,
    spans: Vec<StyleSpan>,
    /// Cached character count of `plain`.
    length: usize,
}

impl StyledLine {
    /// Create an unstyled line. The input is taken literally; escape
    /// sequences are not interpreted (use [`StyledLine::from_ansi`]).
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        let plain: String = text.into();
        let length = plain.chars().count();
        Self {
            plain,
            spans: Vec::new(),
            length,
        }
    }

    /// Create a line with one style covering all of it.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut line = Self::raw(text);
        if line.length > 0 && !style.is_plain() {
            line.spans.push(StyleSpan::new(0, line.length, style));
        }
        line
    }

    /// Parse an escape-coded string into a line, converting SGR sequences
    /// into spans. Malformed escapes survive as literal characters.
    #[must_use]
    pub fn from_ansi(input: &str) -> Self {
        let (plain, spans) = parse_ansi(input);
        let length = plain.chars().count();
        Self {
            plain,
            spans,
            length,
        }
    }

    /// The plain text content, free of escape sequences.
    #[must_use]
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// The style spans, in application order.
    #[must_use]
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Number of characters (not bytes, not cells).
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check whether the line has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Visual width in terminal cells.
    #[must_use]
    pub fn width(&self) -> usize {
        display_width(&self.plain)
    }

    /// Append plain text.
    pub fn append(&mut self, text: &str) {
        self.plain.push_str(text);
        self.length += text.chars().count();
    }

    /// Append styled text.
    pub fn append_styled(&mut self, text: &str, style: Style) {
        let start = self.length;
        self.append(text);
        if self.length > start && !style.is_plain() {
            self.spans.push(StyleSpan::new(start, self.length, style));
        }
    }

    /// Append another line, re-basing its spans.
    pub fn append_line(&mut self, other: &StyledLine) {
        let offset = self.length;
        self.plain.push_str(&other.plain);
        self.length += other.length;
        for span in &other.spans {
            self.spans
                .push(StyleSpan::new(span.start + offset, span.end + offset, span.style));
        }
    }

    /// Apply a style over a character range. Later applications win over
    /// earlier ones for conflicting properties.
    pub fn stylize(&mut self, range: Range<usize>, style: Style) {
        let start = range.start.min(self.length);
        let end = range.end.min(self.length);
        if start < end && !style.is_plain() {
            self.spans.push(StyleSpan::new(start, end, style));
        }
    }

    /// Apply a base style underneath all existing spans.
    pub fn apply_base_style(&mut self, base: Style) {
        if self.length > 0 && !base.is_plain() {
            self.spans.insert(0, StyleSpan::new(0, self.length, base));
        }
    }

    /// Copy out a character range, clipping spans to it.
    ///
    /// Spans that overlap the range survive re-based; spans outside are
    /// dropped with the characters they covered.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let start = range.start.min(self.length);
        let end = range.end.min(self.length).max(start);

        let byte_start = char_to_byte(&self.plain, start);
        let byte_end = char_to_byte(&self.plain, end);
        let plain = self.plain[byte_start..byte_end].to_string();

        let mut spans = Vec::new();
        for span in &self.spans {
            let s = span.start.max(start);
            let e = span.end.min(end);
            if s < e {
                spans.push(StyleSpan::new(s - start, e - start, span.style));
            }
        }

        Self {
            plain,
            spans,
            length: end - start,
        }
    }

    /// Truncate to `max_width` cells, appending `marker` when anything was
    /// cut. Cuts at a grapheme boundary so content plus marker fit exactly
    /// or under.
    ///
    /// # Errors
    /// [`LayoutError::MarkerTooWide`] if `max_width` cannot even hold the
    /// marker.
    pub fn truncate(&self, max_width: usize, marker: &str) -> Result<Self, LayoutError> {
        let marker_width = display_width(marker);
        if marker_width > max_width {
            return Err(LayoutError::MarkerTooWide {
                marker_width,
                max_width,
            });
        }
        if self.width() <= max_width {
            return Ok(self.clone());
        }

        let budget = max_width - marker_width;
        let mut kept_chars = 0usize;
        let mut used = 0usize;
        for g in graphemes(&self.plain) {
            let w = grapheme_width(g);
            if used + w > budget {
                break;
            }
            used += w;
            kept_chars += g.chars().count();
        }
        trace!(max_width, kept = kept_chars, "truncating line");

        let mut out = self.slice(0..kept_chars);
        out.append(marker);
        Ok(out)
    }

    /// Pad with spaces to exactly `target_width` cells.
    ///
    /// # Errors
    /// [`LayoutError::ContentTooWide`] if the content is already wider than
    /// the target — padding never truncates implicitly.
    pub fn pad(&self, target_width: usize, alignment: Alignment) -> Result<Self, LayoutError> {
        let content_width = self.width();
        if content_width > target_width {
            return Err(LayoutError::ContentTooWide {
                content_width,
                target_width,
            });
        }

        let fill = target_width - content_width;
        let (left, right) = match alignment {
            Alignment::Left => (0, fill),
            Alignment::Right => (fill, 0),
            Alignment::Center => (fill / 2, fill - fill / 2),
        };

        let mut out = Self::raw(" ".repeat(left));
        out.append_line(self);
        out.append(&" ".repeat(right));
        Ok(out)
    }

    /// Wrap to lines of at most `max_width` cells, breaking on whitespace
    /// where possible and falling back to hard grapheme breaks for tokens
    /// wider than the limit. Embedded `\n` forces a break. Spans are sliced
    /// onto the lines they land in.
    ///
    /// A `max_width` of 0 disables wrapping.
    #[must_use]
    pub fn wrap(&self, max_width: usize) -> Vec<StyledLine> {
        if max_width == 0 {
            return vec![self.clone()];
        }
        wrap_ranges(&self.plain, max_width)
            .into_iter()
            .map(|r| self.slice(r))
            .collect()
    }

    /// Serialize to an escape-coded string.
    ///
    /// Styled runs are bracketed by SGR set/reset pairs, so every line is a
    /// self-contained printable unit. Lines without styling serialize to
    /// their plain text unchanged.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        if self.spans.is_empty() {
            return self.plain.clone();
        }

        // Resolve the effective style per character: later spans win.
        let mut effective = vec![Style::new(); self.length];
        for span in &self.spans {
            let s = span.start.min(self.length);
            let e = span.end.min(self.length);
            for slot in &mut effective[s..e] {
                *slot = span.style.merge(slot);
            }
        }

        let mut out = String::with_capacity(self.plain.len() * 2);
        let mut run: SmallVec<[char; 16]> = SmallVec::new();
        let mut run_style = Style::new();

        let flush = |out: &mut String, style: Style, run: &mut SmallVec<[char; 16]>| {
            if run.is_empty() {
                return;
            }
            if style.is_plain() {
                out.extend(run.iter());
            } else {
                out.push_str("\u{1b}[");
                out.push_str(&style.sgr_params());
                out.push('m');
                out.extend(run.iter());
                out.push_str("\u{1b}[0m");
            }
            run.clear();
        };

        for (i, c) in self.plain.chars().enumerate() {
            let style = effective[i];
            if style != run_style {
                flush(&mut out, run_style, &mut run);
                run_style = style;
            }
            run.push(c);
        }
        flush(&mut out, run_style, &mut run);
        out
    }
}

impl From<&str> for StyledLine {
    fn from(s: &str) -> Self {
        Self::from_ansi(s)
    }
}

impl From<String> for StyledLine {
    fn from(s: String) -> Self {
        Self::from_ansi(&s)
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}

/// Byte offset of the `char_idx`-th character.
fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(b, _)| b)
}

/// A run of whitespace or non-whitespace with its character extent.
struct Token {
    start: usize,
    end: usize,
    width: usize,
    is_ws: bool,
    is_newline: bool,
}

/// Split text into alternating whitespace/word tokens plus newline markers.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<Token> = None;
    let mut char_pos = 0usize;

    for g in graphemes(text) {
        let chars = g.chars().count();
        if g == "\n" || g == "\r\n" {
            if let Some(tok) = current.take() {
                tokens.push(tok);
            }
            tokens.push(Token {
                start: char_pos,
                end: char_pos + chars,
                width: 0,
                is_ws: true,
                is_newline: true,
            });
            char_pos += chars;
            continue;
        }

        let is_ws = g.chars().all(char::is_whitespace);
        let w = grapheme_width(g);
        match &mut current {
            Some(tok) if tok.is_ws == is_ws => {
                tok.end = char_pos + chars;
                tok.width += w;
            }
            _ => {
                if let Some(tok) = current.take() {
                    tokens.push(tok);
                }
                current = Some(Token {
                    start: char_pos,
                    end: char_pos + chars,
                    width: w,
                    is_ws,
                    is_newline: false,
                });
            }
        }
        char_pos += chars;
    }
    if let Some(tok) = current {
        tokens.push(tok);
    }
    tokens
}

/// Compute wrapped line extents as character ranges of the input.
///
/// Each output range is contiguous; trailing whitespace is trimmed off the
/// end of each range and leading whitespace is skipped on continuation
/// lines.
fn wrap_ranges(text: &str, max_width: usize) -> Vec<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines: Vec<Range<usize>> = Vec::new();
    // (start, end, width): current line extent; None means no line open.
    let mut line: Option<(usize, usize, usize)> = None;

    let trim_end = |range: Range<usize>, chars: &[char]| -> Range<usize> {
        let mut end = range.end;
        while end > range.start && chars[end - 1].is_whitespace() {
            end -= 1;
        }
        range.start..end
    };

    for tok in tokenize(text) {
        if tok.is_newline {
            lines.push(trim_end(
                line.take().map_or(tok.start..tok.start, |(s, e, _)| s..e),
                &chars,
            ));
            continue;
        }

        if let Some((start, end, w)) = line {
            if w + tok.width <= max_width {
                line = Some((start, tok.end, w + tok.width));
                continue;
            }
            // Token does not fit: flush the open line.
            lines.push(trim_end(start..end, &chars));
            line = None;
        }

        // Fresh line: drop pure-whitespace tokens at the start.
        if tok.is_ws {
            continue;
        }
        if tok.width > max_width {
            // Hard-break an oversized token at grapheme boundaries.
            let tok_text = {
                let b0 = char_to_byte(text, tok.start);
                let b1 = char_to_byte(text, tok.end);
                &text[b0..b1]
            };
            let mut piece_start = tok.start;
            let mut piece_chars = tok.start;
            let mut piece_width = 0usize;
            for g in graphemes(tok_text) {
                let w = grapheme_width(g);
                let n = g.chars().count();
                if piece_width + w > max_width && piece_width > 0 {
                    lines.push(piece_start..piece_chars);
                    piece_start = piece_chars;
                    piece_width = 0;
                }
                piece_chars += n;
                piece_width += w;
            }
            line = Some((piece_start, piece_chars, piece_width));
        } else {
            line = Some((tok.start, tok.end, tok.width));
        }
    }

    if let Some((start, end, _)) = line {
        lines.push(trim_end(start..end, &chars));
    }
    if lines.is_empty() {
        lines.push(0..0);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbox_style::{Attrs, Rgb};

    #[test]
    fn raw_counts_chars() {
        let line = StyledLine::raw("你好");
        assert_eq!(line.len(), 2);
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn styled_covers_all() {
        let line = StyledLine::styled("abc", Style::new().bold());
        assert_eq!(line.spans().len(), 1);
        assert_eq!((line.spans()[0].start, line.spans()[0].end), (0, 3));
    }

    #[test]
    fn styled_plain_style_adds_no_span() {
        let line = StyledLine::styled("abc", Style::new());
        assert!(line.spans().is_empty());
    }

    #[test]
    fn append_styled_tracks_offsets() {
        let mut line = StyledLine::raw("ab");
        line.append_styled("cd", Style::new().italic());
        assert_eq!(line.plain(), "abcd");
        assert_eq!((line.spans()[0].start, line.spans()[0].end), (2, 4));
    }

    #[test]
    fn slice_clips_spans() {
        let mut line = StyledLine::raw("abcdef");
        line.stylize(1..5, Style::new().bold());
        let sliced = line.slice(2..6);
        assert_eq!(sliced.plain(), "cdef");
        assert_eq!(sliced.spans().len(), 1);
        assert_eq!((sliced.spans()[0].start, sliced.spans()[0].end), (0, 3));
    }

    #[test]
    fn slice_drops_outside_spans() {
        let mut line = StyledLine::raw("abcdef");
        line.stylize(0..2, Style::new().bold());
        let sliced = line.slice(3..6);
        assert!(sliced.spans().is_empty());
    }

    #[test]
    fn slice_out_of_bounds_clamps() {
        let line = StyledLine::raw("ab");
        assert_eq!(line.slice(1..99).plain(), "b");
        assert_eq!(line.slice(5..9).plain(), "");
    }

    // --- truncate ---

    #[test]
    fn truncate_untouched_when_fits() {
        let line = StyledLine::raw("abc");
        assert_eq!(line.truncate(5, "…").unwrap(), line);
    }

    #[test]
    fn truncate_appends_marker() {
        let line = StyledLine::raw("abcdefghij");
        let cut = line.truncate(5, "…").unwrap();
        assert_eq!(cut.plain(), "abcd…");
        assert_eq!(cut.width(), 5);
    }

    #[test]
    fn truncate_marker_too_wide_errors() {
        let line = StyledLine::raw("abcdef");
        let err = line.truncate(0, "…").unwrap_err();
        assert!(matches!(err, LayoutError::MarkerTooWide { .. }));
    }

    #[test]
    fn truncate_marker_too_wide_errors_even_when_content_fits() {
        // The width contract on the marker holds regardless of content.
        let err = StyledLine::raw("").truncate(0, "…").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MarkerTooWide {
                marker_width: 1,
                max_width: 0
            }
        ));
        assert!(StyledLine::raw("a").truncate(1, "…").is_ok());
    }

    #[test]
    fn truncate_wide_chars_at_boundary() {
        // "你好世界" is 8 cells; budget 5-1=4 fits exactly two clusters
        let line = StyledLine::raw("你好世界");
        let cut = line.truncate(5, "…").unwrap();
        assert_eq!(cut.plain(), "你好…");
    }

    #[test]
    fn truncate_keeps_spans_over_kept_text() {
        let line = StyledLine::styled("abcdefghij", Style::new().bold());
        let cut = line.truncate(5, "…").unwrap();
        assert_eq!(cut.spans().len(), 1);
        assert_eq!((cut.spans()[0].start, cut.spans()[0].end), (0, 4));
    }

    // --- pad ---

    #[test]
    fn pad_center_exact() {
        let padded = StyledLine::raw("Hi").pad(8, Alignment::Center).unwrap();
        assert_eq!(padded.plain(), "   Hi   ");
        assert_eq!(padded.width(), 8);
    }

    #[test]
    fn pad_left_and_right() {
        assert_eq!(
            StyledLine::raw("x").pad(3, Alignment::Left).unwrap().plain(),
            "x  "
        );
        assert_eq!(
            StyledLine::raw("x").pad(3, Alignment::Right).unwrap().plain(),
            "  x"
        );
    }

    #[test]
    fn pad_uneven_center_biases_left() {
        let padded = StyledLine::raw("ab").pad(5, Alignment::Center).unwrap();
        assert_eq!(padded.plain(), " ab  ");
    }

    #[test]
    fn pad_too_wide_errors() {
        let err = StyledLine::raw("hello").pad(3, Alignment::Left).unwrap_err();
        assert!(matches!(err, LayoutError::ContentTooWide { .. }));
    }

    #[test]
    fn pad_shifts_spans() {
        let line = StyledLine::styled("ab", Style::new().bold());
        let padded = line.pad(6, Alignment::Right).unwrap();
        assert_eq!((padded.spans()[0].start, padded.spans()[0].end), (4, 6));
    }

    #[test]
    fn pad_exact_width_is_noop_fill() {
        let padded = StyledLine::raw("abc").pad(3, Alignment::Center).unwrap();
        assert_eq!(padded.plain(), "abc");
    }

    // --- wrap ---

    #[test]
    fn wrap_on_word_boundary() {
        let lines = StyledLine::raw("hello world foo bar").wrap(10);
        let plains: Vec<_> = lines.iter().map(|l| l.plain().to_string()).collect();
        assert_eq!(plains, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn wrap_no_break_needed() {
        let lines = StyledLine::raw("hello").wrap(10);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plain(), "hello");
    }

    #[test]
    fn wrap_long_token_hard_breaks() {
        let lines = StyledLine::raw("supercalifragilistic").wrap(10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 10);
        }
    }

    #[test]
    fn wrap_respects_cjk_widths() {
        let lines = StyledLine::raw("你好世界").wrap(4);
        let plains: Vec<_> = lines.iter().map(|l| l.plain().to_string()).collect();
        assert_eq!(plains, vec!["你好", "世界"]);
    }

    #[test]
    fn wrap_preserves_newlines() {
        let lines = StyledLine::raw("one\ntwo").wrap(20);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].plain(), "one");
        assert_eq!(lines[1].plain(), "two");
    }

    #[test]
    fn wrap_empty_yields_one_empty_line() {
        let lines = StyledLine::raw("").wrap(10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn wrap_zero_width_disables() {
        let lines = StyledLine::raw("hello world").wrap(0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn wrap_carries_spans_to_lines() {
        let mut line = StyledLine::raw("hello world");
        line.stylize(6..11, Style::new().bold());
        let lines = line.wrap(5);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].spans().is_empty());
        assert_eq!(lines[1].spans().len(), 1);
        assert_eq!((lines[1].spans()[0].start, lines[1].spans()[0].end), (0, 5));
    }

    #[test]
    fn wrap_trims_trailing_whitespace() {
        let lines = StyledLine::raw("hello   world").wrap(8);
        assert_eq!(lines[0].plain(), "hello");
        assert_eq!(lines[1].plain(), "world");
    }

    // --- to_ansi ---

    #[test]
    fn to_ansi_plain_passthrough() {
        assert_eq!(StyledLine::raw("abc").to_ansi(), "abc");
    }

    #[test]
    fn to_ansi_brackets_styled_run() {
        let line = StyledLine::styled("hi", Style::new().bold());
        assert_eq!(line.to_ansi(), "\u{1b}[1mhi\u{1b}[0m");
    }

    #[test]
    fn to_ansi_roundtrips_through_from_ansi() {
        let mut line = StyledLine::raw("abcdef");
        line.stylize(1..3, Style::new().fg(Rgb::new(200, 10, 10)));
        line.stylize(4..6, Style::new().underline());
        let reparsed = StyledLine::from_ansi(&line.to_ansi());
        assert_eq!(reparsed.plain(), line.plain());
        assert_eq!(reparsed.to_ansi(), line.to_ansi());
    }

    #[test]
    fn to_ansi_later_span_wins_fg() {
        let mut line = StyledLine::raw("ab");
        line.stylize(0..2, Style::new().fg(Rgb::new(1, 1, 1)));
        line.stylize(0..2, Style::new().fg(Rgb::new(2, 2, 2)));
        assert!(line.to_ansi().contains("38;2;2;2;2"));
        assert!(!line.to_ansi().contains("38;2;1;1;1"));
    }

    #[test]
    fn to_ansi_merges_attrs_across_spans() {
        let mut line = StyledLine::raw("ab");
        line.stylize(0..2, Style::new().bold());
        line.stylize(0..2, Style::new().fg(Rgb::new(9, 9, 9)));
        // bold survives recoloring
        let out = line.to_ansi();
        assert!(out.contains("1;38;2;9;9;9"));
    }

    #[test]
    fn strip_of_serialized_equals_plain() {
        let mut line = StyledLine::raw("styled content");
        line.stylize(0..6, Style::new().italic());
        assert_eq!(crate::strip_ansi(&line.to_ansi()), line.plain());
    }

    #[test]
    fn apply_base_style_loses_to_spans() {
        let mut line = StyledLine::raw("ab");
        line.stylize(0..2, Style::new().fg(Rgb::new(5, 5, 5)));
        line.apply_base_style(Style::new().fg(Rgb::new(7, 7, 7)).bold());
        let out = line.to_ansi();
        assert!(out.contains("38;2;5;5;5"));
        assert!(out.contains('1'));
    }

    #[test]
    fn attrs_survive_in_effective_style() {
        let mut line = StyledLine::raw("x");
        line.stylize(0..1, Style::new().bold());
        line.stylize(0..1, Style::new().fg(Rgb::new(3, 3, 3)));
        let reparsed = StyledLine::from_ansi(&line.to_ansi());
        assert!(reparsed.spans()[0].style.attrs.contains(Attrs::BOLD));
    }
}
