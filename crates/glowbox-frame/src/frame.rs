#![forbid(unsafe_code)]

//! Frame composition: borders, padding, alignment, titles and dividers
//! around styled content lines.

use std::fmt;

use glowbox_style::Style;
use glowbox_text::{Alignment, StyledLine};
use tracing::debug;

use crate::border::BorderSet;
use crate::error::{ConfigurationError, FrameError, ValidationError};

/// Truncation marker used when content or titles exceed the frame.
const ELLIPSIS: &str = "\u{2026}";

/// One row of frame content.
#[derive(Debug, Clone)]
pub enum FrameItem {
    /// A content line, padded and aligned within the frame interior.
    Line(StyledLine),
    /// A full-width horizontal rule joined into the side borders.
    Divider,
}

impl From<StyledLine> for FrameItem {
    fn from(line: StyledLine) -> Self {
        Self::Line(line)
    }
}

impl From<&str> for FrameItem {
    fn from(text: &str) -> Self {
        Self::Line(StyledLine::from_ansi(text))
    }
}

impl From<String> for FrameItem {
    fn from(text: String) -> Self {
        Self::Line(StyledLine::from_ansi(&text))
    }
}

/// Split a line on embedded newlines, `str::lines` style: `\r\n` counts
/// as one break and a trailing newline adds no empty row. Spans stay with
/// the characters they covered.
fn split_physical_lines(line: &StyledLine) -> Vec<StyledLine> {
    let chars: Vec<char> = line.plain().chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;
    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            let end = if i > start && chars[i - 1] == '\r' { i - 1 } else { i };
            out.push(line.slice(start..end));
            start = i + 1;
        }
    }
    if start < chars.len() || out.is_empty() {
        out.push(line.slice(start..chars.len()));
    }
    out
}

/// Parse an alignment name ("left", "center", "right") case-insensitively.
///
/// # Errors
/// [`ConfigurationError::UnknownVariant`] for any other name.
pub fn parse_alignment(name: &str) -> Result<Alignment, ConfigurationError> {
    match name.to_ascii_lowercase().as_str() {
        "left" => Ok(Alignment::Left),
        "center" | "centre" => Ok(Alignment::Center),
        "right" => Ok(Alignment::Right),
        _ => Err(ConfigurationError::UnknownVariant {
            what: "alignment",
            name: name.to_string(),
        }),
    }
}

/// Builder that composes styled lines into a bordered frame.
///
/// Defaults: solid border, one column of interior padding, left
/// alignment, width derived from the widest content line.
#[derive(Debug, Clone)]
pub struct FrameComposer {
    items: Vec<FrameItem>,
    border: BorderSet,
    border_style: Option<Style>,
    title: Option<StyledLine>,
    title_style: Option<Style>,
    width: Option<usize>,
    min_width: Option<usize>,
    max_width: Option<usize>,
    padding: usize,
    align: Alignment,
}

impl Default for FrameComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameComposer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            border: BorderSet::SOLID,
            border_style: None,
            title: None,
            title_style: None,
            width: None,
            min_width: None,
            max_width: None,
            padding: 1,
            align: Alignment::Left,
        }
    }

    /// Append content. Accepts raw text (ANSI sequences are parsed into
    /// spans) or an already-built [`StyledLine`]. Content containing
    /// newlines is split into one row per physical line, so a rendered
    /// frame's string form nests as-is.
    #[must_use]
    pub fn line(mut self, line: impl Into<FrameItem>) -> Self {
        self.push_item(line.into());
        self
    }

    /// Append a full-width divider row.
    #[must_use]
    pub fn divider(mut self) -> Self {
        self.items.push(FrameItem::Divider);
        self
    }

    /// Append every line of an iterator.
    #[must_use]
    pub fn lines<I, T>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FrameItem>,
    {
        for line in lines {
            self.push_item(line.into());
        }
        self
    }

    fn push_item(&mut self, item: FrameItem) {
        match item {
            FrameItem::Line(line) if line.plain().contains('\n') => {
                self.items
                    .extend(split_physical_lines(&line).into_iter().map(FrameItem::Line));
            }
            other => self.items.push(other),
        }
    }

    #[must_use]
    pub fn border(mut self, border: BorderSet) -> Self {
        self.border = border;
        self
    }

    /// Style applied to every border character.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Title embedded in the top border, centered.
    #[must_use]
    pub fn title(mut self, title: impl Into<FrameItem>) -> Self {
        self.title = match title.into() {
            FrameItem::Line(line) => Some(line),
            FrameItem::Divider => None,
        };
        self
    }

    /// Style layered under the title's own spans.
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = Some(style);
        self
    }

    /// Fix the total frame width, borders included. Content wider than
    /// the interior is truncated with an ellipsis, never an error.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Lower bound for the derived width. Ignored when [`width`](Self::width)
    /// is set.
    #[must_use]
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Upper bound for the derived width. Ignored when [`width`](Self::width)
    /// is set.
    #[must_use]
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Interior padding columns between the border and content.
    #[must_use]
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Resolve the total frame width.
    fn resolve_width(&self, chrome: usize) -> Result<usize, ValidationError> {
        if let (Some(min), Some(max)) = (self.min_width, self.max_width)
            && min > max
        {
            return Err(ValidationError::MinExceedsMax {
                min_width: min,
                max_width: max,
            });
        }
        if let Some(width) = self.width {
            if width < chrome {
                return Err(ValidationError::WidthTooSmall {
                    width,
                    minimum: chrome,
                });
            }
            return Ok(width);
        }
        if let Some(max) = self.max_width
            && max < chrome
        {
            return Err(ValidationError::WidthTooSmall {
                width: max,
                minimum: chrome,
            });
        }

        let content_max = self
            .items
            .iter()
            .map(|item| match item {
                FrameItem::Line(line) => line.width(),
                FrameItem::Divider => 0,
            })
            .max()
            .unwrap_or(0);
        // Corners, one horizontal each side, and the spaces around the title.
        let title_need = self.title.as_ref().map_or(0, |t| t.width() + 6);
        let mut width = (content_max + chrome).max(title_need);
        if let Some(min) = self.min_width {
            width = width.max(min);
        }
        if let Some(max) = self.max_width {
            width = width.min(max);
        }
        Ok(width)
    }

    fn styled_border(&self, text: &str) -> StyledLine {
        match self.border_style {
            Some(style) => StyledLine::styled(text, style),
            None => StyledLine::raw(text),
        }
    }

    fn top_row(&self, width: usize) -> Result<StyledLine, FrameError> {
        let b = self.border;
        let span = width.saturating_sub(2);
        let title = match &self.title {
            Some(title) if !title.is_empty() => title,
            _ => {
                let mut row = String::with_capacity(width * 3);
                row.push(b.top_left);
                for _ in 0..span {
                    row.push(b.horizontal);
                }
                row.push(b.top_right);
                return Ok(self.styled_border(&row));
            }
        };

        // Corners, spaces and at least one horizontal per side stay fixed.
        let avail = width.saturating_sub(6);
        let mut title = title.truncate(avail, ELLIPSIS)?;
        if let Some(style) = self.title_style {
            title.apply_base_style(style);
        }
        let fill = span - (title.width() + 2);
        let left = fill / 2;
        let right = fill - left;

        let mut row = StyledLine::raw("");
        let mut segment = String::new();
        segment.push(b.top_left);
        for _ in 0..left {
            segment.push(b.horizontal);
        }
        segment.push(' ');
        row.append_line(&self.styled_border(&segment));
        row.append_line(&title);
        segment.clear();
        segment.push(' ');
        for _ in 0..right {
            segment.push(b.horizontal);
        }
        segment.push(b.top_right);
        row.append_line(&self.styled_border(&segment));
        Ok(row)
    }

    fn bottom_row(&self, width: usize) -> StyledLine {
        let b = self.border;
        let mut row = String::with_capacity(width * 3);
        row.push(b.bottom_left);
        for _ in 0..width.saturating_sub(2) {
            row.push(b.horizontal);
        }
        row.push(b.bottom_right);
        self.styled_border(&row)
    }

    fn divider_row(&self, width: usize) -> StyledLine {
        let b = self.border;
        let mut row = String::with_capacity(width * 3);
        row.push(b.left_joint);
        for _ in 0..width.saturating_sub(2) {
            row.push(b.horizontal);
        }
        row.push(b.right_joint);
        self.styled_border(&row)
    }

    fn content_row(&self, line: &StyledLine, inner: usize) -> Result<StyledLine, FrameError> {
        let fitted = line.truncate(inner, ELLIPSIS)?.pad(inner, self.align)?;
        let pad = " ".repeat(self.padding);
        let mut row = StyledLine::raw("");
        row.append_line(&self.styled_border(&self.border.vertical.to_string()));
        row.append(&pad);
        row.append_line(&fitted);
        row.append(&pad);
        row.append_line(&self.styled_border(&self.border.vertical.to_string()));
        Ok(row)
    }

    /// Compose the frame.
    ///
    /// # Errors
    /// [`FrameError::Validation`] for impossible dimensions,
    /// [`FrameError::Layout`] when content or title cannot be reduced to
    /// fit (the interior cannot hold even the truncation marker).
    pub fn render(&self) -> Result<Frame, FrameError> {
        let chrome = 2 + 2 * self.padding;
        let width = self.resolve_width(chrome)?;
        let inner = width - chrome;
        debug!(width, inner, items = self.items.len(), "composing frame");

        let mut lines = Vec::with_capacity(self.items.len() + 2);
        lines.push(self.top_row(width)?.to_ansi());
        for item in &self.items {
            let row = match item {
                FrameItem::Line(line) => self.content_row(line, inner)?,
                FrameItem::Divider => self.divider_row(width),
            };
            lines.push(row.to_ansi());
        }
        lines.push(self.bottom_row(width).to_ansi());
        Ok(Frame { lines, width })
    }
}

/// A rendered frame: one ANSI string per terminal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
    width: usize,
}

impl Frame {
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
