#![forbid(unsafe_code)]

//! Applying a gradient to rendered lines, one grapheme at a time.

use glowbox_frame::{BorderSet, Frame};
use glowbox_style::Style;
use glowbox_text::{StyledLine, grapheme_width, graphemes};
use tracing::debug;

use crate::strategy::{ColorSource, Easing, PositionStrategy, TargetFilter};

/// A complete gradient recipe: position mapping, color source, target
/// selection and easing.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    position: PositionStrategy,
    source: ColorSource,
    target: TargetFilter,
    easing: Easing,
}

impl GradientSpec {
    /// A horizontal, content-only, linear gradient from the given source.
    #[must_use]
    pub fn new(source: ColorSource) -> Self {
        Self {
            position: PositionStrategy::default(),
            source,
            target: TargetFilter::default(),
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn position(mut self, position: PositionStrategy) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn target(mut self, target: TargetFilter) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Recolor `lines` according to `spec`.
///
/// Every grapheme with nonzero display width gets a foreground span for
/// its position in the grid. Existing styling stays underneath: the
/// gradient's color wins the foreground, attributes like bold survive.
/// Border detection treats the first and last rows, plus any character
/// in `border`, as border cells.
#[must_use]
pub fn apply(lines: &[StyledLine], spec: &GradientSpec, border: &BorderSet) -> Vec<StyledLine> {
    let rows = lines.len();
    let cols = lines.iter().map(StyledLine::width).max().unwrap_or(0);
    debug!(rows, cols, "applying gradient");

    lines
        .iter()
        .enumerate()
        .map(|(row, line)| recolor_line(line, row, rows, cols, spec, border))
        .collect()
}

/// Recolor a rendered frame, returning one ANSI string per row.
#[must_use]
pub fn apply_to_frame(frame: &Frame, spec: &GradientSpec, border: &BorderSet) -> Vec<String> {
    let lines: Vec<StyledLine> = frame
        .lines()
        .iter()
        .map(|l| StyledLine::from_ansi(l))
        .collect();
    apply(&lines, spec, border)
        .iter()
        .map(StyledLine::to_ansi)
        .collect()
}

fn recolor_line(
    line: &StyledLine,
    row: usize,
    rows: usize,
    cols: usize,
    spec: &GradientSpec,
    border: &BorderSet,
) -> StyledLine {
    let edge_row = row == 0 || row + 1 == rows;
    let mut out = line.clone();
    let mut char_idx = 0usize;
    let mut col = 0usize;
    for g in graphemes(line.plain()) {
        let n_chars = g.chars().count();
        let width = grapheme_width(g);
        if width == 0 {
            char_idx += n_chars;
            continue;
        }
        let is_border = edge_row || g.chars().next().is_some_and(|c| border.contains(c));
        if spec.target.includes(is_border) {
            let t = spec.easing.apply(spec.position.position(row, col, rows, cols));
            let color = spec.source.color_at(t);
            out.stylize(char_idx..char_idx + n_chars, Style::new().fg(color));
        }
        char_idx += n_chars;
        col += width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbox_frame::FrameComposer;
    use glowbox_style::Rgb;

    fn red_blue() -> ColorSource {
        ColorSource::TwoStop {
            start: Rgb::new(255, 0, 0),
            end: Rgb::new(0, 0, 255),
        }
    }

    #[test]
    fn horizontal_endpoints_get_exact_stop_colors() {
        let spec = GradientSpec::new(red_blue()).target(TargetFilter::Both);
        let out = apply(&[StyledLine::raw("abc")], &spec, &BorderSet::SOLID);
        let spans = out[0].spans();
        assert_eq!(spans.first().unwrap().style.fg, Some(Rgb::new(255, 0, 0)));
        assert_eq!(spans.last().unwrap().style.fg, Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn vertical_varies_by_row_only() {
        let spec = GradientSpec::new(red_blue())
            .position(PositionStrategy::Vertical)
            .target(TargetFilter::Both);
        let lines = [StyledLine::raw("aa"), StyledLine::raw("bb")];
        let out = apply(&lines, &spec, &BorderSet::SOLID);
        for span in out[0].spans() {
            assert_eq!(span.style.fg, Some(Rgb::new(255, 0, 0)));
        }
        for span in out[1].spans() {
            assert_eq!(span.style.fg, Some(Rgb::new(0, 0, 255)));
        }
    }

    #[test]
    fn bold_survives_recoloring() {
        let spec = GradientSpec::new(red_blue()).target(TargetFilter::Both);
        let bold = StyledLine::styled("ab", Style::new().bold());
        let out = apply(&[bold], &spec, &BorderSet::SOLID);
        let ansi = out[0].to_ansi();
        assert!(ansi.contains("1;38;2;255;0;0"), "got {ansi:?}");
    }

    #[test]
    fn gradient_color_wins_over_existing_foreground() {
        let spec = GradientSpec::new(red_blue()).target(TargetFilter::Both);
        let green = StyledLine::styled("x", Style::new().fg(Rgb::new(0, 255, 0)));
        let out = apply(&[green], &spec, &BorderSet::SOLID);
        let ansi = out[0].to_ansi();
        assert!(ansi.contains("38;2;255;0;0"), "got {ansi:?}");
        assert!(!ansi.contains("38;2;0;255;0"), "got {ansi:?}");
    }

    #[test]
    fn content_only_skips_border_cells() {
        let frame = FrameComposer::new().line("hi").width(8).render().unwrap();
        let spec = GradientSpec::new(red_blue());
        let out = apply_to_frame(&frame, &spec, &BorderSet::SOLID);
        // Top and bottom rows are pure border and stay uncolored.
        assert!(!out[0].contains('\u{1b}'));
        assert!(!out[2].contains('\u{1b}'));
        assert!(out[1].contains("38;2"));
        // The verticals on the content row stay plain.
        assert!(out[1].starts_with('│'));
    }

    #[test]
    fn border_only_skips_content_cells() {
        let frame = FrameComposer::new().line("hi").width(8).render().unwrap();
        let spec = GradientSpec::new(red_blue()).target(TargetFilter::BorderOnly);
        let out = apply_to_frame(&frame, &spec, &BorderSet::SOLID);
        assert!(out[0].contains("38;2"));
        assert!(out[1].contains("hi"));
        assert!(!out[1].contains("mh"), "content got styled: {:?}", out[1]);
    }

    #[test]
    fn wide_graphemes_advance_by_display_width() {
        let spec = GradientSpec::new(red_blue()).target(TargetFilter::Both);
        // "你a": the second grapheme starts at column 2 of 3.
        let out = apply(&[StyledLine::raw("你a")], &spec, &BorderSet::SOLID);
        let spans = out[0].spans();
        assert_eq!(spans[0].style.fg, Some(Rgb::new(255, 0, 0)));
        assert_eq!(spans[1].style.fg, Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn empty_input_stays_empty() {
        let spec = GradientSpec::new(red_blue());
        assert!(apply(&[], &spec, &BorderSet::SOLID).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn recoloring_never_changes_the_text(text in "[ -~]{0,40}") {
                let spec = GradientSpec::new(ColorSource::rainbow())
                    .target(TargetFilter::Both);
                let out = apply(&[StyledLine::raw(text.as_str())], &spec, &BorderSet::SOLID);
                prop_assert_eq!(out[0].plain(), text.as_str());
            }
        }
    }
}
