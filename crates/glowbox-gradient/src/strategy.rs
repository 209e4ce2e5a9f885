#![forbid(unsafe_code)]

//! Pluggable gradient behavior: where a cell sits in the gradient, what
//! color that position maps to, and which cells get recolored.

use glowbox_frame::ConfigurationError;
use glowbox_style::Rgb;

use crate::gradient::ColorGradient;

/// Easing applied to gradient positions before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map `t` in `[0, 1]` through the curve. Quadratic in and out.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Parse an easing name case-insensitively.
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownVariant`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "ease-in" | "ease_in" => Ok(Self::EaseIn),
            "ease-out" | "ease_out" => Ok(Self::EaseOut),
            "ease-in-out" | "ease_in_out" => Ok(Self::EaseInOut),
            _ => Err(ConfigurationError::UnknownVariant {
                what: "easing",
                name: name.to_string(),
            }),
        }
    }
}

/// Maps a cell coordinate to a gradient position in `[0, 1]`.
///
/// Degenerate axes (a single row or column) collapse to position 0, so
/// every strategy is total over any non-empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStrategy {
    /// Left edge is 0, right edge is 1.
    #[default]
    Horizontal,
    /// Top row is 0, bottom row is 1.
    Vertical,
    /// Top-left corner is 0, bottom-right corner is 1.
    Diagonal,
    /// Center is 0, the corners are 1.
    Radial,
}

impl PositionStrategy {
    /// Position of the cell at `(row, col)` in a `rows` by `cols` grid.
    #[must_use]
    pub fn position(self, row: usize, col: usize, rows: usize, cols: usize) -> f64 {
        let max_col = cols.saturating_sub(1) as f64;
        let max_row = rows.saturating_sub(1) as f64;
        match self {
            Self::Horizontal => {
                if max_col == 0.0 {
                    0.0
                } else {
                    col as f64 / max_col
                }
            }
            Self::Vertical => {
                if max_row == 0.0 {
                    0.0
                } else {
                    row as f64 / max_row
                }
            }
            Self::Diagonal => {
                let span = max_col + max_row;
                if span == 0.0 {
                    0.0
                } else {
                    (col as f64 + row as f64) / span
                }
            }
            Self::Radial => {
                let cx = max_col / 2.0;
                let cy = max_row / 2.0;
                let corner = (cx * cx + cy * cy).sqrt();
                if corner == 0.0 {
                    return 0.0;
                }
                let dx = col as f64 - cx;
                let dy = row as f64 - cy;
                ((dx * dx + dy * dy).sqrt() / corner).min(1.0)
            }
        }
    }

    /// Parse a strategy name case-insensitively.
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownVariant`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        match name.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "diagonal" => Ok(Self::Diagonal),
            "radial" => Ok(Self::Radial),
            _ => Err(ConfigurationError::UnknownVariant {
                what: "position strategy",
                name: name.to_string(),
            }),
        }
    }
}

/// Maps a gradient position to a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Linear blend between two colors.
    TwoStop { start: Rgb, end: Rgb },
    /// Piecewise-linear blend over a stop list.
    MultiStop(ColorGradient),
    /// Full hue sweep at fixed saturation and value.
    Rainbow { saturation: f64, value: f64 },
}

impl ColorSource {
    /// Saturated, full-brightness hue sweep.
    #[must_use]
    pub fn rainbow() -> Self {
        Self::Rainbow {
            saturation: 1.0,
            value: 1.0,
        }
    }

    #[must_use]
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::TwoStop { start, end } => {
                // Lerp rounds, so pin the endpoints to the exact inputs.
                if t == 0.0 {
                    *start
                } else if t == 1.0 {
                    *end
                } else {
                    start.lerp(*end, t)
                }
            }
            Self::MultiStop(gradient) => gradient.sample(t),
            Self::Rainbow { saturation, value } => Rgb::from_hsv(t * 360.0, *saturation, *value),
        }
    }
}

/// Selects which cells a gradient recolors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetFilter {
    /// Only cells that are not part of the border.
    #[default]
    ContentOnly,
    /// Only border cells.
    BorderOnly,
    /// Every cell.
    Both,
}

impl TargetFilter {
    #[must_use]
    pub fn includes(self, is_border: bool) -> bool {
        match self {
            Self::ContentOnly => !is_border,
            Self::BorderOnly => is_border,
            Self::Both => true,
        }
    }

    /// Parse a filter name case-insensitively.
    ///
    /// # Errors
    /// [`ConfigurationError::UnknownVariant`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        match name.to_ascii_lowercase().as_str() {
            "content" | "content-only" => Ok(Self::ContentOnly),
            "border" | "border-only" => Ok(Self::BorderOnly),
            "both" | "all" => Ok(Self::Both),
            _ => Err(ConfigurationError::UnknownVariant {
                what: "target filter",
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_spans_zero_to_one() {
        let s = PositionStrategy::Horizontal;
        assert_eq!(s.position(0, 0, 3, 5), 0.0);
        assert_eq!(s.position(2, 4, 3, 5), 1.0);
        assert_eq!(s.position(0, 2, 3, 5), 0.5);
    }

    #[test]
    fn vertical_ignores_column() {
        let s = PositionStrategy::Vertical;
        assert_eq!(s.position(0, 3, 5, 10), 0.0);
        assert_eq!(s.position(4, 0, 5, 10), 1.0);
    }

    #[test]
    fn diagonal_corners() {
        let s = PositionStrategy::Diagonal;
        assert_eq!(s.position(0, 0, 4, 6), 0.0);
        assert_eq!(s.position(3, 5, 4, 6), 1.0);
    }

    #[test]
    fn radial_center_and_corner() {
        let s = PositionStrategy::Radial;
        assert_eq!(s.position(1, 2, 3, 5), 0.0);
        assert_eq!(s.position(0, 0, 3, 5), 1.0);
    }

    #[test]
    fn single_column_degenerates_to_zero() {
        assert_eq!(PositionStrategy::Horizontal.position(0, 0, 3, 1), 0.0);
        assert_eq!(PositionStrategy::Vertical.position(0, 0, 1, 3), 0.0);
        assert_eq!(PositionStrategy::Diagonal.position(0, 0, 1, 1), 0.0);
        assert_eq!(PositionStrategy::Radial.position(0, 0, 1, 1), 0.0);
    }

    #[test]
    fn easing_fixed_points() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn two_stop_endpoints_exact() {
        let source = ColorSource::TwoStop {
            start: Rgb::new(255, 0, 0),
            end: Rgb::new(0, 0, 255),
        };
        assert_eq!(source.color_at(0.0), Rgb::new(255, 0, 0));
        assert_eq!(source.color_at(1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn rainbow_sweeps_hue() {
        let source = ColorSource::rainbow();
        assert_eq!(source.color_at(0.0), Rgb::new(255, 0, 0));
        // A third of the way round is green.
        assert_eq!(source.color_at(1.0 / 3.0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn filter_selection() {
        assert!(TargetFilter::ContentOnly.includes(false));
        assert!(!TargetFilter::ContentOnly.includes(true));
        assert!(TargetFilter::BorderOnly.includes(true));
        assert!(TargetFilter::Both.includes(true));
        assert!(TargetFilter::Both.includes(false));
    }

    #[test]
    fn parse_names() {
        assert_eq!(
            PositionStrategy::parse("Diagonal").unwrap(),
            PositionStrategy::Diagonal
        );
        assert_eq!(TargetFilter::parse("BORDER").unwrap(), TargetFilter::BorderOnly);
        assert_eq!(Easing::parse("ease-in-out").unwrap(), Easing::EaseInOut);
        assert!(matches!(
            PositionStrategy::parse("spiral"),
            Err(ConfigurationError::UnknownVariant { .. })
        ));
    }
}
