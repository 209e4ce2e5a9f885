#![forbid(unsafe_code)]

//! Error types for frame composition.
//!
//! Composition fails fast: the first invalid input aborts the render and
//! surfaces a typed error rather than producing a best-effort frame.

use std::fmt;

use glowbox_text::LayoutError;

/// A caller-supplied dimension or option is invalid on its face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Requested width cannot hold even the border characters.
    WidthTooSmall { width: usize, minimum: usize },
    /// `min_width` exceeds `max_width`.
    MinExceedsMax { min_width: usize, max_width: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooSmall { width, minimum } => {
                write!(f, "width {width} is below the minimum of {minimum}")
            }
            Self::MinExceedsMax {
                min_width,
                max_width,
            } => {
                write!(f, "min_width {min_width} exceeds max_width {max_width}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A named option does not resolve to anything known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Border style name matched no registered or built-in set.
    UnknownBorderStyle { name: String },
    /// A named enum-like option (alignment, strategy) was not recognized.
    UnknownVariant { what: &'static str, name: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBorderStyle { name } => {
                write!(f, "unknown border style {name:?}")
            }
            Self::UnknownVariant { what, name } => {
                write!(f, "unknown {what} {name:?}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Any failure surfaced by [`FrameComposer::render`](crate::FrameComposer::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    Validation(ValidationError),
    Configuration(ConfigurationError),
    Layout(LayoutError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid frame dimensions: {e}"),
            Self::Configuration(e) => write!(f, "invalid frame configuration: {e}"),
            Self::Layout(e) => write!(f, "frame layout failed: {e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Configuration(e) => Some(e),
            Self::Layout(e) => Some(e),
        }
    }
}

impl From<ValidationError> for FrameError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigurationError> for FrameError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<LayoutError> for FrameError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
