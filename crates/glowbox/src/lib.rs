#![forbid(unsafe_code)]

//! Glowbox public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude, plus a one-call [`render`] for the common case of
//! boxing a piece of text.
//!
//! ```
//! let frame = glowbox::render("Hi", "solid", Some(10), "center").unwrap();
//! assert_eq!(frame.lines()[1], "│   Hi   │");
//! ```

// --- Style re-exports ------------------------------------------------------

pub use glowbox_style::{Attrs, ParseColorError, Rgb, Style};

// --- Text re-exports -------------------------------------------------------

pub use glowbox_text::{
    Alignment, LayoutError, StyleSpan, StyledLine, display_width, grapheme_width, graphemes,
    parse_ansi, strip_ansi,
};

// --- Frame re-exports ------------------------------------------------------

pub use glowbox_frame::{
    BorderRegistry, BorderSet, ConfigurationError, Frame, FrameComposer, FrameError, FrameItem,
    ValidationError, parse_alignment,
};

// --- Gradient re-exports ---------------------------------------------------

pub use glowbox_gradient::{
    ColorGradient, ColorSource, Easing, GradientSpec, PositionStrategy, TargetFilter, apply,
    apply_to_frame,
};

/// Render `text` inside a frame, resolving the border style and alignment
/// by name. Each line of `text` becomes one content row.
///
/// # Errors
/// [`FrameError::Configuration`] for unknown border or alignment names,
/// plus anything [`FrameComposer::render`] returns.
pub fn render(
    text: &str,
    border: &str,
    width: Option<usize>,
    align: &str,
) -> Result<Frame, FrameError> {
    let registry = BorderRegistry::new();
    let mut composer = FrameComposer::new()
        .border(registry.get(border)?)
        .align(parse_alignment(align)?)
        .line(text);
    if let Some(width) = width {
        composer = composer.width(width);
    }
    composer.render()
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, BorderRegistry, BorderSet, ColorGradient, ColorSource, Frame, FrameComposer,
        FrameError, GradientSpec, PositionStrategy, Rgb, Style, StyledLine, TargetFilter,
        display_width, strip_ansi,
    };
}
