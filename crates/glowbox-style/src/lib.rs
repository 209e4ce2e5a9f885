#![forbid(unsafe_code)]

//! Style attributes and color values for glowbox.
//!
//! This crate is the leaf of the workspace: it defines [`Rgb`] color values
//! and the [`Style`] descriptor (foreground, background, attribute flags)
//! that styled text carries. Serialization to SGR escape parameters lives
//! here too, so higher layers never hand-assemble escape codes.
//!
//! # Example
//! ```
//! use glowbox_style::{Rgb, Style};
//!
//! let style = Style::new().fg(Rgb::new(255, 0, 0)).bold();
//! assert_eq!(style.sgr_params(), "1;38;2;255;0;0");
//! ```

pub mod color;

pub use color::{ParseColorError, Rgb};

use bitflags::bitflags;

bitflags! {
    /// Boolean display attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        /// Bold / increased intensity.
        const BOLD = 1;
        /// Dim / decreased intensity.
        const DIM = 1 << 1;
        /// Italic.
        const ITALIC = 1 << 2;
        /// Underline.
        const UNDERLINE = 1 << 3;
        /// Reverse video.
        const REVERSE = 1 << 4;
        /// Strikethrough.
        const STRIKETHROUGH = 1 << 5;
    }
}

/// A display style: optional colors plus attribute flags.
///
/// Styles are plain values. [`Style::merge`] combines two styles with
/// `self` winning per attribute, which is how "most recently applied wins"
/// is expressed throughout the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Rgb>,
    /// Background color, if set.
    pub bg: Option<Rgb>,
    /// Attribute flags.
    pub attrs: Attrs,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: Attrs::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= Attrs::BOLD;
        self
    }

    /// Enable dim.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.attrs |= Attrs::DIM;
        self
    }

    /// Enable italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attrs |= Attrs::ITALIC;
        self
    }

    /// Enable underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attrs |= Attrs::UNDERLINE;
        self
    }

    /// Enable reverse video.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.attrs |= Attrs::REVERSE;
        self
    }

    /// Enable strikethrough.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.attrs |= Attrs::STRIKETHROUGH;
        self
    }

    /// Merge with another style; `self` wins for conflicting properties.
    ///
    /// Colors set on `self` override `other`'s; attribute flags are unioned.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            fg: self.fg.or(other.fg),
            bg: self.bg.or(other.bg),
            attrs: self.attrs | other.attrs,
        }
    }

    /// Check if the style sets nothing at all.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Serialize to SGR parameters (the part between `ESC[` and `m`).
    ///
    /// Returns an empty string for a plain style.
    #[must_use]
    pub fn sgr_params(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        for (flag, code) in [
            (Attrs::BOLD, 1),
            (Attrs::DIM, 2),
            (Attrs::ITALIC, 3),
            (Attrs::UNDERLINE, 4),
            (Attrs::REVERSE, 7),
            (Attrs::STRIKETHROUGH, 9),
        ] {
            if self.attrs.contains(flag) {
                params.push(code.to_string());
            }
        }
        if let Some(fg) = self.fg {
            params.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
        }
        if let Some(bg) = self.bg {
            params.push(format!("48;2;{};{};{}", bg.r, bg.g, bg.b));
        }
        params.join(";")
    }
}
