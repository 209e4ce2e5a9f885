#![forbid(unsafe_code)]

//! Gradient recoloring for styled lines and rendered frames.
//!
//! A gradient is assembled from three independent choices:
//! - [`PositionStrategy`] — where each cell sits in `[0, 1]`
//! - [`ColorSource`] — what color a position maps to
//! - [`TargetFilter`] — which cells get recolored
//!
//! plus an optional [`Easing`] curve. [`apply`] recolors styled lines in
//! place of their foreground while leaving attributes like bold intact;
//! [`apply_to_frame`] does the same over a rendered [`Frame`](glowbox_frame::Frame).
//!
//! ```
//! use glowbox_gradient::{ColorSource, GradientSpec, apply};
//! use glowbox_frame::BorderSet;
//! use glowbox_style::Rgb;
//! use glowbox_text::StyledLine;
//!
//! let spec = GradientSpec::new(ColorSource::TwoStop {
//!     start: Rgb::new(255, 0, 0),
//!     end: Rgb::new(0, 0, 255),
//! });
//! let out = apply(&[StyledLine::raw("hello")], &spec, &BorderSet::SOLID);
//! assert_eq!(out[0].plain(), "hello");
//! ```

pub mod apply;
pub mod gradient;
pub mod strategy;

pub use apply::{GradientSpec, apply, apply_to_frame};
pub use gradient::ColorGradient;
pub use strategy::{ColorSource, Easing, PositionStrategy, TargetFilter};
