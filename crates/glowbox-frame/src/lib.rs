#![forbid(unsafe_code)]

//! Bordered frame composition for glowbox.
//!
//! [`FrameComposer`] wraps styled content lines in a box drawn from a
//! [`BorderSet`], handling width resolution, interior padding, alignment,
//! embedded titles and divider rows. Border styles are resolved by name
//! through a [`BorderRegistry`].
//!
//! ```
//! use glowbox_frame::FrameComposer;
//! use glowbox_text::Alignment;
//!
//! let frame = FrameComposer::new()
//!     .line("Hi")
//!     .width(10)
//!     .align(Alignment::Center)
//!     .render()
//!     .unwrap();
//! assert_eq!(frame.lines()[1], "│   Hi   │");
//! ```

pub mod border;
pub mod error;
pub mod frame;

pub use border::{BorderRegistry, BorderSet};
pub use error::{ConfigurationError, FrameError, ValidationError};
pub use frame::{Frame, FrameComposer, FrameItem, parse_alignment};
