//! Rendering
//!
//! `frame` turns game state into a plain draw list; `sfml_frontend` draws it
//! in a native window (behind the `window` feature).

pub mod frame;
#[cfg(feature = "window")]
pub mod sfml_frontend;

pub use frame::{Frame, ObstacleSprite, SheetFrame, sheet_frame};
#[cfg(feature = "window")]
pub use sfml_frontend::SfmlFrontend;
