//! Terminal rendering collaborator.
//!
//! Renders the engine's composed-board snapshot into a simple framebuffer and
//! flushes it to the terminal with crossterm. The view is pure (no I/O) so it
//! can be unit-tested; only [`TerminalRenderer`] touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
