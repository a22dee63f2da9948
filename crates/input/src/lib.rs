//! Keyboard input collaborator (engine-facing).
//!
//! Maps `crossterm` key events into the per-tick [`PressSnapshot`] the engine
//! polls. The engine never sees raw key codes: this crate owns the decode
//! table and the "pressed since last tick" accumulation, and the host resets
//! the snapshot at the end of every tick.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{decode_key, should_quit};
