//! Core simulation engine - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation: piece geometry,
//! movement and rotation legality, collision detection, locking and line
//! clearing. It has **zero dependencies** on UI, networking, or I/O, making
//! it:
//!
//! - **Deterministic**: the same seed and input sequence replay identically
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs headless or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: the 10x20 settled grid, the legality predicate, merging and
//!   line clearing
//! - [`pieces`]: static geometry tables (four rotation matrices per kind)
//! - [`piece`]: the active piece and its translate/rotate candidates
//! - [`game`]: the orchestrator tying board, piece, input and timers together
//! - [`rng`]: seedable LCG for piece selection
//! - [`snapshot`]: the composed-board snapshot exported to renderers
//!
//! # Tick Model
//!
//! The engine is single-threaded and cooperative. An external host drives it
//! with discrete ticks (~60 per second); all delays are tick-counted timers
//! owned by the timer collaborator. Per tick the engine reads the input
//! snapshot, applies movement, and handles gravity/lock timers through
//! explicit dispatch. Renderers read the composed snapshot after the tick.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_timer::TimerSet;
//! use blockfall_types::PressSnapshot;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! let mut timers = TimerSet::new();
//! let input = PressSnapshot::default();
//!
//! // One host tick: engine first, then fired timers.
//! game.tick(&input, &mut timers);
//! for fired in timers.tick() {
//!     game.dispatch(fired, &mut timers);
//! }
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.cells.len(), 20);
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ComposedGrid};
pub use game::{GameState, StepOutcome};
pub use piece::{Piece, PIECE_CELLS};
pub use pieces::{matrix, spawn_anchor, Matrix};
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
