//! Press accumulation for the tick loop.
//!
//! Terminal key events arrive between ticks; the handler folds them into a
//! [`PressSnapshot`] meaning "pressed since the last tick". The engine reads
//! the snapshot once per tick and the host calls [`InputHandler::end_tick`]
//! afterwards, so a single keystroke acts on exactly one tick.

use crossterm::event::KeyEvent;

use blockfall_types::PressSnapshot;

use crate::map::decode_key;

/// Accumulates decoded key presses between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    state: PressSnapshot,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a key event into the current tick's snapshot.
    ///
    /// Unbound keys are ignored. Holding a key relies on terminal
    /// auto-repeat, so repeat events should be fed here as well.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(direction) = decode_key(key) {
            self.state.press(direction);
        }
    }

    /// The snapshot the engine polls this tick.
    pub fn snapshot(&self) -> &PressSnapshot {
        &self.state
    }

    /// Reset the snapshot once the tick has been processed.
    pub fn end_tick(&mut self) {
        self.state.clear();
    }
}
