//! Game state orchestrator: owns the settled board, the active piece and the
//! lock-delay flag, and drives the per-tick sequence.
//!
//! All state is held explicitly on [`GameState`] and mutated only through its
//! methods; there is no module-level state. Delays are armed on the external
//! [`TimerSet`] collaborator, keyed by the closed [`TimerKind`] vocabulary,
//! and the host dispatches fired kinds back through [`GameState::dispatch`].

use blockfall_timer::TimerSet;
use blockfall_types::{
    Direction, PressSnapshot, Shift, TimerKind, BASE_GRAVITY_TICKS, LOCK_GRACE_TICKS,
};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;

/// Result of one downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece descended one row.
    Moved,
    /// The descent was blocked and the piece locked on this tick.
    Locked,
    /// The descent was blocked but lock-delay is in effect; the grace timer
    /// is armed and the piece may still be adjusted.
    Pending,
}

/// The complete simulation state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Permanently locked cells; never replaced, only merged into and
    /// row-compacted.
    board: Board,
    /// The falling piece. `None` only in the brief window between lock and
    /// respawn, and before [`GameState::start`].
    active: Option<Piece>,
    /// True once the piece has been moved or rotated without confirming a
    /// downward resting position; gates immediate lock vs. grace period.
    lock_delay: bool,
    /// Speed level; shortens the gravity interval. Fixed at 0 for now.
    game_speed: u32,
    rng: SimpleRng,
}

impl GameState {
    /// New session: empty settled board, no active piece yet.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            lock_delay: false,
            game_speed: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Spawn the first piece. Idempotent.
    pub fn start(&mut self) {
        if self.active.is_none() {
            self.spawn();
        }
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lock_delay(&self) -> bool {
        self.lock_delay
    }

    /// Current gravity interval in ticks.
    pub fn gravity_ticks(&self) -> u32 {
        BASE_GRAVITY_TICKS - self.game_speed
    }

    /// Advance one tick: arm gravity if absent, then apply this tick's input
    /// snapshot in fixed order (left, right, down, up = rotate clockwise).
    ///
    /// Without an active piece this is a no-op; lock always respawns, so the
    /// pieceless state only exists before [`GameState::start`].
    pub fn tick(&mut self, input: &PressSnapshot, timers: &mut TimerSet) {
        if self.active.is_none() {
            return;
        }

        if !timers.has(TimerKind::Gravity) {
            timers.set(TimerKind::Gravity, self.gravity_ticks());
        }

        if input.pressed(Direction::Left) {
            self.shift(Shift::Left, timers);
        }
        if input.pressed(Direction::Right) {
            self.shift(Shift::Right, timers);
        }
        if input.pressed(Direction::Down) {
            self.step_down(timers);
        }
        if input.pressed(Direction::Up) {
            self.rotate(true, timers);
        }
    }

    /// Handle a fired timer. The vocabulary is closed, so dispatch is
    /// exhaustive: gravity steps the piece down, an expired grace period
    /// locks it.
    pub fn dispatch(&mut self, fired: TimerKind, timers: &mut TimerSet) {
        match fired {
            TimerKind::Gravity => {
                self.step_down(timers);
            }
            TimerKind::LockGrace => self.lock(timers),
        }
    }

    /// Attempt one downward step, from gravity or a manual down press.
    ///
    /// Stops the gravity timer first; the next tick re-arms it, which
    /// restarts the interval after every step. Returns `None` when there is
    /// no active piece (benign: the window between lock and respawn).
    pub fn step_down(&mut self, timers: &mut TimerSet) -> Option<StepOutcome> {
        timers.stop(TimerKind::Gravity);

        let active = self.active?;
        let candidate = active.translated(Shift::Down);

        if self.board.is_legal(candidate.cells()) {
            self.active = Some(candidate);
            self.lock_delay = false;
            // The piece is falling again; a pending grace lock is stale.
            timers.stop(TimerKind::LockGrace);
            return Some(StepOutcome::Moved);
        }

        if !self.lock_delay {
            self.lock(timers);
            return Some(StepOutcome::Locked);
        }

        if !timers.has(TimerKind::LockGrace) {
            timers.set(TimerKind::LockGrace, LOCK_GRACE_TICKS);
        }
        Some(StepOutcome::Pending)
    }

    /// Attempt a lateral shift. Illegal candidates are discarded silently.
    ///
    /// A successful shift sets lock-delay and cancels any pending grace
    /// timer: the piece moved, so the old countdown no longer describes its
    /// resting position.
    fn shift(&mut self, shift: Shift, timers: &mut TimerSet) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.translated(shift);
        if !self.board.is_legal(candidate.cells()) {
            return false;
        }

        self.active = Some(candidate);
        self.lock_delay = true;
        timers.stop(TimerKind::LockGrace);
        true
    }

    /// Attempt a rotation, same commit protocol as [`GameState::shift`].
    ///
    /// No wall kicks: if the naive rotated placement collides, the rotation
    /// is rejected outright.
    fn rotate(&mut self, clockwise: bool, timers: &mut TimerSet) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotated(clockwise);
        if !self.board.is_legal(candidate.cells()) {
            return false;
        }

        self.active = Some(candidate);
        self.lock_delay = true;
        timers.stop(TimerKind::LockGrace);
        true
    }

    /// Merge the active piece into the settled board, clear any completed
    /// rows and spawn the next piece.
    fn lock(&mut self, timers: &mut TimerSet) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(active.cells(), active.kind);
        self.board.clear_full_rows();

        self.lock_delay = false;
        timers.stop(TimerKind::LockGrace);
        // The next piece starts a fresh gravity interval.
        timers.stop(TimerKind::Gravity);

        self.spawn();
    }

    /// Spawn a random piece at its spawn anchor.
    fn spawn(&mut self) {
        let piece = Piece::spawn(self.rng.next_kind());
        // Spawn geometry keeps every cell above the grid, so this cannot
        // collide with settled cells; a failure here is state corruption.
        assert!(
            self.board.is_legal(piece.cells()),
            "spawned piece overlaps the settled board"
        );
        self.active = Some(piece);
    }

    /// Write the composed board (settled cells + active piece) into `out`.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        let active: &[(i8, i8)] = match &self.active {
            Some(piece) => piece.cells(),
            None => &[],
        };
        self.board.compose_into(active, &mut out.cells);
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut out = BoardSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    #[cfg(test)]
    fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}
