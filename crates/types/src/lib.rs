//! Shared data types and constants for the simulation.
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used from the engine, the timer scheduler, the input decoder and the
//! terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Pieces spawn fully above the visible grid (negative y) and fall into it.
//!
//! # Timing
//!
//! Time advances in discrete ticks driven by the host loop at roughly 60 per
//! second. All in-game delays are counted in ticks, never in wall-clock time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host loop interval (~60 ticks/s) |
//! | `BASE_GRAVITY_TICKS` | 20 | Gravity interval at speed 0 (`20 - speed`) |
//! | `LOCK_GRACE_TICKS` | 30 | Grace period before a held piece locks |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host loop interval in milliseconds (16ms ≈ 60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Gravity interval in ticks at game speed 0.
///
/// The effective interval is `BASE_GRAVITY_TICKS - game_speed`.
pub const BASE_GRAVITY_TICKS: u32 = 20;

/// Grace period in ticks before a piece in lock-delay finally locks.
pub const LOCK_GRACE_TICKS: u32 = 30;

/// The seven piece kinds
///
/// The shape catalogue is a fixed table (see the geometry tables in the core
/// crate); kinds are never derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalogue order. Used for random draws at spawn.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// The four discrete rotation states, cyclic under cw/ccw.
///
/// `R0` is the spawn orientation. The cycle goes R0 → R1 → R2 → R3 → R0
/// clockwise; counter-clockwise walks it in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R3,
            Rotation::R3 => Rotation::R2,
            Rotation::R2 => Rotation::R1,
            Rotation::R1 => Rotation::R0,
        }
    }

    /// Index into a per-kind table of four rotation matrices.
    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }
}

/// Directional input vocabulary.
///
/// `Up` means rotate clockwise; the other three translate the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Unit translations a piece can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Left,
    Right,
    Down,
}

impl Shift {
    /// Unit vector for this translation.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Shift::Left => (-1, 0),
            Shift::Right => (1, 0),
            Shift::Down => (0, 1),
        }
    }
}

/// Per-tick snapshot of which directions were pressed since the last tick.
///
/// The input collaborator fills this from key events and resets it at the end
/// of every tick; the engine only ever reads it through
/// [`PressSnapshot::pressed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PressSnapshot {
    /// Was this direction pressed since the last tick?
    pub fn pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Record a press for this tick.
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    /// Reset all presses (end of tick).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The two named timers the engine arms on the timer collaborator.
///
/// A closed vocabulary: the engine dispatches fired timers exhaustively, so
/// there is no runtime "unknown timer" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Periodic automatic descent (`BASE_GRAVITY_TICKS - game_speed` ticks).
    Gravity,
    /// One-shot lock grace period (`LOCK_GRACE_TICKS` ticks).
    LockGrace,
}

impl TimerKind {
    pub const ALL: [TimerKind; 2] = [TimerKind::Gravity, TimerKind::LockGrace];

    /// Stable slot index for timer storage.
    pub fn index(&self) -> usize {
        match self {
            TimerKind::Gravity => 0,
            TimerKind::LockGrace => 1,
        }
    }
}

/// A cell on the settled board
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: cell filled by a locked piece
///
/// Externally the engine only ever exposes the binary composed grid; the kind
/// is kept internally so the view can color locked cells.
pub type Cell = Option<PieceKind>;
