//! The active piece: kind, rotation and anchor, plus its derived coordinates.

use blockfall_types::{PieceKind, Rotation, Shift};

use crate::pieces::{matrix, spawn_anchor};

/// Every piece occupies exactly four cells.
pub const PIECE_CELLS: usize = 4;

/// The controllable falling piece.
///
/// The absolute coordinates it occupies are derived from the geometry table
/// and cached on construction, so candidates built by [`Piece::translated`]
/// and [`Piece::rotated`] always carry coordinates consistent with their
/// anchor and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column of the bounding box.
    pub x: i8,
    /// Anchor row of the bounding box; negative while above the visible grid.
    pub y: i8,
    cells: [(i8, i8); PIECE_CELLS],
}

impl Piece {
    /// New piece at its spawn anchor: horizontally centered, fully above the
    /// visible grid.
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_anchor(kind);
        Self::at(kind, Rotation::R0, x, y)
    }

    /// Piece at an explicit anchor and rotation, with coordinates derived
    /// from the geometry table.
    pub fn at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        let mut cells = [(0i8, 0i8); PIECE_CELLS];
        let mut filled = 0;

        for (row, line) in matrix(kind, rotation).iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell != 0 {
                    cells[filled] = (x + col as i8, y + row as i8);
                    filled += 1;
                }
            }
        }
        debug_assert_eq!(filled, PIECE_CELLS);

        Self {
            kind,
            rotation,
            x,
            y,
            cells,
        }
    }

    /// Absolute coordinates occupied by the piece.
    pub fn cells(&self) -> &[(i8, i8); PIECE_CELLS] {
        &self.cells
    }

    /// Candidate shifted by one cell. Legality is the caller's concern.
    pub fn translated(&self, shift: Shift) -> Self {
        let (dx, dy) = shift.delta();
        Self::at(self.kind, self.rotation, self.x + dx, self.y + dy)
    }

    /// Candidate rotated one step around the anchor.
    ///
    /// No wall kicks: a rotation that would collide is rejected by the caller
    /// rather than nudged into place.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self::at(self.kind, rotation, self.x, self.y)
    }
}
