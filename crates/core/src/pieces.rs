//! Piece geometry tables.
//!
//! Every kind has four pre-defined rotation matrices in bounding-box form;
//! rotation is a table lookup, never a runtime transform. Matrices are 0/1
//! grids whose dimensions drive the spawn anchor: a piece spawns horizontally
//! centered and fully above the visible grid.

use blockfall_types::{PieceKind, Rotation};

/// A rotation matrix: rows of 0/1 cells covering the piece's bounding box.
pub type Matrix = &'static [&'static [u8]];

/// Look up the rotation matrix for a kind and rotation state.
///
/// Total by construction: every `(kind, rotation)` pair is defined.
pub fn matrix(kind: PieceKind, rotation: Rotation) -> Matrix {
    let table: &[Matrix; 4] = match kind {
        PieceKind::I => &I_MATRICES,
        PieceKind::O => &O_MATRICES,
        PieceKind::T => &T_MATRICES,
        PieceKind::S => &S_MATRICES,
        PieceKind::Z => &Z_MATRICES,
        PieceKind::J => &J_MATRICES,
        PieceKind::L => &L_MATRICES,
    };
    table[rotation.index()]
}

/// Spawn anchor for a kind: horizontally centered against the 10-wide board
/// (`x = 6 - width / 2`), vertically just above the visible grid
/// (`y = -height`). Spawn can therefore never overlap settled cells.
pub fn spawn_anchor(kind: PieceKind) -> (i8, i8) {
    let m = matrix(kind, Rotation::R0);
    let width = m[0].len() as i8;
    let height = m.len() as i8;
    (6 - width / 2, -height)
}

const I_MATRICES: [Matrix; 4] = [
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const O_MATRICES: [Matrix; 4] = [
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
];

const T_MATRICES: [Matrix; 4] = [
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const S_MATRICES: [Matrix; 4] = [
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const Z_MATRICES: [Matrix; 4] = [
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

const J_MATRICES: [Matrix; 4] = [
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const L_MATRICES: [Matrix; 4] = [
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];
