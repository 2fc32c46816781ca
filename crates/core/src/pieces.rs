//! Pieces module - tetromino shapes and SRS offset tables
//!
//! Shapes are the four mino offsets around a pivot in the spawn orientation;
//! other orientations are produced by rotating about the pivot. The kick tables
//! are SRS *offset* tables: for a rotation from state `a` to state `b`, candidate
//! `i` translates the rotated piece by `offsets[a][i] - offsets[b][i]`.
//! Reference: https://tetris.wiki/SRS
//!
//! Offsets use y-up coordinates, matching the board.

use crate::types::PieceKind;

/// Offset of a single mino relative to the pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

/// Offset candidates for each rotation state (North, East, South, West)
pub type KickTable = [&'static [(i8, i8)]; 4];

/// Get the spawn-orientation shape for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        PieceKind::J => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (-1, 1), (0, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
    }
}

/// Get the offset table for a piece kind
pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_OFFSETS,
        PieceKind::I => &I_OFFSETS,
        _ => &JLSTZ_OFFSETS,
    }
}

/// O piece: a single candidate per state that keeps the square in place
const O_OFFSETS: KickTable = [&[(0, 0)], &[(0, -1)], &[(-1, -1)], &[(-1, 0)]];

/// I piece
const I_OFFSETS: KickTable = [
    &[(0, 0), (-1, 0), (2, 0), (-1, 0), (2, 0)],
    &[(-1, 0), (0, 0), (0, 0), (0, 1), (0, -2)],
    &[(-1, 1), (1, 1), (-2, 1), (1, 0), (-2, 0)],
    &[(0, 1), (0, 1), (0, 1), (0, -1), (0, 2)],
];

/// Shared by J, L, S, T, Z
const JLSTZ_OFFSETS: KickTable = [
    &[(0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    &[(0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// Translations to try, in order, when rotating from state `from` to state `to`
pub fn kick_candidates(
    kind: PieceKind,
    from: usize,
    to: usize,
) -> impl Iterator<Item = (i8, i8)> {
    let table = get_kick_table(kind);
    table[from]
        .iter()
        .zip(table[to].iter())
        .map(|(&(ax, ay), &(bx, by))| (ax - bx, ay - by))
}
