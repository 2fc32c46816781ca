//! Active piece controller
//!
//! A [`Tetromino`] carries absolute mino coordinates plus the pivot they rotate
//! around. Movement is all-or-nothing: a translation that would leave the board
//! or overlap a filled cell is not applied.

use crate::board::Board;
use crate::pieces::{get_shape, kick_candidates};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Pivot of a freshly spawned piece: horizontally centered, at mid-height
pub const SPAWN_PIVOT: (i8, i8) = (BOARD_WIDTH as i8 / 2 - 1, BOARD_HEIGHT as i8 / 2);

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub pivot: (i8, i8),
    pub minos: [(i8, i8); 4],
}

impl Tetromino {
    /// Create a new tetromino at the spawn pivot
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_PIVOT)
    }

    /// Create a tetromino in spawn orientation around `pivot`
    pub fn at(kind: PieceKind, pivot: (i8, i8)) -> Self {
        let (px, py) = pivot;
        Self {
            kind,
            rotation: Rotation::North,
            pivot,
            minos: get_shape(kind).map(|(dx, dy)| (px + dx, py + dy)),
        }
    }

    /// True if any mino is out of bounds or on a filled cell
    pub fn overlaps(&self, board: &Board) -> bool {
        self.minos.iter().any(|&(x, y)| !board.is_free(x, y))
    }

    /// Shift the piece by (dx, dy).
    /// Returns true if the move collided, in which case nothing changed.
    pub fn translate(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let moved = self
            .minos
            .map(|(x, y)| (x.saturating_add(dx), y.saturating_add(dy)));

        if moved.iter().any(|&(x, y)| !board.is_free(x, y)) {
            return true;
        }

        self.minos = moved;
        self.pivot = (self.pivot.0.saturating_add(dx), self.pivot.1.saturating_add(dy));
        false
    }

    /// Rotate the minos a quarter turn about the pivot.
    ///
    /// Only geometry changes; `rotation` is updated by [`Tetromino::try_rotate`]
    /// once a kick candidate fits.
    pub fn rotate(&mut self, clockwise: bool) {
        let (px, py) = self.pivot;
        for mino in &mut self.minos {
            let (x, y) = *mino;
            *mino = if clockwise {
                (y - py + px, px - x + py)
            } else {
                (py - y + px, x - px + py)
            };
        }
    }

    /// Rotate with SRS kicks.
    ///
    /// Tries each kick candidate for the transition in order and keeps the first
    /// that fits. Returns true if every candidate collided; the piece is then
    /// exactly as it was before the call.
    pub fn try_rotate(&mut self, board: &Board, clockwise: bool) -> bool {
        let from = self.rotation;
        let to = if clockwise {
            from.rotate_cw()
        } else {
            from.rotate_ccw()
        };

        self.rotate(clockwise);

        for (dx, dy) in kick_candidates(self.kind, from.index(), to.index()) {
            if !self.translate(board, dx, dy) {
                self.rotation = to;
                return false;
            }
        }

        self.rotate(!clockwise);
        true
    }

    /// Drop straight down until resting. Returns the number of rows fallen.
    pub fn drop_to_floor(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while !self.translate(board, 0, -1) {
            rows += 1;
        }
        rows
    }
}
