use serde::{Deserialize, Serialize};

use crate::tetromino::Tetromino;
use crate::types::{GameStatus, PieceKind, Rotation, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub pivot: (i8, i8),
    pub minos: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            pivot: value.pivot,
            minos: value.minos,
        }
    }
}

/// Read-only copy of everything a renderer or host needs after an action
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cell codes, bottom row first
    pub board: Vec<[u8; BOARD_WIDTH as usize]>,
    pub active: Option<ActiveSnapshot>,
    pub queue: Vec<PieceKind>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Code of the cell at (x, y), counting the active piece as filled
    pub fn cell_with_active(&self, x: usize, y: usize) -> u8 {
        if let Some(active) = &self.active {
            if active
                .minos
                .iter()
                .any(|&(mx, my)| mx as usize == x && my as usize == y)
            {
                return crate::types::CellKind::from(active.kind).code();
            }
        }
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }
}
