//! Shared types - data structures and constants used by every crate
//!
//! All types here are plain data with no behavior beyond conversions, so they can
//! be used by the engine, the host layer and snapshot consumers alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (x = 0..9, left to right)
//! - **Height**: 40 rows (y = 0..39, bottom to top)
//!
//! The board is twice as tall as the usual visible play area so freshly spawned
//! pieces have headroom above the stack.
//!
//! # Examples
//!
//! ```
//! use chat_tetris_types::{CellKind, GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(CellKind::from(piece), CellKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//!
//! let action = GameAction::from_button_id("rotate-right").unwrap();
//! assert_eq!(action, GameAction::RotateCw);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 40);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (40 rows, including spawn headroom)
pub const BOARD_HEIGHT: u8 = 40;

/// Number of pieces in one randomizer bag
pub const BAG_SIZE: usize = 7;

/// The queue is refilled whenever it holds this many pieces or fewer
pub const QUEUE_LOOKAHEAD: usize = 4;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Combo scoring base value (50 points per combo step)
pub const COMBO_BASE: u32 = 50;

/// Back-to-back bonus numerator (3/2 = 1.5x multiplier)
pub const B2B_NUMERATOR: u32 = 3;

/// Back-to-back bonus denominator
pub const B2B_DENOMINATOR: u32 = 2;

/// Contents of one board cell.
///
/// The discriminants are the codes used in board snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Empty = 0,
    I = 1,
    L = 2,
    J = 3,
    S = 4,
    Z = 5,
    T = 6,
    O = 7,
    Garbage = 8,
}

impl CellKind {
    pub fn is_empty(self) -> bool {
        self == CellKind::Empty
    }

    /// Snapshot code of this cell
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellKind::Empty),
            1 => Some(CellKind::I),
            2 => Some(CellKind::L),
            3 => Some(CellKind::J),
            4 => Some(CellKind::S),
            5 => Some(CellKind::Z),
            6 => Some(CellKind::T),
            7 => Some(CellKind::O),
            8 => Some(CellKind::Garbage),
            _ => None,
        }
    }
}

/// The seven tetromino kinds (the rotatable subset of [`CellKind`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    L,
    J,
    S,
    Z,
    T,
    O,
}

impl PieceKind {
    /// Every kind once, in catalog order
    pub const ALL: [PieceKind; BAG_SIZE] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::O,
    ];
}

impl From<PieceKind> for CellKind {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => CellKind::I,
            PieceKind::L => CellKind::L,
            PieceKind::J => CellKind::J,
            PieceKind::S => CellKind::S,
            PieceKind::Z => CellKind::Z,
            PieceKind::T => CellKind::T,
            PieceKind::O => CellKind::O,
        }
    }
}

/// Rotation states (North = spawn orientation, index 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotation index 0..=3 used by the kick tables
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Discrete inputs a host can feed into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
}

impl GameAction {
    /// Parse a chat button identifier (`hard-drop`, `rotate-left`, ...)
    pub fn from_button_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "move-left" => Some(GameAction::MoveLeft),
            "move-right" => Some(GameAction::MoveRight),
            "soft-drop" => Some(GameAction::SoftDrop),
            "hard-drop" => Some(GameAction::HardDrop),
            "rotate-right" => Some(GameAction::RotateCw),
            "rotate-left" => Some(GameAction::RotateCcw),
            "hold" | "swap" => Some(GameAction::Hold),
            _ => None,
        }
    }

    pub fn as_button_id(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "move-left",
            GameAction::MoveRight => "move-right",
            GameAction::SoftDrop => "soft-drop",
            GameAction::HardDrop => "hard-drop",
            GameAction::RotateCw => "rotate-right",
            GameAction::RotateCcw => "rotate-left",
            GameAction::Hold => "hold",
        }
    }
}

/// Game lifecycle state. `Lockout` and `Blockout` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    /// Reserved; no engine operation enters this state.
    Lockout,
    /// A freshly spawned piece overlapped the stack.
    Blockout,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Lockout => "lockout",
            GameStatus::Blockout => "blockout",
        }
    }
}
