//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the falling-block engine. It has **no dependencies** on any
//! chat platform, terminal or network code; a host feeds it discrete actions and
//! reads snapshots back out.
//!
//! # Module Structure
//!
//! - [`board`]: 10x40 grid with row-full test and cascading line clears
//! - [`pieces`]: spawn shapes and SRS offset (kick) tables
//! - [`rng`]: 7-bag piece queue with at least four pieces of lookahead
//! - [`tetromino`]: the active piece - translate, rotate, kick resolution
//! - [`scoring`]: pluggable [`ScoringRule`]s
//! - [`game_state`]: the [`Game`] engine: drops, moves, rotation, hold
//! - [`snapshot`]: serializable read-only view of a game
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: each run of seven queued pieces holds every kind once
//! - **SRS Rotation**: five kick candidates for I and JLSTZ, one for O
//! - **Hard drop locks**: there is no gravity or lock delay; a piece locks only
//!   when hard-dropped
//! - **Hold**: once per lock; a swap never re-enables holding
//! - **Blockout**: a spawned piece overlapping the stack ends the game
//!
//! # Example
//!
//! ```
//! use chat_tetris_core::Game;
//! use chat_tetris_types::{GameAction, GameStatus};
//!
//! let mut game = Game::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use chat_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::Game;
pub use pieces::{get_kick_table, get_shape, kick_candidates};
pub use rng::PieceQueue;
pub use scoring::{ClassicScoring, LockEvent, NoScoring, ScoringRule};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::{Tetromino, SPAWN_PIVOT};
