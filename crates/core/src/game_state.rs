//! Game state module - the engine a host drives one action at a time
//!
//! [`Game`] ties together the board, the active piece, the bag queue, the hold
//! slot and a scoring rule. Every operation is synchronous and total: collisions
//! and rejected rotations are ordinary `bool` results, and reaching
//! [`GameStatus::Blockout`] is a state, not an error. Once the game has left
//! `Playing`, every mutating operation is a no-op.

use crate::board::Board;
use crate::rng::PieceQueue;
use crate::scoring::{ClassicScoring, LockEvent, ScoringRule};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::Tetromino;
use crate::types::{CellKind, GameAction, GameStatus, PieceKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<S = ClassicScoring> {
    board: Board,
    active: Tetromino,
    queue: PieceQueue,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    lines: u32,
    status: GameStatus,
    last_lock: Option<LockEvent>,
    scoring: S,
}

impl Game {
    /// New game on an empty board, seeded from OS entropy
    pub fn new() -> Self {
        Self::from_parts(Board::new(), PieceQueue::from_entropy(), ClassicScoring::default())
    }

    /// New game on an empty board with a reproducible piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(Board::new(), PieceQueue::new(seed), ClassicScoring::default())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScoringRule> Game<S> {
    /// Assemble a game from a prepared board, queue and scoring rule.
    ///
    /// The first piece is drawn immediately; if it overlaps the board the game
    /// starts in `Blockout`.
    pub fn from_parts(board: Board, mut queue: PieceQueue, scoring: S) -> Self {
        let active = Tetromino::spawn(queue.draw());
        let status = if active.overlaps(&board) {
            GameStatus::Blockout
        } else {
            GameStatus::Playing
        };

        Self {
            board,
            active,
            queue,
            hold: None,
            can_hold: true,
            score: 0,
            lines: 0,
            status,
            last_lock: None,
            scoring,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    /// Take and clear the most recent lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Drop the piece until it rests, lock it, clear lines and draw the next piece.
    pub fn hard_drop(&mut self) {
        if !self.is_playing() {
            return;
        }

        let drop_rows = self.active.drop_to_floor(&self.board);
        self.board
            .stamp(&self.active.minos, CellKind::from(self.active.kind));

        let lines_cleared = self.board.clear_full_rows();
        self.lines = self.lines.saturating_add(lines_cleared);

        let event = LockEvent {
            drop_rows,
            lines_cleared,
        };
        let points = self.scoring.on_lock(&event);
        self.score = self.score.saturating_add(points);
        self.last_lock = Some(event);

        let next = self.queue.draw();
        self.spawn(next);
        self.can_hold = true;
    }

    /// Move the piece down `rows` rows in one step. Never locks.
    /// Returns true if the piece moved.
    pub fn soft_drop(&mut self, rows: u8) -> bool {
        if !self.is_playing() || rows == 0 {
            return false;
        }
        let dy = i8::try_from(rows).unwrap_or(i8::MAX);
        !self.active.translate(&self.board, 0, -dy)
    }

    /// Move the piece sideways one column at a time, stopping at the first
    /// obstruction. Returns the number of columns actually moved.
    pub fn move_piece(&mut self, columns: i8) -> u8 {
        if !self.is_playing() {
            return 0;
        }

        let dir = columns.signum();
        let mut moved = 0;
        for _ in 0..columns.unsigned_abs() {
            if self.active.translate(&self.board, dir, 0) {
                break;
            }
            moved += 1;
        }
        moved
    }

    /// Rotate with wall kicks. Returns true if the rotation was rejected.
    pub fn rotate_piece(&mut self, clockwise: bool) -> bool {
        if !self.is_playing() {
            return true;
        }
        self.active.try_rotate(&self.board, clockwise)
    }

    /// Swap the active piece with the hold slot, once per lock.
    /// Returns true if a swap happened.
    pub fn swap_piece(&mut self) -> bool {
        if !self.is_playing() || !self.can_hold {
            return false;
        }

        self.queue.refill();
        let next = match self.hold.take() {
            Some(kind) => kind,
            None => self.queue.draw(),
        };

        self.hold = Some(self.active.kind);
        self.spawn(next);
        self.can_hold = false;
        true
    }

    /// Apply one host input.
    /// Returns true if the action changed the piece or the board.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.is_playing() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_piece(-1) > 0,
            GameAction::MoveRight => self.move_piece(1) > 0,
            GameAction::SoftDrop => self.soft_drop(1),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => !self.rotate_piece(true),
            GameAction::RotateCcw => !self.rotate_piece(false),
            GameAction::Hold => self.swap_piece(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_rows(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.queue.clear();
        out.queue.extend(self.queue.iter());
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn spawn(&mut self, kind: PieceKind) {
        self.active = Tetromino::spawn(kind);
        if self.active.overlaps(&self.board) {
            self.status = GameStatus::Blockout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::NoScoring;
    use crate::types::{Rotation, QUEUE_LOOKAHEAD};

    fn game_with(kinds: &[PieceKind]) -> Game {
        Game::from_parts(
            Board::new(),
            PieceQueue::with_preset(1, kinds.iter().copied()),
            ClassicScoring::default(),
        )
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::with_seed(12345);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert!(game.hold_piece().is_none());
        assert!(game.can_hold());
        assert!(game.queue().len() >= QUEUE_LOOKAHEAD);
        assert_eq!(game.active().pivot, (4, 20));
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_hard_drop_locks_and_draws() {
        let mut game = game_with(&[PieceKind::O, PieceKind::T]);
        game.hard_drop();

        assert_eq!(game.board().cell_at(4, 0), CellKind::O);
        assert_eq!(game.board().cell_at(5, 1), CellKind::O);
        assert_eq!(game.active().kind, PieceKind::T);
        assert_eq!(game.active().pivot, (4, 20));
        assert_eq!(
            game.take_last_lock(),
            Some(LockEvent {
                drop_rows: 20,
                lines_cleared: 0
            })
        );
        assert_eq!(game.take_last_lock(), None);
        assert_eq!(game.score(), 40);
    }

    #[test]
    fn test_soft_drop_moves_without_locking() {
        let mut game = game_with(&[PieceKind::T]);
        assert!(game.soft_drop(5));
        assert_eq!(game.active().pivot, (4, 15));
        assert_eq!(game.board().occupied_count(), 0);

        // Too far: rejected as a whole.
        assert!(!game.soft_drop(16));
        assert_eq!(game.active().pivot, (4, 15));
        assert!(!game.soft_drop(0));
    }

    #[test]
    fn test_move_piece_stops_at_wall() {
        let mut game = game_with(&[PieceKind::T]);
        assert_eq!(game.move_piece(-10), 3);
        assert_eq!(game.active().pivot, (1, 20));
        assert_eq!(game.move_piece(10), 7);
        assert_eq!(game.active().pivot, (8, 20));
        assert_eq!(game.move_piece(0), 0);
    }

    #[test]
    fn test_rotate_piece_updates_rotation() {
        let mut game = game_with(&[PieceKind::T]);
        assert!(!game.rotate_piece(true));
        assert_eq!(game.active().rotation, Rotation::East);
        assert!(!game.rotate_piece(false));
        assert_eq!(game.active().rotation, Rotation::North);
    }

    #[test]
    fn test_hold_first_swap_draws_from_queue() {
        let mut game = game_with(&[PieceKind::T, PieceKind::I, PieceKind::O]);
        assert!(game.swap_piece());
        assert_eq!(game.hold_piece(), Some(PieceKind::T));
        assert_eq!(game.active().kind, PieceKind::I);
        assert!(!game.can_hold());
    }

    #[test]
    fn test_hold_swaps_back_after_lock() {
        let mut game = game_with(&[PieceKind::T, PieceKind::I, PieceKind::O]);
        game.swap_piece();
        game.hard_drop();
        assert!(game.can_hold());
        assert_eq!(game.active().kind, PieceKind::O);

        assert!(game.swap_piece());
        assert_eq!(game.active().kind, PieceKind::T);
        assert_eq!(game.hold_piece(), Some(PieceKind::O));
    }

    #[test]
    fn test_swapped_piece_respawns_at_spawn() {
        let mut game = game_with(&[PieceKind::T, PieceKind::I]);
        game.move_piece(-2);
        game.rotate_piece(true);
        game.swap_piece();
        game.hard_drop();
        game.swap_piece();
        assert_eq!(game.active().kind, PieceKind::T);
        assert_eq!(game.active().rotation, Rotation::North);
        assert_eq!(game.active().pivot, (4, 20));
    }

    #[test]
    fn test_blockout_on_spawn_overlap() {
        // Stack right under the spawn row, so the I piece locks in place.
        let mut board = Board::new();
        for y in 0..20 {
            for x in 3..=6 {
                board.set_cell(x, y, CellKind::Garbage);
            }
        }
        let mut game = Game::from_parts(
            board,
            PieceQueue::with_preset(1, [PieceKind::I, PieceKind::O]),
            ClassicScoring::default(),
        );
        assert!(game.is_playing());

        game.hard_drop();

        assert_eq!(game.status(), GameStatus::Blockout);
        assert_eq!(game.active().kind, PieceKind::O);
        assert!(!game.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_terminal_state_ignores_operations() {
        let mut game = game_with(&[PieceKind::T]);
        game.status = GameStatus::Blockout;
        let before = *game.active();

        game.hard_drop();
        assert!(!game.soft_drop(1));
        assert_eq!(game.move_piece(1), 0);
        assert!(game.rotate_piece(true));
        assert!(!game.swap_piece());

        assert_eq!(*game.active(), before);
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_apply_action_routes() {
        let mut game = game_with(&[PieceKind::T, PieceKind::I]);
        assert!(game.apply_action(GameAction::MoveRight));
        assert_eq!(game.active().pivot, (5, 20));
        assert!(game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.active().pivot, (5, 19));
        assert!(game.apply_action(GameAction::RotateCcw));
        assert_eq!(game.active().rotation, Rotation::West);
        assert!(game.apply_action(GameAction::Hold));
        assert_eq!(game.active().kind, PieceKind::I);
        assert!(!game.apply_action(GameAction::Hold));
        assert!(game.apply_action(GameAction::HardDrop));
        assert_eq!(game.board().occupied_count(), 4);
    }

    #[test]
    fn test_no_scoring_rule_keeps_zero() {
        let mut game = Game::from_parts(Board::new(), PieceQueue::new(5), NoScoring);
        for _ in 0..5 {
            game.hard_drop();
        }
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_snapshot() {
        let mut game = game_with(&[PieceKind::O, PieceKind::S]);
        game.hard_drop();
        let snap = game.snapshot();

        assert_eq!(snap.board.len(), 40);
        assert_eq!(snap.board[0][4], CellKind::O.code());
        assert_eq!(snap.active.map(|a| a.kind), Some(PieceKind::S));
        assert_eq!(snap.queue.len(), game.queue().len());
        assert!(snap.playable());
        assert_eq!(snap.cell_with_active(4, 20), CellKind::S.code());
        assert_eq!(snap.cell_with_active(5, 1), CellKind::O.code());
        assert_eq!(snap.cell_with_active(0, 0), 0);
    }
}
