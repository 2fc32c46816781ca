//! RNG module - 7-bag piece queue
//!
//! Implements the "7-bag" randomization algorithm used in modern Tetris.
//! Whenever the queue runs down to [`QUEUE_LOOKAHEAD`] pieces or fewer, a bag
//! holding one of each piece is shuffled in place and appended, so at least four
//! pieces of lookahead are always available and a partial bag is never exposed.
//!
//! Shuffling uses `rand`'s `StdRng`; a fixed seed gives a reproducible sequence.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{PieceKind, BAG_SIZE, QUEUE_LOOKAHEAD};

/// 7-bag piece generator with an ordered lookahead queue
#[derive(Debug, Clone)]
pub struct PieceQueue {
    queue: VecDeque<PieceKind>,
    rng: StdRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), [])
    }

    /// Create a piece queue seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy(), [])
    }

    /// Create a queue that deals `preset` first, then regular bags.
    pub fn with_preset(seed: u64, preset: impl IntoIterator<Item = PieceKind>) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), preset)
    }

    fn with_rng(rng: StdRng, preset: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut queue = Self {
            queue: preset.into_iter().collect(),
            rng,
        };
        queue.refill();
        queue
    }

    /// Append a shuffled bag if the queue is running low.
    /// Returns true if a bag was appended.
    pub fn refill(&mut self) -> bool {
        if self.queue.len() > QUEUE_LOOKAHEAD {
            return false;
        }

        let mut bag = PieceKind::ALL;
        bag.shuffle(&mut self.rng);
        self.queue.extend(bag);
        true
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        self.refill();
        match self.queue.pop_front() {
            Some(kind) => kind,
            None => unreachable!("refill leaves at least {} pieces queued", BAG_SIZE),
        }
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> Option<PieceKind> {
        self.queue.front().copied()
    }

    /// Peek at up to `count` upcoming pieces
    pub fn preview(&self, count: usize) -> Vec<PieceKind> {
        self.queue.iter().take(count).copied().collect()
    }

    /// Upcoming pieces in draw order
    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::from_entropy()
    }
}
