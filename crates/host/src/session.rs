//! One hosted game: input routing and lifecycle
//!
//! A [`Session`] binds a [`Game`] to the user who started it. Button presses
//! from that user are mapped onto engine actions one at a time; presses from
//! anyone else are refused. The session finishes when the game leaves
//! `Playing`, when it has been idle past its timeout, or when it is stopped.
//! A finished session ignores all further input.
//!
//! Time is passed in by the caller so the lifecycle can be driven by any clock.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::HostConfig;
use crate::core::{ClassicScoring, Game, GameSnapshot, ScoringRule};
use crate::types::{GameAction, GameStatus};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The game reached a terminal state
    GameOver(GameStatus),
    IdleTimeout,
    /// Closed on request by its player or an owner
    Stopped,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::GameOver(status) => write!(f, "game over ({})", status.as_str()),
            FinishReason::IdleTimeout => f.write_str("idle timeout"),
            FinishReason::Stopped => f.write_str("stopped"),
        }
    }
}

/// Result of delivering one input to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Input from someone other than the player; nothing changed
    NotOwner,
    /// Not a game button; nothing changed
    UnknownButton,
    /// The action was applied and the game goes on
    Updated(GameSnapshot),
    /// The session ended with this call
    Finished {
        snapshot: GameSnapshot,
        reason: FinishReason,
    },
    /// The session had already ended
    Closed,
}

#[derive(Debug, Clone)]
pub struct Session<S = ClassicScoring> {
    game: Game<S>,
    player: String,
    idle_timeout: Duration,
    deadline: Instant,
    finished: Option<FinishReason>,
}

impl Session {
    /// Start a session with a classic-scoring game built from `config`
    pub fn from_config(config: &HostConfig, player: impl Into<String>, now: Instant) -> Self {
        let game = match config.seed {
            Some(seed) => Game::with_seed(seed),
            None => Game::new(),
        };
        Session::new(game, player, config.idle_timeout, now)
    }
}

impl<S: ScoringRule> Session<S> {
    pub fn new(game: Game<S>, player: impl Into<String>, idle_timeout: Duration, now: Instant) -> Self {
        let finished = match game.status() {
            GameStatus::Playing => None,
            status => Some(FinishReason::GameOver(status)),
        };
        Self {
            game,
            player: player.into(),
            idle_timeout,
            deadline: now + idle_timeout,
            finished,
        }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finished
    }

    /// When the session idles out unless another input is accepted first
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Deliver a button press from `user`.
    pub fn handle(&mut self, user: &str, button: &str, now: Instant) -> SessionOutcome {
        if self.finished.is_some() {
            return SessionOutcome::Closed;
        }
        if let Some(outcome) = self.expire(now) {
            return outcome;
        }
        if user != self.player {
            return SessionOutcome::NotOwner;
        }
        let Some(action) = GameAction::from_button_id(button) else {
            return SessionOutcome::UnknownButton;
        };

        self.game.apply_action(action);
        self.deadline = now + self.idle_timeout;

        match self.game.status() {
            GameStatus::Playing => SessionOutcome::Updated(self.game.snapshot()),
            status => self.finish(FinishReason::GameOver(status)),
        }
    }

    /// Finish the session if it has idled out. Returns the final outcome when
    /// this call ended it.
    pub fn expire(&mut self, now: Instant) -> Option<SessionOutcome> {
        if self.finished.is_some() || !self.is_expired(now) {
            return None;
        }
        Some(self.finish(FinishReason::IdleTimeout))
    }

    /// Stop the session on behalf of `requester`: the player or a configured
    /// owner. Returns false if the requester may not stop it or it already ended.
    pub fn close_by(&mut self, requester: &str, config: &HostConfig) -> bool {
        if self.finished.is_some() {
            return false;
        }
        if requester != self.player && !config.is_owner(requester) {
            return false;
        }
        self.finish(FinishReason::Stopped);
        true
    }

    fn finish(&mut self, reason: FinishReason) -> SessionOutcome {
        self.finished = Some(reason);
        SessionOutcome::Finished {
            snapshot: self.game.snapshot(),
            reason,
        }
    }
}
