//! Host layer - everything around the engine that a chat front end needs
//!
//! This crate has no transport of its own. It provides the pieces a chat bot
//! wires to its platform client:
//!
//! - [`config`]: host configuration from environment variables
//! - [`session`]: one game per player, button routing, idle timeout
//! - [`settings`]: persisted settings with explicit saves
//! - [`response_cache`]: bounded source-message → response map for edits.
//!   Only a chat front end that edits its replies needs it; the stdin runner
//!   has no message ids and does not use it.
//!
//! # Environment Variables
//!
//! - `CHAT_TETRIS_STATE_PATH`: settings file (default: "state.json")
//! - `CHAT_TETRIS_IDLE_SECS`: session idle timeout (default: 300)
//! - `CHAT_TETRIS_SEED`: fixed piece seed (default: OS entropy)
//! - `CHAT_TETRIS_OWNERS`: comma-separated owner ids
//! - `CHAT_TETRIS_USER`: player id for the stdin runner (default: "local")

pub mod config;
pub mod response_cache;
pub mod session;
pub mod settings;

pub use chat_tetris_core as core;
pub use chat_tetris_types as types;

pub use config::HostConfig;
pub use response_cache::{ResponseCache, RESPONSE_CACHE_CAPACITY};
pub use session::{FinishReason, Session, SessionOutcome};
pub use settings::{Settings, SettingsStore};
