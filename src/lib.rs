//! Chat Tetris (workspace facade crate).
//!
//! Re-exports the engine, host layer and shared types as
//! `chat_tetris::{core,host,types}`. The implementation lives in dedicated
//! crates under `crates/`.

pub use chat_tetris_core as core;
pub use chat_tetris_host as host;
pub use chat_tetris_types as types;
