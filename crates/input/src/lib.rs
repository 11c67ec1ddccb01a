//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and carries them from a
//! listener thread to the tick loop through a non-blocking queue.

pub mod map;
pub mod queue;

pub use tick_tetris_types as types;

pub use map::{map_event, map_key};
pub use queue::{spawn_listener, CommandQueue, CommandSender};
