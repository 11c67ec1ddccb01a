//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Commands come from any [`CommandSource`](types::CommandSource),
//!   e.g. a `VecDeque<Command>`
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: seven 4x4 templates and the closed-form rotation index map
//! - [`board`]: 14x24 occupancy grid with fit queries, locking and line clearing
//! - [`game_state`]: active piece, score, gravity and the playing/paused/over machine
//! - [`rng`]: injectable piece sources (seeded uniform, scripted)
//! - [`snapshot`]: read-only per-tick view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn draws one of the seven kinds with equal odds
//! - **Naive rotation**: clockwise only, in place, no wall kicks
//! - **No lock delay**: a piece locks on the first forced drop it cannot make
//! - **Scoring**: 100 points per cleared line, linear
//! - **Speed**: gravity interval shrinks by one tick every 5 lines, down to 5 ticks
//!
//! # Example
//!
//! ```
//! use std::collections::VecDeque;
//!
//! use tick_tetris_core::GameState;
//! use tick_tetris_types::Command;
//!
//! let mut game = GameState::new(12345);
//! let mut input: VecDeque<Command> = [Command::Right, Command::HardDrop].into();
//!
//! let outcome = game.tick(&mut input);
//! assert!(outcome.locked);
//! assert!(input.is_empty());
//! ```
//!
//! # Timing
//!
//! The game is tick-driven: call [`GameState::tick`](game_state::GameState::tick)
//! once per fixed interval (see [`types::TICK_MS`]). Gravity counts ticks, so the
//! core never reads a clock.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, CommandEffect, GameState, TickOutcome};
pub use pieces::{get_shape, occupied};
pub use rng::{PieceSource, ScriptedPieces, UniformPieces};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
