//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 14 columns (indexed 0-13)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Spawn position**: (5, 0), i.e. the 4x4 box horizontally centered on the top row
//!
//! # Game Timing
//!
//! The game advances in fixed ticks. Gravity is measured in ticks, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Wall-clock length of one tick |
//! | `INITIAL_GRAVITY_TICKS` | 20 | Ticks between forced drops at game start |
//! | `MIN_GRAVITY_TICKS` | 5 | Floor for the gravity interval |
//! | `LINES_PER_SPEEDUP` | 5 | Cleared lines per one-tick speed-up |
//! | `SCORE_PER_LINE` | 100 | Points per cleared line (linear) |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(2), Some(PieceKind::O));
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Command::HardDrop.as_str(), "hard drop");
//!
//! assert_eq!(BOARD_WIDTH, 14);
//! assert_eq!(BOARD_HEIGHT, 24);
//! ```

use std::collections::VecDeque;

/// Board width in cells (14 columns)
pub const BOARD_WIDTH: u8 = 14;

/// Board height in cells (24 rows)
pub const BOARD_HEIGHT: u8 = 24;

/// Side length of the square box every piece template lives in.
pub const PIECE_BOX: u8 = 4;

/// Spawn anchor (top-left of the 4x4 box): horizontally centered, top row.
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 2, 0);

/// Fixed tick interval in milliseconds
pub const TICK_MS: u32 = 50;

/// Gravity interval at game start, in ticks per forced drop
pub const INITIAL_GRAVITY_TICKS: u32 = 20;

/// The gravity interval never speeds up past this many ticks
pub const MIN_GRAVITY_TICKS: u32 = 5;

/// Points awarded per cleared line
pub const SCORE_PER_LINE: u32 = 100;

/// Every this many cumulative lines the gravity interval shrinks by one tick
pub const LINES_PER_SPEEDUP: u32 = 5;

/// The seven piece kinds, in template order.
///
/// The discriminant is the shape id used by the geometry tables (0-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, indexed by shape id.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Shape id (0-6)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by shape id
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(6), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_id(7), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Quarter-turn rotation states.
///
/// The cycle goes: North → East → South → West → North. Each step is a 90°
/// clockwise turn of the piece inside its 4x4 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index (0-3)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Build from any integer, taken modulo 4
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(1), Rotation::East);
    /// assert_eq!(Rotation::from_index(7), Rotation::West);
    /// ```
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Logical commands delivered by the input layer.
///
/// Keys that map to nothing become [`Command::None`] and are ignored by the
/// game, never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece 90° clockwise (no wall kicks)
    RotateCw,
    /// Drop piece one cell down
    SoftDrop,
    /// Drop piece to its lowest position and lock it this tick
    HardDrop,
    /// Pause or resume
    TogglePause,
    /// End the game immediately
    Quit,
    /// Unrecognized input
    None,
}

impl Command {
    /// Short name for log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::RotateCw => "rotate",
            Command::SoftDrop => "soft drop",
            Command::HardDrop => "hard drop",
            Command::TogglePause => "pause",
            Command::Quit => "quit",
            Command::None => "none",
        }
    }

}

/// High-level game state.
///
/// `GameOver` is terminal: nothing transitions out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Short name for log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game over",
        }
    }
}

/// Non-blocking supplier of commands, drained by the game at tick boundaries.
pub trait CommandSource {
    /// Whether at least one command is waiting
    fn has_pending(&self) -> bool;

    /// Take the oldest pending command, if any
    fn take_next(&mut self) -> Option<Command>;
}

impl CommandSource for VecDeque<Command> {
    fn has_pending(&self) -> bool {
        !self.is_empty()
    }

    fn take_next(&mut self) -> Option<Command> {
        self.pop_front()
    }
}

/// Rule parameters for one game.
///
/// Board dimensions are compile-time constants; everything else can be tuned
/// per game. [`GameConfig::default`] matches the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Ticks per forced drop at game start
    pub initial_gravity_ticks: u32,
    /// Lower bound for the gravity interval
    pub min_gravity_ticks: u32,
    /// Points per cleared line
    pub score_per_line: u32,
    /// Cumulative lines per one-tick speed-up
    pub lines_per_speedup: u32,
}

impl GameConfig {
    /// Override the starting gravity interval, keeping it at or above the floor.
    pub fn with_initial_gravity(mut self, ticks: u32) -> Self {
        self.initial_gravity_ticks = ticks.max(self.min_gravity_ticks).max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_gravity_ticks: INITIAL_GRAVITY_TICKS,
            min_gravity_ticks: MIN_GRAVITY_TICKS,
            score_per_line: SCORE_PER_LINE,
            lines_per_speedup: LINES_PER_SPEEDUP,
        }
    }
}
