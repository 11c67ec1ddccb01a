use crate::game_state::ActivePiece;
use crate::types::{GameStatus, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of one tick's state, handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub lines: u32,
    pub gravity_ticks: u32,
    pub gravity_counter: u32,
    pub tick: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::Playing,
            paused: false,
            game_over: false,
            score: 0,
            lines: 0,
            gravity_ticks: 0,
            gravity_counter: 0,
            tick: 0,
        }
    }
}
