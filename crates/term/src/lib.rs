//! Terminal renderer for the game.
//!
//! Renders a `core::GameSnapshot` into a plain framebuffer and flushes that to
//! the terminal with crossterm. Only changed cells are rewritten after the first
//! frame, so a redraw every tick stays cheap.
//!
//! Board cells are drawn two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
