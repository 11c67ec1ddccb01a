//! Tick Tetris (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tick_tetris::{core,input,term,types}` and adds the
//! binary's runtime configuration and logging setup.

pub mod config;
pub mod logging;

pub use tick_tetris_core as core;
pub use tick_tetris_input as input;
pub use tick_tetris_term as term;
pub use tick_tetris_types as types;

pub use config::RunConfig;
pub use logging::init_logging;
