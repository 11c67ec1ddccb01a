//! Runtime configuration read from the environment.

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::types::{GameConfig, INITIAL_GRAVITY_TICKS, TICK_MS};

/// Settings for one run of the binary.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Seed for the piece randomizer.
    pub seed: u64,
    pub tick_ms: u64,
    pub game: GameConfig,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS as u64,
            game: GameConfig::default(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl RunConfig {
    /// Read `TETRIS_*` variables. Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(TICK_MS as u64);

        let gravity = lookup("TETRIS_GRAVITY_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(INITIAL_GRAVITY_TICKS);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("TETRIS_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            seed,
            tick_ms,
            game: GameConfig::default().with_initial_gravity(gravity),
            log_path,
            log_level,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
