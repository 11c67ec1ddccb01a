//! Terminal Tetris runner (default binary).
//!
//! A listener thread turns key presses into commands; the main thread runs the
//! fixed-tick loop: drain commands and apply gravity, render, sleep to the next
//! tick boundary.

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use tick_tetris::core::{GameSnapshot, GameState};
use tick_tetris::input::{spawn_listener, CommandQueue};
use tick_tetris::term::{FrameBuffer, GameView, TerminalRenderer};
use tick_tetris::{init_logging, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_logging(path, config.log_level)?;
    }
    info!(
        "starting: seed={} tick_ms={} gravity_ticks={}",
        config.seed, config.tick_ms, config.game.initial_gravity_ticks
    );

    let mut game = GameState::with_config(config.game, config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("terminal restore failed: {err:#}");
    }
    result?;

    info!(
        "finished: score={} lines={} ticks={}",
        game.score(),
        game.lines(),
        game.ticks()
    );
    println!("Game Over! Your score: {}", game.score());
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, config: &RunConfig) -> Result<()> {
    let (sender, mut queue) = CommandQueue::channel();
    let _listener = spawn_listener(sender).context("spawn input listener")?;

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick_duration();
    let mut next_tick = Instant::now() + tick;

    loop {
        game.tick(&mut queue);

        game.snapshot_into(&mut snap);
        view.render_into(&snap, term.viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if game.game_over() {
            return Ok(());
        }

        // Sleep to the next boundary; if we fell behind, start over from now.
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
            next_tick += tick;
        } else {
            next_tick = now + tick;
        }
    }
}
