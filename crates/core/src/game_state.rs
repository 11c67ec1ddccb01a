//! Game state module - manages the complete game state
//!
//! This module ties together the board, piece geometry and the piece source.
//! It drives one fixed tick at a time: drain every pending command, then apply
//! gravity (or the lock forced by a hard drop), then spawn the next piece.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::get_shape;
use crate::rng::{PieceSource, UniformPieces};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column (left edge of the 4x4 box)
    pub x: i8,
    /// Anchor row (top edge of the 4x4 box)
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> [(i8, i8); 4] {
        get_shape(self.kind, self.rotation)
    }

    /// Check if the piece fits the board where it is
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(self.kind, self.rotation, self.x, self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn rotated(self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..self
        }
    }
}

/// What a single command did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Piece moved or rotated
    Moved,
    /// Move or rotation did not fit; nothing changed
    Blocked,
    /// Piece dropped this many rows and must lock this tick
    HardDropped(u8),
    Paused,
    Resumed,
    Quit,
    /// Not honored in the current state (e.g. movement while paused)
    Ignored,
}

/// Summary of one tick, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Commands consumed from the source
    pub commands: u32,
    /// A forced downward step (gravity or hard drop) ran
    pub forced_drop: bool,
    /// The active piece locked into the board
    pub locked: bool,
    /// Lines removed by that lock
    pub lines_cleared: u32,
    /// A new piece spawned (whether or not it fit)
    pub spawned: bool,
    /// Status after the tick
    pub status: GameStatus,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    pieces: S,
    status: GameStatus,
    score: u32,
    lines: u32,
    /// Ticks between forced drops; shrinks as lines are cleared
    gravity_ticks: u32,
    /// Ticks since the last forced drop (or unpause)
    gravity_counter: u32,
    ticks: u64,
    pieces_locked: u32,
}

impl GameState {
    /// Create a new game with default rules and the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a new game with custom rules and the given RNG seed
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::with_source(config, UniformPieces::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game on an empty board that draws pieces from `pieces`.
    pub fn with_source(config: GameConfig, pieces: S) -> Self {
        Self::with_board(config, Board::new(), pieces)
    }

    /// Create a game on a prepared board.
    ///
    /// The first piece spawns immediately; if it does not fit, the game starts
    /// (and stays) over.
    pub fn with_board(config: GameConfig, board: Board, mut pieces: S) -> Self {
        let active = ActivePiece::new(pieces.next_piece());
        let mut state = Self {
            config,
            board,
            active,
            pieces,
            status: GameStatus::Playing,
            score: 0,
            lines: 0,
            gravity_ticks: config.initial_gravity_ticks,
            gravity_counter: 0,
            ticks: 0,
            pieces_locked: 0,
        };
        if !state.active.fits(&state.board) {
            state.top_out();
        }
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn gravity_ticks(&self) -> u32 {
        self.gravity_ticks
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.status = self.status;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.score = self.score;
        out.lines = self.lines;
        out.gravity_ticks = self.gravity_ticks;
        out.gravity_counter = self.gravity_counter;
        out.tick = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Run one tick.
    ///
    /// Every pending command is drained in arrival order before gravity runs. A
    /// `Quit` stops the drain; once the game is over nothing is consumed at all.
    pub fn tick<C: CommandSource + ?Sized>(&mut self, input: &mut C) -> TickOutcome {
        let mut outcome = TickOutcome {
            status: self.status,
            ..TickOutcome::default()
        };
        if self.game_over() {
            return outcome;
        }

        self.ticks += 1;
        self.gravity_counter += 1;

        let mut hard_dropped = false;
        while input.has_pending() {
            let Some(command) = input.take_next() else {
                break;
            };
            outcome.commands += 1;
            match self.apply_command(command) {
                CommandEffect::HardDropped(_) => hard_dropped = true,
                CommandEffect::Quit => break,
                _ => {}
            }
        }

        // A hard drop locks this tick even if a later command in the batch paused.
        let gravity_due =
            self.status == GameStatus::Playing && self.gravity_counter >= self.gravity_ticks;
        if !self.game_over() && (hard_dropped || gravity_due) {
            outcome.forced_drop = true;
            self.step_down(&mut outcome);
            self.gravity_counter = 0;
        }

        outcome.status = self.status;
        outcome
    }

    /// Apply one command immediately.
    ///
    /// While paused only `TogglePause` and `Quit` are honored. A hard drop moves
    /// the piece but does not lock it; [`GameState::tick`] does that.
    pub fn apply_command(&mut self, command: Command) -> CommandEffect {
        match (self.status, command) {
            (GameStatus::GameOver, _) => CommandEffect::Ignored,
            (_, Command::Quit) => {
                info!(
                    "quit requested at tick {} with score {}",
                    self.ticks, self.score
                );
                self.set_status(GameStatus::GameOver);
                CommandEffect::Quit
            }
            (GameStatus::Paused, Command::TogglePause) => {
                self.set_status(GameStatus::Playing);
                self.gravity_counter = 0;
                CommandEffect::Resumed
            }
            (GameStatus::Paused, _) => {
                debug!("ignored {} while {}", command.as_str(), self.status.as_str());
                CommandEffect::Ignored
            }
            (GameStatus::Playing, Command::TogglePause) => {
                self.set_status(GameStatus::Paused);
                CommandEffect::Paused
            }
            (GameStatus::Playing, Command::Left) => moved_or_blocked(self.try_move(-1, 0)),
            (GameStatus::Playing, Command::Right) => moved_or_blocked(self.try_move(1, 0)),
            (GameStatus::Playing, Command::SoftDrop) => moved_or_blocked(self.try_move(0, 1)),
            (GameStatus::Playing, Command::RotateCw) => moved_or_blocked(self.try_rotate()),
            (GameStatus::Playing, Command::HardDrop) => {
                CommandEffect::HardDropped(self.hard_drop())
            }
            (GameStatus::Playing, Command::None) => CommandEffect::Ignored,
        }
    }

    /// Try to move the active piece; commits only if the target fits
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.active.shifted(dx, dy);
        if candidate.fits(&self.board) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Try a clockwise quarter turn in place (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if candidate.fits(&self.board) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Move the active piece down as far as it fits. Returns rows dropped.
    pub fn hard_drop(&mut self) -> u8 {
        let mut rows = 0u8;
        while self.try_move(0, 1) {
            rows += 1;
        }
        rows
    }

    /// Forced downward step: fall one row, or lock and spawn the next piece.
    fn step_down(&mut self, outcome: &mut TickOutcome) {
        if self.try_move(0, 1) {
            return;
        }

        let cleared = self.lock_active();
        outcome.locked = true;
        outcome.lines_cleared = cleared;

        self.spawn_piece();
        outcome.spawned = true;
    }

    /// Lock the active piece, clear the rows it touched and update score and speed.
    /// Returns lines cleared.
    fn lock_active(&mut self) -> u32 {
        let piece = self.active;
        self.board.lock(piece.kind, piece.rotation, piece.x, piece.y);
        self.pieces_locked += 1;

        let cleared = self.board.clear_lines(piece.y) as u32;
        debug!(
            "locked {} at ({}, {}) {}, cleared {}",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            piece.rotation.as_str(),
            cleared
        );
        if cleared > 0 {
            self.award_lines(cleared);
        }
        cleared
    }

    /// Linear score plus one tick of speed-up per `lines_per_speedup` crossed.
    fn award_lines(&mut self, cleared: u32) {
        self.score += cleared * self.config.score_per_line;

        let before = self.lines;
        self.lines += cleared;

        let per = self.config.lines_per_speedup;
        if per > 0 {
            let steps = self.lines / per - before / per;
            let next = self
                .gravity_ticks
                .saturating_sub(steps)
                .max(self.config.min_gravity_ticks);
            if next != self.gravity_ticks {
                info!(
                    "speed up: {} lines, gravity {} -> {} ticks",
                    self.lines, self.gravity_ticks, next
                );
                self.gravity_ticks = next;
            }
        }
    }

    /// Replace the active piece with a fresh one at spawn; tops out if it does not fit.
    fn spawn_piece(&mut self) {
        self.active = ActivePiece::new(self.pieces.next_piece());
        if !self.active.fits(&self.board) {
            self.top_out();
        }
    }

    fn set_status(&mut self, status: GameStatus) {
        debug!(
            "{} -> {} at tick {}",
            self.status.as_str(),
            status.as_str(),
            self.ticks
        );
        self.status = status;
    }

    fn top_out(&mut self) {
        self.set_status(GameStatus::GameOver);
        info!(
            "topped out with {} spawning; score {}, lines {}",
            self.active.kind.as_str(),
            self.score,
            self.lines
        );
    }
}

fn moved_or_blocked(moved: bool) -> CommandEffect {
    if moved {
        CommandEffect::Moved
    } else {
        CommandEffect::Blocked
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedPieces;
    use std::collections::VecDeque;

    fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedPieces> {
        GameState::with_source(GameConfig::default(), ScriptedPieces::new(kinds.to_vec()))
    }

    fn queue(commands: &[Command]) -> VecDeque<Command> {
        commands.iter().copied().collect()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.gravity_ticks, INITIAL_GRAVITY_TICKS);
        assert_eq!(state.gravity_counter, 0);
        assert_eq!(state.active.rotation, Rotation::North);
        assert_eq!((state.active.x, state.active.y), SPAWN_POSITION);
    }

    #[test]
    fn test_active_piece_new() {
        let piece = ActivePiece::new(PieceKind::T);

        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.x, 5);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_try_move() {
        let mut state = scripted(&[PieceKind::T]);
        let initial_x = state.active.x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.active.x, initial_x + 1);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.active.x, initial_x);

        // T occupies the top row of its box, so it cannot rise.
        assert!(!state.try_move(0, -1));
    }

    #[test]
    fn test_try_move_stops_at_wall() {
        let mut state = scripted(&[PieceKind::O]);
        let mut moved = 0;
        for _ in 0..20 {
            if state.try_move(-1, 0) {
                moved += 1;
            }
        }
        // O fills box columns 1-2; spawn x=5 lets it reach anchor -1.
        assert_eq!(moved, 6);
        assert_eq!(state.active.x, -1);
    }

    #[test]
    fn test_rotate_cycles_back() {
        let mut state = scripted(&[PieceKind::T]);
        for _ in 0..4 {
            assert!(state.try_rotate());
        }
        assert_eq!(state.active.rotation, Rotation::North);
    }

    #[test]
    fn test_rotate_blocked_without_kick() {
        let mut state = scripted(&[PieceKind::I]);
        // Vertical I in box column 2. Push it flush against the left wall.
        while state.try_move(-1, 0) {}
        assert_eq!(state.active.x, -2);
        // Horizontal I would need box columns 0-3, i.e. x = -2..1.
        assert!(!state.try_rotate());
        assert_eq!(state.active.rotation, Rotation::North);
    }

    #[test]
    fn test_gravity_steps_after_interval() {
        let mut state = scripted(&[PieceKind::O]);
        let mut input = VecDeque::new();

        for _ in 0..INITIAL_GRAVITY_TICKS - 1 {
            let outcome = state.tick(&mut input);
            assert!(!outcome.forced_drop);
        }
        assert_eq!(state.active.y, 0);

        let outcome = state.tick(&mut input);
        assert!(outcome.forced_drop);
        assert_eq!(state.active.y, 1);
        assert_eq!(state.gravity_counter, 0);
    }

    #[test]
    fn test_hard_drop_locks_same_tick() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T]);
        let outcome = state.tick(&mut queue(&[Command::HardDrop]));

        assert!(outcome.forced_drop);
        assert!(outcome.locked);
        assert!(outcome.spawned);
        assert_eq!(outcome.lines_cleared, 0);
        assert_eq!(state.active.kind, PieceKind::T);
        assert!(state.board.is_filled(6, 23));
        assert!(state.board.is_filled(7, 22));
        assert_eq!(state.gravity_counter, 0);
    }

    #[test]
    fn test_hard_drop_then_pause_still_locks() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T]);
        let outcome = state.tick(&mut queue(&[Command::HardDrop, Command::TogglePause]));

        assert!(outcome.forced_drop);
        assert!(outcome.locked);
        assert_eq!(outcome.status, GameStatus::Paused);
        assert!(state.board.is_filled(6, 22));
        assert!(state.board.is_filled(7, 23));
        assert_eq!(state.active.kind, PieceKind::T);
        assert_eq!((state.active.x, state.active.y), SPAWN_POSITION);

        // Resuming moves the new piece; the locked O stays put.
        state.tick(&mut queue(&[Command::TogglePause, Command::Left, Command::Left]));
        assert_eq!(state.active.x, SPAWN_POSITION.0 - 2);
        assert_eq!(state.board.filled_count(), 4);
        assert!(state.board.is_filled(6, 22));
    }

    #[test]
    fn test_pause_then_hard_drop_is_ignored() {
        let mut state = scripted(&[PieceKind::O]);
        let outcome = state.tick(&mut queue(&[Command::TogglePause, Command::HardDrop]));

        assert!(!outcome.forced_drop);
        assert!(!outcome.locked);
        assert_eq!(state.active.y, 0);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_commands_after_pause_are_ignored() {
        let mut state = scripted(&[PieceKind::O]);
        let x = state.active.x;
        let outcome = state.tick(&mut queue(&[Command::TogglePause, Command::Left]));

        assert_eq!(outcome.commands, 2);
        assert_eq!(outcome.status, GameStatus::Paused);
        assert_eq!(state.active.x, x);
    }

    #[test]
    fn test_paused_game_has_no_gravity() {
        let mut state = scripted(&[PieceKind::O]);
        state.apply_command(Command::TogglePause);
        let mut input = VecDeque::new();
        for _ in 0..INITIAL_GRAVITY_TICKS * 3 {
            let outcome = state.tick(&mut input);
            assert!(!outcome.forced_drop);
        }
        assert_eq!(state.active.y, 0);
    }

    #[test]
    fn test_unpause_resets_gravity_counter() {
        let mut state = scripted(&[PieceKind::O]);
        let mut input = VecDeque::new();
        for _ in 0..5 {
            state.tick(&mut input);
        }
        assert_eq!(state.gravity_counter, 5);

        assert_eq!(state.apply_command(Command::TogglePause), CommandEffect::Paused);
        assert_eq!(state.gravity_counter, 5);
        assert_eq!(state.apply_command(Command::TogglePause), CommandEffect::Resumed);
        assert_eq!(state.gravity_counter, 0);
    }

    #[test]
    fn test_quit_stops_drain() {
        let mut state = scripted(&[PieceKind::O]);
        let mut input = queue(&[Command::Quit, Command::Left, Command::Left]);
        let outcome = state.tick(&mut input);

        assert_eq!(outcome.commands, 1);
        assert_eq!(outcome.status, GameStatus::GameOver);
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_quit_while_paused() {
        let mut state = scripted(&[PieceKind::O]);
        state.apply_command(Command::TogglePause);
        assert_eq!(state.apply_command(Command::Quit), CommandEffect::Quit);
        assert!(state.game_over());
    }

    #[test]
    fn test_game_over_consumes_nothing() {
        let mut state = scripted(&[PieceKind::O]);
        state.apply_command(Command::Quit);
        let ticks = state.ticks;

        let mut input = queue(&[Command::Left, Command::TogglePause]);
        let outcome = state.tick(&mut input);
        assert_eq!(outcome.commands, 0);
        assert_eq!(input.len(), 2);
        assert_eq!(state.ticks, ticks);
        assert_eq!(state.apply_command(Command::TogglePause), CommandEffect::Ignored);
        assert!(state.game_over());
    }

    #[test]
    fn test_award_lines_speeds_up_per_threshold() {
        let mut state = scripted(&[PieceKind::O]);

        state.award_lines(4);
        assert_eq!(state.score, 400);
        assert_eq!(state.gravity_ticks, 20);

        // 4 -> 6 crosses 5 even though 6 is not a multiple of 5.
        state.award_lines(2);
        assert_eq!(state.score, 600);
        assert_eq!(state.gravity_ticks, 19);

        state.award_lines(4);
        assert_eq!(state.lines, 10);
        assert_eq!(state.gravity_ticks, 18);
    }

    #[test]
    fn test_award_lines_respects_floor() {
        let config = GameConfig::default().with_initial_gravity(6);
        let mut state = GameState::with_source(config, ScriptedPieces::repeat(PieceKind::O));

        for _ in 0..10 {
            state.award_lines(4);
        }
        assert_eq!(state.lines, 40);
        assert_eq!(state.gravity_ticks, MIN_GRAVITY_TICKS);
    }

    #[test]
    fn test_spawn_blocked_is_game_over() {
        let mut board = Board::new();
        board.set(6, 1, true);
        let state = GameState::with_board(
            GameConfig::default(),
            board,
            ScriptedPieces::repeat(PieceKind::O),
        );
        assert!(state.game_over());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = scripted(&[PieceKind::O, PieceKind::I]);
        state.tick(&mut queue(&[Command::HardDrop]));
        let snap = state.snapshot();

        assert_eq!(snap.board[23][6], 1);
        assert_eq!(snap.board[23][0], 0);
        assert_eq!(snap.active.map(|a| a.kind), Some(PieceKind::I));
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.status, GameStatus::Playing);
    }
}
