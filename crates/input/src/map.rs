//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a command. Letters are case-insensitive; unknown keys map to
/// [`Command::None`].
pub fn map_key(key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Right,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::RotateCw,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::SoftDrop,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::None,
    }
}

/// Map a terminal event to a command.
///
/// Key presses and terminal auto-repeats produce a command; releases, resizes,
/// mouse and focus events produce nothing.
pub fn map_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(map_key(*key)),
        _ => None,
    }
}
