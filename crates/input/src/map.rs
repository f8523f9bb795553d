//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Status};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a game action.
///
/// Releases never map. Auto-repeat events only map for the movement keys so
/// a held rotate, hold or hard-drop key fires once.
pub fn map_key(key: KeyEvent, status: Status) -> Option<GameAction> {
    let action = match key.code {
        // Movement
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,

        // Rotation
        KeyCode::Up => GameAction::RotateCw,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Esc => pause_toggle(status)?,
        KeyCode::Enter => start_action(status)?,

        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' | 'h' => GameAction::MoveLeft,
            'd' | 'l' => GameAction::MoveRight,
            's' | 'j' => GameAction::SoftDrop,
            'x' | 'w' | 'k' => GameAction::RotateCw,
            'z' | 'y' => GameAction::RotateCcw,
            'c' => GameAction::Hold,
            'p' => pause_toggle(status)?,
            'r' => GameAction::Restart,
            _ => return None,
        },

        _ => return None,
    };

    match key.kind {
        KeyEventKind::Press => Some(action),
        KeyEventKind::Repeat if action.accepts_repeat() => Some(action),
        KeyEventKind::Repeat | KeyEventKind::Release => None,
    }
}

fn pause_toggle(status: Status) -> Option<GameAction> {
    match status {
        Status::Playing => Some(GameAction::Pause),
        Status::Paused => Some(GameAction::Resume),
        Status::Idle | Status::GameOver => None,
    }
}

fn start_action(status: Status) -> Option<GameAction> {
    match status {
        Status::Idle => Some(GameAction::Start),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
