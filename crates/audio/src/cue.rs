//! Cue detection by snapshot diffing.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::types::Status;

/// A sound-worthy event in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Rotate,
    Hold,
    Lock,
    /// Rows removed by a single lock (1-4).
    LineClear(u8),
    LevelUp,
    GameOver,
}

impl Cue {
    pub fn as_str(self) -> &'static str {
        match self {
            Cue::Rotate => "rotate",
            Cue::Hold => "hold",
            Cue::Lock => "lock",
            Cue::LineClear(_) => "line_clear",
            Cue::LevelUp => "level_up",
            Cue::GameOver => "game_over",
        }
    }
}

/// A lock never coincides with a hold or a rotation, so one dispatch yields at
/// most three cues.
pub type Cues = ArrayVec<Cue, 4>;

/// Cues implied by the transition `prev -> next`.
///
/// Order: lock/line clear, level up, hold, rotate, game over.
pub fn cues_between(prev: &GameState, next: &GameState) -> Cues {
    let mut cues = Cues::new();

    if next.last_lines_cleared() > 0 {
        cues.push(Cue::LineClear(next.last_lines_cleared()));
    } else if next.last_locked() {
        cues.push(Cue::Lock);
    }

    if next.level() > prev.level() {
        cues.push(Cue::LevelUp);
    }

    if next.hold_piece() != prev.hold_piece() && next.hold_piece().is_some() {
        cues.push(Cue::Hold);
    }

    if let (Some(a), Some(b)) = (prev.active(), next.active()) {
        let rotated_in_place =
            a.kind == b.kind && a.row == b.row && a.col == b.col && a.rotation != b.rotation;
        if rotated_in_place {
            cues.push(Cue::Rotate);
        }
    }

    if next.status() == Status::GameOver && prev.status() != Status::GameOver {
        cues.push(Cue::GameOver);
    }

    cues
}
