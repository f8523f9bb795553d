//! Game state module - the reducer
//!
//! [`reduce`] turns a state and one action into the next state. It never
//! mutates its input and performs no I/O; the only outside influence is the
//! [`PieceSource`] it draws new piece kinds from.
//!
//! Status machine:
//!
//! ```text
//! Idle --Start--> Playing --Pause--> Paused --Resume--> Playing
//!   \                 \
//!    `--Start (spawn   `--lock or hold with blocked spawn--> GameOver
//!        blocked)--> GameOver
//! any --Restart--> Idle (fresh)
//! ```

use crate::board::Board;
use crate::pieces::{shape, Shape};
use crate::rng::PieceSource;
use crate::scoring::{fall_delay_ms, level_for_lines, line_score};
use crate::types::{GameAction, PieceKind, Rotation, Status, SPAWN_COL, SPAWN_ROW};

/// Active falling piece. Replaced wholesale on every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Bounding-box origin row
    pub row: i8,
    /// Bounding-box origin column
    pub col: i8,
}

impl Piece {
    /// A piece of `kind` at the spawn position, rotation North
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        shape(self.kind, self.rotation)
    }

    /// Absolute (row, col) of each filled cell
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape()
            .cells()
            .map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.fits(self.shape(), self.row, self.col)
    }

    pub fn shifted(self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..self
        }
    }

    pub fn rotated(self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..self }
    }
}

/// Complete game state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    lines: u32,
    level: u32,
    status: Status,
    /// Rows removed by the lock in the most recent dispatch (0 if none).
    last_lines_cleared: u8,
    /// Whether the most recent dispatch locked a piece.
    last_locked: bool,
}

impl GameState {
    /// Fresh idle game on an empty board
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Idle game on a prepared board
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            active: None,
            hold: None,
            can_hold: true,
            score: 0,
            lines: 0,
            level: level_for_lines(0),
            status: Status::Idle,
            last_lines_cleared: 0,
            last_locked: false,
        }
    }

    /// Method form of [`reduce`]
    pub fn apply<S: PieceSource + ?Sized>(&self, action: GameAction, source: &mut S) -> Self {
        reduce(self, action, source)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_lines_cleared(&self) -> u8 {
        self.last_lines_cleared
    }

    pub fn last_locked(&self) -> bool {
        self.last_locked
    }

    /// Gravity interval for the current level
    pub fn fall_delay_ms(&self) -> u32 {
        fall_delay_ms(self.level)
    }

    /// Absolute cells of the active piece
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.cells())
    }

    /// Row the active piece would land on if hard-dropped (ghost piece).
    pub fn ghost_row(&self) -> Option<i8> {
        let mut piece = self.active?;
        while piece.shifted(1, 0).fits(&self.board) {
            piece = piece.shifted(1, 0);
        }
        Some(piece.row)
    }

    fn begin<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        self.status = Status::Playing;
        let kind = source.next_kind();
        self.spawn(kind);
    }

    /// Place a new piece at the spawn point. A blocked spawn ends the game.
    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind);
        if piece.fits(&self.board) {
            self.active = Some(piece);
            true
        } else {
            self.active = None;
            self.status = Status::GameOver;
            false
        }
    }

    fn try_shift(&mut self, drow: i8, dcol: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(drow, dcol);
        if moved.fits(&self.board) {
            self.active = Some(moved);
            true
        } else {
            false
        }
    }

    /// Rotate in place; no kicks.
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let turned = active.rotated(clockwise);
        if turned.fits(&self.board) {
            self.active = Some(turned);
            true
        } else {
            false
        }
    }

    /// One gravity step; locks when the piece is already resting.
    fn step_down<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        if !self.try_shift(1, 0) {
            self.lock_active(source);
        }
    }

    fn hard_drop<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        while self.try_shift(1, 0) {}
        self.lock_active(source);
    }

    fn hold<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        if !self.can_hold {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let kind = match self.hold.replace(active.kind) {
            Some(held) => held,
            None => source.next_kind(),
        };
        self.can_hold = false;
        self.spawn(kind);
    }

    /// Stamp the active piece, clear full rows, score, then spawn the next piece.
    fn lock_active<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        let Some(active) = self.active.take() else {
            return;
        };

        let stamped = self
            .board
            .lock_piece(active.shape(), active.row, active.col, active.kind);
        debug_assert!(stamped, "active piece overlapped the board");

        let cleared = self.board.clear_full_rows().len();
        self.lines = self.lines.saturating_add(cleared as u32);
        self.score = self.score.saturating_add(line_score(cleared));
        self.level = level_for_lines(self.lines);
        self.last_lines_cleared = cleared as u8;
        self.last_locked = true;

        let kind = source.next_kind();
        if self.spawn(kind) {
            self.can_hold = true;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one action to a state, producing the next state.
///
/// Actions that do not apply in the current status (or that would collide)
/// leave everything unchanged apart from the one-dispatch feedback fields
/// (`last_lines_cleared`, `last_locked`), which every dispatch resets.
pub fn reduce<S: PieceSource + ?Sized>(
    state: &GameState,
    action: GameAction,
    source: &mut S,
) -> GameState {
    if action == GameAction::Restart {
        return GameState::new();
    }

    let mut next = state.clone();
    next.last_lines_cleared = 0;
    next.last_locked = false;

    match (state.status, action) {
        (Status::Idle, GameAction::Start) => next.begin(source),
        (Status::Playing, GameAction::Pause) => next.status = Status::Paused,
        (Status::Paused, GameAction::Resume) => next.status = Status::Playing,
        (Status::Playing, GameAction::MoveLeft) => {
            next.try_shift(0, -1);
        }
        (Status::Playing, GameAction::MoveRight) => {
            next.try_shift(0, 1);
        }
        (Status::Playing, GameAction::SoftDrop | GameAction::Tick) => next.step_down(source),
        (Status::Playing, GameAction::RotateCw) => {
            next.try_rotate(true);
        }
        (Status::Playing, GameAction::RotateCcw) => {
            next.try_rotate(false);
        }
        (Status::Playing, GameAction::HardDrop) => next.hard_drop(source),
        (Status::Playing, GameAction::Hold) => next.hold(source),
        _ => {}
    }

    next
}
