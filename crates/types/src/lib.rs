//! Shared types and build-time constants.
//!
//! Everything here is plain data with no dependencies, so the reducer, the
//! input mapper, the renderer and the audio cues all agree on one vocabulary.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: bounding-box origin at row 0, column 3, rotation North
//!
//! # Difficulty
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level step |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `SPEED_FACTOR` | 0.85 | Per-level multiplier on the gravity interval |
//! | `MIN_FALL_MS` | 100 | Gravity interval floor |
//!
//! These are the only tuning surface; nothing here is read at runtime.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, Status, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert!(GameAction::MoveLeft.accepts_repeat());
//! assert!(!GameAction::HardDrop.accepts_repeat());
//! assert_eq!(Status::default(), Status::Idle);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn row of the piece bounding-box origin
pub const SPAWN_ROW: i8 = 0;

/// Spawn column of the piece bounding-box origin
pub const SPAWN_COL: i8 = 3;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity interval at level 1, in milliseconds
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval never drops below this, in milliseconds
pub const MIN_FALL_MS: u32 = 100;

/// Multiplier applied to the gravity interval per level above 1
pub const SPEED_FACTOR: f64 = 0.85;

/// Points per lock, indexed by lines cleared in that lock (0-4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// How long the board flashes after a line clear, in milliseconds
pub const FLASH_MS: u32 = 120;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Single uppercase letter, as shown in the side panel
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotation index 0-3, clockwise from North
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Paused => "paused",
            Status::GameOver => "game-over",
        }
    }
}

/// Game actions. None of them carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    Restart,
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    HardDrop,
    Hold,
    /// Periodic gravity pulse; behaves exactly like `SoftDrop`.
    Tick,
}

impl GameAction {
    /// Whether a held-key auto-repeat may produce this action again.
    ///
    /// Only movement repeats; rotate, hold and hard drop need a fresh press.
    pub fn accepts_repeat(self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
        )
    }

    /// Convert to string (for logs)
    pub fn as_str(self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::Restart => "restart",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::Tick => "tick",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
