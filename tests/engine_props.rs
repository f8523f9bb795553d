//! Property tests for the board and the reducer.
//!
//! - `fits` agrees with a direct bounds-and-occupancy check
//! - Line clears remove exactly the full rows and keep the rest in order
//! - Fall delay never increases with level and never drops below the floor
//! - Random play keeps counters monotonic and the level consistent

use proptest::prelude::*;

use blockfall::core::{fall_delay_ms, reduce, shape, Board, GameState, UniformSource};
use blockfall::types::{
    GameAction, PieceKind, Rotation, Status, BOARD_HEIGHT, BOARD_WIDTH, LINES_PER_LEVEL,
    MIN_FALL_MS,
};

const ROWS: usize = BOARD_HEIGHT as usize;
const COLS: usize = BOARD_WIDTH as usize;

fn board_from(filled: &[bool]) -> Board {
    let mut board = Board::new();
    for (i, &on) in filled.iter().enumerate() {
        if on {
            board.set((i / COLS) as i8, (i % COLS) as i8, Some(PieceKind::T));
        }
    }
    board
}

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn any_rotation() -> impl Strategy<Value = Rotation> {
    prop::sample::select(vec![
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ])
}

fn any_action() -> impl Strategy<Value = GameAction> {
    prop::sample::select(vec![
        GameAction::Start,
        GameAction::Pause,
        GameAction::Resume,
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::Tick,
    ])
}

proptest! {
    #[test]
    fn fits_matches_direct_check(
        filled in prop::collection::vec(prop::bool::weighted(0.3), ROWS * COLS),
        kind in any_kind(),
        rotation in any_rotation(),
        row in -4i8..24,
        col in -4i8..14,
    ) {
        let board = board_from(&filled);
        let s = shape(kind, rotation);

        let expected = s.cells().iter().all(|&(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            (0..ROWS as i8).contains(&r)
                && (0..COLS as i8).contains(&c)
                && !filled[r as usize * COLS + c as usize]
        });
        prop_assert_eq!(board.fits(s, row, col), expected);
    }

    #[test]
    fn clear_removes_full_rows_in_order(
        filled in prop::collection::vec(any::<bool>(), ROWS * COLS),
        full in prop::collection::vec(prop::bool::weighted(0.25), ROWS),
    ) {
        let mut cells = filled;
        for row in 0..ROWS {
            for col in 0..COLS {
                if full[row] {
                    cells[row * COLS + col] = true;
                } else if col == row % COLS {
                    // Keep partial rows partial.
                    cells[row * COLS + col] = false;
                }
            }
        }
        let mut board = board_from(&cells);

        let survivors: Vec<Vec<_>> = (0..ROWS)
            .filter(|&r| !full[r])
            .map(|r| board.row(r).unwrap().to_vec())
            .collect();
        let k = ROWS - survivors.len();

        let cleared = board.clear_full_rows();
        prop_assert_eq!(cleared.len(), k);

        for r in 0..k {
            prop_assert!(board.row(r).unwrap().iter().all(|c| c.is_none()));
        }
        for (i, expected) in survivors.iter().enumerate() {
            prop_assert_eq!(board.row(k + i).unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn fall_delay_non_increasing_with_floor(level in 1u32..500) {
        let here = fall_delay_ms(level);
        let next = fall_delay_ms(level + 1);
        prop_assert!(next <= here);
        prop_assert!(next >= MIN_FALL_MS);
    }

    #[test]
    fn random_play_keeps_counters_consistent(
        seed in any::<u64>(),
        actions in prop::collection::vec(any_action(), 1..300),
    ) {
        let mut source = UniformSource::seeded(seed);
        let mut state = reduce(&GameState::new(), GameAction::Start, &mut source);

        for action in actions {
            let before = state.clone();
            state = reduce(&before, action, &mut source);

            prop_assert!(state.score() >= before.score());
            prop_assert!(state.lines() >= before.lines());
            prop_assert_eq!(state.level(), state.lines() / LINES_PER_LEVEL + 1);
            prop_assert!(state.last_lines_cleared() <= 4);
            if state.last_lines_cleared() > 0 {
                prop_assert!(state.last_locked());
            }

            match state.status() {
                Status::Playing => {
                    let active = state.active().unwrap();
                    prop_assert!(active.fits(state.board()));
                }
                Status::GameOver => prop_assert!(state.active().is_none()),
                Status::Paused | Status::Idle => {}
            }
        }
    }
}
