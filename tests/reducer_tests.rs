//! End-to-end reducer scenarios driven through the facade crate.

use blockfall::core::{reduce, Board, GameState, Piece, SequenceSource};
use blockfall::types::{GameAction, PieceKind, Rotation, Status, BOARD_WIDTH};

fn start(board: Board, source: &mut SequenceSource) -> GameState {
    reduce(&GameState::with_board(board), GameAction::Start, source)
}

fn fill_row_except(board: &mut Board, row: i8, gaps: &[i8]) {
    for col in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&col) {
            board.set(row, col, Some(PieceKind::Z));
        }
    }
}

#[test]
fn test_hard_drop_i_on_empty_board() {
    let mut source = SequenceSource::new([PieceKind::I, PieceKind::T]);
    let state = start(Board::new(), &mut source);

    let active = state.active().unwrap();
    assert_eq!(active.kind, PieceKind::I);
    assert_eq!((active.row, active.col), (0, 3));

    let state = reduce(&state, GameAction::HardDrop, &mut source);

    let bottom = state.board().row(19).unwrap();
    for col in 0..BOARD_WIDTH as usize {
        let expected = if (3..7).contains(&col) {
            Some(PieceKind::I)
        } else {
            None
        };
        assert_eq!(bottom[col], expected, "col {}", col);
    }
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(state.last_lines_cleared(), 0);
    assert!(state.last_locked());
    assert_eq!(state.score(), 0);
    assert_eq!(state.active(), Some(Piece::spawn(PieceKind::T)));
}

#[test]
fn test_o_completes_bottom_row() {
    let mut board = Board::new();
    fill_row_except(&mut board, 19, &[3, 4]);
    // Marker above the full row to check that it shifts down.
    board.set(18, 0, Some(PieceKind::L));

    let mut source = SequenceSource::repeat(PieceKind::O);
    let state = start(board, &mut source);
    let state = reduce(&state, GameAction::HardDrop, &mut source);

    assert_eq!(state.last_lines_cleared(), 1);
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.level(), 1);
    assert!(state.board().row(0).unwrap().iter().all(|c| c.is_none()));

    // Row 19 now holds the old row 18: the marker plus the O's top half.
    let bottom = state.board().row(19).unwrap();
    assert_eq!(bottom[0], Some(PieceKind::L));
    assert_eq!(bottom[3], Some(PieceKind::O));
    assert_eq!(bottom[4], Some(PieceKind::O));
    assert_eq!(state.board().filled_count(), 3);
}

#[test]
fn test_four_line_clear_scores_800() {
    let mut board = Board::new();
    for row in 16..20 {
        fill_row_except(&mut board, row, &[0]);
    }
    let mut source = SequenceSource::repeat(PieceKind::I);
    let state = start(board, &mut source);

    // Vertical I (East) keeps its cells in box column 2; shift so that is column 0.
    let state = reduce(&state, GameAction::RotateCw, &mut source);
    assert_eq!(state.active().unwrap().rotation, Rotation::East);
    let mut state = state;
    for _ in 0..5 {
        state = reduce(&state, GameAction::MoveLeft, &mut source);
    }
    assert_eq!(state.active().unwrap().col, -2);

    let state = reduce(&state, GameAction::HardDrop, &mut source);
    assert_eq!(state.last_lines_cleared(), 4);
    assert_eq!(state.score(), 800);
    assert_eq!(state.lines(), 4);
    assert_eq!(state.board().filled_count(), 0);
}

#[test]
fn test_blocked_spawn_region_ends_game_on_start() {
    let mut board = Board::new();
    for col in 3..7 {
        board.set(1, col, Some(PieceKind::S));
    }
    let mut source = SequenceSource::repeat(PieceKind::T);
    let state = start(board, &mut source);

    assert_eq!(state.status(), Status::GameOver);
    assert!(state.active().is_none());

    // Only restart recovers.
    let same = reduce(&state, GameAction::Start, &mut source);
    assert_eq!(same, state);
    let fresh = reduce(&state, GameAction::Restart, &mut source);
    assert_eq!(fresh, GameState::new());
}

#[test]
fn test_idle_state_unchanged_by_non_start_actions() {
    let idle = GameState::new();
    let mut source = SequenceSource::repeat(PieceKind::Z);

    for action in [
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
    ] {
        assert_eq!(reduce(&idle, action, &mut source), idle, "{}", action.as_str());
    }
}

#[test]
fn test_hold_once_per_lock() {
    let mut source = SequenceSource::new([PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J]);
    let state = start(Board::new(), &mut source);

    let held = reduce(&state, GameAction::Hold, &mut source);
    assert_eq!(held.hold_piece(), Some(PieceKind::T));
    assert_eq!(held.active().unwrap().kind, PieceKind::S);
    assert!(!held.can_hold());

    // Second hold before a lock is rejected.
    let again = reduce(&held, GameAction::Hold, &mut source);
    assert_eq!(again, held);

    // Lock re-arms hold; next hold swaps the held T back in.
    let locked = reduce(&held, GameAction::HardDrop, &mut source);
    assert!(locked.can_hold());
    assert_eq!(locked.active().unwrap().kind, PieceKind::Z);

    let swapped = reduce(&locked, GameAction::Hold, &mut source);
    assert_eq!(swapped.hold_piece(), Some(PieceKind::Z));
    assert_eq!(swapped.active(), Some(Piece::spawn(PieceKind::T)));
}

#[test]
fn test_gravity_tick_matches_soft_drop() {
    let mut a = SequenceSource::repeat(PieceKind::L);
    let mut b = SequenceSource::repeat(PieceKind::L);
    let mut by_tick = start(Board::new(), &mut a);
    let mut by_drop = by_tick.clone();

    for _ in 0..25 {
        by_tick = reduce(&by_tick, GameAction::Tick, &mut a);
        by_drop = reduce(&by_drop, GameAction::SoftDrop, &mut b);
        assert_eq!(by_tick, by_drop);
    }
    assert!(by_tick.board().filled_count() > 0);
}

#[test]
fn test_paused_game_ignores_gravity() {
    let mut source = SequenceSource::repeat(PieceKind::J);
    let playing = start(Board::new(), &mut source);
    let paused = reduce(&playing, GameAction::Pause, &mut source);

    let after = reduce(&paused, GameAction::Tick, &mut source);
    assert_eq!(after, paused);

    let resumed = reduce(&after, GameAction::Resume, &mut source);
    assert_eq!(resumed.status(), Status::Playing);
    assert_eq!(resumed.active(), playing.active());
    assert_eq!(resumed.board(), playing.board());
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut source = SequenceSource::repeat(PieceKind::O);
    let mut state = start(Board::new(), &mut source);

    let mut drops = 0;
    while state.status() == Status::Playing {
        state = reduce(&state, GameAction::HardDrop, &mut source);
        drops += 1;
        assert!(drops <= 10, "O stack should top out within 10 drops");
    }

    // Ten O pieces fill rows 0-19 in columns 3-4.
    assert_eq!(drops, 10);
    assert_eq!(state.status(), Status::GameOver);
    assert!(state.active().is_none());
    assert!(state.last_locked());
}
