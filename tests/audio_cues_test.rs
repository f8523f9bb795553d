//! Cue detection and playback across a short scripted game.

use blockfall::audio::{cues_between, AudioSession, Cue};
use blockfall::core::{reduce, Board, GameState, SequenceSource};
use blockfall::types::{GameAction, PieceKind, BOARD_WIDTH};

#[test]
fn scripted_game_rings_on_clear_and_game_over() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i8 {
        if col != 3 && col != 4 {
            board.set(19, col, Some(PieceKind::Z));
        }
    }
    let mut source = SequenceSource::repeat(PieceKind::O);
    let mut session = AudioSession::new(Vec::new(), false);
    let mut heard = Vec::new();

    let mut state = GameState::with_board(board);
    let script = std::iter::once(GameAction::Start)
        .chain(std::iter::repeat(GameAction::HardDrop).take(12));
    for action in script {
        let next = reduce(&state, action, &mut source);
        let cues = cues_between(&state, &next);
        heard.extend(cues.iter().copied());
        session.play_all(cues);
        state = next;
    }

    assert_eq!(heard[0], Cue::LineClear(1));
    assert_eq!(heard.iter().filter(|c| **c == Cue::GameOver).count(), 1);
    assert_eq!(heard.last(), Some(&Cue::GameOver));
    assert!(heard[1..heard.len() - 1].iter().all(|c| *c == Cue::Lock));

    // One bell for the clear, one for game over.
    assert_eq!(session.bells(), 2);
    assert_eq!(session.finish().unwrap(), b"\x07\x07".to_vec());
}

#[test]
fn restart_is_silent() {
    let mut source = SequenceSource::repeat(PieceKind::T);
    let playing = reduce(&GameState::new(), GameAction::Start, &mut source);
    let held = reduce(&playing, GameAction::Hold, &mut source);
    let fresh = reduce(&held, GameAction::Restart, &mut source);

    assert!(cues_between(&held, &fresh).is_empty());
}
