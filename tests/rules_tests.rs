//! Rule-engine tests through the public API only.

use draughts_engine::board::prelude::*;
use draughts_engine::board::{find_best_move, SearchState};

/// Play a whole game through `select`/`move_to`, one tier per side.
fn play_out(variant: Variant, red: Difficulty, black: Difficulty, seed: u64) -> (Board, usize) {
    let mut board = new_game(variant);
    let mut state = SearchState::with_seed(1, seed);
    let mut plies = 0;

    while board.check_winner().is_none() && plies < 300 {
        let color = board.side_to_move();
        let tier = if color == Color::Red { red } else { black };
        let mv = find_best_move(&board, color, tier, &mut state).expect("side on move has a move");

        assert!(board.select(mv.from.row(), mv.from.col()), "select {mv}");
        let outcome = board.move_to(mv.to.row(), mv.to.col()).expect("legal move");
        assert_eq!(board.hash(), board.calculate_hash());
        if outcome.continue_capture {
            assert_eq!(board.side_to_move(), color);
            assert_eq!(board.selection(), Some(mv.to));
        } else {
            assert_eq!(board.side_to_move(), color.opponent());
        }
        plies += 1;
    }
    (board, plies)
}

#[test]
fn random_games_finish_cleanly() {
    for (i, variant) in Variant::ALL.into_iter().enumerate() {
        let (board, plies) = play_out(variant, Difficulty::Easy, Difficulty::Medium, i as u64);
        assert!(plies > 0);
        if let Some(winner) = board.check_winner() {
            let loser = winner.opponent();
            let stuck = board.side_to_move() == loser && board.legal_moves(loser).is_empty();
            assert!(board.piece_count(loser) == 0 || stuck);
        }
    }
}

#[test]
fn pieces_only_on_dark_squares() {
    for variant in Variant::ALL {
        let board = new_game(variant);
        let size = board.size();
        for (sq, _) in board.pieces() {
            assert_eq!((sq.row() + sq.col()) % 2, 1);
            assert!(sq.row() < size && sq.col() < size);
        }
    }
}

#[test]
fn builder_matches_fen() {
    let built = BoardBuilder::new(Variant::American)
        .men(Color::Red, &[Square(5, 2), Square(5, 6)])
        .piece(Square(4, 3), Piece::man(Color::Black))
        .build();
    let parsed = Board::from_fen(Variant::American, "W:W22,24:B18").expect("valid");
    assert_eq!(built, parsed);
}

#[test]
fn starting_position_builder() {
    let board = BoardBuilder::starting_position(Variant::Brazilian)
        .clear(Square(5, 0))
        .side_to_move(Color::Black)
        .build();
    assert_eq!(board.piece_count(Color::Red), 11);
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn capture_chain_through_the_public_api() {
    let mut board = Board::from_fen(Variant::Brazilian, "B:W10,19:B6").expect("valid");
    assert!(board.select(1, 2));
    let first = board.move_to(3, 4).expect("jump");
    assert_eq!(
        first,
        MoveOutcome {
            continue_capture: true,
            promoted: false
        }
    );
    assert!(matches!(
        board.move_to(7, 0),
        Err(MoveError::IllegalDestination { .. })
    ));
    let second = board.move_to(5, 6).expect("second jump");
    assert!(!second.continue_capture);
    assert_eq!(board.check_winner(), Some(Color::Black));
}

#[test]
fn error_messages_are_readable() {
    let err = Board::from_fen(Variant::American, "W:W99:B1").expect_err("bad square");
    assert!(err.to_string().contains("99"));
    let err = Square::new(2, 2, 8).expect_err("light square");
    assert!(err.to_string().contains("(2,2)"));
}

#[cfg(feature = "serde")]
#[test]
fn value_types_serialize() {
    let board = new_game(Variant::International);
    let mv = board.legal_moves(Color::Red)[0];
    let json = serde_json::to_string(&mv).expect("serialize");
    let back: Move = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, mv);

    let json = serde_json::to_string(&Difficulty::Expert).expect("serialize");
    assert_eq!(json, "\"Expert\"");
}
