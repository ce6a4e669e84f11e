use super::position;
use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square, Variant};

/// Red can take one piece with (5,0) or two with (5,4).
fn one_or_two(variant: Variant) -> Board {
    position(
        variant,
        &[Square(5, 0), Square(5, 4)],
        &[Square(4, 1), Square(4, 5), Square(2, 5)],
        Color::Red,
    )
}

#[test]
fn capture_is_mandatory() {
    let board = position(
        Variant::American,
        &[Square(5, 2), Square(5, 6)],
        &[Square(4, 3)],
        Color::Red,
    );
    let moves = board.legal_moves(Color::Red);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].from, Square(5, 2));
    assert_eq!(moves[0].to, Square(3, 4));
    assert_eq!(moves[0].captured, Some(Square(4, 3)));
    assert!(board.has_capture(Color::Red));
}

#[test]
fn chain_lengths_are_annotated() {
    let board = one_or_two(Variant::American);
    let groups = board.all_possible_captures(Color::Red);
    assert_eq!(groups.len(), 2);

    let short = groups.iter().find(|g| g.from == Square(5, 0)).expect("group");
    let long = groups.iter().find(|g| g.from == Square(5, 4)).expect("group");
    assert_eq!(short.moves[0].captures, 1);
    assert_eq!(long.moves[0].captures, 2);
}

#[test]
fn maximum_capture_keeps_only_the_longest_chain() {
    for variant in [Variant::Brazilian, Variant::International] {
        let board = if variant == Variant::International {
            // Same shape, shifted onto the 10x10 board
            position(
                variant,
                &[Square(7, 0), Square(7, 4)],
                &[Square(6, 1), Square(6, 5), Square(4, 5)],
                Color::Red,
            )
        } else {
            one_or_two(variant)
        };
        let moves = board.legal_moves(Color::Red);
        assert_eq!(moves.len(), 1, "{variant}");
        assert_eq!(moves[0].captures, 2, "{variant}");

        let groups = board.all_possible_captures(Color::Red);
        assert_eq!(groups.len(), 1);
    }
}

#[test]
fn american_ignores_chain_length() {
    let board = one_or_two(Variant::American);
    let moves = board.legal_moves(Color::Red);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|mv| mv.is_capture()));
}

#[test]
fn multi_capture_keeps_the_turn() {
    for variant in Variant::ALL {
        if variant == Variant::International {
            continue;
        }
        let mut board = position(
            variant,
            &[Square(2, 3), Square(4, 5)],
            &[Square(1, 2)],
            Color::Black,
        );

        assert!(board.select(1, 2));
        let first = board.move_to(3, 4).expect("first jump");
        assert!(first.continue_capture, "{variant}");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.selection(), Some(Square(3, 4)));
        assert_eq!(board.chain(), Some(Square(3, 4)));
        assert!(board.pending_moves().iter().any(|mv| mv.to == Square(5, 6)));
        assert_eq!(board.piece_count(Color::Red), 1);

        let second = board.move_to(5, 6).expect("second jump");
        assert!(!second.continue_capture);
        assert_eq!(board.side_to_move(), Color::Red);
        assert_eq!(board.selection(), None);
        assert_eq!(board.chain(), None);
        assert_eq!(board.check_winner(), Some(Color::Black));
    }
}

#[test]
fn only_the_chain_piece_may_move_mid_chain() {
    let mut board = position(
        Variant::American,
        &[Square(2, 3), Square(4, 5)],
        &[Square(1, 2), Square(0, 7)],
        Color::Black,
    );
    assert!(board.select(1, 2));
    assert!(board.move_to(3, 4).expect("jump").continue_capture);

    assert!(!board.select(0, 7));
    let moves = board.legal_moves(Color::Black);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|mv| mv.from == Square(3, 4) && mv.is_capture()));
    // Reselecting the chain piece is allowed
    assert!(board.select(3, 4));
}

#[test]
fn legal_moves_for_the_other_side_ignore_the_chain() {
    let mut board = position(
        Variant::American,
        &[Square(2, 3), Square(4, 5), Square(6, 1)],
        &[Square(1, 2)],
        Color::Black,
    );
    let mv = board.legal_moves(Color::Black)[0];
    assert!(board.apply_move(&mv).continue_capture);

    // Red would have to take the piece that is mid-chain
    let red = board.legal_moves(Color::Red);
    assert_eq!(
        red,
        vec![Move::capture(Square(4, 5), Square(2, 3), Square(3, 4))]
    );
}

#[test]
fn international_promotion_ends_the_capture() {
    let mut board = position(
        Variant::International,
        &[Square(8, 3), Square(8, 5)],
        &[Square(7, 2)],
        Color::Black,
    );
    let moves = board.legal_moves(Color::Black);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].captures, 1);

    let outcome = board.apply_move(&moves[0]);
    assert!(outcome.promoted);
    assert!(!outcome.continue_capture);
    assert_eq!(board.piece_at(Square(9, 4)), Some(Piece::king(Color::Black)));
    assert_eq!(board.side_to_move(), Color::Red);
    assert_eq!(board.chain(), None);
}

#[test]
fn brazilian_new_king_keeps_capturing() {
    let mut board = position(
        Variant::Brazilian,
        &[Square(6, 3), Square(6, 5)],
        &[Square(5, 2)],
        Color::Black,
    );
    let moves = board.legal_moves(Color::Black);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].captures, 2);

    let outcome = board.apply_move(&moves[0]);
    assert!(outcome.promoted);
    assert!(outcome.continue_capture);
    assert_eq!(board.side_to_move(), Color::Black);
    assert!(board
        .pending_moves()
        .iter()
        .all(|mv| mv.captured == Some(Square(6, 5))));
}

#[test]
fn flying_king_chain_counts_every_victim() {
    let board = BoardBuilder::new(Variant::Brazilian)
        .piece(Square(7, 0), Piece::king(Color::Red))
        .men(Color::Black, &[Square(5, 2), Square(2, 3)])
        .build();
    let moves = board.legal_moves(Color::Red);
    assert!(!moves.is_empty());
    // Only landings from which the second man can still be taken survive
    assert!(moves.iter().all(|mv| mv.captures == 2));
    assert!(moves.iter().all(|mv| mv.captured == Some(Square(5, 2))));
}
