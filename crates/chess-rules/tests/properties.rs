//! Property tests over random positions.

use chess_core::{Color, Piece, PieceKind, Position};
use chess_rules::{
    all_legal_moves, apply_move, candidate_moves, is_checkmate, is_in_check, legal_moves, Board,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn square() -> impl Strategy<Value = Position> {
    (0i8..8, 0i8..8).prop_map(|(file, rank)| Position::new(file, rank))
}

fn color() -> impl Strategy<Value = Color> {
    prop::bool::ANY.prop_map(|white| if white { Color::White } else { Color::Black })
}

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(vec![
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
    ])
}

/// Two kings on distinct squares plus up to a dozen other pieces. Pieces
/// that would land on an occupied square are dropped.
fn board() -> impl Strategy<Value = Board> {
    let extras = prop::collection::vec((kind(), color(), square()), 0..12);
    (square(), square(), extras)
        .prop_filter("kings share a square", |(white, black, _)| white != black)
        .prop_map(|(white, black, extras)| {
            let mut taken: HashSet<Position> = [white, black].into_iter().collect();
            let mut pieces = vec![
                Piece::new(PieceKind::King, Color::White, white),
                Piece::new(PieceKind::King, Color::Black, black),
            ];
            for (kind, color, pos) in extras {
                if taken.insert(pos) {
                    pieces.push(Piece::new(kind, color, pos));
                }
            }
            Board::from_pieces(pieces).expect("generated position is valid")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn legal_moves_are_candidates(mut board in board()) {
        for color in Color::ALL {
            for index in 0..board.live(color).len() {
                let piece = board.live(color)[index].clone();
                let candidates = candidate_moves(&board, &piece);
                for to in legal_moves(&mut board, color, index) {
                    prop_assert!(candidates.contains(&to), "{} -> {} not a candidate", piece.position, to);
                }
            }
        }
    }

    #[test]
    fn legal_moves_keep_own_king_safe(mut board in board()) {
        for color in Color::ALL {
            for index in 0..board.live(color).len() {
                for to in legal_moves(&mut board, color, index) {
                    // Taking the king outright is outside what the applier handles.
                    if board.has_piece(color.opposite(), PieceKind::King, to) {
                        continue;
                    }
                    let mut after = board.clone();
                    apply_move(&mut after, color, index, to, 0);
                    prop_assert!(!is_in_check(&after, color));
                }
            }
        }
    }

    #[test]
    fn legality_checks_leave_the_board_untouched(mut board in board()) {
        let before = board.clone();
        for color in Color::ALL {
            let _ = all_legal_moves(&mut board, color);
            let _ = is_checkmate(&mut board, color);
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn checkmate_means_no_legal_moves(mut board in board()) {
        for color in Color::ALL {
            let stuck = all_legal_moves(&mut board, color).is_empty();
            prop_assert_eq!(is_checkmate(&mut board, color), stuck);
        }
    }

    #[test]
    fn apply_keeps_piece_totals(mut board in board()) {
        let color = Color::White;
        let moves = all_legal_moves(&mut board, color);
        for (from, to) in moves {
            if board.has_piece(color.opposite(), PieceKind::King, to) {
                continue;
            }
            let index = board.index_at(color, from).unwrap();
            let mut after = board.clone();
            let outcome = apply_move(&mut after, color, index, to, 9);

            prop_assert_eq!(after.live(color).len(), board.live(color).len());
            let them = color.opposite();
            let total = |b: &Board| b.live(them).len() + b.captured(them).len();
            prop_assert_eq!(total(&after), total(&board));
            prop_assert_eq!(
                outcome.captured.is_some(),
                after.captured(them).len() == board.captured(them).len() + 1
            );
        }
    }
}
