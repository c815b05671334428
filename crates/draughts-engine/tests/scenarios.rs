//! Board-level scenarios and properties over random positions.

use std::collections::HashMap;

use draughts_engine::{Board, BoardError, Color, Move, Piece, Setup};
use proptest::prelude::*;

#[test]
fn coordinates_on_the_standard_board() {
    let board = Board::new(4).unwrap();
    assert!(matches!(
        board.coord_convert("I1"),
        Err(BoardError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        board.coord_convert("A2"),
        Err(BoardError::InvalidCoordinate(_))
    ));
    assert_eq!(board.coord_convert("A1"), Ok(28));
    assert_eq!(board.coord_convert("b6"), Ok(8));
    assert_eq!(board.coord_convert("09"), Ok(8));
}

#[test]
fn front_man_opening_moves() {
    let board = Board::new(4).unwrap();
    let from = board.coord_convert("B6").unwrap();
    let moves = board.generate_moves(from);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| !m.is_capture()));

    let names: Vec<_> = moves
        .iter()
        .filter_map(|m| board.index_to_coord(m.to()))
        .collect();
    assert_eq!(names, vec!["A5", "C5"]);
}

#[test]
fn blocked_front_man_has_no_moves() {
    let setup = Setup::new().dark([8]).light([12, 13]).dark([17, 16]);
    let board = Board::with_setup(4, &setup).unwrap();
    assert!(board.generate_moves(8).is_empty());
}

#[test]
fn isolated_capture() {
    let setup = Setup::new().light([22]).dark([18]);
    let board = Board::with_setup(4, &setup).unwrap();
    let moves = board.generate_moves(22);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].captured(), &[18]);
    assert_eq!(moves[0].to(), 15);
}

#[test]
fn double_jump_alongside_single() {
    let setup = Setup::new().dark([5]).light([8, 9, 17]);
    let board = Board::with_setup(4, &setup).unwrap();
    let moves = board.generate_moves(5);
    let mut counts: Vec<_> = moves.iter().map(Move::capture_count).collect();
    counts.sort_unstable();
    assert_eq!(counts, vec![1, 2]);
    let double = moves.iter().find(|m| m.capture_count() == 2).unwrap();
    assert_eq!(double.to(), 21);
}

#[test]
fn playing_out_a_capture_sequence() {
    let mut board = Board::new(4).unwrap();
    board.apply_simple("C3D4").unwrap();
    board.apply_simple("E5?1").unwrap_err();
    board.apply_simple("F6E5").unwrap();

    // D4 must take E5.
    let from = board.coord_convert("D4").unwrap();
    let moves = board.generate_moves(from);
    assert_eq!(moves.len(), 1);
    assert!(moves[0].is_capture());
    assert_eq!(board.index_to_coord(moves[0].to()).as_deref(), Some("F6"));

    board.apply(&moves[0]).unwrap();
    assert_eq!(board.count(Color::Dark), 11);
    assert_eq!(board.count(Color::Light), 12);
}

#[test]
fn render_view_marks_destinations() {
    let board = Board::new(4).unwrap();
    let from = board.coord_convert("C3").unwrap();
    let markers: HashMap<usize, String> = board
        .generate_moves(from)
        .iter()
        .map(|m| (m.to(), ".".to_string()))
        .collect();
    let view = board.view(&markers);
    assert_eq!(view.iter().filter(|c| *c == ".").count(), 2);
    assert_eq!(view.iter().filter(|c| *c == "o").count(), 12);
    assert_eq!(view.iter().filter(|c| *c == "x").count(), 12);
}

fn position() -> impl Strategy<Value = Setup> {
    prop::collection::vec(0u8..6, 32).prop_map(|cells| {
        let mut setup = Setup::new();
        for (i, cell) in cells.into_iter().enumerate() {
            match cell {
                1 => setup.light.push(i),
                2 => setup.dark.push(i),
                3 => setup.light_kings.push(i),
                4 => setup.dark_kings.push(i),
                _ => {}
            }
        }
        setup
    })
}

proptest! {
    #[test]
    fn captures_are_mandatory(setup in position()) {
        let board = Board::with_setup(4, &setup).unwrap();
        for from in 0..board.size() {
            let moves = board.generate_moves(from);
            if moves.iter().any(Move::is_capture) {
                prop_assert!(moves.iter().all(Move::is_capture));
            }
        }
    }

    #[test]
    fn capture_lists_are_unique(setup in position()) {
        let board = Board::with_setup(4, &setup).unwrap();
        for from in 0..board.size() {
            for m in board.generate_moves(from) {
                let mut captured = m.captured().to_vec();
                captured.sort_unstable();
                captured.dedup();
                prop_assert_eq!(captured.len(), m.capture_count());
            }
        }
    }

    #[test]
    fn generated_moves_apply_cleanly(setup in position()) {
        let board = Board::with_setup(4, &setup).unwrap();
        for from in 0..board.size() {
            let piece = board.piece_at(from);
            for m in board.generate_moves(from) {
                let mut after = board.clone();
                prop_assert_eq!(after.apply(&m), Ok(()));

                let moved = after.piece_at(m.to());
                prop_assert!(after.is_empty(from));
                prop_assert_eq!(moved.map(Piece::color), piece.map(Piece::color));
                if m.is_promotion() || piece.is_some_and(Piece::is_king) {
                    prop_assert!(moved.is_some_and(Piece::is_king));
                }
                for &captured in m.captured() {
                    prop_assert!(after.is_empty(captured));
                }

                let taken = board.count(Color::Light) + board.count(Color::Dark)
                    - after.count(Color::Light)
                    - after.count(Color::Dark);
                prop_assert_eq!(taken, m.capture_count());
            }
        }
    }
}
