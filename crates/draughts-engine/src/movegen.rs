//! Move generation.
//!
//! Captures are searched depth-first over the precomputed adjacency. Each
//! branch carries its own copy of the captured squares, so sibling branches
//! never see each other's jumps.
//!
//! Every maximal chain is returned, including chains shorter than the longest
//! one available from the same square. There is no majority-capture rule.

use draughts_core::{Move, Piece};
use tracing::trace;

use crate::Board;

/// Returns the legal moves of the piece on `from`.
///
/// Capture chains when at least one exists, otherwise plain steps in the
/// piece's direction of travel. Kings step like men but capture in all four
/// directions, as men do.
pub fn generate_moves(board: &Board, from: usize) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let captures = generate_captures(board, from);
    if !captures.is_empty() {
        trace!(from, count = captures.len(), "generated captures");
        return captures;
    }

    let moves: Vec<Move> = board
        .topology()
        .neighbors(from)
        .iter()
        .filter(|&(dir, to)| dir.is_up() == piece.moves_up() && board.is_empty(to))
        .map(|(_, to)| Move::new(from, to, Vec::new(), board.need_promotion(to, piece)))
        .collect();
    trace!(from, count = moves.len(), "generated steps");
    moves
}

/// Returns every maximal capture chain of the piece on `from`.
///
/// Empty if the square is empty or no opposing piece can be jumped.
pub fn generate_captures(board: &Board, from: usize) -> Vec<Move> {
    match board.piece_at(from) {
        Some(piece) => {
            let chain = Chain {
                from,
                current: from,
                piece,
                captured: Vec::new(),
                promotion: false,
            };
            chain.extend(board)
        }
        None => Vec::new(),
    }
}

/// One branch of the capture search.
struct Chain {
    from: usize,
    current: usize,
    /// The moving piece as it stands on `current`; crowned once the branch
    /// has reached the far line.
    piece: Piece,
    captured: Vec<usize>,
    promotion: bool,
}

impl Chain {
    fn extend(self, board: &Board) -> Vec<Move> {
        let topology = board.topology();
        let them = self.piece.color().opposite();
        let mut moves = Vec::new();
        let mut stopped = true;

        for (dir, over) in topology.neighbors(self.current).iter() {
            // Jumped pieces stay on the board until the move is applied:
            // they cannot be jumped again and cannot be landed on.
            if self.captured.contains(&over) || !board.square_has_color(over, them) {
                continue;
            }
            let Some(landing) = topology.neighbor(over, dir) else {
                continue;
            };
            if !board.is_empty(landing) {
                continue;
            }

            stopped = false;
            let mut captured = self.captured.clone();
            captured.push(over);
            let crowned = board.need_promotion(landing, self.piece);
            let next = Chain {
                from: self.from,
                current: landing,
                piece: if crowned {
                    self.piece.crowned()
                } else {
                    self.piece
                },
                captured,
                promotion: self.promotion || crowned,
            };
            moves.extend(next.extend(board));
        }

        if stopped && self.current != self.from {
            moves.push(Move::new(
                self.from,
                self.current,
                self.captured,
                self.promotion,
            ));
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Setup;
    use draughts_core::Color;

    fn setup_board(setup: Setup) -> Board {
        Board::with_setup(4, &setup).unwrap()
    }

    fn destinations(moves: &[Move]) -> Vec<usize> {
        let mut to: Vec<usize> = moves.iter().map(Move::to).collect();
        to.sort_unstable();
        to
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::new(4).unwrap();
        assert!(generate_moves(&board, 15).is_empty());
        assert!(generate_moves(&board, 99).is_empty());
    }

    #[test]
    fn opening_moves() {
        let board = Board::new(4).unwrap();
        // Dark front line.
        assert_eq!(destinations(&generate_moves(&board, 8)), vec![12, 13]);
        assert_eq!(destinations(&generate_moves(&board, 11)), vec![15]);
        // Light front line.
        assert_eq!(destinations(&generate_moves(&board, 21)), vec![16, 17]);
        assert_eq!(destinations(&generate_moves(&board, 20)), vec![16]);
        // Blocked by own pieces.
        assert!(generate_moves(&board, 4).is_empty());
        assert!(generate_moves(&board, 28).is_empty());
    }

    #[test]
    fn men_only_step_forward() {
        let board = setup_board(Setup::new().light([13]).dark([18]));
        assert_eq!(destinations(&generate_moves(&board, 13)), vec![8, 9]);
        assert_eq!(destinations(&generate_moves(&board, 18)), vec![22, 23]);
    }

    #[test]
    fn kings_step_like_men() {
        let board = setup_board(Setup::new().light_kings([13]).dark_kings([18]));
        assert_eq!(destinations(&generate_moves(&board, 13)), vec![8, 9]);
        assert_eq!(destinations(&generate_moves(&board, 18)), vec![22, 23]);
    }

    #[test]
    fn single_capture() {
        let board = setup_board(Setup::new().light([21]).dark([17]));
        let moves = generate_moves(&board, 21);
        assert_eq!(moves, vec![Move::new(21, 14, vec![17], false)]);
    }

    #[test]
    fn backward_capture() {
        let board = setup_board(Setup::new().light([13]).dark([17]));
        let moves = generate_moves(&board, 13);
        assert_eq!(moves, vec![Move::new(13, 22, vec![17], false)]);
    }

    #[test]
    fn blocked_landing_is_not_a_capture() {
        let board = setup_board(Setup::new().light([21, 14]).dark([17]));
        let moves = generate_moves(&board, 21);
        assert!(moves.iter().all(|m| !m.is_capture()));
        assert_eq!(destinations(&moves), vec![16]);
    }

    #[test]
    fn own_pieces_are_not_captured() {
        let board = setup_board(Setup::new().light([21, 17]));
        assert!(generate_captures(&board, 21).is_empty());
    }

    #[test]
    fn double_jump() {
        let board = setup_board(Setup::new().dark([5]).light([9, 17]));
        let moves = generate_moves(&board, 5);
        assert_eq!(moves, vec![Move::new(5, 21, vec![9, 17], false)]);
    }

    #[test]
    fn shorter_chains_are_kept() {
        // From 5 the Dark man can jump 9 then 17, or jump 8 and stop.
        let board = setup_board(Setup::new().dark([5]).light([8, 9, 17]));
        let moves = generate_moves(&board, 5);
        assert_eq!(
            moves,
            vec![
                Move::new(5, 12, vec![8], false),
                Move::new(5, 21, vec![9, 17], false),
            ]
        );
        assert!(moves.iter().all(Move::is_capture));
    }

    #[test]
    fn branching_chain() {
        // After jumping 9 onto 14 the chain can continue over 17 or over 18.
        let board = setup_board(Setup::new().dark([5]).light([9, 17, 18]));
        let moves = generate_moves(&board, 5);
        assert_eq!(destinations(&moves), vec![21, 23]);
        for m in &moves {
            assert_eq!(m.capture_count(), 2);
            assert_eq!(m.captured()[0], 9);
        }
    }

    #[test]
    fn chain_cannot_return_to_start() {
        // 13 -> 6 -> 15 -> 22 circles the four Dark men; the last jump over 17
        // would land on 13, still occupied by the moving man.
        let board = setup_board(Setup::new().light([13]).dark([9, 10, 18, 17]));
        let moves = generate_moves(&board, 13);
        assert_eq!(
            moves,
            vec![
                Move::new(13, 22, vec![9, 10, 18], false),
                Move::new(13, 6, vec![17, 18, 10], false),
            ]
        );
        for m in &moves {
            let mut seen = m.captured().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), m.capture_count());
        }
    }

    #[test]
    fn plain_promotion() {
        let board = setup_board(Setup::new().light([4]));
        let moves = generate_moves(&board, 4);
        assert_eq!(moves, vec![Move::new(4, 0, Vec::new(), true)]);

        let board = setup_board(Setup::new().light_kings([4]));
        let moves = generate_moves(&board, 4);
        assert_eq!(moves, vec![Move::new(4, 0, Vec::new(), false)]);
    }

    #[test]
    fn promotion_at_end_of_chain() {
        let board = setup_board(Setup::new().light([9]).dark([5]));
        let moves = generate_moves(&board, 9);
        assert_eq!(moves, vec![Move::new(9, 0, vec![5], true)]);
    }

    #[test]
    fn promotion_mid_chain_is_kept() {
        // The Light man jumps 6 onto the far line at 1, then continues back
        // down over 5 to land on 8, still crowned.
        let board = setup_board(Setup::new().light([10]).dark([6, 5]));
        let moves = generate_moves(&board, 10);
        assert_eq!(moves, vec![Move::new(10, 8, vec![6, 5], true)]);
    }

    #[test]
    fn crowning_stays_on_its_own_branch() {
        // Jumping 5 reaches the far line; the sibling jump over 13, searched
        // afterwards, starts again from the uncrowned man.
        let board = setup_board(Setup::new().light([9]).dark([5, 13]));
        let moves = generate_moves(&board, 9);
        assert_eq!(
            moves,
            vec![
                Move::new(9, 0, vec![5], true),
                Move::new(9, 16, vec![13], false),
            ]
        );
    }

    #[test]
    fn dark_promotes_on_bottom_line() {
        let board = setup_board(Setup::new().dark([22]).light([26]));
        let moves = generate_moves(&board, 22);
        assert_eq!(moves, vec![Move::new(22, 31, vec![26], true)]);
        assert_eq!(board.piece_at(22).map(Piece::color), Some(Color::Dark));
    }
}
