//! Ray walking for the sliding pieces.

use crate::board::Board;
use crate::square::Square;

/// Walk from the square after `from` toward `to`, one `(row_step, col_step)`
/// at a time, and report whether every square strictly between them is empty.
///
/// The occupant of `to` is not looked at. A ray that runs off the board
/// before reaching `to` is not clear.
pub fn is_path_clear(board: &Board, from: Square, to: Square, row_step: i8, col_step: i8) -> bool {
    debug_assert!(
        (-1..=1).contains(&row_step) && (-1..=1).contains(&col_step),
        "ray step must be a unit direction"
    );
    if row_step == 0 && col_step == 0 {
        return from == to;
    }

    let mut current = from;
    loop {
        current = match current.offset(row_step, col_step) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceColor, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn pawn(color: PieceColor) -> Option<Piece> {
        Some(Piece::new(PieceKind::Pawn, color))
    }

    #[test]
    fn test_empty_board_is_clear() {
        let board = Board::empty();
        assert!(is_path_clear(&board, sq(7, 0), sq(0, 0), -1, 0));
        assert!(is_path_clear(&board, sq(0, 0), sq(7, 7), 1, 1));
        assert!(is_path_clear(&board, sq(3, 7), sq(3, 0), 0, -1));
    }

    #[test]
    fn test_adjacent_target_has_nothing_to_walk() {
        let mut board = Board::empty();
        board.set(sq(3, 4), pawn(PieceColor::White));
        assert!(is_path_clear(&board, sq(4, 4), sq(3, 4), -1, 0));
    }

    #[test]
    fn test_blocker_of_either_color_stops_the_ray() {
        for color in [PieceColor::White, PieceColor::Black] {
            let mut board = Board::empty();
            board.set(sq(2, 2), pawn(color));
            assert!(!is_path_clear(&board, sq(0, 0), sq(5, 5), 1, 1));
            assert!(is_path_clear(&board, sq(0, 0), sq(2, 2), 1, 1));
        }
    }

    #[test]
    fn test_destination_occupant_ignored() {
        let mut board = Board::empty();
        board.set(sq(0, 4), pawn(PieceColor::Black));
        assert!(is_path_clear(&board, sq(7, 4), sq(0, 4), -1, 0));
        board.set(sq(0, 4), pawn(PieceColor::White));
        assert!(is_path_clear(&board, sq(7, 4), sq(0, 4), -1, 0));
    }

    #[test]
    fn test_ray_that_misses_target_is_not_clear() {
        let board = Board::empty();
        assert!(!is_path_clear(&board, sq(0, 0), sq(2, 3), 1, 1));
    }
}
