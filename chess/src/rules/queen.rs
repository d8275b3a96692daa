use crate::board::Board;
use crate::rules::bishop::is_valid_bishop_move;
use crate::rules::rook::is_valid_rook_move;
use crate::square::Square;

pub fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}
