use crate::board::Board;
use crate::rules::path::is_path_clear;
use crate::square::Square;

/// Straight along a row or a column, with nothing in between.
pub fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    if d_row == 0 {
        return is_path_clear(board, from, to, 0, d_col.signum());
    }
    if d_col == 0 {
        return is_path_clear(board, from, to, d_row.signum(), 0);
    }
    false
}
