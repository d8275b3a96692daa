use crate::board::Board;
use crate::rules::path::is_path_clear;
use crate::square::Square;

/// Any distance along a diagonal, with nothing in between.
pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }
    is_path_clear(board, from, to, d_row.signum(), d_col.signum())
}
