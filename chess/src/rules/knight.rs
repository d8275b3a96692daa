use crate::square::Square;

/// The L-shape. Knights jump, so the board is never consulted.
pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}
