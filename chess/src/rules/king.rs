use crate::square::Square;

/// One step in any direction. Whether the square is attacked is not checked.
pub fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}
