use crate::board::Board;
use crate::rules::RuleSet;
use crate::square::Square;
use crate::types::PieceColor;

/// Pawn geometry for a pawn of `color`.
///
/// `target_is_enemy` says whether `to` holds an opposing piece; the caller
/// already knows this from its own occupancy check.
pub fn is_valid_pawn_move(
    board: &Board,
    from: Square,
    to: Square,
    color: PieceColor,
    target_is_enemy: bool,
    rules: &RuleSet,
) -> bool {
    let direction = color.pawn_direction();
    let (d_row, d_col) = from.delta_to(to);

    if d_col == 0 {
        if d_row == direction {
            return board.is_empty(to);
        }
        if d_row == 2 * direction && from.row() == color.pawn_home_row() {
            if !board.is_empty(to) {
                return false;
            }
            if rules.pawn_double_step_checks_path {
                return from
                    .offset(direction, 0)
                    .is_some_and(|middle| board.is_empty(middle));
            }
            return true;
        }
        return false;
    }

    d_col.abs() == 1 && d_row == direction && target_is_enemy
}
