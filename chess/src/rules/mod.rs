//! Move validation.
//!
//! [`check_move`] is the single entry point: it looks at ownership and
//! target occupancy, then hands the geometry to the rule for the piece kind.
//! Nothing in here mutates the board.
//!
//! Out of scope on purpose: check, checkmate, stalemate, castling, en passant
//! and promotion. A king may step onto an attacked square.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod path;
pub mod pawn;
pub mod queen;
pub mod rook;

pub use bishop::is_valid_bishop_move;
pub use king::is_valid_king_move;
pub use knight::is_valid_knight_move;
pub use path::is_path_clear;
pub use pawn::is_valid_pawn_move;
pub use queen::is_valid_queen_move;
pub use rook::is_valid_rook_move;

use crate::board::Board;
use crate::square::Square;
use crate::types::{PieceColor, PieceKind};

/// Switches for rule variations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Require the square a pawn passes over on its double step to be empty.
    /// Off by default: the double step only looks at its destination.
    pub pawn_double_step_checks_path: bool,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("No piece on the source square")]
    EmptySource,
    #[error("It is {to_move}'s turn")]
    NotYourTurn { to_move: PieceColor },
    #[error("Destination holds one of your own pieces")]
    OwnPieceOnTarget,
    #[error("A {0} cannot move like that")]
    IllegalPieceMove(PieceKind),
}

impl RuleSet {
    /// Decide a move for `current_player`, explaining a refusal.
    pub fn check_move(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        current_player: PieceColor,
    ) -> Result<(), Rejection> {
        let piece = board.piece_at(from).ok_or(Rejection::EmptySource)?;

        let target = board.piece_at(to);
        let target_is_enemy = target.is_some_and(|t| piece.is_enemy_of(t));

        if piece.color != current_player {
            return Err(Rejection::NotYourTurn {
                to_move: current_player,
            });
        }
        if target.is_some() && !target_is_enemy {
            return Err(Rejection::OwnPieceOnTarget);
        }

        let legal = match piece.kind {
            PieceKind::Pawn => {
                is_valid_pawn_move(board, from, to, piece.color, target_is_enemy, self)
            }
            PieceKind::Rook => is_valid_rook_move(board, from, to),
            PieceKind::Knight => is_valid_knight_move(from, to),
            PieceKind::Bishop => is_valid_bishop_move(board, from, to),
            PieceKind::Queen => is_valid_queen_move(board, from, to),
            PieceKind::King => is_valid_king_move(from, to),
        };

        if legal {
            Ok(())
        } else {
            Err(Rejection::IllegalPieceMove(piece.kind))
        }
    }

    pub fn is_valid_move(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        current_player: PieceColor,
    ) -> bool {
        self.check_move(board, from, to, current_player).is_ok()
    }

    /// Every square the piece on `from` may move to, in row-major order.
    pub fn legal_destinations(
        &self,
        board: &Board,
        from: Square,
        current_player: PieceColor,
    ) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_valid_move(board, from, to, current_player))
            .collect()
    }
}

/// [`RuleSet::check_move`] with the default rules.
pub fn check_move(
    board: &Board,
    from: Square,
    to: Square,
    current_player: PieceColor,
) -> Result<(), Rejection> {
    RuleSet::default().check_move(board, from, to, current_player)
}

/// [`RuleSet::is_valid_move`] with the default rules.
pub fn is_valid_move(board: &Board, from: Square, to: Square, current_player: PieceColor) -> bool {
    RuleSet::default().is_valid_move(board, from, to, current_player)
}

/// [`RuleSet::legal_destinations`] with the default rules.
pub fn legal_destinations(board: &Board, from: Square, current_player: PieceColor) -> Vec<Square> {
    RuleSet::default().legal_destinations(board, from, current_player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_source_rejected() {
        let board = Board::standard();
        assert_eq!(
            check_move(&board, sq(4, 4), sq(3, 4), PieceColor::White),
            Err(Rejection::EmptySource)
        );
    }

    #[test]
    fn test_wrong_owner_rejected() {
        let board = Board::standard();
        assert_eq!(
            check_move(&board, sq(1, 4), sq(2, 4), PieceColor::White),
            Err(Rejection::NotYourTurn {
                to_move: PieceColor::White
            })
        );
        assert!(is_valid_move(&board, sq(1, 4), sq(2, 4), PieceColor::Black));
    }

    #[test]
    fn test_own_piece_on_target_rejected_for_every_kind() {
        let board = Board::standard();
        // Bishop onto its own pawn, knight onto its own pawn, king onto queen.
        for (from, to) in [
            (sq(7, 2), sq(6, 3)),
            (sq(7, 1), sq(6, 3)),
            (sq(7, 4), sq(7, 3)),
            (sq(7, 0), sq(6, 0)),
        ] {
            assert_eq!(
                check_move(&board, from, to, PieceColor::White),
                Err(Rejection::OwnPieceOnTarget),
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn test_standing_still_is_not_a_move() {
        let board = Board::standard();
        assert!(!is_valid_move(&board, sq(7, 4), sq(7, 4), PieceColor::White));
    }

    #[test]
    fn test_capture_of_same_kind_allowed() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::new(PieceKind::Rook, PieceColor::White)));
        board.set(sq(0, 4), Some(Piece::new(PieceKind::Rook, PieceColor::Black)));
        assert!(is_valid_move(&board, sq(4, 4), sq(0, 4), PieceColor::White));

        board.set(sq(3, 3), Some(Piece::new(PieceKind::Pawn, PieceColor::Black)));
        board.set(sq(4, 4), Some(Piece::new(PieceKind::Pawn, PieceColor::White)));
        assert!(is_valid_move(&board, sq(4, 4), sq(3, 3), PieceColor::White));
    }

    #[test]
    fn test_geometry_failure_names_the_piece() {
        let board = Board::standard();
        assert_eq!(
            check_move(&board, sq(7, 1), sq(5, 1), PieceColor::White),
            Err(Rejection::IllegalPieceMove(PieceKind::Knight))
        );
    }

    #[test]
    fn test_legal_destinations_from_start() {
        let board = Board::standard();
        assert_eq!(
            legal_destinations(&board, sq(7, 1), PieceColor::White),
            vec![sq(5, 0), sq(5, 2)]
        );
        assert_eq!(
            legal_destinations(&board, sq(6, 4), PieceColor::White),
            vec![sq(4, 4), sq(5, 4)]
        );
        assert!(legal_destinations(&board, sq(7, 2), PieceColor::White).is_empty());
        assert!(legal_destinations(&board, sq(1, 4), PieceColor::White).is_empty());
    }
}
