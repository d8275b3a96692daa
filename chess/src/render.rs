//! Display model for a board: what each square looks like, independent of
//! the surface it is drawn on.

use crate::board::Board;
use crate::square::Square;
use crate::types::{Piece, PieceColor, PieceKind};

/// Unicode chess symbol for a piece.
pub fn glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (PieceColor::White, PieceKind::King) => '♔',
        (PieceColor::White, PieceKind::Queen) => '♕',
        (PieceColor::White, PieceKind::Rook) => '♖',
        (PieceColor::White, PieceKind::Bishop) => '♗',
        (PieceColor::White, PieceKind::Knight) => '♘',
        (PieceColor::White, PieceKind::Pawn) => '♙',
        (PieceColor::Black, PieceKind::King) => '♚',
        (PieceColor::Black, PieceKind::Queen) => '♛',
        (PieceColor::Black, PieceKind::Rook) => '♜',
        (PieceColor::Black, PieceKind::Bishop) => '♝',
        (PieceColor::Black, PieceKind::Knight) => '♞',
        (PieceColor::Black, PieceKind::Pawn) => '♟',
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn of(square: Square) -> Self {
        if (square.row() + square.col()) % 2 == 0 {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Everything a surface needs to draw one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedSquare {
    pub square: Square,
    pub shade: Shade,
    pub glyph: Option<char>,
    /// Owner of the piece on the square, kept so input handling can check it.
    pub color: Option<PieceColor>,
    pub selected: bool,
    pub highlighted: bool,
}

/// Render the full grid, row 0 first.
pub fn render_board(
    board: &Board,
    selection: Option<Square>,
    highlights: &[Square],
) -> [[RenderedSquare; 8]; 8] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let square = Square::from_grid(row, col);
            let piece = board.piece_at(square);
            RenderedSquare {
                square,
                shade: Shade::of(square),
                glyph: piece.map(glyph),
                color: piece.map(|p| p.color),
                selected: selection == Some(square),
                highlighted: highlights.contains(&square),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_shading_alternates() {
        assert_eq!(Shade::of(sq(0, 0)), Shade::Light);
        assert_eq!(Shade::of(sq(0, 1)), Shade::Dark);
        assert_eq!(Shade::of(sq(7, 7)), Shade::Light);
        assert_eq!(Shade::of(sq(7, 0)), Shade::Dark);
    }

    #[test]
    fn test_starting_grid_glyphs_and_colors() {
        let grid = render_board(&Board::standard(), None, &[]);
        assert_eq!(grid[0][4].glyph, Some('♚'));
        assert_eq!(grid[0][4].color, Some(PieceColor::Black));
        assert_eq!(grid[7][3].glyph, Some('♕'));
        assert_eq!(grid[7][3].color, Some(PieceColor::White));
        assert_eq!(grid[6][0].glyph, Some('♙'));
        assert_eq!(grid[3][3].glyph, None);
        assert_eq!(grid[3][3].color, None);
        assert_eq!(grid[5][2].square, sq(5, 2));
    }

    #[test]
    fn test_selection_and_highlights_marked() {
        let grid = render_board(&Board::standard(), Some(sq(6, 4)), &[sq(5, 4), sq(4, 4)]);
        assert!(grid[6][4].selected);
        assert!(!grid[6][3].selected);
        assert!(grid[5][4].highlighted);
        assert!(grid[4][4].highlighted);
        assert!(!grid[3][4].highlighted);
    }
}
