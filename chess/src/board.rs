//! The 8x8 grid and its piece-placement serialization.

use std::fmt;
use std::str::FromStr;

use crate::render::glyph;
use crate::square::Square;
use crate::types::{Piece, PieceColor, PieceKind};

/// Piece placement of the standard starting position.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board position: one cell per square, each holding at most one piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, PieceColor::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::White));
            board.squares[7][col] = Some(Piece::new(kind, PieceColor::White));
        }
        board
    }

    /// Parse the piece-placement field of a FEN string. Any trailing fields
    /// (side to move, castling, ...) are ignored.
    pub fn from_placement(fen: &str) -> Result<Self, BoardError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or(BoardError::WrongRankCount(0))?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::WrongRankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(BoardError::InvalidPiece(c))?;
                    if col < 8 {
                        board.squares[row][col] = Some(piece);
                    }
                    col += 1;
                }
                if col > 8 {
                    break;
                }
            }
            if col != 8 {
                return Err(BoardError::BadRankWidth { rank: row, width: col });
            }
        }

        Ok(board)
    }

    /// Serialize as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, cells) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty_run = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
        }
        out
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_placement(s)
    }
}

/// Eight lines of glyphs, row 0 first, `·` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or('·', glyph).to_string())
                .collect();
            write!(f, "{} {}", 8 - row, line.join(" "))?;
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Expected 8 ranks in placement, found {0}")]
    WrongRankCount(usize),
    #[error("Rank {rank} describes {width} columns instead of 8")]
    BadRankWidth { rank: usize, width: usize },
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),
    #[error("Invalid square: {0:?}")]
    InvalidSquare(String),
}
