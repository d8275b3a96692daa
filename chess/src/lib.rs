//! Chessboard core: board model, per-piece move validation, turn tracking
//! and the click/drag input adapters that feed it.

pub mod board;
pub mod game;
pub mod input;
pub mod render;
pub mod rules;
pub mod square;
pub mod types;

pub use board::{Board, BoardError, STANDARD_PLACEMENT};
pub use game::{AppliedMove, Game, GameError, MoveRequest, StartPosition};
pub use input::{ClickInput, DragInput, InputOutcome};
pub use render::{glyph, render_board, RenderedSquare, Shade};
pub use rules::{check_move, is_path_clear, is_valid_move, legal_destinations, Rejection, RuleSet};
pub use square::Square;
pub use types::{Piece, PieceColor, PieceKind};
