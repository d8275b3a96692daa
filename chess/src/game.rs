use crate::board::{Board, BoardError};
use crate::rules::{Rejection, RuleSet};
use crate::square::Square;
use crate::types::{Piece, PieceColor};

/// Game session: the board, whose turn it is and the current selection.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: PieceColor,
    selection: Option<Square>,
    rules: RuleSet,
    start_position: StartPosition,
}

/// A request to move whatever stands on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
}

/// Record of a move the game accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// Starting position of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPosition {
    Standard,
    Custom(Board),
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Build a request from raw grid coordinates, `None` if any is off the board.
    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Option<Self> {
        Some(Self {
            from: Square::new(from_row, from_col)?,
            to: Square::new(to_row, to_col)?,
        })
    }
}

impl Game {
    /// Create a new game from the standard starting position
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            board: Board::standard(),
            current_player: PieceColor::White,
            selection: None,
            rules,
            start_position: StartPosition::Standard,
        }
    }

    /// Start from an arbitrary board with white to move.
    pub fn from_board(board: Board, rules: RuleSet) -> Self {
        Self {
            board: board.clone(),
            current_player: PieceColor::White,
            selection: None,
            rules,
            start_position: StartPosition::Custom(board),
        }
    }

    /// Create a game from a FEN piece-placement field
    pub fn from_placement(placement: &str, rules: RuleSet) -> Result<Self, GameError> {
        let board = Board::from_placement(placement)?;
        Ok(Self::from_board(board, rules))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PieceColor {
        self.current_player
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Select `square` if it holds a piece of the side to move.
    /// Returns whether the selection was taken.
    pub fn select(&mut self, square: Square) -> bool {
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.current_player => {
                self.selection = Some(square);
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Destinations for the selected piece, empty without a selection.
    pub fn selection_targets(&self) -> Vec<Square> {
        match self.selection {
            Some(from) => self
                .rules
                .legal_destinations(&self.board, from, self.current_player),
            None => Vec::new(),
        }
    }

    pub fn is_valid_move(&self, request: MoveRequest) -> bool {
        self.rules
            .is_valid_move(&self.board, request.from, request.to, self.current_player)
    }

    /// Validate and play a move.
    ///
    /// The selection is cleared whatever the outcome. On rejection the board
    /// and the turn are left exactly as they were.
    pub fn make_move(&mut self, request: MoveRequest) -> Result<AppliedMove, GameError> {
        self.selection = None;

        if let Err(rejection) =
            self.rules
                .check_move(&self.board, request.from, request.to, self.current_player)
        {
            tracing::debug!(
                from = %request.from,
                to = %request.to,
                player = %self.current_player,
                reason = %rejection,
                "Move rejected"
            );
            return Err(GameError::IllegalMove(rejection));
        }

        let piece = self
            .board
            .take(request.from)
            .ok_or(GameError::IllegalMove(Rejection::EmptySource))?;
        let captured = self.board.set(request.to, Some(piece));
        self.current_player = self.current_player.opposite();

        tracing::debug!(
            from = %request.from,
            to = %request.to,
            piece = %piece,
            captured = ?captured.map(|p| p.to_string()),
            next = %self.current_player,
            "Move applied"
        );

        Ok(AppliedMove {
            from: request.from,
            to: request.to,
            piece,
            captured,
        })
    }

    /// Put the pieces back where this game started, white to move.
    pub fn reset(&mut self) {
        self.board = match &self.start_position {
            StartPosition::Standard => Board::standard(),
            StartPosition::Custom(board) => board.clone(),
        };
        self.current_player = PieceColor::White;
        self.selection = None;
        tracing::info!("Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(Rejection),
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}
