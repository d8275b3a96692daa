//! Input adapters. Click-to-select and drag-and-drop are two ways of
//! producing the same [`MoveRequest`]; both funnel into [`Game::make_move`].

use crate::game::{AppliedMove, Game, GameError, MoveRequest};
use crate::rules::Rejection;
use crate::square::Square;

/// What a single pointer interaction did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing happened (empty square, opponent piece, stray release).
    Ignored,
    /// A piece of the side to move is now selected.
    Selected(Square),
    Moved(AppliedMove),
    Rejected(Rejection),
}

impl InputOutcome {
    fn from_attempt(result: Result<AppliedMove, GameError>) -> Self {
        match result {
            Ok(applied) => Self::Moved(applied),
            Err(GameError::IllegalMove(rejection)) => Self::Rejected(rejection),
            // make_move only ever reports illegal moves
            Err(GameError::Board(_)) => Self::Ignored,
        }
    }
}

/// Click a piece, then click where it should go.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickInput;

impl ClickInput {
    pub fn click(&self, game: &mut Game, square: Square) -> InputOutcome {
        match game.selection() {
            None => {
                if game.select(square) {
                    InputOutcome::Selected(square)
                } else {
                    InputOutcome::Ignored
                }
            }
            Some(from) => InputOutcome::from_attempt(game.make_move(MoveRequest::new(from, square))),
        }
    }
}

/// Press on a piece, drag, release on the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragInput {
    origin: Option<Square>,
}

impl DragInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> Option<Square> {
        self.origin
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Pick up the piece on `square` if it belongs to the side to move.
    pub fn press(&mut self, game: &mut Game, square: Square) -> InputOutcome {
        game.clear_selection();
        if game.select(square) {
            self.origin = Some(square);
            InputOutcome::Selected(square)
        } else {
            self.origin = None;
            InputOutcome::Ignored
        }
    }

    /// Drop the dragged piece on `square`.
    pub fn release(&mut self, game: &mut Game, square: Square) -> InputOutcome {
        match self.origin.take() {
            Some(from) => InputOutcome::from_attempt(game.make_move(MoveRequest::new(from, square))),
            None => InputOutcome::Ignored,
        }
    }

    pub fn cancel(&mut self, game: &mut Game) {
        self.origin = None;
        game.clear_selection();
    }
}
