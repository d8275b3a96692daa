use chess::{ClickInput, DragInput, Game, GameError, InputOutcome, RuleSet, Square};

use crate::app::InputBuffer;
use crate::config::Settings;

/// Main application state
pub struct AppState {
    pub game: Game,
    pub ui_state: UiState,
    click: ClickInput,
    drag: DragInput,
    input_buffer: InputBuffer,
    /// Square under the pointer when the left button went down.
    pressed: Option<Square>,
}

/// UI-specific state (not part of game state)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub highlighted_squares: Vec<Square>,
    pub last_move: Option<(Square, Square)>,
    pub status_message: Option<String>,
    pub flipped: bool,
}

impl AppState {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            ui_state: UiState::default(),
            click: ClickInput,
            drag: DragInput::new(),
            input_buffer: InputBuffer::new(),
            pressed: None,
        }
    }

    /// Build the game described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, GameError> {
        let rules = RuleSet {
            pawn_double_step_checks_path: settings.strict_pawn_path,
        };
        let game = match &settings.start_position {
            Some(placement) => Game::from_placement(placement, rules)?,
            None => Game::with_rules(rules),
        };
        let mut state = Self::new(game);
        state.ui_state.flipped = settings.flipped;
        Ok(state)
    }

    pub fn typed_input(&self) -> &str {
        self.input_buffer.as_str()
    }

    pub fn drag_origin(&self) -> Option<Square> {
        self.drag.origin()
    }

    /// Left button went down on `square`.
    ///
    /// Without a selection this picks the piece up for dragging. With one,
    /// the press may be the second half of a click move, so it waits for the
    /// release.
    pub fn press(&mut self, square: Square) {
        self.pressed = Some(square);
        self.input_buffer.clear();
        if self.game.selection().is_none() {
            let outcome = self.drag.press(&mut self.game, square);
            self.apply_outcome(outcome);
        }
    }

    /// Left button came up over `square`, or outside the board for `None`.
    pub fn release(&mut self, square: Option<Square>) {
        let pressed = self.pressed.take();

        let Some(square) = square else {
            if self.drag.is_dragging() {
                self.drag.cancel(&mut self.game);
                self.ui_state.highlighted_squares.clear();
                self.ui_state.status_message = Some("Drag cancelled".to_string());
            }
            return;
        };

        match self.drag.origin() {
            // Press and release on the same piece: keep it selected and let
            // the next click finish the move.
            Some(origin) if origin == square => {
                self.drag = DragInput::new();
            }
            Some(_) => {
                let outcome = self.drag.release(&mut self.game, square);
                self.apply_outcome(outcome);
            }
            // With a click selection active, the release square is the target
            // whether or not the pointer moved while the button was held.
            None if pressed.is_some() => {
                let outcome = self.click.click(&mut self.game, square);
                self.apply_outcome(outcome);
            }
            // Button went down outside the board.
            None => {}
        }
    }

    /// Route a typed square through the click adapter.
    pub fn type_char(&mut self, c: char) {
        self.input_buffer.push_char(c);
        if !self.input_buffer.is_complete() {
            return;
        }

        match self.input_buffer.try_parse_square() {
            Some(square) => {
                let outcome = self.click.click(&mut self.game, square);
                self.apply_outcome(outcome);
            }
            None => {
                self.ui_state.status_message = Some("Invalid square!".to_string());
            }
        }
        self.input_buffer.clear();
    }

    pub fn backspace(&mut self) {
        self.input_buffer.backspace();
    }

    /// Clear the current selection and highlights
    pub fn clear_selection(&mut self) {
        self.drag.cancel(&mut self.game);
        self.input_buffer.clear();
        self.pressed = None;
        self.ui_state.highlighted_squares.clear();
        self.ui_state.status_message = Some("Selection cleared".to_string());
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.drag = DragInput::new();
        self.input_buffer.clear();
        self.pressed = None;
        self.ui_state.highlighted_squares.clear();
        self.ui_state.last_move = None;
        self.ui_state.status_message = Some("New game".to_string());
    }

    pub fn toggle_flipped(&mut self) {
        self.ui_state.flipped = !self.ui_state.flipped;
    }

    fn apply_outcome(&mut self, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Ignored => {
                self.ui_state.highlighted_squares.clear();
            }
            InputOutcome::Selected(square) => {
                self.ui_state.highlighted_squares = self.game.selection_targets();
                self.ui_state.status_message = Some(format!("Selected {}", square));
            }
            InputOutcome::Moved(applied) => {
                self.ui_state.highlighted_squares.clear();
                self.ui_state.last_move = Some((applied.from, applied.to));
                self.ui_state.status_message = Some(match applied.captured {
                    Some(victim) => format!(
                        "Moved {} to {}, captured {}",
                        applied.from, applied.to, victim.kind
                    ),
                    None => format!("Moved {} to {}", applied.from, applied.to),
                });
                tracing::info!(from = %applied.from, to = %applied.to, "Move played");
            }
            InputOutcome::Rejected(reason) => {
                self.ui_state.highlighted_squares.clear();
                self.ui_state.status_message = Some(reason.to_string());
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::PieceColor;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_click_click_move() {
        let mut state = AppState::default();
        state.press(sq("e2"));
        state.release(Some(sq("e2")));
        assert_eq!(state.game.selection(), Some(sq("e2")));
        assert_eq!(state.ui_state.highlighted_squares, vec![sq("e4"), sq("e3")]);

        state.press(sq("e4"));
        state.release(Some(sq("e4")));
        assert_eq!(state.game.current_player(), PieceColor::Black);
        assert_eq!(state.ui_state.last_move, Some((sq("e2"), sq("e4"))));
        assert!(state.ui_state.highlighted_squares.is_empty());
    }

    #[test]
    fn test_drag_move() {
        let mut state = AppState::default();
        state.press(sq("g1"));
        assert_eq!(state.drag_origin(), Some(sq("g1")));
        state.release(Some(sq("f3")));
        assert_eq!(state.drag_origin(), None);
        assert_eq!(state.game.current_player(), PieceColor::Black);
        assert_eq!(state.ui_state.status_message.as_deref(), Some("Moved g1 to f3"));
    }

    #[test]
    fn test_release_off_board_cancels_drag() {
        let mut state = AppState::default();
        state.press(sq("g1"));
        state.release(None);
        assert_eq!(state.game.selection(), None);
        assert_eq!(state.game.current_player(), PieceColor::White);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut state = AppState::default();
        state.release(Some(sq("e2")));
        assert_eq!(state.game.selection(), None);
        assert_eq!(state.ui_state.status_message, None);
    }

    #[test]
    fn test_typed_squares_move() {
        let mut state = AppState::default();
        for c in "d2d4".chars() {
            state.type_char(c);
        }
        assert_eq!(state.game.current_player(), PieceColor::Black);
        assert_eq!(state.typed_input(), "");
    }

    #[test]
    fn test_rejection_reported() {
        let mut state = AppState::default();
        for c in "a1a3".chars() {
            state.type_char(c);
        }
        assert_eq!(state.game.current_player(), PieceColor::White);
        assert_eq!(
            state.ui_state.status_message.as_deref(),
            Some("A rook cannot move like that")
        );
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut state = AppState::default();
        for c in "e2e4".chars() {
            state.type_char(c);
        }
        state.new_game();
        assert_eq!(state.game.current_player(), PieceColor::White);
        assert_eq!(state.ui_state.last_move, None);
        assert_eq!(state.game.board(), &chess::Board::standard());
    }

    #[test]
    fn test_from_settings_uses_placement_and_rules() {
        let settings = Settings {
            start_position: Some("4k3/8/8/8/8/4n3/4P3/4K3".to_string()),
            strict_pawn_path: true,
            flipped: true,
            ..Settings::default()
        };
        let state = AppState::from_settings(&settings).unwrap();
        assert!(state.game.rules().pawn_double_step_checks_path);
        assert!(state.ui_state.flipped);
        assert_eq!(state.game.board().pieces().count(), 4);

        let bad = Settings {
            start_position: Some("not a board".to_string()),
            ..Settings::default()
        };
        assert!(AppState::from_settings(&bad).is_err());
    }
}
