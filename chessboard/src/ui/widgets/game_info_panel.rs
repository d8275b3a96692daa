use crate::app::AppState;
use chess::PieceColor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct GameInfoPanel<'a> {
    pub app_state: &'a AppState,
}

impl<'a> GameInfoPanel<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♟ Game Info ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        let label = |text: &'static str, color: Color| {
            Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };

        let mut lines = vec![];

        // Turn indicator
        let turn = self.app_state.game.current_player();
        let turn_text = match turn {
            PieceColor::White => "White to move",
            PieceColor::Black => "Black to move",
        };
        lines.push(Line::from(vec![
            label("Turn: ", Color::Yellow),
            Span::styled(
                turn_text,
                Style::default()
                    .fg(if turn == PieceColor::White {
                        Color::White
                    } else {
                        Color::Gray
                    })
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        if let Some(selected) = self.app_state.game.selection() {
            let piece = self
                .app_state
                .game
                .board()
                .piece_at(selected)
                .map(|p| format!(" ({})", p.kind))
                .unwrap_or_default();
            lines.push(Line::from(vec![
                label("Selected: ", Color::Yellow),
                Span::raw(format!("{}{}", selected, piece)),
            ]));
        }

        if !self.app_state.typed_input().is_empty() {
            lines.push(Line::from(vec![
                label("Typing: ", Color::Yellow),
                Span::raw(self.app_state.typed_input().to_string()),
            ]));
        }

        if let Some((from, to)) = self.app_state.ui_state.last_move {
            lines.push(Line::from(vec![
                label("Last move: ", Color::Cyan),
                Span::raw(format!("{} → {}", from, to)),
            ]));
        }

        lines.push(Line::raw(""));

        let strict = self.app_state.game.rules().pawn_double_step_checks_path;
        lines.push(Line::from(vec![
            label("Pawn path: ", Color::Cyan),
            Span::raw(if strict { "checked" } else { "not checked" }),
        ]));
        lines.push(Line::from(vec![
            label("View: ", Color::Cyan),
            Span::raw(if self.app_state.ui_state.flipped {
                "black side"
            } else {
                "white side"
            }),
        ]));

        if let Some(ref msg) = self.app_state.ui_state.status_message {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(Color::Green),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        paragraph.render(inner, buf);
    }
}
