use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ControlsPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("⌨ Controls ⌨")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let key = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Mouse: ", heading),
                Span::raw("Click piece, click target"),
            ]),
            Line::from(vec![
                Span::styled("       ", Style::default()),
                Span::raw("or drag and drop"),
            ]),
            Line::from(vec![
                Span::styled("Keys:  ", heading),
                Span::raw("Type squares (e2 e4)"),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Esc ", key),
                Span::raw("- Clear selection"),
            ]),
            Line::from(vec![
                Span::styled("Tab ", key),
                Span::raw("- Flip board"),
            ]),
            Line::from(vec![
                Span::styled("n ", key),
                Span::raw("- New game"),
            ]),
            Line::from(vec![
                Span::styled("q ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw("- Quit"),
            ]),
        ];

        let paragraph = Paragraph::new(lines);
        paragraph.render(inner, buf);
    }
}
