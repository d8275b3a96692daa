use crate::app::AppState;
use crate::ui::input::{handle_key, handle_mouse, Control};
use crate::ui::widgets::{BoardGeometry, BoardWidget, ControlsPanel, GameInfoPanel};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Run the TUI application
pub fn run_app(mut app_state: AppState) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app_state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> anyhow::Result<()> {
    loop {
        let mut geometry = None;
        terminal.draw(|f| {
            geometry = Some(draw(f, app_state));
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if handle_key(app_state, key) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                if let Some(geometry) = geometry {
                    handle_mouse(app_state, mouse, &geometry);
                }
            }
            _ => {}
        }
    }
}

/// Draw one frame and return where the board squares ended up.
pub fn draw(f: &mut Frame, app_state: &AppState) -> BoardGeometry {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(36)])
        .split(main_chunks[0]);

    let board_area = chunks[0];
    f.render_widget(BoardWidget::new(app_state), board_area);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Controls
            Constraint::Min(8),     // Game Info
        ])
        .split(chunks[1]);

    f.render_widget(ControlsPanel::new(), right_chunks[0]);
    f.render_widget(GameInfoPanel::new(app_state), right_chunks[1]);

    render_input_box(f, app_state, main_chunks[1]);

    BoardGeometry::for_area(board_area, app_state.ui_state.flipped)
}

fn render_input_box(f: &mut Frame, app_state: &AppState, area: Rect) {
    let typing = !app_state.typed_input().is_empty();
    let text = if typing {
        format!("Typing: {}", app_state.typed_input())
    } else if let Some(origin) = app_state.drag_origin() {
        format!("Dragging from {}", origin)
    } else if let Some(selected) = app_state.game.selection() {
        format!("Selected: {} (click or type a destination)", selected)
    } else {
        "Click a piece or type a square (e.g., e2)".to_string()
    };

    let (text_style, border_style) = if typing || app_state.game.selection().is_some() {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let widget = Paragraph::new(Line::from(vec![Span::styled(text, text_style)]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} to move", app_state.game.current_player()))
                .border_style(border_style),
        );
    f.render_widget(widget, area);
}
