use crate::app::AppState;
use chess::{render_board, PieceColor, RenderedSquare, Shade, Square};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Cell size used when the area can fit it.
const LARGE_SQUARE: (u16, u16) = (7, 3);
/// Fallback cell size for small terminals.
const SMALL_SQUARE: (u16, u16) = (5, 2);

/// Columns reserved on the left for rank labels.
const RANK_LABEL_WIDTH: u16 = 2;
/// Rows reserved below the board for file labels.
const FILE_LABEL_HEIGHT: u16 = 1;

const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);

/// Where the 64 squares land inside a widget area.
///
/// The same geometry is used to draw the board and to map mouse positions
/// back to squares, so both always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Drawable area inside the border.
    inner: Rect,
    /// Top-left cell of the top-left square.
    origin_x: u16,
    origin_y: u16,
    square_width: u16,
    square_height: u16,
    flipped: bool,
}

impl BoardGeometry {
    /// Lay the board out inside `area`, which includes the widget border.
    pub fn for_area(area: Rect, flipped: bool) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);

        let fits = |(width, height): (u16, u16)| {
            inner.width >= RANK_LABEL_WIDTH + 8 * width
                && inner.height >= 8 * height + FILE_LABEL_HEIGHT
        };
        let (square_width, square_height) = if fits(LARGE_SQUARE) {
            LARGE_SQUARE
        } else {
            SMALL_SQUARE
        };

        let board_width = RANK_LABEL_WIDTH + 8 * square_width;
        let board_height = 8 * square_height + FILE_LABEL_HEIGHT;
        let origin_x = inner.x + inner.width.saturating_sub(board_width) / 2 + RANK_LABEL_WIDTH;
        let origin_y = inner.y + inner.height.saturating_sub(board_height) / 2;

        Self {
            inner,
            origin_x,
            origin_y,
            square_width,
            square_height,
            flipped,
        }
    }

    pub fn square_size(&self) -> (u16, u16) {
        (self.square_width, self.square_height)
    }

    /// The square drawn at terminal cell `(column, row)`, if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        if column < self.origin_x
            || row < self.origin_y
            || column >= self.inner.right()
            || row >= self.inner.bottom()
        {
            return None;
        }

        let display_col = (column - self.origin_x) / self.square_width;
        let display_row = (row - self.origin_y) / self.square_height;
        if display_col >= 8 || display_row >= 8 {
            return None;
        }

        let (board_row, board_col) = self.to_board(display_row as u8, display_col as u8);
        Square::new(board_row, board_col)
    }

    /// Terminal cells covered by `square`, clipped to the drawable area.
    pub fn cell_rect(&self, square: Square) -> Rect {
        let (display_row, display_col) = self.to_board(square.row(), square.col());
        Rect::new(
            self.origin_x + u16::from(display_col) * self.square_width,
            self.origin_y + u16::from(display_row) * self.square_height,
            self.square_width,
            self.square_height,
        )
        .intersection(self.inner)
    }

    /// Display position and board position map onto each other the same way
    /// in both directions.
    fn to_board(&self, row: u8, col: u8) -> (u8, u8) {
        if self.flipped {
            (7 - row, 7 - col)
        } else {
            (row, col)
        }
    }
}

pub struct BoardWidget<'a> {
    pub app_state: &'a AppState,
}

impl<'a> BoardWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }

    fn background(&self, cell: &RenderedSquare) -> Color {
        let is_last_move = self
            .app_state
            .ui_state
            .last_move
            .is_some_and(|(from, to)| from == cell.square || to == cell.square);

        if cell.selected {
            Color::Yellow
        } else if cell.highlighted {
            Color::Green
        } else if is_last_move {
            Color::Blue
        } else {
            match cell.shade {
                Shade::Light => LIGHT_SQUARE,
                Shade::Dark => DARK_SQUARE,
            }
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♟ Chess Board ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        block.render(area, buf);

        let geometry = BoardGeometry::for_area(area, self.app_state.ui_state.flipped);
        let label_style = Style::default().fg(Color::Yellow);

        // Rank labels on the left, file labels underneath
        for index in 0..8u8 {
            let Some(square) = Square::new(index, index) else {
                continue;
            };
            let rect = geometry.cell_rect(square);
            if rect.is_empty() {
                continue;
            }

            let label_x = geometry.origin_x.saturating_sub(RANK_LABEL_WIDTH);
            let label_y = rect.y + rect.height / 2;
            buf.set_string(label_x, label_y, square.rank_char().to_string(), label_style);

            let file_y = geometry.origin_y + 8 * geometry.square_height;
            if file_y < area.bottom() {
                let file_x = rect.x + geometry.square_width / 2;
                buf.set_string(file_x, file_y, square.file_char().to_string(), label_style);
            }
        }

        let game = &self.app_state.game;
        let rendered = render_board(
            game.board(),
            game.selection(),
            &self.app_state.ui_state.highlighted_squares,
        );

        for cell in rendered.iter().flatten() {
            let rect = geometry.cell_rect(cell.square);
            if rect.is_empty() {
                continue;
            }

            let bg_color = self.background(cell);
            buf.set_style(rect, Style::default().bg(bg_color));

            let center_x = rect.x + geometry.square_width / 2;
            let center_y = rect.y + geometry.square_height / 2;
            if center_x >= rect.right() || center_y >= rect.bottom() {
                continue;
            }

            match (cell.glyph, cell.color) {
                (Some(glyph), Some(color)) => {
                    let fg_color = match color {
                        PieceColor::White => Color::White,
                        PieceColor::Black => Color::Black,
                    };
                    let style = Style::default()
                        .bg(bg_color)
                        .fg(fg_color)
                        .add_modifier(Modifier::BOLD);
                    buf.set_string(center_x, center_y, glyph.to_string(), style);
                }
                // Empty destination
                _ if cell.highlighted => {
                    let style = Style::default().bg(bg_color).fg(Color::Black);
                    buf.set_string(center_x, center_y, "·", style);
                }
                _ => {}
            }
        }
    }
}
