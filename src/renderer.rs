use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::config::{GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_SOLID, PALETTE};
use crate::game::GameState;
use crate::grid::{Cell, GridSize};
use crate::ui::hud::{render_help, render_hud};
use crate::ui::menu::render_overlay;

/// Terminal footprint of one grid cell.
///
/// Cells are drawn twice as wide as tall so they look square.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    /// Largest square-looking cell that fits `grid` inside `area`.
    #[must_use]
    pub fn fit(area: Rect, grid: GridSize) -> Self {
        let side = area.height.min(area.width / 2) / grid.side();
        Self {
            width: side * 2,
            height: side,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.height == 0
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [hud_area, play_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_hud(frame, hud_area, state);
    render_help(frame, help_area);

    let cell = CellSize::fit(play_area, state.size());
    if cell.is_empty() {
        frame.render_widget(
            Paragraph::new("Terminal too small for this grid")
                .alignment(Alignment::Center)
                .style(Style::new().fg(PALETTE.hud_label)),
            play_area,
        );
        return;
    }

    let board = board_rect(play_area, state.size(), cell);
    render_board(frame.buffer_mut(), board, cell, state);

    if let Some(overlay) = state.overlay() {
        render_overlay(frame, board, overlay, state);
    }
}

/// Returns the board rectangle centered in `area`.
#[must_use]
pub fn board_rect(area: Rect, grid: GridSize, cell: CellSize) -> Rect {
    let width = cell.width.saturating_mul(grid.side()).min(area.width);
    let height = cell.height.saturating_mul(grid.side()).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draws background, food and snake into `board`.
pub fn render_board(buffer: &mut Buffer, board: Rect, cell: CellSize, state: &GameState) {
    buffer.set_style(board, Style::new().bg(PALETTE.board_bg));

    let dot_style = Style::new().fg(PALETTE.grid_dot).bg(PALETTE.board_bg);
    for grid_cell in state.size().cells() {
        if let Some(area) = cell_rect(board, cell, grid_cell) {
            buffer.set_string(area.x, area.y, GLYPH_GRID_DOT, dot_style);
        }
    }

    if let Some(area) = state.food.and_then(|food| cell_rect(board, cell, food)) {
        let x = area.x + (area.width - 1) / 2;
        let y = area.y + (area.height - 1) / 2;
        buffer.set_string(
            x,
            y,
            GLYPH_FOOD,
            Style::new().fg(PALETTE.food).bg(PALETTE.board_bg),
        );
    }

    for (index, segment) in state.snake.segments().enumerate() {
        let Some(area) = cell_rect(board, cell, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(PALETTE.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(PALETTE.snake_body)
        };
        fill(buffer, area, style);
    }
}

fn fill(buffer: &mut Buffer, area: Rect, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer.set_string(x, y, GLYPH_SOLID, style);
        }
    }
}

/// Maps a logical cell to its terminal rectangle inside `board`.
fn cell_rect(board: Rect, cell: CellSize, position: Cell) -> Option<Rect> {
    let column = u16::try_from(position.x).ok()?;
    let row = u16::try_from(position.y).ok()?;

    let x = board.x.checked_add(column.checked_mul(cell.width)?)?;
    let y = board.y.checked_add(row.checked_mul(cell.height)?)?;
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some(Rect {
        x,
        y,
        width: cell.width.min(board.right() - x),
        height: cell.height.min(board.bottom() - y),
    })
}
