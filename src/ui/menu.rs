use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::PALETTE;
use crate::game::{GameState, GameStatus, Overlay};

/// Draws the pause / game-over overlay as a popup centered on the board.
pub fn render_overlay(frame: &mut Frame<'_>, board: Rect, overlay: Overlay, state: &GameState) {
    let mut lines = vec![
        Line::styled(
            overlay.title,
            Style::new()
                .fg(PALETTE.overlay_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    if state.status.is_over() {
        lines.push(Line::from(format!(
            "Score: {}   High: {}",
            state.score, state.high_score
        )));
        if state.status == GameStatus::Dead && state.score > 0 && state.score == state.high_score
        {
            lines.push(Line::from("New high score!"));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::styled(
        overlay.message,
        Style::new().fg(PALETTE.overlay_message),
    ));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let popup = centered_rect(
        board,
        u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(4),
        u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Returns a `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
