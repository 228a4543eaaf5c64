use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::GameState;

const SEPARATOR: &str = "  │  ";

/// Renders the single-line status bar: score, high score, speed and grid.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    frame.render_widget(
        Paragraph::new(status_line(state)).alignment(Alignment::Center),
        area,
    );
}

/// Renders the key help line.
pub fn render_help(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(
            "Arrows/WASD move · Space pause · Enter restart · +/- speed · [/] grid · Q quit",
        ))
        .alignment(Alignment::Center)
        .style(Style::new().fg(PALETTE.hud_label)),
        area,
    );
}

fn status_line(state: &GameState) -> Line<'static> {
    let side = state.size().side();
    let entries = [
        ("Score", state.score.to_string()),
        ("High", state.high_score.to_string()),
        ("Speed", format!("{}x", state.speed.multiplier())),
        ("Grid", format!("{side}×{side}")),
    ];

    let label_style = Style::new().fg(PALETTE.hud_label);
    let value_style = Style::new()
        .fg(PALETTE.hud_value)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(entries.len() * 3);
    for (index, (label, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, label_style));
        }
        spans.push(Span::styled(format!("{label} "), label_style));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}
