//! Modal dialog rendering

use super::styling;
use crate::messages::Messages;
use crate::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Centered rect of the given size, clamped to the frame
fn centered(area: Rect, width_ratio: f32, max_width: u16, height: u16) -> Rect {
    let width = ((area.width as f32 * width_ratio) as u16).min(max_width);
    let height = height.min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Render the server URL modal
pub fn render_url_input_modal(frame: &mut Frame, state: &AppState, msgs: &Messages) {
    let modal_area = centered(frame.area(), 0.6, 80, 8);

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(msgs.url_modal_title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let label = Paragraph::new(msgs.url_modal_label).style(Style::default().fg(Color::LightCyan));
    frame.render_widget(label, chunks[0]);

    let input = Paragraph::new(format!("{}_", state.url_input)).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(input, chunks[1]);

    if let Some(error) = &state.url_error {
        let error = Paragraph::new(error.as_str()).style(styling::error_style());
        frame.render_widget(error, chunks[2]);
    }

    let help = Paragraph::new(msgs.url_modal_help)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
