//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (title, origin, requests in flight)
//! - Footer (wired controls)
//! - Loading indicator line

use super::styling::{self, SPINNER};
use crate::messages::Messages;
use crate::types::Control;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Spinner glyph followed by a loading message
pub fn loading_line(text: &str, spinner_index: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(SPINNER[spinner_index % SPINNER.len()], styling::loading_style()),
        Span::raw(" "),
        Span::styled(text.to_string(), styling::loading_style()),
    ])
}

/// Render the application header with the server origin
pub fn render_header(frame: &mut Frame, area: Rect, origin: Option<&str>, loading_count: usize) {
    let origin = origin.unwrap_or("No server configured");

    let header_text = if loading_count > 0 {
        format!("api dash - {origin} [{loading_count} loading]")
    } else {
        format!("api dash - {origin}")
    };

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Footer help text. Only controls that are wired get listed.
pub fn footer_text(bindings: &[(KeyCode, Control)], msgs: &Messages) -> String {
    let mut parts: Vec<String> = bindings
        .iter()
        .map(|(key, control)| format!("{}:{}", key_label(key), control_label(*control, msgs)))
        .collect();

    parts.push(msgs.url_hint.to_string());
    parts.push(msgs.quit_hint.to_string());
    parts.join(" ")
}

fn key_label(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}

fn control_label(control: Control, msgs: &Messages) -> &'static str {
    match control {
        Control::LoadItems => msgs.items_title,
        Control::CheckHealth => msgs.health_title,
    }
}

/// Render the footer with command help
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    bindings: &[(KeyCode, Control)],
    msgs: &Messages,
) {
    let footer = Paragraph::new(footer_text(bindings, msgs))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::EN;

    #[test]
    fn test_loading_line_wraps_spinner_index() {
        let line = loading_line("Loading...", 5);
        assert_eq!(line.spans[0].content, SPINNER[1]);
        assert_eq!(line.spans[2].content, "Loading...");
    }

    #[test]
    fn test_footer_lists_only_wired_controls() {
        let bindings = vec![(KeyCode::Char('h'), Control::CheckHealth)];
        let text = footer_text(&bindings, &EN);

        assert_eq!(text, "h:Server Health ,:Server URL q:Quit");
        assert!(!text.contains(EN.items_title));
    }

    #[test]
    fn test_footer_without_controls() {
        assert_eq!(footer_text(&[], &EN), ",:Server URL q:Quit");
    }
}
