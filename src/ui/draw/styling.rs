//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use ratatui::style::{Color, Modifier, Style};

pub const SUCCESS_COLOR: Color = Color::Green;
pub const ERROR_COLOR: Color = Color::Red;
pub const WARNING_COLOR: Color = Color::Rgb(255, 152, 0);

/// Cards moved by one Ctrl+D / Ctrl+U
pub const SCROLL_CARDS_PER_PAGE: usize = 5;

/// Frames of the loading spinner
pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Get the color for a deployment environment
pub fn get_environment_color(is_production: bool) -> Color {
    if is_production {
        SUCCESS_COLOR
    } else {
        WARNING_COLOR
    }
}

pub fn label_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn loading_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
