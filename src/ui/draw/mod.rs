//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, loading line)
//! - `modals`: Modal dialogs (server URL input)
//! - `panels`: The three containers (API info, items, health)
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;

pub use components::{footer_text, loading_line, render_footer, render_header};
pub use modals::render_url_input_modal;
pub use panels::{
    health_lines, info_lines, item_card_lines, items_scroll_line, items_view,
    render_health_panel, render_info_panel, render_items_panel, ItemsView,
};
pub use styling::SCROLL_CARDS_PER_PAGE;

use crate::messages::Messages;
use crate::state::AppState;
use crate::types::{Control, InputMode};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Everything besides `AppState` the dashboard needs to draw a frame
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub origin: Option<&'a str>,
    pub messages: &'a Messages,
    pub bindings: &'a [(KeyCode, Control)],
    pub spinner_index: usize,
}

/// Draw the whole dashboard: header, info and health on the left, items on
/// the right, footer, and the URL modal on top when it is open.
pub fn render_dashboard(frame: &mut Frame, state: &AppState, ctx: &DrawContext) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body_chunks[0]);

    render_header(frame, main_chunks[0], ctx.origin, state.loading_count());

    render_info_panel(
        frame,
        left_chunks[0],
        &state.info,
        ctx.messages,
        ctx.spinner_index,
    );
    render_health_panel(
        frame,
        left_chunks[1],
        &state.health,
        ctx.messages,
        ctx.spinner_index,
    );
    render_items_panel(
        frame,
        body_chunks[1],
        &state.items,
        state.items_scroll,
        ctx.messages,
        ctx.spinner_index,
    );

    render_footer(frame, main_chunks[2], ctx.bindings, ctx.messages);

    // Render modals LAST - after everything else
    if state.input_mode == InputMode::EnteringUrl {
        render_url_input_modal(frame, state, ctx.messages);
    }
}
