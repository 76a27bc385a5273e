//! Container rendering
//!
//! Each container is turned into plain lines first (`*_lines`, `items_view`)
//! and only then into widgets, so the content can be checked without a
//! terminal.

use super::components::loading_line;
use super::styling::{self, get_environment_color};
use crate::messages::Messages;
use crate::types::{ApiInfo, HealthStatus, Item, Panel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by one item card, borders included
const CARD_HEIGHT: u16 = 4;

/// What the items container shows
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsView {
    /// A single block of text (loading, error, empty list, idle)
    Message(Vec<Line<'static>>),
    /// One card per item, in response order
    Cards(Vec<Vec<Line<'static>>>),
}

fn field_line(icon: &str, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{icon} {label}: "), styling::label_style()),
        Span::raw(value.to_string()),
    ])
}

fn status_dot(color: ratatui::style::Color) -> Span<'static> {
    Span::styled("● ", Style::default().fg(color))
}

/// Lines for the API info container
pub fn info_lines(panel: &Panel<ApiInfo>, msgs: &Messages, spinner_index: usize) -> Vec<Line<'static>> {
    match panel {
        Panel::Idle => vec![Line::styled(msgs.not_requested, styling::muted_style())],
        Panel::Loading => vec![loading_line(msgs.loading, spinner_index)],
        Panel::Failed => vec![Line::styled(msgs.info_error, styling::error_style())],
        Panel::Ready(info) => vec![
            field_line("📛", msgs.name_label, &info.name),
            field_line("📦", msgs.version_label, &info.version),
            field_line("📝", msgs.description_label, &info.description),
            Line::from(vec![
                Span::styled(
                    format!("🌍 {}: ", msgs.environment_label),
                    styling::label_style(),
                ),
                Span::styled(
                    info.environment.clone(),
                    Style::default().fg(get_environment_color(info.is_production())),
                ),
            ]),
        ],
    }
}

/// Lines for the health container
pub fn health_lines(
    panel: &Panel<HealthStatus>,
    msgs: &Messages,
    spinner_index: usize,
) -> Vec<Line<'static>> {
    match panel {
        Panel::Idle => vec![Line::styled(msgs.not_requested, styling::muted_style())],
        Panel::Loading => vec![loading_line(msgs.checking, spinner_index)],
        Panel::Failed => vec![
            Line::from(vec![
                status_dot(styling::ERROR_COLOR),
                Span::styled(format!("{}: ", msgs.status_label), styling::label_style()),
                Span::styled(msgs.health_error_status, styling::error_style()),
            ]),
            Line::styled(msgs.health_error, styling::error_style()),
        ],
        Panel::Ready(health) => vec![
            Line::from(vec![
                status_dot(styling::SUCCESS_COLOR),
                Span::styled(format!("{}: ", msgs.status_label), styling::label_style()),
                Span::raw(health.status.clone()),
            ]),
            field_line("🌍", msgs.environment_label, &health.environment),
            field_line("📦", msgs.version_label, &health.version),
            Line::default(),
            Line::styled(msgs.health_ok, Style::default().fg(styling::SUCCESS_COLOR)),
        ],
    }
}

/// Lines inside one item card
pub fn item_card_lines(item: &Item, msgs: &Messages) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            format!("🔹 {}", item.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(format!("{}: ", msgs.id_label), styling::label_style()),
            Span::raw(item.id.clone()),
        ]),
    ]
}

/// Decide what the items container shows
pub fn items_view(panel: &Panel<Vec<Item>>, msgs: &Messages, spinner_index: usize) -> ItemsView {
    match panel {
        Panel::Idle => ItemsView::Message(vec![Line::styled(
            msgs.not_requested,
            styling::muted_style(),
        )]),
        Panel::Loading => ItemsView::Message(vec![loading_line(msgs.loading_items, spinner_index)]),
        Panel::Failed => {
            ItemsView::Message(vec![Line::styled(msgs.items_error, styling::error_style())])
        }
        Panel::Ready(items) if items.is_empty() => {
            ItemsView::Message(vec![Line::raw(msgs.no_items)])
        }
        Panel::Ready(items) => {
            ItemsView::Cards(items.iter().map(|item| item_card_lines(item, msgs)).collect())
        }
    }
}

/// Footer line of the items container when some cards are off screen
pub fn items_scroll_line(above: usize, below: usize, msgs: &Messages) -> Option<Line<'static>> {
    if above == 0 && below == 0 {
        return None;
    }

    let mut parts = Vec::new();
    if above > 0 {
        parts.push(format!("↑ {above} {}", msgs.items_above));
    }
    if below > 0 {
        parts.push(format!("+{below} {}", msgs.items_below));
    }
    parts.push(msgs.items_scroll_hint.to_string());

    Some(Line::styled(parts.join("  "), styling::muted_style()))
}

fn container_block(title: String) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title)
}

fn render_lines(frame: &mut Frame, area: Rect, title: String, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .block(container_block(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the API info container
pub fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &Panel<ApiInfo>,
    msgs: &Messages,
    spinner_index: usize,
) {
    let title = format!(" {} ", msgs.info_title);
    render_lines(frame, area, title, info_lines(panel, msgs, spinner_index));
}

/// Render the health container
pub fn render_health_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &Panel<HealthStatus>,
    msgs: &Messages,
    spinner_index: usize,
) {
    let title = format!(" {} ", msgs.health_title);
    render_lines(frame, area, title, health_lines(panel, msgs, spinner_index));
}

/// Render the items container, stacking the cards that fit from `scroll` on
pub fn render_items_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &Panel<Vec<Item>>,
    scroll: usize,
    msgs: &Messages,
    spinner_index: usize,
) {
    match items_view(panel, msgs, spinner_index) {
        ItemsView::Message(lines) => {
            render_lines(frame, area, format!(" {} ", msgs.items_title), lines);
        }
        ItemsView::Cards(cards) => {
            let block = container_block(format!(" {} ({}) ", msgs.items_title, cards.len()));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let total = cards.len();
            let above = scroll.min(total.saturating_sub(1));
            let remaining = total - above;

            // one row is kept for the scroll line whenever a card is off screen
            let mut visible = (inner.height / CARD_HEIGHT) as usize;
            if above > 0 || remaining > visible {
                visible = (inner.height.saturating_sub(1) / CARD_HEIGHT) as usize;
            }
            let visible = visible.min(remaining);
            let below = remaining - visible;

            let constraints: Vec<Constraint> = (0..visible)
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect();

            let slots = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(inner);

            for (card, slot) in cards.into_iter().skip(above).zip(slots.iter()).take(visible) {
                let widget = Paragraph::new(card).block(Block::default().borders(Borders::ALL));
                frame.render_widget(widget, *slot);
            }

            if let Some(line) = items_scroll_line(above, below, msgs) {
                let row = Rect {
                    y: inner.bottom().saturating_sub(1),
                    height: 1.min(inner.height),
                    ..inner
                };
                frame.render_widget(Paragraph::new(line), row);
            }
        }
    }
}
