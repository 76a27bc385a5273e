use crate::state::{AppState, SharedState};
use crate::types::{ApiInfo, ContainerId, HealthStatus, InputMode, Item, Panel};

/// Represents all state-changing actions in the application.
/// Loaders and key handlers build these; `apply_action` is the only place that
/// mutates `AppState`, which keeps the transitions easy to test.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Container lifecycle
    BeginLoad(ContainerId),
    InfoLoaded(ApiInfo),
    ItemsLoaded(Vec<Item>),
    HealthLoaded(HealthStatus),
    LoadFailed(ContainerId),

    // Items list
    ScrollItemsDown(usize),
    ScrollItemsUp(usize),

    // Server URL modal
    EnterUrlInputMode { current: Option<String> },
    ExitUrlInputMode,
    AppendToUrlInput(String),
    BackspaceUrlInput,
    ClearUrlInput,
    SetUrlError(String),
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::BeginLoad(container) => match container {
            ContainerId::ApiInfo => state.info = Panel::Loading,
            ContainerId::Items => {
                state.items = Panel::Loading;
                state.items_scroll = 0;
            }
            ContainerId::Health => state.health = Panel::Loading,
        },
        AppAction::InfoLoaded(info) => {
            state.info = Panel::Ready(info);
        }
        AppAction::ItemsLoaded(items) => {
            state.items = Panel::Ready(items);
            state.items_scroll = 0;
        }
        AppAction::HealthLoaded(health) => {
            state.health = Panel::Ready(health);
        }
        AppAction::LoadFailed(container) => match container {
            ContainerId::ApiInfo => state.info = Panel::Failed,
            ContainerId::Items => state.items = Panel::Failed,
            ContainerId::Health => state.health = Panel::Failed,
        },

        AppAction::ScrollItemsDown(by) => {
            let last = state.items.ready().map_or(0, |items| items.len().saturating_sub(1));
            state.items_scroll = (state.items_scroll + by).min(last);
        }
        AppAction::ScrollItemsUp(by) => {
            state.items_scroll = state.items_scroll.saturating_sub(by);
        }

        AppAction::EnterUrlInputMode { current } => {
            state.input_mode = InputMode::EnteringUrl;
            state.url_input = current.unwrap_or_default();
            state.url_error = None;
        }
        AppAction::ExitUrlInputMode => {
            state.input_mode = InputMode::Normal;
            state.url_input.clear();
            state.url_error = None;
        }
        AppAction::AppendToUrlInput(text) => {
            state.url_input.push_str(&text);
            state.url_error = None;
        }
        AppAction::BackspaceUrlInput => {
            state.url_input.pop();
            state.url_error = None;
        }
        AppAction::ClearUrlInput => {
            state.url_input.clear();
            state.url_error = None;
        }
        AppAction::SetUrlError(message) => {
            state.url_error = Some(message);
        }
    }
}

/// Apply a single action to shared state. A poisoned lock drops the action.
pub fn apply(state: &SharedState, action: AppAction) {
    if let Ok(mut s) = state.write() {
        apply_action(action, &mut s);
    }
}
