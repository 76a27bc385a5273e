use crate::types::{ApiInfo, ContainerId, HealthStatus, InputMode, Item, Panel};
use std::sync::{Arc, RwLock};

/// State shared between the UI loop and background requests
pub type SharedState = Arc<RwLock<AppState>>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub info: Panel<ApiInfo>,
    pub items: Panel<Vec<Item>>,
    pub health: Panel<HealthStatus>,
    /// index of the first item card on screen
    pub items_scroll: usize,
    pub input_mode: InputMode,
    /// text typed into the server URL modal
    pub url_input: String,
    /// validation message shown under the URL field
    pub url_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            info: Panel::Idle,
            items: Panel::Idle,
            health: Panel::Idle,
            items_scroll: 0,
            input_mode: InputMode::Normal,
            url_input: String::new(),
            url_error: None,
        }
    }
}

impl AppState {
    /// True while the given container shows its loading indicator
    pub fn is_loading(&self, container: ContainerId) -> bool {
        match container {
            ContainerId::ApiInfo => self.info.is_loading(),
            ContainerId::Items => self.items.is_loading(),
            ContainerId::Health => self.health.is_loading(),
        }
    }

    /// Number of containers with a request in flight
    pub fn loading_count(&self) -> usize {
        [ContainerId::ApiInfo, ContainerId::Items, ContainerId::Health]
            .into_iter()
            .filter(|c| self.is_loading(*c))
            .count()
    }
}
