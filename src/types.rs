//! Payload records and the small enums the dashboard is built around

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text shown for a payload field. Strings are taken as they are, any other
/// JSON value is shown as its JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| display_value(&value))
}

/// Payload of `GET /api/info`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub environment: String,
}

impl ApiInfo {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Payload of `GET /api/items`. A missing `items` key is treated like an empty list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Option<Vec<Item>>,
}

impl ItemsResponse {
    pub fn into_items(self) -> Vec<Item> {
        self.items.unwrap_or_default()
    }
}

/// One entry of the items list. Built from any JSON value, so a single odd
/// entry never fails the whole list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        let field = |key: &str| value.get(key).map(display_value).unwrap_or_default();
        Self {
            id: field("id"),
            name: field("name"),
        }
    }
}

/// Payload of `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient")]
    pub environment: String,
    #[serde(default, deserialize_with = "lenient")]
    pub version: String,
}

/// State of one on-screen container
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Panel<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// The last request failed; the reason only goes to the log
    Failed,
}

impl<T> Panel<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// The three containers the dashboard renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    ApiInfo,
    Items,
    Health,
}

impl ContainerId {
    pub fn element_id(&self) -> &'static str {
        match self {
            ContainerId::ApiInfo => "api-info-container",
            ContainerId::Items => "items-container",
            ContainerId::Health => "health-container",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ContainerId::ApiInfo => "/api/info",
            ContainerId::Items => "/api/items",
            ContainerId::Health => "/health",
        }
    }
}

/// User-triggered controls, bound to keys only when configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LoadItems,
    CheckHealth,
}

impl Control {
    pub fn element_id(&self) -> &'static str {
        match self {
            Control::LoadItems => "load-items",
            Control::CheckHealth => "check-health",
        }
    }

    pub fn target(&self) -> ContainerId {
        match self {
            Control::LoadItems => ContainerId::Items,
            Control::CheckHealth => ContainerId::Health,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EnteringUrl,
}
