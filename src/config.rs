use crate::types::Control;
use color_eyre::Result;
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_FILE: &str = "/tmp/api-dash.log";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// scheme://host[:port] every API path is resolved against
    pub origin: Option<String>,
}

/// Key bindings for the optional controls. A missing entry leaves the
/// control unwired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    pub load_items: Option<char>,
    pub check_health: Option<char>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            load_items: Some('i'),
            check_health: Some('h'),
        }
    }
}

impl ControlsConfig {
    /// Controls that are present, with the key each one is bound to
    pub fn bindings(&self) -> Vec<(KeyCode, Control)> {
        [
            (self.load_items, Control::LoadItems),
            (self.check_health, Control::CheckHealth),
        ]
        .into_iter()
        .filter_map(|(key, control)| key.map(|c| (KeyCode::Char(c), control)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "info" or "api_dash=debug"
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        Ok(home_dir.join(".config").join("api-dash").join("config.toml"))
    }

    /// Load config from `path`, or return default if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Write config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Store the origin of `url` as the server origin
    pub fn set_origin(&mut self, url: &str) {
        self.server.origin = Some(extract_origin(url));
    }
}

/// Simple URL validation
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    match url::Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some() => Ok(()),
        _ => Err("Invalid URL format".to_string()),
    }
}

/// Reduces a URL to its origin
/// Example: http://localhost:8000/static/index.html -> http://localhost:8000
pub fn extract_origin(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        let scheme = parsed.scheme();
        let host = parsed.host_str().unwrap_or("localhost");

        if let Some(port) = parsed.port() {
            format!("{scheme}://{host}:{port}")
        } else {
            format!("{scheme}://{host}")
        }
    } else {
        // Fallback: keep the input if it can't be parsed
        url.trim_end_matches('/').to_string()
    }
}
