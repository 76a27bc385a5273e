use crate::actions::{apply, AppAction};
use crate::client::ApiClient;
use crate::config::Config;
use crate::loaders;
use crate::messages::Messages;
use crate::state::{AppState, SharedState};
use crate::types::{ContainerId, Control};
use crate::ui::draw::{self, DrawContext};
use crate::ui::{EventHandler, UiCommand};
use color_eyre::Result;
use crossterm::event::KeyCode;
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct App {
    state: SharedState,
    client: Option<ApiClient>,
    config: Config,
    config_path: PathBuf,
    messages: &'static Messages,
    bindings: Vec<(KeyCode, Control)>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: EventHandler,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let bindings = config.controls.bindings();
        let client = config.server.origin.as_deref().map(ApiClient::new);

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            client,
            messages: Messages::for_language(&config.ui.language),
            event_handler: EventHandler::new(&bindings),
            bindings,
            config,
            config_path,
            spinner_index: 0,
            last_tick: Instant::now(),
        }
    }

    pub fn state(&self) -> SharedState {
        Arc::clone(&self.state)
    }

    pub fn origin(&self) -> Option<&str> {
        self.client.as_ref().map(ApiClient::origin)
    }

    /// Start-up routine, run once before the first frame.
    ///
    /// Loads the API info container when a server is configured, otherwise
    /// opens the server URL modal. Returns the info request's task.
    pub fn initialize(&self) -> Option<JoinHandle<()>> {
        for control in [Control::LoadItems, Control::CheckHealth] {
            match self.bindings.iter().find(|(_, c)| *c == control) {
                Some((key, _)) => {
                    tracing::debug!(control = control.element_id(), ?key, "Control wired")
                }
                None => tracing::debug!(control = control.element_id(), "Control absent"),
            }
        }

        tracing::info!("Client initialized");

        match self.origin() {
            Some(origin) => {
                tracing::info!(origin, "API base URL");
                self.load(ContainerId::ApiInfo)
            }
            None => {
                tracing::info!("No server configured, asking for URL");
                apply(&self.state, AppAction::EnterUrlInputMode { current: None });
                None
            }
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.initialize();

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            let origin = self.origin().map(str::to_string);
            if let Some(command) = self
                .event_handler
                .handle_events(&self.state, origin.as_deref())?
            {
                self.dispatch(command);
            }
        }

        tracing::info!("Shutting down");
        Ok(())
    }

    /// Carry out a command produced by the event handler
    pub fn dispatch(&mut self, command: UiCommand) -> Option<JoinHandle<()>> {
        match command {
            UiCommand::Activate(control) => self.load(control.target()),
            UiCommand::SubmitUrl(url) => {
                self.config.set_origin(&url);
                if let Err(e) = self.config.save_to(&self.config_path) {
                    tracing::warn!(error = %e, path = %self.config_path.display(), "Could not save config");
                }

                self.client = self.config.server.origin.as_deref().map(ApiClient::new);
                tracing::info!(origin = ?self.origin(), "API base URL changed");

                // A new server is a fresh page: start over with the info container
                self.load(ContainerId::ApiInfo)
            }
        }
    }

    fn load(&self, container: ContainerId) -> Option<JoinHandle<()>> {
        let Some(client) = &self.client else {
            tracing::warn!(container = container.element_id(), "No server configured");
            return None;
        };

        Some(loaders::load_container_background(
            client.clone(),
            Arc::clone(&self.state),
            container,
        ))
    }

    fn draw(&mut self, frame: &mut Frame) {
        let Ok(state) = self.state.read() else {
            return;
        };

        let ctx = DrawContext {
            origin: self.client.as_ref().map(ApiClient::origin),
            messages: self.messages,
            bindings: &self.bindings,
            spinner_index: self.spinner_index,
        };

        draw::render_dashboard(frame, &state, &ctx);
    }
}
