//! Event handling for api-dash
//!
//! Key presses are translated into either direct state changes (through
//! `apply` and `AppAction`) or a [`UiCommand`] that the app loop carries out,
//! such as starting a request.
//!
//! Controls are wired from the configured bindings when the handler is built.
//! A control with no binding has no key and can never fire. Bound keys win
//! over the item list's scroll keys (j/k, arrows, Ctrl+D/Ctrl+U).

mod modals;

pub use modals::{handle_url_dialog, handle_url_input};

use crate::actions::{apply, AppAction};
use crate::state::SharedState;
use crate::types::{Control, InputMode};
use crate::ui::draw::SCROLL_CARDS_PER_PAGE;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use std::time::Duration;

/// Work the app loop has to do in response to input
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// A control was activated
    Activate(Control),
    /// A new server URL was entered in the modal
    SubmitUrl(String),
}

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
    bindings: HashMap<KeyCode, Control>,
}

impl EventHandler {
    pub fn new(bindings: &[(KeyCode, Control)]) -> Self {
        Self {
            should_quit: false,
            bindings: bindings.iter().copied().collect(),
        }
    }

    /// Poll for one terminal event and handle it
    pub fn handle_events(
        &mut self,
        state: &SharedState,
        origin: Option<&str>,
    ) -> Result<Option<UiCommand>> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.handle_key(key, state, origin))
            }
            Event::Paste(text) => {
                if is_entering_url(state) {
                    apply(state, AppAction::AppendToUrlInput(text.trim().to_string()));
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Dispatch a key press based on the current input mode
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &SharedState,
        origin: Option<&str>,
    ) -> Option<UiCommand> {
        if is_entering_url(state) {
            return handle_url_input(key, state).map(UiCommand::SubmitUrl);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('d') => AppAction::ScrollItemsDown(SCROLL_CARDS_PER_PAGE),
                KeyCode::Char('u') => AppAction::ScrollItemsUp(SCROLL_CARDS_PER_PAGE),
                _ => return None,
            };
            apply(state, action);
            return None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char(',') => {
                handle_url_dialog(state, origin);
                None
            }
            code if self.bindings.contains_key(&code) => {
                let control = self.bindings[&code];
                tracing::debug!(control = control.element_id(), "Control activated");
                Some(UiCommand::Activate(control))
            }
            KeyCode::Char('j') | KeyCode::Down => {
                apply(state, AppAction::ScrollItemsDown(1));
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                apply(state, AppAction::ScrollItemsUp(1));
                None
            }
            _ => None,
        }
    }
}

fn is_entering_url(state: &SharedState) -> bool {
    state
        .read()
        .map(|s| s.input_mode == InputMode::EnteringUrl)
        .unwrap_or(false)
}
