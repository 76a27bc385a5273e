//! Server URL modal input

use crate::actions::{apply, AppAction};
use crate::config;
use crate::state::SharedState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Open the URL modal, pre-filled with the current origin
pub fn handle_url_dialog(state: &SharedState, origin: Option<&str>) {
    apply(
        state,
        AppAction::EnterUrlInputMode {
            current: origin.map(str::to_string),
        },
    );
    tracing::debug!("Entering URL input mode");
}

/// Handle a key while the URL modal is open.
/// Returns the submitted URL once it passes validation.
pub fn handle_url_input(key: KeyEvent, state: &SharedState) -> Option<String> {
    match key.code {
        KeyCode::Enter => {
            let url = state
                .read()
                .map(|s| s.url_input.trim().to_string())
                .unwrap_or_default();

            match config::validate_url(&url) {
                Ok(()) => {
                    apply(state, AppAction::ExitUrlInputMode);
                    tracing::info!(%url, "Server URL submitted");
                    return Some(url);
                }
                Err(e) => {
                    tracing::debug!(%url, error = %e, "Invalid server URL");
                    apply(state, AppAction::SetUrlError(e));
                }
            }
        }

        KeyCode::Esc => {
            apply(state, AppAction::ExitUrlInputMode);
            tracing::debug!("URL input cancelled");
        }

        KeyCode::Backspace => apply(state, AppAction::BackspaceUrlInput),

        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearUrlInput);
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToUrlInput(c.to_string()));
        }

        _ => {}
    }

    None
}
