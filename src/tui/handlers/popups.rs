//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::{AppState, Component, ComponentEvent, ContextualComponent, PopupType};

/// Handle input while a popup is open
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::Help) => handle_help_overlay_input(state, key),
        Some(PopupType::Detail) => handle_detail_input(state, key),
        None => Ok(false),
    }
}

/// Handle input for help overlay
fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(ComponentEvent::Closed) = state.help.handle_input(key) {
        state.close_popup();
    }
    Ok(false)
}

/// Handle input for the color detail panel
fn handle_detail_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // The panel reads state while handling input, so it is taken out for the call
    let Some(mut detail) = state.detail.take() else {
        state.close_popup();
        return Ok(false);
    };
    let event = detail.handle_input(key, state);
    state.detail = Some(detail);

    match event {
        Some(ComponentEvent::ColorSelected(id)) => {
            state.select_color(Some(id));
            state.open_detail();
        }
        Some(ComponentEvent::AddToPalette(id)) => state.add_to_palette(&id),
        Some(ComponentEvent::RemoveFromPalette(id)) => state.remove_from_palette(&id),
        Some(ComponentEvent::Closed) => state.close_popup(),
        None => {
            // Help stays reachable from inside the panel
            if key.code == KeyCode::Char('?') {
                state.open_help();
            }
        }
    }
    Ok(false)
}
