//! Action dispatch: turns a resolved [`KeyAction`] into state changes.

use anyhow::Result;
use tracing::debug;

use crate::models::{Action, Lens, View};
use crate::shortcuts::KeyAction;
use crate::tui::AppState;

/// Dispatch action to appropriate handler
///
/// Returns `true` when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: KeyAction) -> Result<bool> {
    debug!(action = action.id(), view = ?state.session.view(), "dispatching action");

    match action {
        // Screens
        KeyAction::Explore => set_view(state, View::Explore),
        KeyAction::OpenPaletteLab => {
            set_view(state, View::Palette);
            let available = state.suggestions().len();
            state.lab.clamp_suggestion(available);
            state.lab.clamp_slot(state.session.palette().len());
        }
        KeyAction::OpenAbout => set_view(state, View::About),
        KeyAction::Back => match state.session.view() {
            View::Palette | View::About => set_view(state, View::Explore),
            View::Explore => set_view(state, View::Landing),
            View::Landing => {}
        },
        KeyAction::Quit => {
            state.should_quit = true;
            return Ok(true);
        }

        // Lenses
        KeyAction::LensHue => set_lens(state, Lens::Hue),
        KeyAction::LensDynasty => set_lens(state, Lens::Dynasty),
        KeyAction::LensMood => set_lens(state, Lens::Mood),

        // Selection
        KeyAction::NextColor => state.select_relative(1),
        KeyAction::PreviousColor => state.select_relative(-1),
        KeyAction::OpenDetail => state.open_detail(),

        // Palette
        KeyAction::AddToPalette => match state.session.selected_color_id().map(str::to_owned) {
            Some(id) => state.add_to_palette(&id),
            None => state.set_status("Select a color first (Tab or click)"),
        },
        KeyAction::RemoveFromPalette => {
            let target = if state.session.view() == View::Palette {
                focused_slot_id(state)
            } else {
                state.session.selected_color_id().map(str::to_owned)
            };
            match target {
                Some(id) => state.remove_from_palette(&id),
                None => state.set_status("Nothing to remove"),
            }
        }
        KeyAction::ClearPalette => {
            state.session.apply(Action::ClearPalette);
            let available = state.suggestions().len();
            state.lab.clamp_slot(0);
            state.lab.clamp_suggestion(available);
            state.set_status("Palette cleared");
        }
        KeyAction::NextSlot => state.lab.next_slot(),
        KeyAction::PreviousSlot => state.lab.previous_slot(),
        KeyAction::NextSuggestion => {
            let available = state.suggestions().len();
            state.lab.next_suggestion(available);
        }
        KeyAction::PreviousSuggestion => state.lab.previous_suggestion(),
        KeyAction::AddSuggestion => {
            let suggestion = state
                .suggestions()
                .get(state.lab.suggestion_cursor)
                .map(|c| c.id.clone());
            match suggestion {
                Some(id) => {
                    state.add_to_palette(&id);
                    let available = state.suggestions().len();
                    state.lab.clamp_suggestion(available);
                }
                None => state.set_status("No suggestions available"),
            }
        }
        KeyAction::CycleFormat => {
            state.lab.cycle_format();
            state.set_status(format!("Export format: {}", state.lab.format));
        }
        KeyAction::ExportPalette => state.export_palette(),

        // Display
        KeyAction::ToggleLocale => {
            let locale = state.session.locale().toggled();
            state.session.apply(Action::SetLocale(locale));
        }
        KeyAction::ToggleNeutral => {
            state.session.apply(Action::ToggleNeutralMode);
            let mode = if state.session.neutral_mode() { "on" } else { "off" };
            state.set_status(format!("Neutral mode {mode}"));
        }
        KeyAction::ToggleHelp => state.open_help(),
    }

    Ok(false)
}

fn set_view(state: &mut AppState, view: View) {
    state.session.apply(Action::SetView(view));
}

fn set_lens(state: &mut AppState, lens: Lens) {
    state.session.apply(Action::SetLens(lens));
    state.set_status(format!("Lens: {}", lens.label(state.session.locale())));
}

/// Color id in the lab's focused slot.
fn focused_slot_id(state: &AppState) -> Option<String> {
    state
        .session
        .palette()
        .entries()
        .get(state.lab.slot_cursor)
        .map(|entry| entry.color_id.clone())
}
