//! Mouse input: pointer tracking for the magnetic effect and click-to-select.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::models::{Action, View};
use crate::services::magnet::nearest_orb;
use crate::tui::{AppState, OFFSCREEN_CURSOR};

/// Click distance (px) within which the nearest orb is picked.
pub const CLICK_RADIUS_PX: f64 = 48.0;

/// Handle a mouse event
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let cursor = state
                .point_for(mouse.column, mouse.row)
                .unwrap_or(OFFSCREEN_CURSOR);
            state.session.apply(Action::SetCursor(cursor));
        }
        MouseEventKind::Down(MouseButton::Left) if state.session.view() == View::Explore => {
            let Some(point) = state.point_for(mouse.column, mouse.row) else {
                return;
            };
            state.session.apply(Action::SetCursor(point));
            let hit = nearest_orb(&state.positions, point, CLICK_RADIUS_PX).map(str::to_string);
            if hit.is_some() {
                state.select_color(hit);
            }
        }
        _ => {}
    }
}
