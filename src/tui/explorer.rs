//! Explorer canvas: orbs at their lens positions plus per-lens annotations.
//!
//! Drawing goes straight to the frame buffer, one glyph per orb, since orbs
//! land on arbitrary cells rather than in a widget grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use super::AppState;
use crate::models::{Lens, Point, MOODS};
use crate::services::annotations::{dynasty_counts, mood_accents};
use crate::services::layout::{
    column_center_x, orb_size, stem_path, DYNASTY_HEADER, MOOD_LABEL_RESERVE, PAD_TOP,
};
use crate::services::magnet::{displaced, nearest_orb};

/// Orbs at least this large (px) get the heavy glyph.
const LARGE_ORB_PX: f64 = 59.0;
/// Pointer distance (px) within which an orb counts as hovered.
const HOVER_RADIUS_PX: f64 = 24.0;

/// Canvas area inside the explorer frame.
#[must_use]
pub fn canvas_area(main: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(main)
}

/// The lens explorer widget.
pub struct ExplorerWidget;

impl ExplorerWidget {
    /// Render the explorer into the main content area.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let locale = state.session.locale();

        let block = Block::default()
            .title(format!(" {} ", state.session.lens().label(locale)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(ambient_color(state)));
        f.render_widget(block, area);

        let buf = f.buffer_mut();
        match state.session.lens() {
            Lens::Hue => draw_stem(buf, state),
            Lens::Dynasty => draw_dynasty_labels(buf, state),
            Lens::Mood => draw_mood_labels(buf, state),
        }
        draw_orbs(buf, state);
    }
}

/// Glyph for an orb of the given pixel size.
#[must_use]
pub fn orb_glyph(size: f64) -> &'static str {
    if size >= LARGE_ORB_PX {
        "●"
    } else {
        "•"
    }
}

fn draw_stem(buf: &mut Buffer, state: &AppState) {
    let viewport = AppState::viewport_for(state.canvas);
    let steps = usize::from(state.canvas.height) * 2;
    let style = Style::default().fg(state.theme.text_muted);

    for (x, y) in stem_path(viewport, steps) {
        if let Some(cell) = state
            .cell_for(Point::new(x, y))
            .and_then(|pos| buf.cell_mut(pos))
        {
            cell.set_symbol("┊").set_style(style);
        }
    }
}

fn draw_dynasty_labels(buf: &mut Buffer, state: &AppState) {
    let viewport = AppState::viewport_for(state.canvas);
    let locale = state.session.locale();
    let present: Vec<_> = dynasty_counts(state.dataset.colors())
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();

    let label_y = PAD_TOP + DYNASTY_HEADER / 4.0;
    for (index, (dynasty, count)) in present.iter().enumerate() {
        let cx = column_center_x(index, present.len(), viewport);
        let style = if dynasty.major {
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(state.theme.text_secondary)
        };
        draw_centered(buf, state, Point::new(cx, label_y), dynasty.label(locale), style);
        draw_centered(
            buf,
            state,
            Point::new(cx, label_y + 16.0),
            &count.to_string(),
            Style::default().fg(state.theme.text_muted),
        );
    }
}

fn draw_mood_labels(buf: &mut Buffer, state: &AppState) {
    let viewport = AppState::viewport_for(state.canvas);
    let locale = state.session.locale();
    let label_y = PAD_TOP + viewport.usable_height() - MOOD_LABEL_RESERVE / 2.0;

    for (slot, (mood, accent)) in mood_accents(state.dataset.colors()).into_iter().enumerate() {
        let cx = column_center_x(slot, MOODS.len(), viewport);
        let style = match accent {
            Some(rgb) => Style::default()
                .fg(rgb.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
            // Empty mood columns keep their slot but read as absent
            None => Style::default().fg(state.theme.text_muted),
        };
        draw_centered(buf, state, Point::new(cx, label_y), mood.label(locale), style);
    }
}

fn draw_orbs(buf: &mut Buffer, state: &AppState) {
    let cursor = state.session.cursor();
    let selected = state.session.selected_color_id();
    let hovered = nearest_orb(&state.positions, cursor, HOVER_RADIUS_PX);

    for position in &state.positions {
        let Some(color) = state.dataset.get(&position.color_id) else {
            continue;
        };
        let Some((x, y)) = state.cell_for(displaced(position, cursor)) else {
            continue;
        };
        let index = state.dataset.index_of(&color.id).unwrap_or_default();
        let fg = color.rgb.to_ratatui_color();

        let is_selected = selected == Some(color.id.as_str());
        let in_palette = state.session.palette().contains(&color.id);
        let glyph = if is_selected {
            "◉"
        } else if in_palette {
            "◆"
        } else {
            orb_glyph(orb_size(index))
        };

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph).set_fg(fg);
            if is_selected {
                cell.set_style(Style::default().add_modifier(Modifier::BOLD));
            }
        }

        if is_selected {
            let label = format!(" {} ", color.title_for(state.session.locale()));
            let style = Style::default()
                .fg(color.rgb.contrast_text().to_ratatui_color())
                .bg(fg);
            draw_clipped(buf, state, x.saturating_add(2), y, &label, style);
        } else if hovered == Some(color.id.as_str()) {
            let style = Style::default().fg(state.theme.text_secondary);
            draw_clipped(buf, state, x.saturating_add(2), y, &color.name, style);
        }
    }
}

/// Writes `text` centered on a viewport point, clipped to the canvas.
fn draw_centered(buf: &mut Buffer, state: &AppState, at: Point, text: &str, style: Style) {
    let Some((x, y)) = state.cell_for(at) else {
        return;
    };
    let half = u16::try_from(Span::raw(text).width() / 2).unwrap_or(u16::MAX);
    let x = x.saturating_sub(half).max(state.canvas.x);
    draw_clipped(buf, state, x, y, text, style);
}

/// Writes `text` at a cell, cut off at the canvas' right edge.
fn draw_clipped(buf: &mut Buffer, state: &AppState, x: u16, y: u16, text: &str, style: Style) {
    let right = state.canvas.right();
    if x >= right || y >= state.canvas.bottom() {
        return;
    }
    buf.set_stringn(x, y, text, usize::from(right - x), style);
}

/// Canvas color behind the orbs.
#[must_use]
pub fn ambient_color(state: &AppState) -> Color {
    state.theme.ambient(
        state.selected_color().map(|c| c.rgb),
        state.session.neutral_mode(),
    )
}
