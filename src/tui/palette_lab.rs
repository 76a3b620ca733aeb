//! Palette lab: the eight palette slots, complementary suggestions and export.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::AppState;
use crate::export::{self, PaletteFormat};
use crate::models::{TraditionalColor, PALETTE_CAPACITY};
use crate::services::classify_color;

/// Lines of export output shown in the preview pane.
const PREVIEW_LINES: usize = 14;

/// Cursors and format choice of the palette lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLabState {
    /// Focused slot, `0..PALETTE_CAPACITY`
    pub slot_cursor: usize,
    /// Focused suggestion
    pub suggestion_cursor: usize,
    /// Export format
    pub format: PaletteFormat,
}

impl PaletteLabState {
    /// Creates lab state with the configured default export format.
    #[must_use]
    pub const fn new(format: PaletteFormat) -> Self {
        Self {
            slot_cursor: 0,
            suggestion_cursor: 0,
            format,
        }
    }

    /// Moves to the next slot, stopping at the last one.
    pub fn next_slot(&mut self) {
        self.slot_cursor = (self.slot_cursor + 1).min(PALETTE_CAPACITY - 1);
    }

    /// Moves to the previous slot.
    pub fn previous_slot(&mut self) {
        self.slot_cursor = self.slot_cursor.saturating_sub(1);
    }

    /// Keeps the slot cursor on a filled slot after removals.
    pub fn clamp_slot(&mut self, filled: usize) {
        self.slot_cursor = self.slot_cursor.min(filled.saturating_sub(1));
    }

    /// Moves to the next suggestion out of `available`.
    pub fn next_suggestion(&mut self, available: usize) {
        if available > 0 {
            self.suggestion_cursor = (self.suggestion_cursor + 1).min(available - 1);
        }
    }

    /// Moves to the previous suggestion.
    pub fn previous_suggestion(&mut self) {
        self.suggestion_cursor = self.suggestion_cursor.saturating_sub(1);
    }

    /// Keeps the suggestion cursor inside a list of `available` entries.
    pub fn clamp_suggestion(&mut self, available: usize) {
        self.suggestion_cursor = self.suggestion_cursor.min(available.saturating_sub(1));
    }

    /// Cycles json → css → tailwind → markdown → json.
    pub fn cycle_format(&mut self) {
        let index = PaletteFormat::ALL
            .iter()
            .position(|f| *f == self.format)
            .unwrap_or_default();
        self.format = PaletteFormat::ALL[(index + 1) % PaletteFormat::ALL.len()];
    }
}

impl Default for PaletteLabState {
    fn default() -> Self {
        Self::new(PaletteFormat::default())
    }
}

/// Renders the lab into the main content area.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let locale = state.session.locale();

    let block = Block::default()
        .title(format!(
            " Palette Lab · {}/{} ",
            state.session.palette().len(),
            PALETTE_CAPACITY
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(inner);

    render_slots(f, rows[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    // Suggestions
    let suggestions = state.suggestions();
    let items: Vec<ListItem> = suggestions
        .iter()
        .map(|color| {
            ListItem::new(Line::from(vec![
                Span::styled("    ", Style::default().bg(color.rgb.to_ratatui_color())),
                Span::raw(" "),
                Span::styled(
                    color.title_for(locale),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  {}  {}", color.hex, classify_color(color).label(locale)),
                    Style::default().fg(theme.text_muted),
                ),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !suggestions.is_empty() {
        list_state.select(Some(state.lab.suggestion_cursor.min(suggestions.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Suggestions (↑/↓, Enter to add) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, columns[0], &mut list_state);

    render_preview(f, columns[1], state);
}

/// One box per slot; filled slots show the color, empty ones a dotted frame.
fn render_slots(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let colors = export::palette_colors(state.session.palette(), &state.dataset);

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, PALETTE_CAPACITY as u32); PALETTE_CAPACITY])
        .split(area);

    for (index, slot_area) in slots.iter().enumerate() {
        let focused = index == state.lab.slot_cursor;
        let border_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", index + 1));

        let slot = match colors.get(index) {
            Some(color) => slot_swatch(color, state).block(block),
            None => Paragraph::new("·  ·  ·")
                .style(Style::default().fg(theme.text_muted))
                .block(block),
        };
        f.render_widget(slot, *slot_area);
    }
}

fn slot_swatch<'a>(color: &TraditionalColor, state: &AppState) -> Paragraph<'a> {
    let text_color = color.rgb.contrast_text().to_ratatui_color();
    Paragraph::new(vec![
        Line::from(Span::styled(
            color.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(color.hex.clone()),
        Line::from(classify_color(color).label(state.session.locale())),
    ])
    .style(
        Style::default()
            .fg(text_color)
            .bg(color.rgb.to_ratatui_color()),
    )
}

/// Rendered export in the current format, truncated.
fn render_preview(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let colors = export::palette_colors(state.session.palette(), &state.dataset);

    let mut lines: Vec<Line> = match export::render_palette(&colors, state.lab.format) {
        Ok(content) => content
            .lines()
            .take(PREVIEW_LINES)
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(theme.text))))
            .collect(),
        Err(e) => vec![Line::from(Span::styled(
            format!("Preview unavailable: {e}"),
            Style::default().fg(theme.error),
        ))],
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("f", Style::default().fg(theme.accent)),
        Span::raw(" format  "),
        Span::styled("e", Style::default().fg(theme.accent)),
        Span::raw(format!(
            " export to {}",
            state.config.export.output_dir.display()
        )),
    ]));

    let formats: Vec<Span> = PaletteFormat::ALL
        .iter()
        .flat_map(|format| {
            let style = if *format == state.lab.format {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            [Span::styled(format.key(), style), Span::raw(" ")]
        })
        .collect();

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Line::from(
                    std::iter::once(Span::raw(" Export: "))
                        .chain(formats)
                        .collect::<Vec<_>>(),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        );
    f.render_widget(preview, area);
}
