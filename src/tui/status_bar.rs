//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::models::PALETTE_CAPACITY;
use crate::services::classify_color;
use crate::shortcuts::KeyAction;

/// Hints shown on the help line, per screen, in this order.
const HINT_ACTIONS: [KeyAction; 6] = [
    KeyAction::NextColor,
    KeyAction::OpenDetail,
    KeyAction::AddToPalette,
    KeyAction::OpenPaletteLab,
    KeyAction::ExportPalette,
    KeyAction::Explore,
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line, selection summary, key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ))
        } else {
            Line::from("")
        };

        let status_text = vec![
            message_line,
            Self::selection_line(state, theme),
            Self::get_contextual_help_line(state, theme),
        ];

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted))
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Selected color and palette fill.
    fn selection_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let locale = state.session.locale();
        let mut spans = Vec::new();

        match state.selected_color() {
            Some(color) => {
                spans.push(Span::styled(
                    "  ",
                    Style::default().bg(color.rgb.to_ratatui_color()),
                ));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    color.title_for(locale),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(
                        "  {}  {}  {}",
                        color.hex,
                        color.rgb.to_css_rgb(),
                        classify_color(color).label(locale)
                    ),
                    Style::default().fg(theme.text_secondary),
                ));
            }
            None => spans.push(Span::styled(
                "No color selected",
                Style::default().fg(theme.text_muted),
            )),
        }

        spans.push(Span::styled(
            format!(
                "   Palette {}/{}",
                state.session.palette().len(),
                PALETTE_CAPACITY
            ),
            Style::default().fg(theme.primary),
        ));

        Line::from(spans)
    }

    /// Key hints for the current screen, read from the shortcut registry.
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let bindings = state.registry().bindings_for(state.shortcut_context());

        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];

        let hints = bindings
            .into_iter()
            .filter(|(_, action)| HINT_ACTIONS.contains(action));
        for (labels, action) in hints {
            spans.push(Span::styled(
                labels.join("/"),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(format!(": {} | ", action.description())));
        }

        // Always end with "?: Help"
        spans.push(Span::styled("?", Style::default().fg(theme.accent)));
        spans.push(Span::raw(": Help"));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, View};
    use crate::tui::tests::sample_state;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 5)).unwrap();
        terminal
            .draw(|f| StatusBar::render(f, f.area(), state, &state.theme))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_shows_selection_and_palette() {
        let mut state = sample_state();
        state.session.apply(Action::SetView(View::Explore));
        let text = rendered(&state);
        assert!(text.contains("No color selected"));
        assert!(text.contains("Palette 0/8"));

        state.select_color(Some("dian-qing".into()));
        state.add_to_palette("dian-qing");
        let text = rendered(&state);
        assert!(text.contains("#1E3A8A"));
        assert!(text.contains("Palette 1/8"));
    }

    #[test]
    fn test_hints_follow_screen() {
        let mut state = sample_state();
        state.session.apply(Action::SetView(View::Explore));
        assert!(rendered(&state).contains("Show color details"));

        state.session.apply(Action::SetView(View::Palette));
        let text = rendered(&state);
        assert!(text.contains("Export palette to file"));
        assert!(!text.contains("Show color details"));
    }
}
