//! Color detail panel: the full record of one color plus its nearest neighbours.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::{ComponentEvent, ContextualComponent};
use super::{centered_rect, AppState, Theme};
use crate::models::{ColorDataset, TraditionalColor};
use crate::services::classify_color;
use crate::services::similarity::{find_similar, DEFAULT_SIMILAR_COUNT};

/// State of the open detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDetail {
    color_id: String,
    similar: Vec<String>,
    cursor: usize,
}

impl ColorDetail {
    /// Opens the panel for `color`, looking up its similar colors once.
    #[must_use]
    pub fn new(color: &TraditionalColor, dataset: &ColorDataset) -> Self {
        let similar = find_similar(color, dataset.colors(), DEFAULT_SIMILAR_COUNT)
            .into_iter()
            .map(|c| c.id.clone())
            .collect();
        Self {
            color_id: color.id.clone(),
            similar,
            cursor: 0,
        }
    }

    /// Id of the color shown.
    #[must_use]
    pub fn color_id(&self) -> &str {
        &self.color_id
    }

    /// Ids of the similar colors, nearest first.
    #[must_use]
    pub fn similar(&self) -> &[String] {
        &self.similar
    }

    fn field<'a>(label: &'a str, value: String, theme: &Theme) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Style::default().fg(theme.text_muted)),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    }
}

impl ContextualComponent for ColorDetail {
    type Context = AppState;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, _context: &Self::Context) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(ComponentEvent::Closed),
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                if !self.similar.is_empty() {
                    self.cursor = (self.cursor + 1) % self.similar.len();
                }
                None
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                if !self.similar.is_empty() {
                    self.cursor = (self.cursor + self.similar.len() - 1) % self.similar.len();
                }
                None
            }
            KeyCode::Enter => self
                .similar
                .get(self.cursor)
                .cloned()
                .map(ComponentEvent::ColorSelected),
            KeyCode::Char('a') => Some(ComponentEvent::AddToPalette(self.color_id.clone())),
            KeyCode::Char('x') => Some(ComponentEvent::RemoveFromPalette(self.color_id.clone())),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, state: &Self::Context) {
        let Some(color) = state.dataset.get(&self.color_id) else {
            return;
        };
        let locale = state.session.locale();
        let swatch = color.rgb.to_ratatui_color();
        let on_swatch = color.rgb.contrast_text().to_ratatui_color();

        let modal = centered_rect(70, 70, area);
        f.render_widget(Clear, modal);

        let block = Block::default()
            .title(format!(" {} ", color.title_for(locale)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(swatch))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(modal);
        f.render_widget(block, modal);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);

        // Swatch with the name in contrast text
        let padding = usize::from(columns[0].height / 2).saturating_sub(1);
        let mut swatch_lines = vec![Line::from(""); padding];
        swatch_lines.push(Line::from(Span::styled(
            color.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        swatch_lines.push(Line::from(color.hex.clone()));
        let swatch_widget = Paragraph::new(swatch_lines)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(on_swatch).bg(swatch));
        f.render_widget(swatch_widget, columns[0]);

        // Record fields
        let in_palette = state.session.palette().contains(&color.id);
        let family = classify_color(color);
        let mut lines = vec![
            Self::field("Pinyin", color.pinyin.clone(), theme),
            Self::field("Hex", color.hex.clone(), theme),
            Self::field("RGB", color.rgb.to_css_rgb(), theme),
            Self::field(
                "HSL",
                format!("{:.0}°, {:.0}%, {:.0}%", color.hsl.h, color.hsl.s, color.hsl.l),
                theme,
            ),
            Self::field(
                "CMYK",
                format!(
                    "{}, {}, {}, {}",
                    color.cmyk.c, color.cmyk.m, color.cmyk.y, color.cmyk.k
                ),
                theme,
            ),
            Self::field("Family", family.label(locale).to_string(), theme),
            Self::field("Dynasty", color.dynasties.join(" · "), theme),
            Self::field("Mood", color.moods.join(" · "), theme),
        ];
        if !color.material.is_empty() {
            lines.push(Self::field("Material", color.material.clone(), theme));
        }
        if !color.category.is_empty() {
            lines.push(Self::field("Category", color.category.clone(), theme));
        }
        lines.push(Line::from(""));

        let description = color.description_for(locale);
        if !description.is_empty() {
            lines.push(Line::from(Span::styled(
                description.to_string(),
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Similar colors",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        for (index, id) in self.similar.iter().enumerate() {
            let Some(similar) = state.dataset.get(id) else {
                continue;
            };
            let marker = if index == self.cursor { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled("  ", Style::default().bg(similar.rgb.to_ratatui_color())),
                Span::raw(" "),
                Span::styled(similar.title_for(locale), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  {}", similar.hex),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        }
        lines.push(Line::from(""));

        let palette_hint = if in_palette {
            Span::styled("✓ in palette  x remove", Style::default().fg(theme.success))
        } else {
            Span::styled("a add to palette", Style::default().fg(theme.accent))
        };
        lines.push(Line::from(vec![
            palette_hint,
            Span::styled(
                "  ↑/↓ similar  Enter jump  Esc close",
                Style::default().fg(theme.text_muted),
            ),
        ]));

        let details = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(theme.text_muted)),
            );
        f.render_widget(details, columns[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::sample_state;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_finds_similar() {
        let state = sample_state();
        let color = state.dataset.get("zhu-hong").unwrap();
        let detail = ColorDetail::new(color, &state.dataset);

        assert_eq!(detail.color_id(), "zhu-hong");
        assert_eq!(detail.similar().len(), DEFAULT_SIMILAR_COUNT);
        assert!(!detail.similar().iter().any(|id| id == "zhu-hong"));
        // Orange-yellow is the nearest neighbour of vermilion here
        assert_eq!(detail.similar()[0], "teng-huang");
    }

    #[test]
    fn test_cursor_wraps_and_enter_jumps() {
        let state = sample_state();
        let color = state.dataset.get("zhu-hong").unwrap();
        let mut detail = ColorDetail::new(color, &state.dataset);

        assert_eq!(detail.handle_input(key(KeyCode::Up), &state), None);
        let last = detail.similar()[DEFAULT_SIMILAR_COUNT - 1].clone();
        assert_eq!(
            detail.handle_input(key(KeyCode::Enter), &state),
            Some(ComponentEvent::ColorSelected(last))
        );

        detail.handle_input(key(KeyCode::Down), &state);
        let first = detail.similar()[0].clone();
        assert_eq!(
            detail.handle_input(key(KeyCode::Enter), &state),
            Some(ComponentEvent::ColorSelected(first))
        );
    }

    #[test]
    fn test_palette_and_close_events() {
        let state = sample_state();
        let color = state.dataset.get("song-lv").unwrap();
        let mut detail = ColorDetail::new(color, &state.dataset);

        assert_eq!(
            detail.handle_input(key(KeyCode::Char('a')), &state),
            Some(ComponentEvent::AddToPalette("song-lv".into()))
        );
        assert_eq!(
            detail.handle_input(key(KeyCode::Char('x')), &state),
            Some(ComponentEvent::RemoveFromPalette("song-lv".into()))
        );
        assert_eq!(
            detail.handle_input(key(KeyCode::Esc), &state),
            Some(ComponentEvent::Closed)
        );
    }
}
