//! Static screens: the title screen and the about page.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::AppState;
use crate::models::{HueFamily, Locale};
use crate::services::annotations::{dynasty_counts, mood_accents};
use crate::services::classify_color;

/// Title screen with a hue spectrum band.
pub fn render_landing(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let locale = state.session.locale();

    let spectrum: Vec<Span> = HueFamily::ALL
        .iter()
        .map(|family| {
            Span::styled(
                "      ",
                Style::default().bg(family.spectrum_color().to_ratatui_color()),
            )
        })
        .collect();

    let (subtitle, prompt) = match locale {
        Locale::Zh => (
            "中国传统色 · 以色相、朝代、意境观之",
            "按 Enter 进入 · ? 帮助 · l 切换语言 · q 退出",
        ),
        Locale::En => (
            "Traditional Chinese colors, seen by hue, dynasty and mood",
            "Enter to explore · ? help · l language · q quit",
        ),
    };

    let mut lines = vec![Line::from(""); usize::from(area.height / 3)];
    lines.extend([
        Line::from(Span::styled(
            "色  脉",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "C O L O R   V E I N",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(spectrum),
        Line::from(""),
        Line::from(Span::styled(subtitle, Style::default().fg(theme.text))),
        Line::from(Span::styled(
            format!("{} colors", state.dataset.len()),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(prompt, Style::default().fg(theme.accent))),
    ]);

    let landing = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(landing, area);
}

/// About page: what the explorer shows and how the dataset is distributed.
pub fn render_about(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let locale = state.session.locale();
    let colors = state.dataset.colors();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
    };

    // Hue families
    let mut family_lines = vec![
        Line::from(Span::styled(
            "Every color is placed by its own HSL value. The catalog's category \
             label is ignored; the hue family comes from the classifier.",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        heading("Hue families"),
    ];
    for family in HueFamily::ALL {
        let count = colors.iter().filter(|c| classify_color(c) == family).count();
        family_lines.push(Line::from(vec![
            Span::styled(
                "  ",
                Style::default().bg(family.spectrum_color().to_ratatui_color()),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:<8}", family.label(locale)),
                Style::default().fg(theme.text),
            ),
            Span::styled(count.to_string(), Style::default().fg(theme.text_muted)),
        ]));
    }

    // Dynasty timeline, empty periods included
    let mut dynasty_lines = vec![heading("Dynasties"), Line::from("")];
    for (dynasty, count) in dynasty_counts(colors) {
        let style = if count == 0 {
            Style::default().fg(theme.text_muted)
        } else {
            Style::default().fg(theme.text)
        };
        dynasty_lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", dynasty.label(locale)), style),
            Span::styled(
                format!("{:<16}", dynasty.years),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(count.to_string(), style),
        ]));
    }

    // Moods with their average color
    let mut mood_lines = vec![heading("Moods"), Line::from("")];
    for (mood, accent) in mood_accents(colors) {
        let swatch = accent.map_or(theme.text_muted, |rgb| rgb.to_ratatui_color());
        mood_lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(swatch)),
            Span::raw(" "),
            Span::styled(
                mood.label(locale),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        mood_lines.push(Line::from(Span::styled(
            format!("   {}", mood.description),
            Style::default().fg(theme.text_muted),
        )));
    }

    for (lines, column) in [family_lines, dynasty_lines, mood_lines]
        .into_iter()
        .zip(columns.iter())
    {
        let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(panel, *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::sample_state;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_landing_mentions_color_count() {
        let mut state = sample_state();
        state.session.apply(crate::models::Action::SetLocale(Locale::En));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_landing(f, f.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("5 colors"));
        assert!(text.contains("Enter to explore"));
    }

    #[test]
    fn test_about_lists_timeline() {
        let mut state = sample_state();
        state.session.apply(crate::models::Action::SetLocale(Locale::En));
        let mut terminal = Terminal::new(TestBackend::new(150, 45)).unwrap();
        terminal
            .draw(|f| render_about(f, f.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Dynasties"));
        assert!(text.contains("Qing"));
        assert!(text.contains("Ethereal"));
    }
}
