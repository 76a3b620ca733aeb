//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.
//!
//! Each terminal cell stands for an 8×16 pixel patch, so the explorer canvas
//! becomes a virtual viewport that the lens layouts are computed against.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]

pub mod component;
pub mod detail;
pub mod explorer;
pub mod handlers;
pub mod help_overlay;
pub mod palette_lab;
pub mod screens;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::export;
use crate::models::{
    Action, ColorDataset, Lens, Point, SessionState, TraditionalColor, View, PALETTE_CAPACITY,
};
use crate::services::layout::{compute_layout, LayoutPosition, Viewport};
use crate::services::similarity::{suggest_complements, SUGGESTION_COUNT};
use crate::shortcuts::{ShortcutContext, ShortcutRegistry};

pub use component::{Component, ComponentEvent, ContextualComponent};
pub use detail::ColorDetail;
pub use help_overlay::HelpOverlayState;
pub use palette_lab::PaletteLabState;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Width in viewport pixels of one terminal cell.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Height in viewport pixels of one terminal cell.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Cursor position used while the mouse is outside the canvas; far enough
/// that no orb feels its pull.
pub const OFFSCREEN_CURSOR: Point = Point::new(-10_000.0, -10_000.0);

/// Popup types that can be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Color detail panel
    Detail,
    /// Keyboard shortcut help
    Help,
}

/// Application state - single source of truth
///
/// Explorer semantics live in `session`; everything else here is terminal
/// plumbing around it.
pub struct AppState {
    /// View, lens, selection, cursor, locale, neutral mode and palette
    pub session: SessionState,
    /// Colors being explored
    pub dataset: ColorDataset,
    /// Loaded configuration
    pub config: Config,
    /// Active theme
    pub theme: Theme,

    /// Layout positions for the current lens and canvas
    pub positions: Vec<LayoutPosition>,
    /// Canvas the positions were computed for, in terminal cells
    pub canvas: Rect,
    layout_key: Option<(Lens, Rect)>,

    /// Active popup, if any
    pub active_popup: Option<PopupType>,
    /// Detail panel state while the detail popup is open
    pub detail: Option<ColorDetail>,
    /// Help overlay scroll state
    pub help: HelpOverlayState,
    /// Palette lab cursors and export format
    pub lab: PaletteLabState,

    /// Status line message
    pub status_message: String,
    /// Error shown as an overlay until dismissed
    pub error_message: Option<String>,
    /// Set when the user quits
    pub should_quit: bool,

    registry: ShortcutRegistry,
}

impl AppState {
    /// Creates application state from a dataset and configuration.
    ///
    /// Startup lens, locale and neutral mode come from the `[ui]` config section.
    #[must_use]
    pub fn new(dataset: ColorDataset, config: Config) -> Self {
        let mut session = SessionState::with_preferences(
            config.ui.default_lens,
            config.ui.locale,
            config.ui.neutral_mode,
        );
        session.apply(Action::SetCursor(OFFSCREEN_CURSOR));

        let active_popup = config.ui.show_help_on_startup.then_some(PopupType::Help);

        Self {
            session,
            dataset,
            theme: Theme::from_mode(config.ui.theme_mode),
            lab: PaletteLabState::new(config.export.default_format),
            config,
            positions: Vec::new(),
            canvas: Rect::default(),
            layout_key: None,
            active_popup,
            detail: None,
            help: HelpOverlayState::new(),
            status_message: String::new(),
            error_message: None,
            should_quit: false,
            registry: ShortcutRegistry::new(),
        }
    }

    /// Shortcut registry used by the input handlers.
    #[must_use]
    pub const fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    /// Shortcut context for the current screen.
    #[must_use]
    pub const fn shortcut_context(&self) -> ShortcutContext {
        match self.session.view() {
            View::Landing => ShortcutContext::Landing,
            View::Explore => ShortcutContext::Explore,
            View::Palette => ShortcutContext::Palette,
            View::About => ShortcutContext::About,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Virtual viewport for a canvas of terminal cells.
    #[must_use]
    pub fn viewport_for(canvas: Rect) -> Viewport {
        Viewport::new(
            f64::from(canvas.width) * CELL_WIDTH_PX,
            f64::from(canvas.height) * CELL_HEIGHT_PX,
        )
    }

    /// Recomputes positions if the lens or the canvas changed.
    pub fn refresh_layout(&mut self, canvas: Rect) {
        let key = (self.session.lens(), canvas);
        if self.layout_key == Some(key) {
            return;
        }

        let viewport = Self::viewport_for(canvas);
        self.positions = compute_layout(self.dataset.colors(), self.session.lens(), viewport);
        self.canvas = canvas;
        self.layout_key = Some(key);
        debug!(
            lens = %self.session.lens(),
            columns = canvas.width,
            rows = canvas.height,
            "explorer layout refreshed"
        );
    }

    /// Terminal cell holding a viewport point, if it falls on the canvas.
    #[must_use]
    pub fn cell_for(&self, point: Point) -> Option<(u16, u16)> {
        if !point.x.is_finite() || !point.y.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let column = (point.x / CELL_WIDTH_PX).floor();
        let row = (point.y / CELL_HEIGHT_PX).floor();
        if column >= f64::from(self.canvas.width) || row >= f64::from(self.canvas.height) {
            return None;
        }
        Some((self.canvas.x + column as u16, self.canvas.y + row as u16))
    }

    /// Viewport point at the center of a terminal cell, if the cell is on the canvas.
    #[must_use]
    pub fn point_for(&self, column: u16, row: u16) -> Option<Point> {
        let inside = column >= self.canvas.x
            && column < self.canvas.right()
            && row >= self.canvas.y
            && row < self.canvas.bottom();
        inside.then(|| {
            Point::new(
                (f64::from(column - self.canvas.x) + 0.5) * CELL_WIDTH_PX,
                (f64::from(row - self.canvas.y) + 0.5) * CELL_HEIGHT_PX,
            )
        })
    }

    /// Currently selected color.
    #[must_use]
    pub fn selected_color(&self) -> Option<&TraditionalColor> {
        self.session
            .selected_color_id()
            .and_then(|id| self.dataset.get(id))
    }

    /// Colors suggested for the palette in the lab.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&TraditionalColor> {
        suggest_complements(self.session.palette(), &self.dataset, SUGGESTION_COUNT)
    }

    /// Moves the selection along the layout order, wrapping at the ends.
    ///
    /// With nothing selected, a forward step picks the first orb and a
    /// backward step the last.
    pub fn select_relative(&mut self, step: isize) {
        let len = self.positions.len();
        if len == 0 {
            return;
        }

        let current = self
            .session
            .selected_color_id()
            .and_then(|id| self.positions.iter().position(|p| p.color_id == id));

        let next = match current {
            Some(index) => (index as isize + step).rem_euclid(len as isize) as usize,
            None if step >= 0 => 0,
            None => len - 1,
        };

        let id = self.positions[next].color_id.clone();
        self.select_color(Some(id));
    }

    /// Selects a color, or clears the selection.
    pub fn select_color(&mut self, id: Option<String>) {
        self.session.apply(Action::SelectColor(id));
        if let Some(color) = self.selected_color() {
            let message = format!("{} {}", color.title_for(self.session.locale()), color.hex);
            self.set_status(message);
        }
    }

    /// Adds a color to the palette, reporting why when it cannot.
    pub fn add_to_palette(&mut self, color_id: &str) {
        let Some(name) = self.dataset.get(color_id).map(|c| c.name.clone()) else {
            self.set_error(format!("Unknown color: {color_id}"));
            return;
        };

        if self.session.palette().contains(color_id) {
            self.set_status(format!("{name} is already in the palette"));
        } else if self.session.palette().is_full() {
            self.set_status(format!("Palette is full ({PALETTE_CAPACITY} colors)"));
        } else {
            self.session.apply(Action::add_to_palette(color_id));
            self.set_status(format!(
                "Added {name} to palette ({}/{PALETTE_CAPACITY})",
                self.session.palette().len()
            ));
        }
    }

    /// Removes a color from the palette.
    pub fn remove_from_palette(&mut self, color_id: &str) {
        if !self.session.palette().contains(color_id) {
            self.set_status("Color is not in the palette");
            return;
        }
        self.session
            .apply(Action::RemoveFromPalette(color_id.to_string()));
        self.lab.clamp_slot(self.session.palette().len());
        let name = self
            .dataset
            .get(color_id)
            .map_or(color_id, |c| c.name.as_str())
            .to_string();
        self.set_status(format!("Removed {name} from palette"));
    }

    /// Writes the palette in the lab's format to the configured export directory.
    pub fn export_palette(&mut self) {
        let format = self.lab.format;
        let colors = export::palette_colors(self.session.palette(), &self.dataset);
        if colors.is_empty() {
            self.set_status("Palette is empty, nothing to export");
            return;
        }
        let count = colors.len();

        let path = self
            .config
            .export
            .output_dir
            .join(export::default_file_name(format));
        let result = export::render_palette(&colors, format)
            .and_then(|content| export::write_export(&path, &content));

        match result {
            Ok(()) => {
                info!(path = %path.display(), format = %format, count, "palette exported from explorer");
                self.set_status(format!("Exported {count} colors to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "palette export failed");
                self.set_error(format!("Export failed: {e:#}"));
            }
        }
    }

    /// Opens the detail popup for the selected color.
    pub fn open_detail(&mut self) {
        let Some(color) = self.selected_color() else {
            self.set_status("Select a color first (Tab or click)");
            return;
        };
        self.detail = Some(ColorDetail::new(color, &self.dataset));
        self.active_popup = Some(PopupType::Detail);
    }

    /// Opens the help overlay.
    pub fn open_help(&mut self) {
        self.help.scroll_to_top();
        self.active_popup = Some(PopupType::Help);
    }

    /// Closes whichever popup is open.
    pub fn close_popup(&mut self) {
        self.active_popup = None;
        self.detail = None;
    }
}

/// Runs the explorer until the user quits, restoring the terminal afterwards.
pub fn launch(dataset: ColorDataset, config: Config) -> Result<()> {
    info!(colors = dataset.len(), "starting explorer");
    let mut state = AppState::new(dataset, config);
    let mut terminal = setup_terminal()?;

    let result = run_tui(&mut state, &mut terminal);
    let restored = restore_terminal(terminal);

    result?;
    restored
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Layout is computed before drawing since rendering only reads state
        let size = terminal.size().context("Failed to read terminal size")?;
        let screen = Rect::new(0, 0, size.width, size.height);
        state.refresh_layout(explorer::canvas_area(main_area(screen)));

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse),
                // Resize is picked up by refresh_layout on the next pass
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("explorer closed");
    Ok(())
}

/// Splits the screen into title bar, main content and status bar.
fn screen_chunks(area: Rect) -> [Rect; 3] {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Main content area for a full-screen rect.
#[must_use]
pub fn main_area(screen: Rect) -> Rect {
    screen_chunks(screen)[1]
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let [title, main, status] = screen_chunks(f.area());

    render_title_bar(f, title, state);
    render_main_content(f, main, state);
    StatusBar::render(f, status, state, &state.theme);

    let screen = f.area();
    match state.active_popup {
        Some(PopupType::Help) => state.help.render(f, screen, &state.theme),
        Some(PopupType::Detail) => {
            if let Some(detail) = &state.detail {
                detail.render(f, screen, &state.theme, state);
            }
        }
        None => {}
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Title bar: app name, lens tabs, locale and neutral indicator.
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let locale = state.session.locale();

    let mut spans = vec![Span::styled(
        " 色脉 Color Vein ",
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    if state.session.view() == View::Explore {
        spans.push(Span::styled("│ ", Style::default().fg(theme.text_muted)));
        for (i, lens) in Lens::ALL.iter().enumerate() {
            let style = if *lens == state.session.lens() {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(format!("{} {}", i + 1, lens.label(locale)), style));
            spans.push(Span::raw("  "));
        }
    }

    spans.push(Span::styled(
        format!("│ {} colors ", state.dataset.len()),
        Style::default().fg(theme.text_muted),
    ));
    spans.push(Span::styled(
        format!("│ {} ", if locale == crate::models::Locale::Zh { "中" } else { "EN" }),
        Style::default().fg(theme.text_secondary),
    ));
    if state.session.neutral_mode() {
        spans.push(Span::styled("│ neutral", Style::default().fg(theme.warning)));
    }

    let title_widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render main content for the current view
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    match state.session.view() {
        View::Landing => screens::render_landing(f, area, state),
        View::Explore => explorer::ExplorerWidget::render(f, area, state),
        View::Palette => palette_lab::render(f, area, state),
        View::About => screens::render_about(f, area, state),
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            "ERROR",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter/Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Dismiss"),
        ]),
    ];

    let overlay = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(overlay, area);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::HueFamily;

    /// Small dataset covering several families, dynasties and moods.
    pub(crate) fn sample_state() -> AppState {
        let mut colors = Vec::new();
        for (id, hex, dynasty, mood) in [
            ("zhu-hong", "#FF461F", "唐", "喜庆"),
            ("teng-huang", "#FFB61E", "宋", "雅致"),
            ("song-lv", "#057748", "明", "天然"),
            ("dian-qing", "#1E3A8A", "清", "深沉"),
            ("yue-bai", "#D6ECF0", "宋", "空灵"),
        ] {
            let mut c = TraditionalColor::from_hex(id, id, hex).unwrap();
            c.dynasties = vec![dynasty.to_string()];
            c.moods = vec![mood.to_string()];
            colors.push(c);
        }
        let dataset = ColorDataset::new(colors).unwrap();

        let mut config = Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        let mut state = AppState::new(dataset, config);
        state.refresh_layout(Rect::new(1, 4, 150, 40));
        state
    }

    #[test]
    fn test_new_state_uses_preferences() {
        let mut config = Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Light;
        config.ui.default_lens = Lens::Mood;
        config.ui.neutral_mode = true;
        config.ui.show_help_on_startup = true;

        let dataset = ColorDataset::load().unwrap();
        let state = AppState::new(dataset, config);
        assert_eq!(state.session.lens(), Lens::Mood);
        assert!(state.session.neutral_mode());
        assert_eq!(state.session.view(), View::Landing);
        assert_eq!(state.session.cursor(), OFFSCREEN_CURSOR);
        assert_eq!(state.active_popup, Some(PopupType::Help));
        assert!(state.theme.is_light);
    }

    #[test]
    fn test_refresh_layout_only_on_change() {
        let mut state = sample_state();
        assert_eq!(state.positions.len(), 5);
        let before = state.positions.clone();

        state.refresh_layout(Rect::new(1, 4, 150, 40));
        assert_eq!(state.positions, before);

        state.session.apply(Action::SetLens(Lens::Dynasty));
        state.refresh_layout(Rect::new(1, 4, 150, 40));
        assert_ne!(state.positions, before);
        assert_eq!(state.positions.len(), 5);
    }

    #[test]
    fn test_viewport_from_cells() {
        let vp = AppState::viewport_for(Rect::new(0, 0, 150, 50));
        assert_eq!(vp.width, 1200.0);
        assert_eq!(vp.height, 800.0);
    }

    #[test]
    fn test_cell_point_mapping() {
        let state = sample_state();
        // Canvas starts at (1, 4)
        assert_eq!(state.cell_for(Point::new(0.0, 0.0)), Some((1, 4)));
        assert_eq!(state.cell_for(Point::new(17.0, 33.0)), Some((3, 6)));
        assert_eq!(state.cell_for(Point::new(-1.0, 0.0)), None);
        assert_eq!(state.cell_for(Point::new(1200.0, 0.0)), None);
        assert_eq!(state.cell_for(OFFSCREEN_CURSOR), None);

        assert_eq!(state.point_for(1, 4), Some(Point::new(4.0, 8.0)));
        assert_eq!(state.point_for(0, 4), None);
        let p = state.point_for(3, 6).unwrap();
        assert_eq!(state.cell_for(p), Some((3, 6)));
    }

    #[test]
    fn test_select_relative_wraps() {
        let mut state = sample_state();
        let first = state.positions[0].color_id.clone();
        let last = state.positions[4].color_id.clone();

        state.select_relative(-1);
        assert_eq!(state.session.selected_color_id(), Some(last.as_str()));
        state.select_relative(1);
        assert_eq!(state.session.selected_color_id(), Some(first.as_str()));

        // Hue lens orders by family, so the red comes first
        let family = crate::services::classify_color(state.selected_color().unwrap());
        assert_eq!(family, HueFamily::Red);
    }

    #[test]
    fn test_add_to_palette_messages() {
        let mut state = sample_state();
        state.add_to_palette("zhu-hong");
        assert!(state.session.palette().contains("zhu-hong"));
        assert!(state.status_message.contains("1/8"));

        state.add_to_palette("zhu-hong");
        assert_eq!(state.session.palette().len(), 1);
        assert!(state.status_message.contains("already"));

        state.add_to_palette("missing");
        assert!(state.error_message.is_some());

        state.clear_error();
        state.remove_from_palette("zhu-hong");
        assert!(state.session.palette().is_empty());
    }

    #[test]
    fn test_open_detail_requires_selection() {
        let mut state = sample_state();
        state.open_detail();
        assert!(state.active_popup.is_none());

        state.select_color(Some("song-lv".into()));
        state.open_detail();
        assert_eq!(state.active_popup, Some(PopupType::Detail));
        assert_eq!(state.detail.as_ref().unwrap().color_id(), "song-lv");

        state.close_popup();
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_export_palette_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = sample_state();
        state.config.export.output_dir = dir.path().to_path_buf();

        state.export_palette();
        assert!(state.status_message.contains("empty"));

        state.add_to_palette("dian-qing");
        state.lab.format = export::PaletteFormat::Css;
        state.export_palette();
        assert!(state.error_message.is_none());

        let path = dir
            .path()
            .join(export::default_file_name(export::PaletteFormat::Css));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("--dian-qing: #1E3A8A;"));
    }

    #[test]
    fn test_centered_rect_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 80, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
    }
}
