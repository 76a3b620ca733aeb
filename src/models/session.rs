//! Session state container with reducer-style transitions.
//!
//! All mutation goes through [`SessionState::apply`], so the TUI and tests
//! drive the same transitions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Lens, Locale, Palette, View};

/// Cursor position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the top-level screen
    SetView(View),
    /// Switch the active lens
    SetLens(Lens),
    /// Select a color, or clear the selection
    SelectColor(Option<String>),
    /// Move the cursor
    SetCursor(Point),
    /// Flip neutral (desaturated) mode
    ToggleNeutralMode,
    /// Switch language
    SetLocale(Locale),
    /// Add a color to the palette at the given time
    AddToPalette {
        /// Color to add
        color_id: String,
        /// Timestamp recorded on the entry
        at: DateTime<Utc>,
    },
    /// Remove a color from the palette
    RemoveFromPalette(String),
    /// Empty the palette
    ClearPalette,
}

impl Action {
    /// Builds an [`Action::AddToPalette`] stamped with the current time.
    #[must_use]
    pub fn add_to_palette(color_id: impl Into<String>) -> Self {
        Self::AddToPalette {
            color_id: color_id.into(),
            at: Utc::now(),
        }
    }
}

/// In-memory state of one explorer session.
///
/// Fields are read through accessors and changed only by [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    view: View,
    lens: Lens,
    selected_color_id: Option<String>,
    cursor: Point,
    neutral_mode: bool,
    locale: Locale,
    palette: Palette,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            view: View::Landing,
            lens: Lens::Hue,
            selected_color_id: None,
            cursor: Point::default(),
            neutral_mode: false,
            locale: Locale::Zh,
            palette: Palette::new(),
        }
    }
}

impl SessionState {
    /// Creates a session seeded with preferred lens, locale and neutral mode.
    #[must_use]
    pub fn with_preferences(lens: Lens, locale: Locale, neutral_mode: bool) -> Self {
        Self {
            lens,
            locale,
            neutral_mode,
            ..Self::default()
        }
    }

    /// Current screen.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Active lens.
    #[must_use]
    pub const fn lens(&self) -> Lens {
        self.lens
    }

    /// Selected color id, if any.
    #[must_use]
    pub fn selected_color_id(&self) -> Option<&str> {
        self.selected_color_id.as_deref()
    }

    /// Last known cursor position.
    #[must_use]
    pub const fn cursor(&self) -> Point {
        self.cursor
    }

    /// Whether neutral (desaturated ambience) mode is on.
    #[must_use]
    pub const fn neutral_mode(&self) -> bool {
        self.neutral_mode
    }

    /// UI language.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// The user's palette.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Applies a transition in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetView(view) => self.view = view,
            Action::SetLens(lens) => self.lens = lens,
            Action::SelectColor(id) => self.selected_color_id = id,
            Action::SetCursor(point) => self.cursor = point,
            Action::ToggleNeutralMode => self.neutral_mode = !self.neutral_mode,
            Action::SetLocale(locale) => self.locale = locale,
            Action::AddToPalette { color_id, at } => {
                self.palette.add_at(&color_id, at);
            }
            Action::RemoveFromPalette(color_id) => {
                self.palette.remove(&color_id);
            }
            Action::ClearPalette => self.palette.clear(),
        }
    }

    /// Applies a transition and returns the new state.
    #[must_use]
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();
        assert_eq!(state.view(), View::Landing);
        assert_eq!(state.lens(), Lens::Hue);
        assert_eq!(state.locale(), Locale::Zh);
        assert!(state.selected_color_id().is_none());
        assert!(!state.neutral_mode());
        assert!(state.palette().is_empty());
    }

    #[test]
    fn test_transitions() {
        let state = SessionState::default()
            .reduce(Action::SetView(View::Explore))
            .reduce(Action::SetLens(Lens::Mood))
            .reduce(Action::SelectColor(Some("da-hong".into())))
            .reduce(Action::SetCursor(Point::new(10.0, 20.0)))
            .reduce(Action::ToggleNeutralMode)
            .reduce(Action::SetLocale(Locale::En));

        assert_eq!(state.view(), View::Explore);
        assert_eq!(state.lens(), Lens::Mood);
        assert_eq!(state.selected_color_id(), Some("da-hong"));
        assert_eq!(state.cursor(), Point::new(10.0, 20.0));
        assert!(state.neutral_mode());
        assert_eq!(state.locale(), Locale::En);

        let state = state.reduce(Action::SelectColor(None));
        assert!(state.selected_color_id().is_none());
    }

    #[test]
    fn test_palette_transitions_keep_invariants() {
        let mut state = SessionState::default();
        state.apply(Action::add_to_palette("a"));
        state.apply(Action::add_to_palette("a"));
        assert_eq!(state.palette().len(), 1);

        for i in 0..10 {
            state.apply(Action::add_to_palette(format!("c{i}")));
        }
        assert_eq!(state.palette().len(), 8);

        state.apply(Action::RemoveFromPalette("not-there".into()));
        assert_eq!(state.palette().len(), 8);

        state.apply(Action::ClearPalette);
        assert!(state.palette().is_empty());
    }

    #[test]
    fn test_with_preferences() {
        let state = SessionState::with_preferences(Lens::Dynasty, Locale::En, true);
        assert_eq!(state.lens(), Lens::Dynasty);
        assert_eq!(state.locale(), Locale::En);
        assert!(state.neutral_mode());
        assert_eq!(state.view(), View::Landing);
    }
}
