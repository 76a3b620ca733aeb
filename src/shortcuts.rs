//! Centralized shortcut and action system.
//!
//! This module maps key events to explorer actions per screen, and is also the
//! source of the help overlay's shortcut list, so help text and event handling
//! cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every action a user can trigger from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum KeyAction {
    // === SCREENS ===
    Explore,
    OpenPaletteLab,
    OpenAbout,
    Back,
    Quit,

    // === LENSES ===
    LensHue,
    LensDynasty,
    LensMood,

    // === SELECTION ===
    NextColor,
    PreviousColor,
    OpenDetail,

    // === PALETTE ===
    AddToPalette,
    RemoveFromPalette,
    ClearPalette,
    NextSlot,
    PreviousSlot,
    NextSuggestion,
    PreviousSuggestion,
    AddSuggestion,
    CycleFormat,
    ExportPalette,

    // === DISPLAY ===
    ToggleLocale,
    ToggleNeutral,
    ToggleHelp,
}

impl KeyAction {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Explore => "explore",
            Self::OpenPaletteLab => "open_palette_lab",
            Self::OpenAbout => "open_about",
            Self::Back => "back",
            Self::Quit => "quit",
            Self::LensHue => "lens_hue",
            Self::LensDynasty => "lens_dynasty",
            Self::LensMood => "lens_mood",
            Self::NextColor => "next_color",
            Self::PreviousColor => "previous_color",
            Self::OpenDetail => "open_detail",
            Self::AddToPalette => "add_to_palette",
            Self::RemoveFromPalette => "remove_from_palette",
            Self::ClearPalette => "clear_palette",
            Self::NextSlot => "next_slot",
            Self::PreviousSlot => "previous_slot",
            Self::NextSuggestion => "next_suggestion",
            Self::PreviousSuggestion => "previous_suggestion",
            Self::AddSuggestion => "add_suggestion",
            Self::CycleFormat => "cycle_format",
            Self::ExportPalette => "export_palette",
            Self::ToggleLocale => "toggle_locale",
            Self::ToggleNeutral => "toggle_neutral",
            Self::ToggleHelp => "toggle_help",
        }
    }

    /// One-line description for the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Explore => "Enter the explorer",
            Self::OpenPaletteLab => "Open the palette lab",
            Self::OpenAbout => "About the colors",
            Self::Back => "Go back / close",
            Self::Quit => "Quit",
            Self::LensHue => "Hue vein lens",
            Self::LensDynasty => "Dynasty lens",
            Self::LensMood => "Mood lens",
            Self::NextColor => "Select next color",
            Self::PreviousColor => "Select previous color",
            Self::OpenDetail => "Show color details",
            Self::AddToPalette => "Add selected color to palette",
            Self::RemoveFromPalette => "Remove color from palette",
            Self::ClearPalette => "Clear the palette",
            Self::NextSlot => "Next palette slot",
            Self::PreviousSlot => "Previous palette slot",
            Self::NextSuggestion => "Next suggestion",
            Self::PreviousSuggestion => "Previous suggestion",
            Self::AddSuggestion => "Add suggestion to palette",
            Self::CycleFormat => "Cycle export format",
            Self::ExportPalette => "Export palette to file",
            Self::ToggleLocale => "Switch language (中/EN)",
            Self::ToggleNeutral => "Toggle neutral backdrop",
            Self::ToggleHelp => "Toggle this help",
        }
    }
}

/// Screen whose bindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Title screen
    Landing,
    /// Lens explorer
    Explore,
    /// Palette lab
    Palette,
    /// About page
    About,
}

impl ShortcutContext {
    /// All contexts in help order.
    pub const ALL: [Self; 4] = [Self::Landing, Self::Explore, Self::Palette, Self::About];

    /// Section title in the help overlay.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "Title Screen",
            Self::Explore => "Explorer",
            Self::Palette => "Palette Lab",
            Self::About => "About",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys since the character already
    /// carries it and terminals disagree on reporting it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable key label, e.g. "Shift+Tab" or "Ctrl+c".
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to action
    bindings: HashMap<(ShortcutContext, KeyBinding), KeyAction>,
    /// Registration order, for help listings
    order: Vec<(ShortcutContext, KeyBinding, KeyAction)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_landing_shortcuts();
        registry.register_explore_shortcuts();
        registry.register_palette_shortcuts();
        registry.register_about_shortcuts();
        registry
    }

    fn register_landing_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Landing;
        self.register(ctx, K::Enter, M::NONE, KeyAction::Explore);
        self.register(ctx, K::Char('i'), M::NONE, KeyAction::OpenAbout);
        self.register(ctx, K::Char('p'), M::NONE, KeyAction::OpenPaletteLab);
        self.register_display_shortcuts(ctx);
    }

    fn register_explore_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Explore;

        // === LENSES ===
        self.register(ctx, K::Char('1'), M::NONE, KeyAction::LensHue);
        self.register(ctx, K::Char('2'), M::NONE, KeyAction::LensDynasty);
        self.register(ctx, K::Char('3'), M::NONE, KeyAction::LensMood);

        // === SELECTION ===
        self.register(ctx, K::Tab, M::NONE, KeyAction::NextColor);
        self.register(ctx, K::Right, M::NONE, KeyAction::NextColor);
        self.register(ctx, K::BackTab, M::SHIFT, KeyAction::PreviousColor);
        self.register(ctx, K::Left, M::NONE, KeyAction::PreviousColor);
        self.register(ctx, K::Enter, M::NONE, KeyAction::OpenDetail);

        // === PALETTE ===
        self.register(ctx, K::Char('a'), M::NONE, KeyAction::AddToPalette);
        self.register(ctx, K::Char('x'), M::NONE, KeyAction::RemoveFromPalette);
        self.register(ctx, K::Char('p'), M::NONE, KeyAction::OpenPaletteLab);

        self.register(ctx, K::Char('i'), M::NONE, KeyAction::OpenAbout);
        self.register_display_shortcuts(ctx);
    }

    fn register_palette_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Palette;
        self.register(ctx, K::Right, M::NONE, KeyAction::NextSlot);
        self.register(ctx, K::Tab, M::NONE, KeyAction::NextSlot);
        self.register(ctx, K::Left, M::NONE, KeyAction::PreviousSlot);
        self.register(ctx, K::BackTab, M::SHIFT, KeyAction::PreviousSlot);
        self.register(ctx, K::Down, M::NONE, KeyAction::NextSuggestion);
        self.register(ctx, K::Up, M::NONE, KeyAction::PreviousSuggestion);
        self.register(ctx, K::Enter, M::NONE, KeyAction::AddSuggestion);
        self.register(ctx, K::Char('a'), M::NONE, KeyAction::AddSuggestion);
        self.register(ctx, K::Char('x'), M::NONE, KeyAction::RemoveFromPalette);
        self.register(ctx, K::Delete, M::NONE, KeyAction::RemoveFromPalette);
        self.register(ctx, K::Char('c'), M::NONE, KeyAction::ClearPalette);
        self.register(ctx, K::Char('f'), M::NONE, KeyAction::CycleFormat);
        self.register(ctx, K::Char('e'), M::NONE, KeyAction::ExportPalette);
        self.register_display_shortcuts(ctx);
    }

    fn register_about_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::About;
        self.register(ctx, K::Enter, M::NONE, KeyAction::Explore);
        self.register_display_shortcuts(ctx);
    }

    /// Bindings every screen shares.
    fn register_display_shortcuts(&mut self, ctx: ShortcutContext) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Char('l'), M::NONE, KeyAction::ToggleLocale);
        self.register(ctx, K::Char('n'), M::NONE, KeyAction::ToggleNeutral);
        self.register(ctx, K::Char('?'), M::NONE, KeyAction::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, KeyAction::Back);
        self.register(ctx, K::Char('q'), M::NONE, KeyAction::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, KeyAction::Quit);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
    ) {
        // Lookup strips Shift from characters, so register them the same way
        let binding = KeyBinding::from_event(KeyEvent::new(code, modifiers));
        if self.bindings.insert((context, binding), action).is_none() {
            self.order.push((context, binding, action));
        }
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<KeyAction> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Bindings of one context grouped by action, in registration order.
    ///
    /// Each entry lists every key label bound to the action.
    #[must_use]
    pub fn bindings_for(&self, context: ShortcutContext) -> Vec<(Vec<String>, KeyAction)> {
        let mut grouped: Vec<(Vec<String>, KeyAction)> = Vec::new();
        for (ctx, binding, action) in &self.order {
            if *ctx != context {
                continue;
            }
            match grouped.iter_mut().find(|(_, a)| a == action) {
                Some((labels, _)) => labels.push(binding.label()),
                None => grouped.push((vec![binding.label()], *action)),
            }
        }
        grouped
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
