//! Keyboard dispatch: maps keys to controller actions.
//!
//! The mapping is pure so it can be tested apart from the controller;
//! the controller applies the action and decides whether the event was
//! consumed (a consumed event should have its default host behavior
//! suppressed, e.g. Space scrolling the page).

/// A pressed key, abstracted from any windowing technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Enter,
    Backspace,
    Home,
    End,
    Escape,
    Char(char),
}

/// What a key press should do, before controller state is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    GoToFirst,
    GoToLast,
    ToggleFullscreen,
    ToggleNotes,
    /// Escape: exits fullscreen only when fullscreen is active.
    EscapeFullscreen,
}

/// Whether a key event was handled by the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum KeyOutcome {
    /// Handled; the host should suppress the default action.
    Consumed,
    /// Not a presentation key (or dispatch is suspended).
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// The deck's key bindings. Returns `None` for unbound keys.
pub fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::ArrowRight | Key::Space | Key::Enter => Some(Action::Advance),
        Key::ArrowLeft | Key::Backspace => Some(Action::Retreat),
        Key::Home => Some(Action::GoToFirst),
        Key::End => Some(Action::GoToLast),
        Key::Escape => Some(Action::EscapeFullscreen),
        Key::Char('f') | Key::Char('F') => Some(Action::ToggleFullscreen),
        Key::Char('n') | Key::Char('N') => Some(Action::ToggleNotes),
        Key::Char(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_bindings() {
        assert_eq!(action_for(Key::ArrowRight), Some(Action::Advance));
        assert_eq!(action_for(Key::Space), Some(Action::Advance));
        assert_eq!(action_for(Key::Enter), Some(Action::Advance));
        assert_eq!(action_for(Key::ArrowLeft), Some(Action::Retreat));
        assert_eq!(action_for(Key::Backspace), Some(Action::Retreat));
        assert_eq!(action_for(Key::Home), Some(Action::GoToFirst));
        assert_eq!(action_for(Key::End), Some(Action::GoToLast));
    }

    #[test]
    fn test_letter_bindings_are_case_insensitive() {
        assert_eq!(action_for(Key::Char('f')), Some(Action::ToggleFullscreen));
        assert_eq!(action_for(Key::Char('F')), Some(Action::ToggleFullscreen));
        assert_eq!(action_for(Key::Char('n')), Some(Action::ToggleNotes));
        assert_eq!(action_for(Key::Char('N')), Some(Action::ToggleNotes));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for(Key::Char('x')), None);
        assert_eq!(action_for(Key::Char('1')), None);
    }
}
