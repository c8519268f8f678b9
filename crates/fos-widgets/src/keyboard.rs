//! Keyboard Events
//!
//! KeyboardEvent with DOM key values and modifiers.

/// Keyboard event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEventType {
    KeyDown,
    KeyUp,
}

/// Key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A single printable character
    Character(char),

    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Clear,
    Delete,
    Enter,
    Tab,
    Escape,

    // Whitespace
    Space,

    // Other
    Unidentified(String),
}

impl Key {
    /// Parse from a DOM `KeyboardEvent.key` string
    pub fn parse(s: &str) -> Self {
        match s {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Backspace" => Self::Backspace,
            "Clear" => Self::Clear,
            "Delete" => Self::Delete,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            " " | "Spacebar" => Self::Space,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified(s.to_string()),
                }
            }
        }
    }

    /// Printable character carried by this key, if any
    pub fn printable(&self) -> Option<char> {
        match self {
            Self::Character(c) if *c != ' ' => Some(*c),
            _ => None,
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win on Windows
}

impl KeyModifiers {
    /// Alt, Ctrl or Meta: modifiers that turn a character into a shortcut
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    pub fn from_flags(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        Self { shift, ctrl, alt, meta }
    }
}

/// Keyboard event
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    pub event_type: KeyboardEventType,
    pub key: Key,
    pub modifiers: KeyModifiers,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyboardEvent {
    /// Create a new keyboard event
    pub fn new(event_type: KeyboardEventType, key: Key) -> Self {
        Self {
            event_type,
            key,
            modifiers: KeyModifiers::default(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// `keydown` for a DOM key string
    pub fn key_down(key: &str) -> Self {
        Self::new(KeyboardEventType::KeyDown, Key::parse(key))
    }

    /// `keyup` for a DOM key string
    pub fn key_up(key: &str) -> Self {
        Self::new(KeyboardEventType::KeyUp, Key::parse(key))
    }

    /// Set modifiers
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_legacy() {
        assert_eq!(Key::parse("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::parse("Left"), Key::ArrowLeft);
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("Clear"), Key::Clear);
        assert_eq!(Key::parse("F5"), Key::Unidentified("F5".into()));
    }

    #[test]
    fn test_parse_unicode_character() {
        assert_eq!(Key::parse("п"), Key::Character('п'));
        assert_eq!(Key::parse("п").printable(), Some('п'));
        assert_eq!(Key::Space.printable(), None);
    }

    #[test]
    fn test_event_flags() {
        let mut event = KeyboardEvent::key_down("Escape").with_alt();
        assert!(event.modifiers.has_command());
        assert!(!event.is_default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.is_default_prevented());
        assert!(event.is_propagation_stopped());
    }
}
