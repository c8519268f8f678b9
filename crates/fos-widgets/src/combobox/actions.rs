//! Key to action mapping and index movement

use crate::{Key, KeyboardEvent};

/// Options skipped by PageUp / PageDown
pub const PAGE_SIZE: usize = 10;

/// What a key press asks the combobox to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    Open,
    Close,
    /// Commit the active option, then close
    CommitAndClose,
    First,
    Last,
    Next,
    Previous,
    PageUp,
    PageDown,
    Typeahead,
}

/// Map a keydown to an action. `None` leaves the event unconsumed.
pub fn classify_key(event: &KeyboardEvent, open: bool) -> Option<SelectAction> {
    let key = &event.key;
    let mods = event.modifiers;

    if !open && matches!(key, Key::ArrowDown | Key::ArrowUp | Key::Enter | Key::Space) {
        return Some(SelectAction::Open);
    }

    match key {
        Key::Home => return Some(SelectAction::First),
        Key::End => return Some(SelectAction::Last),
        Key::Backspace | Key::Clear => return Some(SelectAction::Typeahead),
        _ => {}
    }
    if key.printable().is_some() && !mods.has_command() {
        return Some(SelectAction::Typeahead);
    }

    if !open {
        return None;
    }
    match key {
        Key::ArrowUp if mods.alt => Some(SelectAction::CommitAndClose),
        Key::ArrowDown if !mods.alt => Some(SelectAction::Next),
        Key::ArrowUp => Some(SelectAction::Previous),
        Key::PageUp => Some(SelectAction::PageUp),
        Key::PageDown => Some(SelectAction::PageDown),
        Key::Escape => Some(SelectAction::Close),
        Key::Enter | Key::Space => Some(SelectAction::CommitAndClose),
        _ => None,
    }
}

/// Index after applying a movement action, clamped to `0..=max`
pub fn compute_next_index(current: usize, max: usize, action: SelectAction) -> usize {
    match action {
        SelectAction::First => 0,
        SelectAction::Last => max,
        SelectAction::Previous => current.saturating_sub(1),
        SelectAction::Next => current.saturating_add(1).min(max),
        SelectAction::PageUp => current.saturating_sub(PAGE_SIZE),
        SelectAction::PageDown => current.saturating_add(PAGE_SIZE).min(max),
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> KeyboardEvent {
        KeyboardEvent::key_down(k)
    }

    #[test]
    fn test_closed_open_keys() {
        for k in ["ArrowDown", "ArrowUp", "Enter", " "] {
            assert_eq!(classify_key(&key(k), false), Some(SelectAction::Open), "{k}");
        }
        assert_eq!(classify_key(&key("Escape"), false), None);
        assert_eq!(classify_key(&key("PageDown"), false), None);
    }

    #[test]
    fn test_home_end_ignore_state_and_modifiers() {
        for open in [false, true] {
            assert_eq!(classify_key(&key("Home"), open), Some(SelectAction::First));
            assert_eq!(classify_key(&key("End").with_alt(), open), Some(SelectAction::Last));
            assert_eq!(classify_key(&key("Home").with_shift(), open), Some(SelectAction::First));
        }
    }

    #[test]
    fn test_typeahead_keys() {
        assert_eq!(classify_key(&key("a"), false), Some(SelectAction::Typeahead));
        assert_eq!(classify_key(&key("П"), true), Some(SelectAction::Typeahead));
        assert_eq!(classify_key(&key("Backspace"), true), Some(SelectAction::Typeahead));
        assert_eq!(classify_key(&key("Clear"), false), Some(SelectAction::Typeahead));
        assert_eq!(classify_key(&key("a").with_alt(), true), None);
        assert_eq!(classify_key(&key(" "), true), Some(SelectAction::CommitAndClose));
    }

    #[test]
    fn test_open_navigation() {
        assert_eq!(classify_key(&key("ArrowDown"), true), Some(SelectAction::Next));
        assert_eq!(classify_key(&key("ArrowUp"), true), Some(SelectAction::Previous));
        assert_eq!(classify_key(&key("ArrowUp").with_alt(), true), Some(SelectAction::CommitAndClose));
        assert_eq!(classify_key(&key("ArrowDown").with_alt(), true), None);
        assert_eq!(classify_key(&key("PageUp"), true), Some(SelectAction::PageUp));
        assert_eq!(classify_key(&key("Escape"), true), Some(SelectAction::Close));
        assert_eq!(classify_key(&key("Enter"), true), Some(SelectAction::CommitAndClose));
        assert_eq!(classify_key(&key("Tab"), true), None);
    }

    #[test]
    fn test_next_index_bounded() {
        let actions = [
            SelectAction::First,
            SelectAction::Last,
            SelectAction::Next,
            SelectAction::Previous,
            SelectAction::PageUp,
            SelectAction::PageDown,
            SelectAction::Open,
        ];
        for max in [0, 2, 15] {
            for current in 0..=max {
                for action in actions {
                    assert!(compute_next_index(current, max, action) <= max);
                }
            }
        }
        assert_eq!(compute_next_index(3, 15, SelectAction::PageDown), 13);
        assert_eq!(compute_next_index(13, 15, SelectAction::PageDown), 15);
        assert_eq!(compute_next_index(13, 15, SelectAction::PageUp), 3);
        assert_eq!(compute_next_index(0, 2, SelectAction::Previous), 0);
        assert_eq!(compute_next_index(1, 2, SelectAction::Close), 1);
    }
}
