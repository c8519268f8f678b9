//! Edge case tests for fos-widgets
//!
//! Boundary conditions of the combobox helpers and timer queue.

use fos_widgets::{
    ComboOption, Key, KeyModifiers, KeyboardEvent, PAGE_SIZE, SelectAction, TimerQueue,
    classify_key, compute_next_index, filter_options, resolve_typeahead_index, sort_options,
};

fn titles(names: &[&str]) -> Vec<ComboOption<usize>> {
    names.iter().enumerate().map(|(i, t)| ComboOption::new(*t, i)).collect()
}

// ============================================================================
// KEY CLASSIFICATION
// ============================================================================

#[test]
fn test_open_keys_with_any_modifiers_open_when_closed() {
    let mods = [
        KeyModifiers::default(),
        KeyModifiers::from_flags(true, false, false, false),
        KeyModifiers::from_flags(false, true, true, true),
    ];
    for key in ["ArrowDown", "ArrowUp", "Enter", " ", "Down", "Up"] {
        for m in mods {
            let event = KeyboardEvent::key_down(key).with_modifiers(m);
            assert_eq!(classify_key(&event, false), Some(SelectAction::Open), "{key}");
        }
    }
}

#[test]
fn test_home_end_with_every_modifier() {
    for bits in 0..16u8 {
        let m = KeyModifiers::from_flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        let home = KeyboardEvent::key_down("Home").with_modifiers(m);
        let end = KeyboardEvent::key_down("End").with_modifiers(m);
        assert_eq!(classify_key(&home, true), Some(SelectAction::First));
        assert_eq!(classify_key(&end, true), Some(SelectAction::Last));
    }
}

#[test]
fn test_command_characters_are_not_typeahead() {
    for m in [
        KeyModifiers::from_flags(false, true, false, false),
        KeyModifiers::from_flags(false, false, true, false),
        KeyModifiers::from_flags(false, false, false, true),
    ] {
        let event = KeyboardEvent::key_down("a").with_modifiers(m);
        assert_eq!(classify_key(&event, true), None);
        assert_eq!(classify_key(&event, false), None);
    }
    let shifted = KeyboardEvent::key_down("A").with_shift();
    assert_eq!(classify_key(&shifted, false), Some(SelectAction::Typeahead));
}

#[test]
fn test_unidentified_keys_are_ignored() {
    for key in ["F5", "Shift", "Delete", "Tab", "ArrowLeft"] {
        let event = KeyboardEvent::key_down(key);
        assert_eq!(classify_key(&event, true), None, "{key}");
        assert_eq!(classify_key(&event, false), None, "{key}");
    }
    assert_eq!(KeyboardEvent::key_down("F5").key, Key::Unidentified("F5".into()));
}

// ============================================================================
// INDEX MOVEMENT
// ============================================================================

#[test]
fn test_paging_saturates() {
    assert_eq!(compute_next_index(PAGE_SIZE - 1, 100, SelectAction::PageUp), 0);
    assert_eq!(compute_next_index(PAGE_SIZE, 100, SelectAction::PageUp), 0);
    assert_eq!(compute_next_index(95, 100, SelectAction::PageDown), 100);
    assert_eq!(compute_next_index(0, 0, SelectAction::PageDown), 0);
    assert_eq!(compute_next_index(0, 0, SelectAction::Last), 0);
}

#[test]
fn test_non_movement_actions_keep_index() {
    for action in [SelectAction::Open, SelectAction::Close, SelectAction::CommitAndClose, SelectAction::Typeahead] {
        assert_eq!(compute_next_index(4, 9, action), 4);
    }
}

// ============================================================================
// TYPEAHEAD
// ============================================================================

#[test]
fn test_typeahead_start_past_end_wraps() {
    let options = titles(&["Apple", "Apricot", "Banana"]);
    assert_eq!(resolve_typeahead_index(&options, "a", 3), Some(0));
    assert_eq!(resolve_typeahead_index(&options, "a", 7), Some(1));
}

#[test]
fn test_typeahead_cycles_through_three_same_initials() {
    let options = titles(&["Bat", "Apple", "Bee", "Cat", "Bird"]);
    let mut active = 0;
    let mut seen = Vec::new();
    for n in 1..=4 {
        let buffer = "b".repeat(n);
        active = resolve_typeahead_index(&options, &buffer, active + 1).unwrap();
        seen.push(active);
    }
    assert_eq!(seen, [2, 4, 0, 2]);
}

#[test]
fn test_typeahead_empty_inputs() {
    let empty: Vec<ComboOption<usize>> = Vec::new();
    assert_eq!(resolve_typeahead_index(&empty, "a", 0), None);
    assert!(filter_options(&empty, "a", &[]).is_empty());
}

#[test]
fn test_filter_empty_string_matches_all() {
    let options = titles(&["Apple", "Banana"]);
    assert_eq!(filter_options(&options, "", &[]), vec![0, 1]);
}

#[test]
fn test_sort_options_titles() {
    let options = sort_options();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].value, None);
    assert_eq!(resolve_typeahead_index(&options, "по у", 0), Some(2));
    assert_eq!(filter_options(&options, "ПО", &[]), vec![1, 2]);
}

// ============================================================================
// TIMERS
// ============================================================================

#[test]
fn test_timers_with_equal_deadlines_fire_in_schedule_order() {
    let mut queue = TimerQueue::new();
    let a = queue.schedule(0, 100, 'a');
    let b = queue.schedule(50, 50, 'b');
    assert_eq!(queue.advance(100), vec![(a, 'a'), (b, 'b')]);
}

#[test]
fn test_timer_deadline_saturates() {
    let mut queue = TimerQueue::new();
    queue.schedule(u64::MAX - 1, 10, ());
    assert!(queue.advance(u64::MAX - 1).is_empty());
    assert_eq!(queue.advance(u64::MAX).len(), 1);
}
