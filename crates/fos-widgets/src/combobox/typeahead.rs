//! Typeahead matching

use super::ComboOption;

fn has_prefix(title: &str, filter: &str) -> bool {
    title.to_lowercase().starts_with(&filter.to_lowercase())
}

/// Indices of options whose title starts with `filter` (case-insensitive),
/// skipping any index listed in `exclude`
pub fn filter_options<T>(options: &[ComboOption<T>], filter: &str, exclude: &[usize]) -> Vec<usize> {
    options
        .iter()
        .enumerate()
        .filter(|(i, option)| has_prefix(&option.title, filter) && !exclude.contains(i))
        .map(|(i, _)| i)
        .collect()
}

/// Find the option `buffer` points at, searching circularly from `start`.
///
/// A full-prefix match wins. Otherwise a buffer of one repeated character
/// ("aaa") matches the next option starting with that character, so repeated
/// presses cycle through same-initial options.
pub fn resolve_typeahead_index<T>(
    options: &[ComboOption<T>],
    buffer: &str,
    start: usize,
) -> Option<usize> {
    let mut chars = buffer.chars();
    let first = chars.next()?;
    if options.is_empty() {
        return None;
    }

    let len = options.len();
    let start = start % len;
    let circular = || (0..len).map(move |offset| (start + offset) % len);

    if let Some(index) = circular().find(|&i| has_prefix(&options[i].title, buffer)) {
        return Some(index);
    }

    if chars.all(|c| c == first) {
        let initial = first.to_string();
        return circular().find(|&i| has_prefix(&options[i].title, &initial));
    }
    None
}
