//! Focus Management
//!
//! Focusable-element checks, guarded focus moves and tab order.

use fos_dom::{Document, NodeId};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Negative `tabindex`: focusable by script only
    NotFocusable,
    /// `tabindex="0"`, a positive value, or an interactive default
    Sequential(i32),
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    /// Effective tab index of an element (`element.tabIndex`)
    pub fn of(doc: &Document, node: NodeId) -> Self {
        let Some(elem) = doc.tree().element(node) else {
            return Self::NotFocusable;
        };
        if let Some(n) = elem.tab_index() {
            return if n < 0 { Self::NotFocusable } else { Self::Sequential(n) };
        }
        match elem.tag() {
            "a" if elem.has_attr("href") => Self::Sequential(0),
            "input" | "button" | "select" | "textarea" => Self::Sequential(0),
            _ => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// Whether `node` is an interactive element the focus helpers may target.
///
/// Stricter than `Document::can_receive_focus`: elements made focusable
/// only through `tabindex` (sentinels, custom widgets) are skipped.
pub fn is_focusable(doc: &Document, node: NodeId) -> bool {
    let Some(elem) = doc.tree().element(node) else {
        return false;
    };
    if elem.tab_index().is_some_and(|n| n < 0) {
        return false;
    }
    match elem.tag() {
        "a" => elem.has_attr("href") && elem.get_attr("rel") != Some("ignore"),
        "input" => !elem.has_attr("disabled") && elem.get_attr("type") != Some("hidden"),
        "button" | "select" | "textarea" => !elem.has_attr("disabled"),
        _ => false,
    }
}

/// Try to focus `node` with the document's utility guard set.
///
/// Returns true if `node` is the active element afterwards.
pub fn attempt_focus(doc: &mut Document, node: NodeId) -> bool {
    if !is_focusable(doc, node) {
        return false;
    }
    doc.set_ignore_util_focus_changes(true);
    doc.focus(node);
    doc.set_ignore_util_focus_changes(false);
    let focused = doc.active_element() == Some(node);
    tracing::trace!(?node, focused, "utility focus attempt");
    focused
}

/// Focus the first focusable descendant of `node` (pre-order)
pub fn focus_first_descendant(doc: &mut Document, node: NodeId) -> bool {
    for child in doc.tree().child_ids(node) {
        if attempt_focus(doc, child) || focus_first_descendant(doc, child) {
            return true;
        }
    }
    false
}

/// Focus the last focusable descendant of `node` (reverse pre-order)
pub fn focus_last_descendant(doc: &mut Document, node: NodeId) -> bool {
    for child in doc.tree().child_ids(node).into_iter().rev() {
        if attempt_focus(doc, child) || focus_last_descendant(doc, child) {
            return true;
        }
    }
    false
}

/// Elements reachable with the Tab key, in navigation order:
/// positive tab indices ascending, then zero in tree order
pub fn sequential_focus_order(doc: &Document) -> Vec<NodeId> {
    let tree = doc.tree();
    let mut order: Vec<(i32, NodeId)> = tree
        .element_descendants(tree.root())
        .into_iter()
        .filter(|&n| doc.can_receive_focus(n))
        .filter_map(|n| match TabIndex::of(doc, n) {
            TabIndex::Sequential(i) => Some((i, n)),
            TabIndex::NotFocusable => None,
        })
        .collect();
    // Stable sort keeps tree order within equal indices; zero sorts last.
    order.sort_by_key(|&(i, _)| if i == 0 { i32::MAX } else { i });
    order.into_iter().map(|(_, n)| n).collect()
}
