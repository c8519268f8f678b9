//! Document - High-level document API
//!
//! Wraps the tree with the state a page keeps outside of it: the focused
//! element, pending focus events, the viewport and script-driven scrolls.

use std::collections::VecDeque;

use crate::{
    DomTree, FocusEvent, NodeId, Rect, Result, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollMetrics, ScrollRequest, Viewport,
};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    viewport: Viewport,
    /// `None` means the body is active
    active_element: Option<NodeId>,
    focus_events: VecDeque<FocusEvent>,
    /// Set while utility code moves focus so listeners can tell its
    /// corrective focus calls apart from user-driven ones
    ignore_util_focus_changes: bool,
    scroll_requests: Vec<ScrollRequest>,
}

impl Document {
    /// Create a document with the html/head/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes can always be linked.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
            viewport: Viewport::default(),
            active_element: None,
            focus_events: VecDeque::new(),
            ignore_util_focus_changes: false,
            scroll_requests: Vec::new(),
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    // === Construction helpers ===

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.tree.append_child(parent, child)
    }

    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.tree.insert_before(parent, child, reference)
    }

    /// Remove `node` from the document. If it contained the focused
    /// element, focus falls back to the body without events.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(active) = self.active_element {
            if self.tree.contains(node, active) {
                self.active_element = None;
            }
        }
        self.tree.detach(node);
    }

    // === Attributes ===

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.element(node)?.get_attr(name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.tree.element(node).is_some_and(|e| e.has_attr(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.tree.element_mut(node)?.set_attr(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<Option<String>> {
        Ok(self.tree.element_mut(node)?.remove_attr(name))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.element(node).is_some_and(|e| e.classes().contains(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        self.tree.element_mut(node)?.update_classes(|c| c.add(class));
        Ok(())
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        self.tree.element_mut(node)?.update_classes(|c| c.remove(class));
        Ok(())
    }

    /// `classList.toggle(class, force)`. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> Result<bool> {
        Ok(self.tree.element_mut(node)?.update_classes(|c| c.toggle(class, force)))
    }

    /// `element.className = value`
    pub fn set_class_name(&mut self, node: NodeId, value: &str) -> Result<()> {
        self.set_attribute(node, "class", value)
    }

    /// Get element by ID (first match in tree order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .element_descendants(self.tree.root())
            .into_iter()
            .find(|&n| self.tree.element(n).and_then(|e| e.id()) == Some(id))
    }

    // === Content ===

    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    pub fn set_text_content(&mut self, node: NodeId, content: &str) -> Result<()> {
        self.tree.set_text_content(node, content)
    }

    /// Form field value
    pub fn value(&self, node: NodeId) -> &str {
        self.tree.element(node).map(|e| e.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) -> Result<()> {
        self.tree.element_mut(node)?.value = value.to_string();
        Ok(())
    }

    // === Geometry ===

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Layout box in page coordinates
    pub fn layout(&self, node: NodeId) -> Rect {
        self.tree.element(node).map(|e| e.layout).unwrap_or_default()
    }

    pub fn set_layout(&mut self, node: NodeId, rect: Rect) -> Result<()> {
        self.tree.element_mut(node)?.layout = rect;
        Ok(())
    }

    pub fn scroll_metrics(&self, node: NodeId) -> ScrollMetrics {
        self.tree.element(node).map(|e| e.scroll).unwrap_or_default()
    }

    pub fn set_scroll_metrics(&mut self, node: NodeId, metrics: ScrollMetrics) -> Result<()> {
        self.tree.element_mut(node)?.scroll = metrics;
        Ok(())
    }

    /// Rectangle relative to the viewport, accounting for the scroll
    /// offsets of the viewport and every scrolled ancestor
    pub fn bounding_client_rect(&self, node: NodeId) -> Rect {
        let ancestor_scroll: f32 = self
            .tree
            .ancestors(node)
            .filter_map(|a| self.tree.element(a))
            .map(|e| e.scroll.scroll_top)
            .sum();
        self.layout(node)
            .offset(-self.viewport.scroll_x, -self.viewport.scroll_y - ancestor_scroll)
    }

    /// `element.scrollIntoView(options)` against the viewport
    pub fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) {
        let rect = self.bounding_client_rect(node);
        let height = self.viewport.height;
        let delta = match options.block {
            ScrollLogicalPosition::Start => rect.top(),
            ScrollLogicalPosition::End => rect.bottom() - height,
            ScrollLogicalPosition::Center => (rect.top() + rect.bottom() - height) / 2.0,
            ScrollLogicalPosition::Nearest => {
                if rect.top() < 0.0 {
                    rect.top()
                } else if rect.bottom() > height {
                    (rect.bottom() - height).min(rect.top())
                } else {
                    0.0
                }
            }
        };
        self.viewport.scroll_y = (self.viewport.scroll_y + delta).max(0.0);
        tracing::trace!(?node, delta, "scroll into view");
        self.scroll_requests.push(ScrollRequest::IntoView { target: node, options });
    }

    /// `container.scrollTo(0, top)`, clamped to the scrollable range
    pub fn scroll_container_to(&mut self, container: NodeId, top: f32) -> Result<()> {
        let elem = self.tree.element_mut(container)?;
        let top = top.clamp(0.0, elem.scroll.max_scroll_top());
        elem.scroll.scroll_top = top;
        self.scroll_requests.push(ScrollRequest::Container { container, top });
        Ok(())
    }

    /// Scrolls performed so far
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    // === Focus ===

    /// Focused element (`None` when the body is active)
    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element
    }

    /// Whether `element.focus()` would succeed
    pub fn can_receive_focus(&self, node: NodeId) -> bool {
        let Some(elem) = self.tree.element(node) else {
            return false;
        };
        if !self.tree.is_connected(node) {
            return false;
        }
        let form_control = matches!(elem.tag(), "input" | "button" | "select" | "textarea");
        if form_control && elem.has_attr("disabled") {
            return false;
        }
        if elem.tab_index().is_some() {
            return true;
        }
        match elem.tag() {
            "a" => elem.has_attr("href"),
            "input" => elem.get_attr("type") != Some("hidden"),
            "button" | "select" | "textarea" => true,
            _ => false,
        }
    }

    /// `element.focus()`. Queues blur/focus events and returns whether
    /// `node` is now the active element.
    pub fn focus(&mut self, node: NodeId) -> bool {
        if !self.can_receive_focus(node) {
            return false;
        }
        if self.active_element == Some(node) {
            return true;
        }
        let previous = self.active_element.replace(node);
        let utility = self.ignore_util_focus_changes;
        if let Some(prev) = previous {
            self.focus_events.push_back(FocusEvent::blur(prev, Some(node), utility));
        }
        self.focus_events.push_back(FocusEvent::focus(node, previous, utility));
        tracing::trace!(?node, ?previous, utility, "focus moved");
        true
    }

    /// Blur the active element, returning focus to the body
    pub fn blur(&mut self) {
        if let Some(prev) = self.active_element.take() {
            let utility = self.ignore_util_focus_changes;
            self.focus_events.push_back(FocusEvent::blur(prev, None, utility));
        }
    }

    pub fn ignores_util_focus_changes(&self) -> bool {
        self.ignore_util_focus_changes
    }

    pub fn set_ignore_util_focus_changes(&mut self, ignore: bool) {
        self.ignore_util_focus_changes = ignore;
    }

    /// Next pending focus event
    pub fn take_focus_event(&mut self) -> Option<FocusEvent> {
        self.focus_events.pop_front()
    }

    pub fn pending_focus_events(&self) -> usize {
        self.focus_events.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
