//! DOM Tree (arena-based allocation)
//!
//! Detached nodes stay in the arena; ids are never reused.

use crate::{DomError, ElementData, Node, NodeId, Result};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data of `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    /// Mutable element data of `id`
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        let node = self.nodes.get_mut(id.index()).ok_or(DomError::NodeNotFound(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    /// Parent of `id`
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.first_child).filter(|c| c.is_valid())
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.last_child).filter(|c| c.is_valid())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.next_sibling).filter(|s| s.is_valid())
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.prev_sibling).filter(|s| s.is_valid())
    }

    /// Iterate children of `id`
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children { tree: self, next: self.first_child(id) }
    }

    /// Child ids collected (safe to hold across mutation)
    pub fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).map(|(child, _)| child).collect()
    }

    /// Ancestors of `id`, nearest first (excluding `id`)
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Inclusive containment, like `Node.contains`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Whether `id` is attached to the document
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.contains(self.root(), id)
    }

    /// Descendants of `id` in pre-order (tree order), excluding `id`
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_ids(id);
        stack.reverse();
        while let Some(current) = stack.pop() {
            out.push(current);
            let mut kids = self.child_ids(current);
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Element descendants of `id` in tree order
    pub fn element_descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&d| self.element(d).is_some())
            .collect()
    }

    /// Remove `id` from its parent. No-op when already detached.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;
        if parent_node.is_text() || matches!(parent_node.data, crate::NodeData::Comment(_)) {
            return Err(DomError::HierarchyRequest(format!("{parent:?} cannot have children")));
        }
        if matches!(child_node.data, crate::NodeData::Document) {
            return Err(DomError::HierarchyRequest("document cannot be inserted".into()));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest(format!(
                "{child:?} is an inclusive ancestor of {parent:?}"
            )));
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or append when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.check_insert(parent, child)?;
        if let Some(r) = reference {
            if self.parent(r) != Some(parent) {
                return Err(DomError::HierarchyRequest(format!(
                    "{r:?} is not a child of {parent:?}"
                )));
            }
            if r == child {
                return Ok(());
            }
        }
        self.detach(child);

        match reference {
            Some(r) => {
                let prev = self.nodes[r.index()].prev_sibling;
                if prev.is_valid() {
                    self.nodes[prev.index()].next_sibling = child;
                } else {
                    self.nodes[parent.index()].first_child = child;
                }
                self.nodes[r.index()].prev_sibling = child;
                let node = &mut self.nodes[child.index()];
                node.prev_sibling = prev;
                node.next_sibling = r;
            }
            None => {
                let last = self.nodes[parent.index()].last_child;
                if last.is_valid() {
                    self.nodes[last.index()].next_sibling = child;
                } else {
                    self.nodes[parent.index()].first_child = child;
                }
                self.nodes[parent.index()].last_child = child;
                let node = &mut self.nodes[child.index()];
                node.prev_sibling = last;
                node.next_sibling = NodeId::NONE;
            }
        }
        self.nodes[child.index()].parent = parent;
        Ok(())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(|n| n.as_text()) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.get(d).and_then(|n| n.as_text()))
            .collect()
    }

    /// Replace all children of `id` with a single text node
    pub fn set_text_content(&mut self, id: NodeId, content: &str) -> Result<()> {
        for child in self.child_ids(id) {
            self.detach(child);
        }
        if content.is_empty() {
            return Ok(());
        }
        let text = self.create_text(content);
        self.append_child(id, text)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.get(id)?;
        self.next = Some(node.next_sibling).filter(|s| s.is_valid());
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("span");
        let b = tree.create_element("span");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, a).unwrap();
        tree.append_child(div, b).unwrap();
        (tree, div, a, b)
    }

    #[test]
    fn test_append_and_children() {
        let (tree, div, a, b) = sample();
        assert_eq!(tree.child_ids(div), vec![a, b]);
        assert_eq!(tree.parent(a), Some(div));
        assert!(tree.contains(div, b));
        assert!(tree.contains(div, div));
        assert!(!tree.contains(a, b));
    }

    #[test]
    fn test_insert_before_first() {
        let (mut tree, div, a, b) = sample();
        let c = tree.create_element("i");
        tree.insert_before(div, c, Some(a)).unwrap();
        assert_eq!(tree.child_ids(div), vec![c, a, b]);
        assert_eq!(tree.first_child(div), Some(c));
    }

    #[test]
    fn test_detach_middle() {
        let (mut tree, div, a, b) = sample();
        let c = tree.create_element("i");
        tree.append_child(div, c).unwrap();
        tree.detach(b);
        assert_eq!(tree.child_ids(div), vec![a, c]);
        assert!(!tree.is_connected(b));
        assert_eq!(tree.next_sibling(a), Some(c));
    }

    #[test]
    fn test_reappend_moves_node() {
        let (mut tree, div, a, b) = sample();
        tree.append_child(div, a).unwrap();
        assert_eq!(tree.child_ids(div), vec![b, a]);
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut tree, div, a, _) = sample();
        assert!(matches!(tree.append_child(a, div), Err(DomError::HierarchyRequest(_))));
    }

    #[test]
    fn test_descendants_preorder() {
        let (mut tree, div, a, b) = sample();
        let inner = tree.create_element("em");
        tree.append_child(a, inner).unwrap();
        assert_eq!(tree.descendants(div), vec![a, inner, b]);
    }

    #[test]
    fn test_text_content_roundtrip() {
        let (mut tree, div, a, _) = sample();
        tree.set_text_content(a, "120$").unwrap();
        assert_eq!(tree.text_content(div), "120$");
        tree.set_text_content(a, "").unwrap();
        assert_eq!(tree.text_content(a), "");
    }
}
