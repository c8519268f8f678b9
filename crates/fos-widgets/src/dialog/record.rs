//! Open dialog bookkeeping

use fos_dom::{Document, NodeId};

/// Element reference given by id or by node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Id(String),
    Node(NodeId),
}

impl FocusTarget {
    /// Connected element this target points at
    pub fn resolve(&self, doc: &Document) -> Option<NodeId> {
        let node = match self {
            Self::Id(id) => doc.get_element_by_id(id)?,
            Self::Node(node) => *node,
        };
        let tree = doc.tree();
        (tree.element(node).is_some() && tree.is_connected(node)).then_some(node)
    }
}

impl From<&str> for FocusTarget {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for FocusTarget {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<NodeId> for FocusTarget {
    fn from(node: NodeId) -> Self {
        Self::Node(node)
    }
}

/// One open modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRecord {
    pub dialog: NodeId,
    pub backdrop: NodeId,
    /// Receives focus when the dialog closes
    pub focus_after_close: NodeId,
    pub focus_first: Option<NodeId>,
    /// Last element known to hold focus inside the dialog
    pub last_focus: Option<NodeId>,
    pub(super) pre_sentinel: NodeId,
    pub(super) post_sentinel: NodeId,
    /// Focus trap listener attached
    pub(super) listening: bool,
}

impl DialogRecord {
    pub fn sentinels(&self) -> (NodeId, NodeId) {
        (self.pre_sentinel, self.post_sentinel)
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}
