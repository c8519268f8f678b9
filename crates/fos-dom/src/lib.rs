//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree used by the fOS widget layer.
//!
//! The document owns the tree, the focus state (active element plus a
//! queue of pending focus events), the viewport and the per-element layout
//! boxes supplied by the embedder.

mod node;
mod tree;
mod document;
mod classlist;
mod selector;
mod geometry;
mod dom_events;

pub use node::{Node, NodeData, ElementData, Attribute};
pub use tree::{DomTree, Children};
pub use document::Document;
pub use classlist::DOMTokenList;
pub use selector::{SimpleSelector, CompoundSelector, ElementQuery};
pub use geometry::{
    Rect, ScrollMetrics, Viewport, ScrollBehavior, ScrollLogicalPosition,
    ScrollIntoViewOptions, ScrollRequest,
};
pub use dom_events::{FocusEvent, FocusEventType};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Invalid / absent node
    pub const NONE: NodeId = NodeId(u32::MAX);
    
    /// Check whether this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
    
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0:?} does not exist")]
    NodeNotFound(NodeId),
    
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    
    #[error("hierarchy request error: {0}")]
    HierarchyRequest(String),
    
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),
}

/// Result alias for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;
