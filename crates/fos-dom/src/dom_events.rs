//! DOM Focus Events
//!
//! Focus changes are queued on the document and drained by the embedder,
//! which dispatches them to listeners in order.

use crate::NodeId;

/// Focus event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEventType {
    Focus,
    Blur,
}

/// Focus event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub event_type: FocusEventType,
    pub target: NodeId,
    /// Element losing focus (for `Focus`) or gaining it (for `Blur`)
    pub related_target: Option<NodeId>,
    /// Emitted while the document's utility-focus guard was set
    pub utility: bool,
}

impl FocusEvent {
    /// Create focus event
    pub fn focus(target: NodeId, related_target: Option<NodeId>, utility: bool) -> Self {
        Self { event_type: FocusEventType::Focus, target, related_target, utility }
    }

    /// Create blur event
    pub fn blur(target: NodeId, related_target: Option<NodeId>, utility: bool) -> Self {
        Self { event_type: FocusEventType::Blur, target, related_target, utility }
    }

    #[inline]
    pub fn is_focus(&self) -> bool {
        self.event_type == FocusEventType::Focus
    }

    #[inline]
    pub fn is_blur(&self) -> bool {
        self.event_type == FocusEventType::Blur
    }
}
