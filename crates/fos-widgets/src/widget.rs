//! Widget capability trait and shared handler context

use fos_dom::{Document, NodeId};

use crate::{KeyboardEvent, Result, TimerQueue, WidgetConfig};

/// Index of a widget within its page collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub usize);

/// Deferred work scheduled by widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTask {
    /// Typeahead idle timeout for a combobox
    ClearSearch(WidgetId),
}

/// Everything an event handler may touch besides its own state
pub struct WidgetContext<'a> {
    pub doc: &'a mut Document,
    pub timers: &'a mut TimerQueue<WidgetTask>,
    pub config: &'a WidgetConfig,
    pub now_ms: u64,
}

/// Keyboard-driven widget
pub trait Widget {
    /// Snapshot of the widget's observable state
    type State;

    /// Whether key events targeted at `target` belong to this widget
    fn handles_key(&self, target: NodeId) -> bool;

    /// Handle a `keydown` on one of the widget's elements
    fn key_down(
        &mut self,
        cx: &mut WidgetContext<'_>,
        target: NodeId,
        event: &mut KeyboardEvent,
    ) -> Result<()>;

    fn current_state(&self) -> Self::State;
}
