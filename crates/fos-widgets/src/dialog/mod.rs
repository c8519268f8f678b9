//! Modal dialog stack
//!
//! Dialogs can open dialogs. The manager keeps the open ones on a stack;
//! only the topmost traps focus. Each open dialog sits inside an active
//! backdrop and is bracketed by two focusable sentinel nodes so focus
//! never leaves the document, even when the dialog is the first or last
//! node of the page.

mod record;

pub use record::{DialogRecord, FocusTarget};

use fos_a11y::{AriaRole, focus_first_descendant, focus_last_descendant, has_role};
use fos_dom::{Document, ElementQuery, FocusEvent, NodeId};

use crate::{ClassNames, Key, KeyboardEvent, Result, WidgetError};

const DIALOG_ROLES: [AriaRole; 2] = [AriaRole::Dialog, AriaRole::AlertDialog];

/// Validated arguments of an open request
struct OpenRequest {
    dialog: NodeId,
    focus_after_close: NodeId,
    focus_first: Option<NodeId>,
}

/// Stack of open modal dialogs
#[derive(Debug, Clone)]
pub struct DialogManager {
    stack: Vec<DialogRecord>,
    classes: ClassNames,
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new(ClassNames::default())
    }
}

impl DialogManager {
    pub fn new(classes: ClassNames) -> Self {
        Self { stack: Vec::new(), classes }
    }

    /// Topmost dialog
    pub fn current(&self) -> Option<&DialogRecord> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn records(&self) -> &[DialogRecord] {
        &self.stack
    }

    /// Number of attached focus trap listeners (0 or 1)
    pub fn trap_listener_count(&self) -> usize {
        self.stack.iter().filter(|r| r.listening).count()
    }

    /// Whether `node` is inside the topmost dialog
    pub fn top_contains(&self, doc: &Document, node: NodeId) -> bool {
        self.current().is_some_and(|top| doc.tree().contains(top.dialog, node))
    }

    /// Open the dialog with element id `dialog_id` on top of the stack.
    ///
    /// `focus_after_close` is required. Without `focus_first` the first
    /// focusable descendant receives focus. Nothing is mutated when the
    /// request is invalid.
    pub fn open(
        &mut self,
        doc: &mut Document,
        dialog_id: &str,
        focus_after_close: Option<FocusTarget>,
        focus_first: Option<FocusTarget>,
    ) -> Result<()> {
        let request = self.validate(doc, dialog_id, focus_after_close.as_ref(), focus_first.as_ref(), None)?;
        self.mount(doc, request)
    }

    /// Close the topmost dialog and return focus to its close target.
    /// Returns false when no dialog is open.
    ///
    /// A dialog below becomes the active trap again, so a close target
    /// outside it is pulled back inside once the focus events are delivered.
    pub fn close(&mut self, doc: &mut Document) -> Result<bool> {
        let Some(record) = self.stack.pop() else {
            return Ok(false);
        };
        self.unmount(doc, &record)?;
        doc.focus(record.focus_after_close);

        match self.stack.last_mut() {
            Some(below) => below.listening = true,
            None => doc.remove_class(doc.body(), &self.classes.dialog_open)?,
        }
        tracing::debug!(dialog = ?record.dialog, remaining = self.stack.len(), "dialog closed");
        Ok(true)
    }

    /// Swap the topmost dialog for `dialog_id`.
    ///
    /// The new dialog's close target defaults to the replaced dialog's.
    /// Focus is not restored between the two.
    pub fn replace(
        &mut self,
        doc: &mut Document,
        dialog_id: &str,
        focus_after_close: Option<FocusTarget>,
        focus_first: Option<FocusTarget>,
    ) -> Result<()> {
        let Some(top) = self.stack.last() else {
            return Err(WidgetError::config(format!("cannot replace with \"{dialog_id}\": no dialog is open")));
        };
        let focus_after_close = focus_after_close.unwrap_or(FocusTarget::Node(top.focus_after_close));
        let replaced = top.dialog;

        let request = self.validate(doc, dialog_id, Some(&focus_after_close), focus_first.as_ref(), Some(replaced))?;

        if let Some(record) = self.stack.pop() {
            self.unmount(doc, &record)?;
        }
        tracing::debug!(?replaced, with = dialog_id, "dialog replaced");
        self.mount(doc, request)
    }

    /// Escape on `keyup` closes the topmost dialog
    pub fn handle_escape(&mut self, doc: &mut Document, event: &mut KeyboardEvent) -> Result<bool> {
        if event.key != Key::Escape {
            return Ok(false);
        }
        let closed = self.close(doc)?;
        if closed {
            event.stop_propagation();
        }
        Ok(closed)
    }

    /// Capturing focus listener of the topmost dialog.
    ///
    /// Focus landing outside the dialog is pulled back to its first focusable
    /// descendant, or to the last one when the first is where focus just was.
    /// Events emitted by the focus helpers themselves are ignored.
    pub fn trap_focus(&mut self, doc: &mut Document, event: &FocusEvent) {
        if !event.is_focus() || event.utility {
            return;
        }
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if !top.listening {
            return;
        }

        if doc.tree().contains(top.dialog, event.target) {
            top.last_focus = Some(event.target);
            return;
        }

        focus_first_descendant(doc, top.dialog);
        if top.last_focus == doc.active_element() {
            focus_last_descendant(doc, top.dialog);
        }
        top.last_focus = doc.active_element();
        tracing::trace!(escaped = ?event.target, restored = ?top.last_focus, "focus trapped");
    }

    fn validate(
        &self,
        doc: &Document,
        dialog_id: &str,
        focus_after_close: Option<&FocusTarget>,
        focus_first: Option<&FocusTarget>,
        replacing: Option<NodeId>,
    ) -> Result<OpenRequest> {
        let dialog = doc
            .get_element_by_id(dialog_id)
            .ok_or_else(|| WidgetError::config(format!("no element found with id=\"{dialog_id}\"")))?;
        if doc.tree().parent(dialog).is_none() {
            return Err(WidgetError::config(format!("dialog \"{dialog_id}\" is not attached")));
        }
        if !has_role(doc, dialog, &DIALOG_ROLES) {
            return Err(WidgetError::config(format!(
                "\"{dialog_id}\" must have an ARIA role of dialog or alertdialog"
            )));
        }

        let focus_after_close = focus_after_close
            .ok_or_else(|| WidgetError::config("a focus-after-close target is required"))?
            .resolve(doc)
            .ok_or_else(|| WidgetError::config("focus-after-close target does not exist"))?;

        let already_open = self
            .stack
            .iter()
            .any(|r| r.dialog == dialog && Some(r.dialog) != replacing);
        if already_open {
            return Err(WidgetError::config(format!("dialog \"{dialog_id}\" is already open")));
        }

        Ok(OpenRequest {
            dialog,
            focus_after_close,
            focus_first: focus_first.and_then(|t| t.resolve(doc)),
        })
    }

    fn mount(&mut self, doc: &mut Document, request: OpenRequest) -> Result<()> {
        let OpenRequest { dialog, focus_after_close, focus_first } = request;
        let classes = &self.classes;

        let parent = doc
            .tree()
            .parent(dialog)
            .ok_or_else(|| WidgetError::config("dialog is not attached"))?;
        let backdrop = if doc.has_class(parent, &classes.dialog_backdrop) {
            parent
        } else {
            let backdrop = doc.create_element("div");
            doc.set_class_name(backdrop, &classes.dialog_backdrop)?;
            doc.insert_before(parent, backdrop, Some(dialog))?;
            doc.append_child(backdrop, dialog)?;
            backdrop
        };
        doc.add_class(backdrop, &classes.backdrop_active)?;

        doc.add_class(doc.body(), &classes.dialog_open)?;

        let pre_sentinel = doc.create_element("div");
        doc.set_attribute(pre_sentinel, "tabindex", "0")?;
        doc.insert_before(backdrop, pre_sentinel, Some(dialog))?;
        let post_sentinel = doc.create_element("div");
        doc.set_attribute(post_sentinel, "tabindex", "0")?;
        let after = doc.tree().next_sibling(dialog);
        doc.insert_before(backdrop, post_sentinel, after)?;

        if let Some(below) = self.stack.last_mut() {
            below.listening = false;
        }

        for input in doc.query_selector_all(dialog, "input")? {
            doc.set_value(input, "")?;
        }
        doc.set_class_name(dialog, &self.classes.dialog_visible)?;

        self.stack.push(DialogRecord {
            dialog,
            backdrop,
            focus_after_close,
            focus_first,
            last_focus: None,
            pre_sentinel,
            post_sentinel,
            listening: true,
        });

        match focus_first {
            Some(first) => {
                doc.focus(first);
            }
            None => {
                focus_first_descendant(doc, dialog);
            }
        }
        let last_focus = doc.active_element();
        if let Some(top) = self.stack.last_mut() {
            top.last_focus = last_focus;
        }

        tracing::debug!(?dialog, depth = self.stack.len(), "dialog opened");
        Ok(())
    }

    /// Hide a popped dialog without touching focus
    fn unmount(&self, doc: &mut Document, record: &DialogRecord) -> Result<()> {
        doc.remove(record.pre_sentinel);
        doc.remove(record.post_sentinel);
        doc.set_class_name(record.dialog, &self.classes.dialog_hidden)?;
        doc.remove_class(record.backdrop, &self.classes.backdrop_active)?;
        Ok(())
    }
}
