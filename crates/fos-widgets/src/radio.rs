//! Radio group with roving tabindex

use fos_a11y::{AriaRole, AriaState};
use fos_dom::{Document, ElementQuery, NodeId};

use crate::{ClassNames, Key, KeyboardEvent, Result, Widget, WidgetContext, WidgetError};

#[derive(Debug, Clone)]
pub struct RadioGroup {
    group: NodeId,
    radios: Vec<NodeId>,
    checked: usize,
    focus_class: String,
}

impl RadioGroup {
    pub fn new(doc: &mut Document, classes: &ClassNames, group: NodeId) -> Result<Self> {
        let radios = doc.query_selector_all(group, &AriaRole::Radio.selector())?;
        if radios.is_empty() {
            return Err(WidgetError::config("radiogroup has no [role=radio]"));
        }

        for (i, &radio) in radios.iter().enumerate() {
            doc.set_attribute(radio, "tabindex", if i == 0 { "0" } else { "-1" })?;
            AriaState::Checked(i == 0).apply(doc, radio)?;
        }

        Ok(Self {
            group,
            radios,
            checked: 0,
            focus_class: classes.radio_focus.clone(),
        })
    }

    pub fn group(&self) -> NodeId {
        self.group
    }

    pub fn radios(&self) -> &[NodeId] {
        &self.radios
    }

    pub fn checked_radio(&self) -> NodeId {
        self.radios[self.checked]
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.radios.contains(&node)
    }

    /// Check `radio`, make it the group's tab stop and focus it
    pub fn set_checked(&mut self, doc: &mut Document, radio: NodeId) -> Result<()> {
        let Some(index) = self.radios.iter().position(|&r| r == radio) else {
            return Ok(());
        };
        for &rb in &self.radios {
            AriaState::Checked(false).apply(doc, rb)?;
            doc.set_attribute(rb, "tabindex", "-1")?;
        }
        AriaState::Checked(true).apply(doc, radio)?;
        doc.set_attribute(radio, "tabindex", "0")?;
        self.checked = index;
        doc.focus(radio);
        tracing::debug!(group = ?self.group, index, "radio checked");
        Ok(())
    }

    fn set_checked_to_previous(&mut self, doc: &mut Document, index: usize) -> Result<()> {
        let previous = if index == 0 { self.radios.len() - 1 } else { index - 1 };
        self.set_checked(doc, self.radios[previous])
    }

    fn set_checked_to_next(&mut self, doc: &mut Document, index: usize) -> Result<()> {
        let next = if index + 1 == self.radios.len() { 0 } else { index + 1 };
        self.set_checked(doc, self.radios[next])
    }

    pub fn on_click(&mut self, doc: &mut Document, radio: NodeId) -> Result<()> {
        self.set_checked(doc, radio)
    }

    pub fn on_focus(&self, doc: &mut Document, radio: NodeId) -> Result<()> {
        if self.contains(radio) {
            doc.add_class(radio, &self.focus_class)?;
        }
        Ok(())
    }

    pub fn on_blur(&self, doc: &mut Document, radio: NodeId) -> Result<()> {
        if self.contains(radio) {
            doc.remove_class(radio, &self.focus_class)?;
        }
        Ok(())
    }
}

impl Widget for RadioGroup {
    type State = usize;

    fn handles_key(&self, target: NodeId) -> bool {
        self.contains(target)
    }

    fn key_down(
        &mut self,
        cx: &mut WidgetContext<'_>,
        target: NodeId,
        event: &mut KeyboardEvent,
    ) -> Result<()> {
        let Some(index) = self.radios.iter().position(|&r| r == target) else {
            return Ok(());
        };

        match event.key {
            Key::Space | Key::Enter => self.set_checked(cx.doc, target)?,
            Key::ArrowUp | Key::ArrowLeft => self.set_checked_to_previous(cx.doc, index)?,
            Key::ArrowDown | Key::ArrowRight => self.set_checked_to_next(cx.doc, index)?,
            _ => return Ok(()),
        }
        event.stop_propagation();
        event.prevent_default();
        Ok(())
    }

    /// Index of the checked radio
    fn current_state(&self) -> usize {
        self.checked
    }
}
