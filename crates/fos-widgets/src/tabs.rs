//! Tabs with manual activation
//!
//! Arrow keys move focus between tabs; a tab is only selected when it is
//! clicked (Enter and Space click the focused tab button).

use fos_a11y::{AriaRole, AriaState};
use fos_dom::{Document, ElementQuery, NodeId};

use crate::{ClassNames, Key, KeyboardEvent, Result, Widget, WidgetContext, WidgetError};

#[derive(Debug, Clone)]
pub struct TabsManual {
    tablist: NodeId,
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    selected: usize,
    panel_hidden: String,
}

impl TabsManual {
    /// Wire the tabs of `tablist` and select the first one
    pub fn new(doc: &mut Document, classes: &ClassNames, tablist: NodeId) -> Result<Self> {
        let tabs = doc.query_selector_all(tablist, &AriaRole::Tab.selector())?;
        if tabs.is_empty() {
            return Err(WidgetError::config("tablist has no [role=tab]"));
        }

        let mut panels = Vec::with_capacity(tabs.len());
        for &tab in &tabs {
            let controls = doc.get_attribute(tab, "aria-controls").unwrap_or_default();
            let panel = doc
                .get_element_by_id(controls)
                .ok_or_else(|| WidgetError::config(format!("tab panel \"{controls}\" not found")))?;
            panels.push(panel);
        }

        for &tab in &tabs {
            doc.set_attribute(tab, "tabindex", "-1")?;
            AriaState::Selected(false).apply(doc, tab)?;
        }

        let mut group = Self {
            tablist,
            tabs,
            panels,
            selected: 0,
            panel_hidden: classes.panel_hidden.clone(),
        };
        group.select_index(doc, 0)?;
        Ok(group)
    }

    pub fn tablist(&self) -> NodeId {
        self.tablist
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.tabs
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.panels
    }

    pub fn selected_tab(&self) -> NodeId {
        self.tabs[self.selected]
    }

    fn index_of(&self, tab: NodeId) -> Option<usize> {
        self.tabs.iter().position(|&t| t == tab)
    }

    /// Select `tab` and reveal its panel; every other panel is hidden
    pub fn set_selected_tab(&mut self, doc: &mut Document, tab: NodeId) -> Result<()> {
        match self.index_of(tab) {
            Some(index) => self.select_index(doc, index),
            None => Ok(()),
        }
    }

    fn select_index(&mut self, doc: &mut Document, index: usize) -> Result<()> {
        for (i, (&tab, &panel)) in self.tabs.iter().zip(&self.panels).enumerate() {
            let selected = i == index;
            AriaState::Selected(selected).apply(doc, tab)?;
            if selected {
                doc.remove_attribute(tab, "tabindex")?;
            } else {
                doc.set_attribute(tab, "tabindex", "-1")?;
            }
            doc.toggle_class(panel, &self.panel_hidden, Some(!selected))?;
        }
        self.selected = index;
        tracing::debug!(tablist = ?self.tablist, index, "tab selected");
        Ok(())
    }

    fn move_focus_to(&self, doc: &mut Document, index: usize) {
        doc.focus(self.tabs[index]);
    }

    pub fn on_click(&mut self, doc: &mut Document, tab: NodeId) -> Result<()> {
        self.set_selected_tab(doc, tab)
    }
}

impl Widget for TabsManual {
    type State = usize;

    fn handles_key(&self, target: NodeId) -> bool {
        self.index_of(target).is_some()
    }

    fn key_down(
        &mut self,
        cx: &mut WidgetContext<'_>,
        target: NodeId,
        event: &mut KeyboardEvent,
    ) -> Result<()> {
        let Some(current) = self.index_of(target) else {
            return Ok(());
        };
        let last = self.tabs.len() - 1;

        let next = match event.key {
            Key::ArrowLeft => {
                if current == 0 { last } else { current - 1 }
            }
            Key::ArrowRight => {
                if current == last { 0 } else { current + 1 }
            }
            Key::Home => 0,
            Key::End => last,
            _ => return Ok(()),
        };
        self.move_focus_to(cx.doc, next);
        event.stop_propagation();
        event.prevent_default();
        Ok(())
    }

    /// Index of the selected tab
    fn current_state(&self) -> usize {
        self.selected
    }
}
