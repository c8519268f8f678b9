//! Page
//!
//! Owns the document and every widget wired onto it, routes input events
//! to them and runs the default actions a browser would perform.

use fos_a11y::sequential_focus_order;
use fos_dom::{Document, ElementQuery, NodeId};

use crate::combobox::{ComboOption, Combobox};
use crate::dialog::{DialogManager, FocusTarget};
use crate::radio::RadioGroup;
use crate::sort::{PriceSort, SortOrder};
use crate::tabs::TabsManual;
use crate::{
    Key, KeyboardEvent, Result, TimerQueue, Widget, WidgetConfig, WidgetContext, WidgetId,
    WidgetTask,
};

const RADIOGROUP_SELECTOR: &str = "[role=\"radiogroup\"]";
const SELECT_SELECTOR: &str = ".js-select";
const TABLIST_SELECTOR: &str = "[role=tablist].manual";
const DIALOG_FORM_SELECTOR: &str = ".dialog__form";

/// Sort options offered by every `.js-select`
pub fn sort_options() -> Vec<ComboOption<Option<SortOrder>>> {
    vec![
        ComboOption::new("Нет сортировки", None),
        ComboOption::new("По возрастанию цены", Some(SortOrder::Increase)),
        ComboOption::new("По убыванию цены", Some(SortOrder::Decrease)),
    ]
}

/// Route a keydown to the first widget claiming `target`
fn dispatch_key<W: Widget>(
    widgets: &mut [W],
    cx: &mut WidgetContext<'_>,
    target: NodeId,
    event: &mut KeyboardEvent,
) -> Result<bool> {
    match widgets.iter_mut().find(|w| w.handles_key(target)) {
        Some(widget) => {
            widget.key_down(cx, target, event)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// A loaded page with its widgets
#[derive(Debug)]
pub struct Page {
    doc: Document,
    config: WidgetConfig,
    timers: TimerQueue<WidgetTask>,
    now_ms: u64,
    comboboxes: Vec<Combobox<Option<SortOrder>>>,
    tabs: Vec<TabsManual>,
    radio_groups: Vec<RadioGroup>,
    dialogs: DialogManager,
}

impl Page {
    /// Wire widgets onto `doc` with the default configuration
    pub fn load(doc: Document) -> Self {
        Self::with_config(doc, WidgetConfig::default())
    }

    /// Wire every radio group, sort select and manual tablist found in
    /// `doc`. Widgets with malformed markup are skipped.
    pub fn with_config(doc: Document, config: WidgetConfig) -> Self {
        let dialogs = DialogManager::new(config.classes.clone());
        let mut page = Self {
            doc,
            config,
            timers: TimerQueue::new(),
            now_ms: 0,
            comboboxes: Vec::new(),
            tabs: Vec::new(),
            radio_groups: Vec::new(),
            dialogs,
        };

        for group in page.find_all(RADIOGROUP_SELECTOR) {
            match RadioGroup::new(&mut page.doc, &page.config.classes, group) {
                Ok(radios) => page.radio_groups.push(radios),
                Err(err) => tracing::warn!(?group, %err, "skipping radio group"),
            }
        }

        for el in page.find_all(SELECT_SELECTOR) {
            if let Err(err) = page.add_sort_select(el) {
                tracing::warn!(?el, %err, "skipping select");
            }
        }

        for tablist in page.find_all(TABLIST_SELECTOR) {
            match TabsManual::new(&mut page.doc, &page.config.classes, tablist) {
                Ok(tabs) => page.tabs.push(tabs),
                Err(err) => tracing::warn!(?tablist, %err, "skipping tablist"),
            }
        }

        tracing::debug!(
            comboboxes = page.comboboxes.len(),
            tablists = page.tabs.len(),
            radio_groups = page.radio_groups.len(),
            "page loaded"
        );
        page.pump_focus_events();
        page
    }

    fn find_all(&self, selector: &str) -> Vec<NodeId> {
        let root = self.doc.tree().root();
        match self.doc.query_selector_all(root, selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!(selector, %err, "query failed");
                Vec::new()
            }
        }
    }

    fn add_sort_select(&mut self, el: NodeId) -> Result<()> {
        let sort = PriceSort::from_document(&self.doc)?;
        let id = WidgetId(self.comboboxes.len());
        let mut cx = WidgetContext {
            doc: &mut self.doc,
            timers: &mut self.timers,
            config: &self.config,
            now_ms: self.now_ms,
        };
        let combo = Combobox::new(&mut cx, id, el, sort_options(), Box::new(sort))?;
        self.comboboxes.push(combo);
        Ok(())
    }

    // === Accessors ===

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Direct document access. Call [`Page::pump_focus_events`] after
    /// moving focus through it.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn comboboxes(&self) -> &[Combobox<Option<SortOrder>>] {
        &self.comboboxes
    }

    pub fn tabs(&self) -> &[TabsManual] {
        &self.tabs
    }

    pub fn radio_groups(&self) -> &[RadioGroup] {
        &self.radio_groups
    }

    pub fn dialogs(&self) -> &DialogManager {
        &self.dialogs
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.doc.active_element()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.doc.get_element_by_id(id)
    }

    // === Input events ===

    /// `keydown` on `target`
    pub fn key_down(&mut self, target: NodeId, event: &mut KeyboardEvent) -> Result<()> {
        let mut cx = WidgetContext {
            doc: &mut self.doc,
            timers: &mut self.timers,
            config: &self.config,
            now_ms: self.now_ms,
        };
        if !dispatch_key(&mut self.comboboxes, &mut cx, target, event)?
            && !dispatch_key(&mut self.tabs, &mut cx, target, event)?
        {
            dispatch_key(&mut self.radio_groups, &mut cx, target, event)?;
        }

        if !event.is_default_prevented() {
            self.key_down_default(target, event)?;
        }
        self.pump_focus_events();
        Ok(())
    }

    fn key_down_default(&mut self, target: NodeId, event: &mut KeyboardEvent) -> Result<()> {
        match event.key {
            Key::Tab => {
                event.prevent_default();
                self.tab(event.modifiers.shift);
            }
            Key::Enter | Key::Space if self.tag_of(target) == Some("button") => {
                event.prevent_default();
                self.click(target)?;
            }
            Key::Enter if self.tag_of(target) == Some("input") => {
                if let Some(form) = self.doc.closest(target, "form")? {
                    event.prevent_default();
                    self.submit(form)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn tag_of(&self, node: NodeId) -> Option<&str> {
        self.doc.tree().element(node).map(|e| e.tag())
    }

    /// `keyup` on `target`; Escape closes the topmost dialog
    pub fn key_up(&mut self, _target: NodeId, event: &mut KeyboardEvent) -> Result<()> {
        self.dialogs.handle_escape(&mut self.doc, event)?;
        self.pump_focus_events();
        Ok(())
    }

    /// Pointer pressed on `target`
    pub fn mouse_down(&mut self, target: NodeId) -> Result<()> {
        if let Some(combo) = self.comboboxes.iter_mut().find(|c| c.option_index(target).is_some()) {
            combo.on_option_mouse_down();
        }

        let focusable = std::iter::once(target)
            .chain(self.doc.tree().ancestors(target))
            .find(|&n| self.doc.can_receive_focus(n));
        match focusable {
            Some(node) => {
                self.doc.focus(node);
            }
            None => self.doc.blur(),
        }
        self.pump_focus_events();
        Ok(())
    }

    /// Click on `target`
    pub fn click(&mut self, target: NodeId) -> Result<()> {
        let option = self
            .comboboxes
            .iter_mut()
            .find_map(|c| c.option_index(target).map(|index| (c, index)));
        if let Some((combo, index)) = option {
            combo.on_option_click(&mut self.doc, index)?;
        } else if let Some(combo) = self.comboboxes.iter_mut().find(|c| c.combo_element() == target) {
            combo.on_combo_click(&mut self.doc)?;
        } else if let Some(tabs) = self.tabs.iter_mut().find(|t| t.handles_key(target)) {
            tabs.on_click(&mut self.doc, target)?;
        } else if let Some(group) = self.radio_groups.iter_mut().find(|g| g.contains(target)) {
            group.on_click(&mut self.doc, target)?;
        }
        self.pump_focus_events();
        Ok(())
    }

    /// Programmatic `element.focus()`
    pub fn focus(&mut self, target: NodeId) -> bool {
        let focused = self.doc.focus(target);
        self.pump_focus_events();
        focused
    }

    /// Sequential focus navigation (Tab / Shift+Tab)
    pub fn tab(&mut self, backward: bool) {
        let order = sequential_focus_order(&self.doc);
        if order.is_empty() {
            return;
        }
        let len = order.len();
        let position = self
            .doc
            .active_element()
            .and_then(|active| order.iter().position(|&n| n == active));
        let next = match (position, backward) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };
        self.doc.focus(order[next]);
        self.pump_focus_events();
    }

    /// Form submission. Returns whether the default action was prevented.
    pub fn submit(&mut self, form: NodeId) -> Result<bool> {
        if !self.doc.matches(form, DIALOG_FORM_SELECTOR)? {
            return Ok(false);
        }
        self.replace_dialog("dialog2", None, Some("dialog2_close_btn".into()))?;
        Ok(true)
    }

    /// Advance the virtual clock and run due timers
    pub fn advance_time(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
        for (timer, task) in self.timers.advance(self.now_ms) {
            match task {
                WidgetTask::ClearSearch(id) => {
                    if let Some(combo) = self.comboboxes.get_mut(id.0) {
                        combo.expire_search(timer);
                    }
                }
            }
        }
    }

    // === Dialog functions ===

    pub fn open_dialog(
        &mut self,
        dialog_id: &str,
        focus_after_close: Option<FocusTarget>,
        focus_first: Option<FocusTarget>,
    ) -> Result<()> {
        let result = self.dialogs.open(&mut self.doc, dialog_id, focus_after_close, focus_first);
        self.pump_focus_events();
        result
    }

    /// Close the topmost dialog if `invoker` is inside it
    pub fn close_dialog(&mut self, invoker: NodeId) -> Result<bool> {
        if !self.dialogs.top_contains(&self.doc, invoker) {
            return Ok(false);
        }
        let closed = self.dialogs.close(&mut self.doc)?;
        self.pump_focus_events();
        Ok(closed)
    }

    /// Replace the topmost dialog if focus is inside it
    pub fn replace_dialog(
        &mut self,
        dialog_id: &str,
        focus_after_close: Option<FocusTarget>,
        focus_first: Option<FocusTarget>,
    ) -> Result<bool> {
        let focus_inside = self
            .doc
            .active_element()
            .is_some_and(|active| self.dialogs.top_contains(&self.doc, active));
        if !focus_inside {
            return Ok(false);
        }
        let result = self.dialogs.replace(&mut self.doc, dialog_id, focus_after_close, focus_first);
        self.pump_focus_events();
        result.map(|()| true)
    }

    // === Focus events ===

    /// Deliver queued focus and blur events to the listeners
    pub fn pump_focus_events(&mut self) {
        while let Some(event) = self.doc.take_focus_event() {
            let target = event.target;
            if event.is_focus() {
                self.dialogs.trap_focus(&mut self.doc, &event);
                for group in &self.radio_groups {
                    if let Err(err) = group.on_focus(&mut self.doc, target) {
                        tracing::warn!(%err, "radio focus handler failed");
                    }
                }
            } else {
                if let Some(combo) = self.comboboxes.iter_mut().find(|c| c.combo_element() == target) {
                    if let Err(err) = combo.on_combo_blur(&mut self.doc) {
                        tracing::warn!(%err, "combobox blur handler failed");
                    }
                }
                for group in &self.radio_groups {
                    if let Err(err) = group.on_blur(&mut self.doc, target) {
                        tracing::warn!(%err, "radio blur handler failed");
                    }
                }
            }
        }
    }

    /// Cancel pending widget timers
    pub fn unload(&mut self) {
        for combo in &mut self.comboboxes {
            combo.teardown(&mut self.timers);
        }
        tracing::debug!("page unloaded");
    }
}
