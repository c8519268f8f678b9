//! Select-only combobox
//!
//! A `[role=combobox]` control paired with a `[role=listbox]` popup, both
//! inside a container element. The controller keeps an active (highlighted)
//! option separate from the committed selection, supports typeahead with an
//! idle reset, and keeps the active option scrolled into view.

mod actions;
mod typeahead;

pub use actions::{PAGE_SIZE, SelectAction, classify_key, compute_next_index};
pub use typeahead::{filter_options, resolve_typeahead_index};

use fos_a11y::{AriaRole, AriaState};
use fos_dom::{Document, ElementQuery, NodeId, ScrollIntoViewOptions};

use crate::scroll::{is_element_in_view, is_scrollable, maintain_scroll_visibility};
use crate::{
    ClassNames, Key, KeyboardEvent, Result, SelectionEffect, TimerId, TimerQueue, Widget,
    WidgetContext, WidgetError, WidgetId, WidgetTask,
};

/// Option shown in the listbox
#[derive(Debug, Clone, PartialEq)]
pub struct ComboOption<T> {
    pub title: String,
    pub value: T,
}

impl<T> ComboOption<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self { title: title.into(), value }
    }
}

/// Observable combobox state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxState {
    /// Highlighted option, always `< options.len()`
    pub active_index: usize,
    pub open: bool,
    pub search_buffer: String,
    /// Last committed option
    pub selected_index: usize,
}

/// Combobox controller
pub struct Combobox<T> {
    id: WidgetId,
    el: NodeId,
    combo_el: NodeId,
    listbox_el: NodeId,
    option_els: Vec<NodeId>,
    id_base: String,
    options: Vec<ComboOption<T>>,
    state: ComboboxState,
    /// Pending typeahead reset; arming a new one cancels this
    search_timer: Option<TimerId>,
    ignore_blur: bool,
    classes: ClassNames,
    effect: Box<dyn SelectionEffect<T>>,
}

impl<T> std::fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("el", &self.el)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T> Combobox<T> {
    /// Wire a combobox onto the container `el` and render its options.
    ///
    /// Fails without touching the document when the container lacks a
    /// combobox or listbox descendant, or when `options` is empty.
    pub fn new(
        cx: &mut WidgetContext<'_>,
        id: WidgetId,
        el: NodeId,
        options: Vec<ComboOption<T>>,
        effect: Box<dyn SelectionEffect<T>>,
    ) -> Result<Self> {
        let doc = &mut *cx.doc;
        let combo_el = doc
            .query_selector(el, &AriaRole::Combobox.selector())?
            .ok_or_else(|| WidgetError::config("combobox container has no [role=combobox]"))?;
        let listbox_el = doc
            .query_selector(el, &AriaRole::ListBox.selector())?
            .ok_or_else(|| WidgetError::config("combobox container has no [role=listbox]"))?;
        if options.is_empty() {
            return Err(WidgetError::config("combobox needs at least one option"));
        }

        let id_base = match doc.get_attribute(combo_el, "id") {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => "combo".to_string(),
        };
        let classes = cx.config.classes.clone();

        doc.set_text_content(combo_el, &options[0].title)?;

        let mut option_els = Vec::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            let option_el = doc.create_element("div");
            doc.set_attribute(option_el, "role", AriaRole::Option.as_str())?;
            doc.set_attribute(option_el, "id", &format!("{id_base}-{index}"))?;
            if index == 0 {
                doc.set_class_name(option_el, &format!("{} {}", classes.combo_option, classes.option_current))?;
            } else {
                doc.set_class_name(option_el, &classes.combo_option)?;
            }
            AriaState::Selected(index == 0).apply(doc, option_el)?;
            doc.set_text_content(option_el, &option.title)?;
            doc.append_child(listbox_el, option_el)?;
            option_els.push(option_el);
        }

        tracing::debug!(?id, base = %id_base, options = options.len(), "combobox initialized");

        Ok(Self {
            id,
            el,
            combo_el,
            listbox_el,
            option_els,
            id_base,
            options,
            state: ComboboxState {
                active_index: 0,
                open: false,
                search_buffer: String::new(),
                selected_index: 0,
            },
            search_timer: None,
            ignore_blur: false,
            classes,
            effect,
        })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Container element
    pub fn element(&self) -> NodeId {
        self.el
    }

    pub fn combo_element(&self) -> NodeId {
        self.combo_el
    }

    pub fn listbox_element(&self) -> NodeId {
        self.listbox_el
    }

    pub fn option_elements(&self) -> &[NodeId] {
        &self.option_els
    }

    pub fn options(&self) -> &[ComboOption<T>] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Committed value
    pub fn selected_value(&self) -> &T {
        &self.options[self.state.selected_index].value
    }

    /// Index of `node` among the rendered options
    pub fn option_index(&self, node: NodeId) -> Option<usize> {
        self.option_els.iter().position(|&el| el == node)
    }

    fn max_index(&self) -> usize {
        self.options.len() - 1
    }

    fn option_id(&self, index: usize) -> String {
        format!("{}-{}", self.id_base, index)
    }

    /// Open or close the listbox. A request matching the current state does
    /// nothing. With `call_focus` the control takes focus afterwards.
    pub fn update_menu_state(&mut self, doc: &mut Document, open: bool, call_focus: bool) -> Result<()> {
        if self.state.open == open {
            return Ok(());
        }
        self.state.open = open;

        AriaState::Expanded(open).apply(doc, self.combo_el)?;
        doc.toggle_class(self.el, &self.classes.open, Some(open))?;

        let active_id = if open { self.option_id(self.state.active_index) } else { String::new() };
        AriaState::ActiveDescendant(active_id).apply(doc, self.combo_el)?;

        if !open && !is_element_in_view(doc, self.combo_el) {
            doc.scroll_into_view(self.combo_el, ScrollIntoViewOptions::smooth_nearest());
        }

        tracing::debug!(id = ?self.id, open, "combobox menu state");

        if call_focus {
            doc.focus(self.combo_el);
        }
        Ok(())
    }

    /// Highlight `index` without committing it
    pub fn set_active_index(&mut self, doc: &mut Document, index: usize) -> Result<()> {
        let index = index.min(self.max_index());
        self.state.active_index = index;

        AriaState::ActiveDescendant(self.option_id(index)).apply(doc, self.combo_el)?;

        for &option_el in &self.option_els {
            doc.remove_class(option_el, &self.classes.option_current)?;
        }
        let option_el = self.option_els[index];
        doc.add_class(option_el, &self.classes.option_current)?;

        if is_scrollable(doc, self.listbox_el) {
            maintain_scroll_visibility(doc, option_el, self.listbox_el)?;
        }
        if !is_element_in_view(doc, option_el) {
            doc.scroll_into_view(option_el, ScrollIntoViewOptions::smooth_nearest());
        }
        Ok(())
    }

    /// Commit `index`: update the label, `aria-selected` and run the effect
    pub fn select_option(&mut self, doc: &mut Document, index: usize) -> Result<()> {
        let index = index.min(self.max_index());
        self.state.active_index = index;
        self.state.selected_index = index;

        doc.set_text_content(self.combo_el, &self.options[index].title)?;
        for (i, &option_el) in self.option_els.iter().enumerate() {
            AriaState::Selected(i == index).apply(doc, option_el)?;
        }

        tracing::debug!(id = ?self.id, index, title = %self.options[index].title, "combobox selection committed");
        self.effect.apply(doc, &self.options[index].value)
    }

    /// Printable character, Backspace or Clear typed on the control
    pub fn on_combo_type(&mut self, cx: &mut WidgetContext<'_>, key: &Key) -> Result<()> {
        self.update_menu_state(cx.doc, true, true)?;

        let Some(ch) = key.printable() else {
            // Backspace / Clear never match an option title
            self.clear_search(cx.timers);
            return Ok(());
        };

        if let Some(timer) = self.search_timer.take() {
            cx.timers.cancel(timer);
        }
        self.search_timer = Some(cx.timers.schedule(
            cx.now_ms,
            cx.config.typeahead_timeout_ms,
            WidgetTask::ClearSearch(self.id),
        ));
        self.state.search_buffer.push(ch);

        let start = self.state.active_index + 1;
        match resolve_typeahead_index(&self.options, &self.state.search_buffer, start) {
            Some(index) => self.set_active_index(cx.doc, index),
            None => {
                self.clear_search(cx.timers);
                Ok(())
            }
        }
    }

    fn clear_search(&mut self, timers: &mut TimerQueue<WidgetTask>) {
        if let Some(timer) = self.search_timer.take() {
            timers.cancel(timer);
        }
        self.state.search_buffer.clear();
    }

    /// Idle timeout fired. Stale timers are ignored.
    pub fn expire_search(&mut self, timer: TimerId) -> bool {
        if self.search_timer != Some(timer) {
            return false;
        }
        self.search_timer = None;
        self.state.search_buffer.clear();
        true
    }

    /// Click on the control toggles the listbox without moving focus
    pub fn on_combo_click(&mut self, doc: &mut Document) -> Result<()> {
        let open = !self.state.open;
        self.update_menu_state(doc, open, false)
    }

    /// Focus left the control: commit the active option if the menu is open
    pub fn on_combo_blur(&mut self, doc: &mut Document) -> Result<()> {
        if self.ignore_blur {
            self.ignore_blur = false;
            return Ok(());
        }
        if self.state.open {
            self.select_option(doc, self.state.active_index)?;
            self.update_menu_state(doc, false, false)?;
        }
        Ok(())
    }

    pub fn on_option_click(&mut self, doc: &mut Document, index: usize) -> Result<()> {
        self.set_active_index(doc, index)?;
        self.select_option(doc, index)?;
        self.update_menu_state(doc, false, true)
    }

    /// Pointer-down on an option; the blur it causes must not commit
    pub fn on_option_mouse_down(&mut self) {
        self.ignore_blur = true;
    }

    /// Cancel pending work before the controller is dropped
    pub fn teardown(&mut self, timers: &mut TimerQueue<WidgetTask>) {
        self.clear_search(timers);
    }
}

impl<T> Widget for Combobox<T> {
    type State = ComboboxState;

    fn handles_key(&self, target: NodeId) -> bool {
        target == self.combo_el
    }

    fn key_down(
        &mut self,
        cx: &mut WidgetContext<'_>,
        _target: NodeId,
        event: &mut KeyboardEvent,
    ) -> Result<()> {
        let Some(action) = classify_key(event, self.state.open) else {
            return Ok(());
        };
        let max = self.max_index();

        match action {
            SelectAction::First | SelectAction::Last => {
                self.update_menu_state(cx.doc, true, true)?;
                event.prevent_default();
                let index = compute_next_index(self.state.active_index, max, action);
                self.set_active_index(cx.doc, index)
            }
            SelectAction::Next
            | SelectAction::Previous
            | SelectAction::PageUp
            | SelectAction::PageDown => {
                event.prevent_default();
                let index = compute_next_index(self.state.active_index, max, action);
                self.set_active_index(cx.doc, index)
            }
            SelectAction::CommitAndClose => {
                event.prevent_default();
                self.select_option(cx.doc, self.state.active_index)?;
                self.update_menu_state(cx.doc, false, true)
            }
            SelectAction::Close => {
                event.prevent_default();
                self.update_menu_state(cx.doc, false, true)
            }
            SelectAction::Typeahead => {
                let key = event.key.clone();
                self.on_combo_type(cx, &key)
            }
            SelectAction::Open => {
                event.prevent_default();
                self.update_menu_state(cx.doc, true, true)
            }
        }
    }

    fn current_state(&self) -> ComboboxState {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WidgetConfig;
    use fos_dom::{Rect, ScrollMetrics, ScrollRequest};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fixture {
        doc: Document,
        timers: TimerQueue<WidgetTask>,
        config: WidgetConfig,
        container: NodeId,
        combo: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = Document::new();
            let body = doc.body();
            let container = doc.append_element(body, "div").unwrap();
            let combo = doc.append_element(container, "div").unwrap();
            doc.set_attribute(combo, "role", "combobox").unwrap();
            doc.set_attribute(combo, "id", "fruit").unwrap();
            doc.set_attribute(combo, "tabindex", "0").unwrap();
            let listbox = doc.append_element(container, "div").unwrap();
            doc.set_attribute(listbox, "role", "listbox").unwrap();
            Self {
                doc,
                timers: TimerQueue::new(),
                config: WidgetConfig::default(),
                container,
                combo,
            }
        }

        fn cx(&mut self, now_ms: u64) -> WidgetContext<'_> {
            WidgetContext {
                doc: &mut self.doc,
                timers: &mut self.timers,
                config: &self.config,
                now_ms,
            }
        }
    }

    fn fruit() -> Vec<ComboOption<&'static str>> {
        ["Apple", "Apricot", "Banana", "Cherry"]
            .into_iter()
            .map(|t| ComboOption::new(t, t))
            .collect()
    }

    fn build(fx: &mut Fixture) -> (Combobox<&'static str>, Rc<RefCell<Vec<&'static str>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let effect = move |_: &mut Document, v: &&'static str| -> Result<()> {
            sink.borrow_mut().push(*v);
            Ok(())
        };
        let container = fx.container;
        let combo = Combobox::new(&mut fx.cx(0), WidgetId(0), container, fruit(), Box::new(effect)).unwrap();
        (combo, log)
    }

    fn press(fx: &mut Fixture, combo: &mut Combobox<&'static str>, key: &str, now: u64) -> KeyboardEvent {
        let mut event = KeyboardEvent::key_down(key);
        let target = combo.combo_element();
        combo.key_down(&mut fx.cx(now), target, &mut event).unwrap();
        event
    }

    #[test]
    fn test_renders_options() {
        let mut fx = Fixture::new();
        let (combo, _) = build(&mut fx);
        assert_eq!(fx.doc.text_content(fx.combo), "Apple");
        let els = combo.option_elements();
        assert_eq!(els.len(), 4);
        assert_eq!(fx.doc.get_attribute(els[0], "id"), Some("fruit-0"));
        assert!(fx.doc.has_class(els[0], "option-current"));
        assert!(!fx.doc.has_class(els[1], "option-current"));
        assert_eq!(fx.doc.get_attribute(els[0], "aria-selected"), Some("true"));
        assert_eq!(fx.doc.get_attribute(els[3], "aria-selected"), Some("false"));
    }

    #[test]
    fn test_missing_parts_are_configuration_errors() {
        let mut fx = Fixture::new();
        let body = fx.doc.body();
        let bare = fx.doc.append_element(body, "div").unwrap();
        let err = Combobox::new(&mut fx.cx(0), WidgetId(1), bare, fruit(), Box::new(|_: &mut Document, _: &&str| -> Result<()> { Ok(()) }));
        assert!(matches!(err, Err(WidgetError::Configuration(_))));

        let container = fx.container;
        let err = Combobox::<()>::new(&mut fx.cx(0), WidgetId(1), container, Vec::new(), Box::new(|_: &mut Document, _: &()| -> Result<()> { Ok(()) }));
        assert!(matches!(err, Err(WidgetError::Configuration(_))));
        assert_eq!(fx.doc.text_content(fx.combo), "");
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        combo.update_menu_state(&mut fx.doc, true, false).unwrap();
        assert_eq!(fx.doc.get_attribute(fx.combo, "aria-expanded"), Some("true"));
        assert_eq!(fx.doc.get_attribute(fx.combo, "aria-activedescendant"), Some("fruit-0"));

        fx.doc.remove_attribute(fx.combo, "aria-expanded").unwrap();
        combo.update_menu_state(&mut fx.doc, true, false).unwrap();
        assert_eq!(fx.doc.get_attribute(fx.combo, "aria-expanded"), None);
    }

    #[test]
    fn test_navigation_and_commit() {
        let mut fx = Fixture::new();
        let (mut combo, log) = build(&mut fx);

        assert!(press(&mut fx, &mut combo, "ArrowDown", 0).is_default_prevented());
        assert!(combo.is_open());
        assert!(fx.doc.has_class(fx.container, "open"));
        assert_eq!(fx.doc.active_element(), Some(fx.combo));

        press(&mut fx, &mut combo, "End", 0);
        assert_eq!(combo.current_state().active_index, 3);
        press(&mut fx, &mut combo, "ArrowDown", 0);
        assert_eq!(combo.current_state().active_index, 3);
        press(&mut fx, &mut combo, "ArrowUp", 0);
        press(&mut fx, &mut combo, "Enter", 0);

        let state = combo.current_state();
        assert!(!state.open);
        assert_eq!(state.selected_index, 2);
        assert_eq!(fx.doc.text_content(fx.combo), "Banana");
        assert_eq!(fx.doc.get_attribute(fx.combo, "aria-activedescendant"), Some(""));
        assert_eq!(*log.borrow(), vec!["Banana"]);
        assert_eq!(*combo.selected_value(), "Banana");
    }

    #[test]
    fn test_escape_closes_without_commit() {
        let mut fx = Fixture::new();
        let (mut combo, log) = build(&mut fx);
        press(&mut fx, &mut combo, "ArrowDown", 0);
        press(&mut fx, &mut combo, "ArrowDown", 0);
        press(&mut fx, &mut combo, "Escape", 0);
        assert!(!combo.is_open());
        assert_eq!(combo.current_state().selected_index, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unhandled_key_not_consumed() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        let event = press(&mut fx, &mut combo, "Tab", 0);
        assert!(!event.is_default_prevented());
        assert!(!combo.is_open());
    }

    #[test]
    fn test_typeahead_cycles_and_expires() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);

        press(&mut fx, &mut combo, "a", 0);
        assert!(combo.is_open());
        // search starts after the active option
        assert_eq!(combo.current_state().active_index, 1);
        press(&mut fx, &mut combo, "a", 100);
        assert_eq!(combo.current_state().active_index, 0);
        assert_eq!(combo.current_state().search_buffer, "aa");

        // only the latest timer is pending
        assert_eq!(fx.timers.time_until_next(100), Some(500));
        let fired = fx.timers.advance(600);
        assert_eq!(fired.len(), 1);
        assert!(combo.expire_search(fired[0].0));
        assert_eq!(combo.current_state().search_buffer, "");
    }

    #[test]
    fn test_typeahead_no_match_clears_buffer() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        press(&mut fx, &mut combo, "c", 0);
        assert_eq!(combo.current_state().active_index, 3);
        press(&mut fx, &mut combo, "x", 10);
        assert_eq!(combo.current_state().search_buffer, "");
        assert!(!fx.timers.has_pending());
        assert_eq!(combo.current_state().active_index, 3);
    }

    #[test]
    fn test_backspace_opens_and_clears() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        press(&mut fx, &mut combo, "b", 0);
        press(&mut fx, &mut combo, "Backspace", 10);
        assert!(combo.is_open());
        assert_eq!(combo.current_state().search_buffer, "");
        assert!(!fx.timers.has_pending());
    }

    #[test]
    fn test_blur_commits_unless_option_pressed() {
        let mut fx = Fixture::new();
        let (mut combo, log) = build(&mut fx);
        combo.on_combo_click(&mut fx.doc).unwrap();
        assert!(combo.is_open());
        combo.set_active_index(&mut fx.doc, 1).unwrap();

        combo.on_option_mouse_down();
        combo.on_combo_blur(&mut fx.doc).unwrap();
        assert!(combo.is_open());
        assert!(log.borrow().is_empty());

        combo.on_combo_blur(&mut fx.doc).unwrap();
        assert!(!combo.is_open());
        assert_eq!(*log.borrow(), vec!["Apricot"]);
    }

    #[test]
    fn test_option_click_round_trip() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        combo.on_combo_click(&mut fx.doc).unwrap();
        combo.on_option_click(&mut fx.doc, 2).unwrap();
        assert!(!combo.is_open());

        combo.on_combo_click(&mut fx.doc).unwrap();
        let els = combo.option_elements().to_vec();
        assert_eq!(fx.doc.get_attribute(fx.combo, "aria-activedescendant"), Some("fruit-2"));
        assert!(fx.doc.has_class(els[2], "option-current"));
        assert_eq!(fx.doc.get_attribute(els[2], "aria-selected"), Some("true"));
        let current = els.iter().filter(|&&e| fx.doc.has_class(e, "option-current")).count();
        assert_eq!(current, 1);
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        press(&mut fx, &mut combo, "b", 0);
        assert!(fx.timers.has_pending());
        combo.teardown(&mut fx.timers);
        assert!(!fx.timers.has_pending());
    }

    /// Thirty options laid out in 20px rows under a listbox at `listbox_top`
    fn build_long(fx: &mut Fixture, listbox_top: f32, metrics: ScrollMetrics) -> Combobox<usize> {
        let options = (0..30).map(|i| ComboOption::new(format!("Item {i}"), i)).collect();
        let container = fx.container;
        let combo = Combobox::new(
            &mut fx.cx(0),
            WidgetId(0),
            container,
            options,
            Box::new(|_: &mut Document, _: &usize| -> Result<()> { Ok(()) }),
        )
        .unwrap();

        let listbox = combo.listbox_element();
        fx.doc.set_layout(listbox, Rect::new(0.0, listbox_top, 200.0, 100.0)).unwrap();
        fx.doc.set_scroll_metrics(listbox, metrics).unwrap();
        for (i, &el) in combo.option_elements().iter().enumerate() {
            fx.doc
                .set_layout(el, Rect::new(0.0, listbox_top + 20.0 * i as f32, 200.0, 20.0))
                .unwrap();
        }
        combo
    }

    #[test]
    fn test_active_option_scrolls_listbox() {
        let mut fx = Fixture::new();
        let mut combo = build_long(&mut fx, 100.0, ScrollMetrics::new(600.0, 100.0));
        let listbox = combo.listbox_element();

        combo.set_active_index(&mut fx.doc, 12).unwrap();
        // 12 * 20 - 100 + 20
        assert_eq!(fx.doc.scroll_metrics(listbox).scroll_top, 160.0);

        combo.set_active_index(&mut fx.doc, 2).unwrap();
        assert_eq!(fx.doc.scroll_metrics(listbox).scroll_top, 40.0);

        assert_eq!(fx.doc.scroll_requests().len(), 2);
        assert!(fx
            .doc
            .scroll_requests()
            .iter()
            .all(|r| matches!(r, ScrollRequest::Container { container, .. } if *container == listbox)));
    }

    #[test]
    fn test_offscreen_option_scrolls_into_view() {
        let mut fx = Fixture::new();
        let mut combo = build_long(&mut fx, 1000.0, ScrollMetrics::default());
        let option = combo.option_elements()[1];

        combo.set_active_index(&mut fx.doc, 1).unwrap();
        assert_eq!(
            fx.doc.scroll_requests(),
            &[ScrollRequest::IntoView { target: option, options: ScrollIntoViewOptions::smooth_nearest() }]
        );
    }

    #[test]
    fn test_closing_scrolls_control_into_view() {
        let mut fx = Fixture::new();
        let (mut combo, _) = build(&mut fx);
        fx.doc.set_layout(fx.combo, Rect::new(0.0, 2000.0, 200.0, 30.0)).unwrap();

        combo.update_menu_state(&mut fx.doc, true, false).unwrap();
        assert!(fx.doc.scroll_requests().is_empty());

        combo.update_menu_state(&mut fx.doc, false, false).unwrap();
        assert_eq!(
            fx.doc.scroll_requests().last(),
            Some(&ScrollRequest::IntoView { target: fx.combo, options: ScrollIntoViewOptions::smooth_nearest() })
        );
        // bottom edge 2030 aligned with the 720px viewport
        assert_eq!(fx.doc.viewport().scroll_y, 1310.0);
    }
}
