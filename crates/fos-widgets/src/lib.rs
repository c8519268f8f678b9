//! fOS Widgets
//!
//! Keyboard-navigable widgets wired to an fOS document:
//!
//! - [`Combobox`]: select-only combobox with typeahead
//! - [`DialogManager`]: modal dialog stack with focus trapping
//! - [`TabsManual`]: tab group with manual activation
//! - [`RadioGroup`]: radio group with roving tabindex
//!
//! [`Page`] owns the document and the widgets, and dispatches input to them.
//!
//! # Example
//! ```rust,ignore
//! use fos_widgets::{Page, KeyboardEvent};
//!
//! let mut page = Page::load(document);
//! page.key_down(combo, &mut KeyboardEvent::key_down("ArrowDown"))?;
//! ```

mod error;
mod config;
mod widget;
pub mod keyboard;
pub mod timers;
pub mod scroll;
pub mod combobox;
pub mod sort;
pub mod dialog;
pub mod tabs;
pub mod radio;
mod page;

pub use error::{WidgetError, Result};
pub use config::{WidgetConfig, ClassNames};
pub use widget::{Widget, WidgetContext, WidgetId, WidgetTask};
pub use keyboard::{Key, KeyModifiers, KeyboardEvent, KeyboardEventType};
pub use timers::{TimerId, TimerQueue};
pub use combobox::{
    Combobox, ComboOption, ComboboxState, SelectAction, PAGE_SIZE, classify_key,
    compute_next_index, filter_options, resolve_typeahead_index,
};
pub use sort::{PriceSort, SelectionEffect, SortOrder};
pub use dialog::{DialogManager, DialogRecord, FocusTarget};
pub use tabs::TabsManual;
pub use radio::RadioGroup;
pub use page::{Page, sort_options};
