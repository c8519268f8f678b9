//! Widget Configuration

/// Widget configuration options
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Idle time after which the typeahead buffer is cleared
    pub typeahead_timeout_ms: u64,

    /// Class names toggled on the markup
    pub classes: ClassNames,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            typeahead_timeout_ms: 500,
            classes: ClassNames::default(),
        }
    }
}

/// CSS class names used for presentation state
#[derive(Debug, Clone)]
pub struct ClassNames {
    /// Combobox container while the listbox is shown
    pub open: String,
    /// Option under keyboard navigation
    pub option_current: String,
    pub combo_option: String,
    pub dialog_backdrop: String,
    pub backdrop_active: String,
    /// Body while any dialog is open (scroll lock)
    pub dialog_open: String,
    pub dialog_visible: String,
    pub dialog_hidden: String,
    pub panel_hidden: String,
    pub radio_focus: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            open: "open".into(),
            option_current: "option-current".into(),
            combo_option: "combo-option".into(),
            dialog_backdrop: "dialog-backdrop".into(),
            backdrop_active: "active".into(),
            dialog_open: "has-dialog".into(),
            dialog_visible: "default_dialog".into(),
            dialog_hidden: "hidden".into(),
            panel_hidden: "is-hidden".into(),
            radio_focus: "focus".into(),
        }
    }
}
