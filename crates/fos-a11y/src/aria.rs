//! ARIA Support
//!
//! ARIA roles and the state attributes the widgets keep in sync.

use fos_dom::{Document, NodeId};

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Widget roles
    AlertDialog,
    Button,
    Combobox,
    Dialog,
    Link,
    ListBox,
    Option,
    Radio,
    RadioGroup,
    Tab,
    TabList,
    TabPanel,
    TextBox,

    // Document structure
    Group,
    List,
    ListItem,
    Region,
    Presentation,
}

impl AriaRole {
    /// Parse a single role token
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "combobox" => Self::Combobox,
            "dialog" => Self::Dialog,
            "link" => Self::Link,
            "listbox" => Self::ListBox,
            "option" => Self::Option,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "group" => Self::Group,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "region" => Self::Region,
            "none" | "presentation" => Self::Presentation,
            _ => return None,
        })
    }

    /// Attribute value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlertDialog => "alertdialog",
            Self::Button => "button",
            Self::Combobox => "combobox",
            Self::Dialog => "dialog",
            Self::Link => "link",
            Self::ListBox => "listbox",
            Self::Option => "option",
            Self::Radio => "radio",
            Self::RadioGroup => "radiogroup",
            Self::Tab => "tab",
            Self::TabList => "tablist",
            Self::TabPanel => "tabpanel",
            Self::TextBox => "textbox",
            Self::Group => "group",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Region => "region",
            Self::Presentation => "presentation",
        }
    }

    /// Roles that open a modal surface
    pub fn is_dialog(&self) -> bool {
        matches!(self, Self::Dialog | Self::AlertDialog)
    }

    /// `[role=...]` selector for this role
    pub fn selector(&self) -> String {
        format!("[role={}]", self.as_str())
    }
}

/// Tokens of a `role` attribute (fallback roles are space separated)
pub fn role_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Whether any token of the node's `role` attribute is one of `roles`
pub fn has_role(doc: &Document, node: NodeId, roles: &[AriaRole]) -> bool {
    let Some(value) = doc.get_attribute(node, "role") else {
        return false;
    };
    role_tokens(value)
        .filter_map(AriaRole::parse)
        .any(|role| roles.contains(&role))
}

/// ARIA state/property written back to the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AriaState {
    Expanded(bool),
    Selected(bool),
    Checked(bool),
    /// Empty string clears the reference
    ActiveDescendant(String),
}

impl AriaState {
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Self::Expanded(_) => "aria-expanded",
            Self::Selected(_) => "aria-selected",
            Self::Checked(_) => "aria-checked",
            Self::ActiveDescendant(_) => "aria-activedescendant",
        }
    }

    pub fn attribute_value(&self) -> String {
        match self {
            Self::Expanded(b) | Self::Selected(b) | Self::Checked(b) => b.to_string(),
            Self::ActiveDescendant(id) => id.clone(),
        }
    }

    /// Write the state onto `node`
    pub fn apply(&self, doc: &mut Document, node: NodeId) -> fos_dom::Result<()> {
        doc.set_attribute(node, self.attribute_name(), &self.attribute_value())
    }

    /// Read a boolean state attribute (`"true"` / `"false"`)
    pub fn read_bool(doc: &Document, node: NodeId, attribute: &str) -> Option<bool> {
        match doc.get_attribute(node, attribute)? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}
