//! DOM Node
//!
//! Nodes reference each other by `NodeId` rather than by pointer, so the
//! whole tree lives in one arena.

use crate::{DOMTokenList, NodeId, Rect, ScrollMetrics};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Comment(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element-specific data
///
/// `id` and `class` are mirrored into cached fields so lookups by id and
/// class matching never reparse the attribute string.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    tag: String,
    attrs: Vec<Attribute>,
    id: Option<String>,
    classes: DOMTokenList,
    /// Current value of a form field (`input.value`)
    pub value: String,
    /// Layout box in page coordinates
    pub layout: Rect,
    /// Scroll state when the element is a scroll container
    pub scroll: ScrollMetrics,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            id: None,
            classes: DOMTokenList::new(),
            value: String::new(),
            layout: Rect::default(),
            scroll: ScrollMetrics::default(),
        }
    }

    /// Lowercase tag name
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn classes(&self) -> &DOMTokenList {
        &self.classes
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "id" => self.id = Some(value.to_string()),
            "class" => self.classes = DOMTokenList::from_string(value),
            _ => {}
        }
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute { name, value: value.to_string() }),
        }
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        match name {
            "id" => self.id = None,
            "class" => self.classes = DOMTokenList::new(),
            _ => {}
        }
        Some(self.attrs.remove(pos).value)
    }

    /// Iterate attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    /// Mutate the class list, keeping the `class` attribute in sync
    pub fn update_classes<R>(&mut self, f: impl FnOnce(&mut DOMTokenList) -> R) -> R {
        let result = f(&mut self.classes);
        let value = self.classes.to_string();
        match self.attrs.iter_mut().find(|a| a.name == "class") {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute { name: "class".to_string(), value }),
        }
        result
    }

    /// Parsed `tabindex`, if present and numeric
    pub fn tab_index(&self) -> Option<i32> {
        self.get_attr("tabindex")?.trim().parse().ok()
    }
}
