//! Element Query
//!
//! querySelector, querySelectorAll, closest and matches over compound
//! selectors (`div.js-select`, `[role=tablist].manual`, `#dialog1`).
//! Combinators and selector lists are not supported.

use crate::{Document, DomError, ElementData, NodeId, Result};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    /// `[name]` or `[name=value]`
    Attr { name: String, value: Option<String> },
    Universal,
}

impl SimpleSelector {
    /// Check a single element against this selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag().eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.classes().contains(class),
            Self::Attr { name, value: None } => elem.has_attr(name),
            Self::Attr { name, value: Some(v) } => elem.get_attr(name) == Some(v.as_str()),
        }
    }
}

/// Sequence of simple selectors that must all match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl CompoundSelector {
    /// Parse a compound selector string
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || DomError::InvalidSelector(s.to_string());
        let input = s.trim();
        if input.is_empty() {
            return Err(invalid());
        }

        let chars: Vec<char> = input.chars().collect();
        let mut parts = Vec::new();
        let mut i = 0;

        let read_ident = |i: &mut usize| -> String {
            let start = *i;
            while *i < chars.len() && is_ident_char(chars[*i]) {
                *i += 1;
            }
            chars[start..*i].iter().collect()
        };

        while i < chars.len() {
            match chars[i] {
                '*' => {
                    i += 1;
                    parts.push(SimpleSelector::Universal);
                }
                '#' | '.' => {
                    let prefix = chars[i];
                    i += 1;
                    let ident = read_ident(&mut i);
                    if ident.is_empty() {
                        return Err(invalid());
                    }
                    parts.push(if prefix == '#' {
                        SimpleSelector::Id(ident)
                    } else {
                        SimpleSelector::Class(ident)
                    });
                }
                '[' => {
                    i += 1;
                    let name = read_ident(&mut i).to_ascii_lowercase();
                    if name.is_empty() || i >= chars.len() {
                        return Err(invalid());
                    }
                    let value = if chars[i] == '=' {
                        i += 1;
                        let quote = chars.get(i).copied().filter(|c| *c == '"' || *c == '\'');
                        let value: String = match quote {
                            Some(q) => {
                                i += 1;
                                let start = i;
                                while i < chars.len() && chars[i] != q {
                                    i += 1;
                                }
                                if i >= chars.len() {
                                    return Err(invalid());
                                }
                                let v = chars[start..i].iter().collect();
                                i += 1;
                                v
                            }
                            None => read_ident(&mut i),
                        };
                        Some(value)
                    } else {
                        None
                    };
                    if chars.get(i) != Some(&']') {
                        return Err(invalid());
                    }
                    i += 1;
                    parts.push(SimpleSelector::Attr { name, value });
                }
                c if is_ident_char(c) && parts.is_empty() => {
                    parts.push(SimpleSelector::Tag(read_ident(&mut i).to_ascii_lowercase()));
                }
                _ => return Err(invalid()),
            }
        }

        Ok(Self { parts })
    }

    /// Check an element against every part
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.parts.iter().all(|p| p.matches(elem))
    }

    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }
}

/// Element query trait
pub trait ElementQuery {
    /// First element under `root` (exclusive) matching `selector`
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>>;

    /// All elements under `root` (exclusive) matching `selector`, in tree order
    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>>;

    /// Closest inclusive ancestor matching `selector`
    fn closest(&self, element: NodeId, selector: &str) -> Result<Option<NodeId>>;

    /// Check if element matches selector
    fn matches(&self, element: NodeId, selector: &str) -> Result<bool>;
}

impl ElementQuery for Document {
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>> {
        let sel = CompoundSelector::parse(selector)?;
        let tree = self.tree();
        Ok(tree
            .element_descendants(root)
            .into_iter()
            .find(|&id| tree.element(id).is_some_and(|e| sel.matches(e))))
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        let sel = CompoundSelector::parse(selector)?;
        let tree = self.tree();
        Ok(tree
            .element_descendants(root)
            .into_iter()
            .filter(|&id| tree.element(id).is_some_and(|e| sel.matches(e)))
            .collect())
    }

    fn closest(&self, element: NodeId, selector: &str) -> Result<Option<NodeId>> {
        let sel = CompoundSelector::parse(selector)?;
        let tree = self.tree();
        Ok(std::iter::once(element)
            .chain(tree.ancestors(element))
            .find(|&id| tree.element(id).is_some_and(|e| sel.matches(e))))
    }

    fn matches(&self, element: NodeId, selector: &str) -> Result<bool> {
        let sel = CompoundSelector::parse(selector)?;
        Ok(self.tree().element(element).is_some_and(|e| sel.matches(e)))
    }
}
