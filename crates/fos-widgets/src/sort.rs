//! Selection effects
//!
//! What happens when a combobox commits a value. The page uses
//! [`PriceSort`] to reorder the goods list by price.

use std::cmp::Ordering;

use fos_dom::{Document, ElementQuery, NodeId};

use crate::{Result, WidgetError};

/// Reaction to a committed combobox value
pub trait SelectionEffect<T> {
    fn apply(&mut self, doc: &mut Document, value: &T) -> Result<()>;
}

impl<T, F> SelectionEffect<T> for F
where
    F: FnMut(&mut Document, &T) -> Result<()>,
{
    fn apply(&mut self, doc: &mut Document, value: &T) -> Result<()> {
        self(doc, value)
    }
}

/// Sort direction carried by the sort combobox options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Increase,
    Decrease,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

const LIST_SELECTOR: &str = ".goods__list";
const ITEM_SELECTOR: &str = ".goods__item";
const PRICE_SELECTORS: [&str; 2] = [".js-price", ".goods__price"];

/// Reorders `.goods__item` children of `.goods__list` by price
#[derive(Debug, Clone)]
pub struct PriceSort {
    list: NodeId,
    /// Items in their order at construction; `None` restores it
    items: Vec<NodeId>,
}

impl PriceSort {
    /// Capture the goods list and its items
    pub fn from_document(doc: &Document) -> Result<Self> {
        let root = doc.tree().root();
        let list = doc
            .query_selector(root, LIST_SELECTOR)?
            .ok_or_else(|| WidgetError::config(format!("no element matches {LIST_SELECTOR}")))?;
        let items = doc.query_selector_all(list, ITEM_SELECTOR)?;
        Ok(Self { list, items })
    }

    pub fn list(&self) -> NodeId {
        self.list
    }

    /// Numeric price of an item: the text before the first `$`.
    /// `NaN` when the item has no price element or the text is not a number.
    pub fn price_of(doc: &Document, item: NodeId) -> f64 {
        let mut price_el = None;
        for selector in PRICE_SELECTORS {
            if let Ok(Some(el)) = doc.query_selector(item, selector) {
                price_el = Some(el);
                break;
            }
        }
        let Some(el) = price_el else {
            return f64::NAN;
        };

        let text = doc.text_content(el);
        let amount = text.split('$').next().unwrap_or("").trim();
        if amount.is_empty() {
            return 0.0;
        }
        amount.parse().unwrap_or(f64::NAN)
    }

    /// Items in the order `order` would produce
    pub fn sorted_items(&self, doc: &Document, order: Option<SortOrder>) -> Vec<NodeId> {
        let mut items = self.items.clone();
        let Some(order) = order else {
            return items;
        };
        items.sort_by(|&a, &b| {
            let ord = Self::price_of(doc, a)
                .partial_cmp(&Self::price_of(doc, b))
                .unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Increase => ord,
                SortOrder::Decrease => ord.reverse(),
            }
        });
        items
    }
}

impl SelectionEffect<Option<SortOrder>> for PriceSort {
    fn apply(&mut self, doc: &mut Document, value: &Option<SortOrder>) -> Result<()> {
        let sorted = self.sorted_items(doc, *value);
        for child in doc.tree().child_ids(self.list) {
            doc.remove(child);
        }
        for item in sorted {
            doc.append_child(self.list, item)?;
        }
        tracing::debug!(order = value.map(|o| o.as_str()), "goods list reordered");
        Ok(())
    }
}
