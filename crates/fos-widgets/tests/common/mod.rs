//! Shared fixtures for the widget integration tests

#![allow(dead_code)]

use fos_dom::{Document, NodeId};

/// Install a test log subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn el(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = doc.append_element(parent, tag).unwrap();
    for (name, value) in attrs {
        doc.set_attribute(node, name, value).unwrap();
    }
    node
}

pub fn text_el(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)], text: &str) -> NodeId {
    let node = el(doc, parent, tag, attrs);
    doc.set_text_content(node, text).unwrap();
    node
}

/// Catalog page: sort select, goods list, radio group, manual tabs and
/// three hidden dialogs
pub fn shop_page() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    text_el(&mut doc, body, "button", &[("id", "open_btn")], "Order");

    let select = el(&mut doc, body, "div", &[("class", "select js-select")]);
    el(
        &mut doc,
        select,
        "div",
        &[("id", "sort"), ("role", "combobox"), ("tabindex", "0"), ("aria-expanded", "false")],
    );
    el(&mut doc, select, "div", &[("id", "sort-listbox"), ("role", "listbox")]);

    let list = el(&mut doc, body, "ul", &[("class", "goods__list")]);
    for (i, price) in ["300$", "100$", "200$"].into_iter().enumerate() {
        let item = el(&mut doc, list, "li", &[("class", "goods__item"), ("id", format!("good-{i}").as_str())]);
        let class = if i == 1 { "goods__price js-price" } else { "goods__price" };
        text_el(&mut doc, item, "span", &[("class", class)], price);
    }

    let group = el(&mut doc, body, "div", &[("role", "radiogroup")]);
    for (i, label) in ["Card", "Cash", "Crypto"].into_iter().enumerate() {
        text_el(&mut doc, group, "div", &[("role", "radio"), ("id", format!("pay-{i}").as_str())], label);
    }

    let tablist = el(&mut doc, body, "div", &[("role", "tablist"), ("class", "manual")]);
    for i in 0..2 {
        text_el(
            &mut doc,
            tablist,
            "button",
            &[("role", "tab"), ("id", format!("tab-{i}").as_str()), ("aria-controls", format!("panel-{i}").as_str())],
            "Tab",
        );
    }
    for i in 0..2 {
        el(&mut doc, body, "div", &[("role", "tabpanel"), ("id", format!("panel-{i}").as_str())]);
    }

    let dialog1 = el(&mut doc, body, "div", &[("id", "dialog1"), ("role", "dialog"), ("class", "hidden")]);
    let form = el(&mut doc, dialog1, "form", &[("class", "dialog__form")]);
    el(&mut doc, form, "input", &[("id", "name"), ("type", "text")]);
    el(&mut doc, form, "input", &[("type", "hidden"), ("id", "token")]);
    text_el(&mut doc, form, "button", &[("id", "dialog1_submit"), ("type", "submit")], "Send");
    text_el(&mut doc, dialog1, "button", &[("id", "dialog1_close")], "Close");

    let dialog2 = el(&mut doc, body, "div", &[("id", "dialog2"), ("role", "dialog"), ("class", "hidden")]);
    text_el(&mut doc, dialog2, "p", &[], "Thanks!");
    text_el(&mut doc, dialog2, "a", &[("id", "dialog2_link"), ("href", "#terms")], "Terms");
    text_el(&mut doc, dialog2, "button", &[("id", "dialog2_close_btn")], "Close");

    let dialog3 = el(&mut doc, body, "div", &[("id", "dialog3"), ("role", "alertdialog"), ("class", "hidden")]);
    text_el(&mut doc, dialog3, "button", &[("id", "dialog3_ok")], "OK");

    doc
}

pub fn id(doc: &Document, id: &str) -> NodeId {
    doc.get_element_by_id(id).unwrap_or_else(|| panic!("no element #{id}"))
}

/// Ids of the goods list items in document order
pub fn goods_order(doc: &Document) -> Vec<String> {
    let list = doc
        .tree()
        .element_descendants(doc.tree().root())
        .into_iter()
        .find(|&n| doc.has_class(n, "goods__list"))
        .unwrap();
    doc.tree()
        .child_ids(list)
        .into_iter()
        .map(|n| doc.get_attribute(n, "id").unwrap_or_default().to_string())
        .collect()
}
