//! Scroll and visibility helpers

use fos_dom::{Document, NodeId};

use crate::Result;

/// Whether the element's box lies entirely inside the viewport
pub fn is_element_in_view(doc: &Document, element: NodeId) -> bool {
    let bounding = doc.bounding_client_rect(element);
    let viewport = doc.viewport();

    bounding.top() >= 0.0
        && bounding.left() >= 0.0
        && bounding.bottom() <= viewport.height
        && bounding.right() <= viewport.width
}

/// Whether the element's content overflows its visible height
pub fn is_scrollable(doc: &Document, element: NodeId) -> bool {
    let metrics = doc.scroll_metrics(element);
    metrics.client_height < metrics.scroll_height
}

/// Scroll `scroll_parent` so `active` is fully inside its visible area
pub fn maintain_scroll_visibility(
    doc: &mut Document,
    active: NodeId,
    scroll_parent: NodeId,
) -> Result<()> {
    let child = doc.layout(active);
    let parent = doc.layout(scroll_parent);
    let scroll_top = doc.scroll_metrics(scroll_parent).scroll_top;

    let offset_top = child.top() - parent.top();
    let offset_height = child.height;
    let parent_height = parent.height;

    let is_above = offset_top < scroll_top;
    let is_below = offset_top + offset_height > scroll_top + parent_height;

    if is_above {
        doc.scroll_container_to(scroll_parent, offset_top)?;
    } else if is_below {
        doc.scroll_container_to(scroll_parent, offset_top - parent_height + offset_height)?;
    }
    Ok(())
}
