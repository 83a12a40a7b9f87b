use crate::element::{Content, Element};
use crate::layout::LayoutResult;

struct Candidate<'a> {
    element: &'a Element,
    z_index: i16,
    tree_order: usize,
}

/// Find the topmost clickable element under the screen cell `(x, y)`.
///
/// Flow content is shifted by `scroll_y`; fixed elements are hit where they
/// are pinned. Paint order decides overlap: higher z first, then later in
/// the tree.
pub fn hit_test(
    layout: &LayoutResult,
    root: &Element,
    scroll_y: u16,
    x: u16,
    y: u16,
) -> Option<String> {
    let mut candidates = Vec::new();
    collect(root, 0, root.z_index, &mut candidates);
    candidates.sort_by_key(|c| (c.z_index, c.tree_order));

    candidates
        .iter()
        .rev()
        .filter(|c| c.element.clickable)
        .find(|c| {
            let Some(rect) = layout.get(&c.element.id) else {
                return false;
            };
            let doc_y = if layout.is_fixed(&c.element.id) {
                y as u32
            } else {
                y as u32 + scroll_y as u32
            };
            doc_y <= u16::MAX as u32 && rect.contains(x, doc_y as u16)
        })
        .map(|c| c.element.id.clone())
}

fn collect<'a>(
    element: &'a Element,
    tree_order: usize,
    parent_z_index: i16,
    list: &mut Vec<Candidate<'a>>,
) -> usize {
    let z_index = element.z_index.max(parent_z_index);
    list.push(Candidate {
        element,
        z_index,
        tree_order,
    });
    let mut order = tree_order + 1;

    if let Content::Children(children) = &element.content {
        for child in children {
            order = collect(child, order, z_index, list);
        }
    }
    order
}
