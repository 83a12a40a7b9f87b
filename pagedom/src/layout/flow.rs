use std::collections::{HashMap, HashSet};

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{max_line_width, wrap_words};
use crate::types::{Align, Direction, Justify, Position, Size};

/// Element rects from one layout pass.
///
/// Flow and absolute elements are in document coordinates (they scroll).
/// Fixed elements, and everything inside them, are in viewport coordinates.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    fixed: HashSet<String>,
    document_height: u16,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    /// True if the element is pinned to the viewport.
    pub fn is_fixed(&self, id: &str) -> bool {
        self.fixed.contains(id)
    }

    /// Height of the scrollable document.
    pub fn document_height(&self) -> u16 {
        self.document_height
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    fn insert(&mut self, id: &str, rect: Rect, fixed: bool) {
        self.rects.insert(id.to_string(), rect);
        if fixed {
            self.fixed.insert(id.to_string());
        }
    }
}

struct Pass<'a> {
    viewport: Rect,
    result: &'a mut LayoutResult,
}

/// Lay out `root` as a document `viewport.width` columns wide.
pub fn layout(root: &Element, viewport: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let margin = root.margin;
    let available = viewport.width.saturating_sub(margin.horizontal_total());
    let width = block_width(root, available);
    let height = match root.height {
        Size::Fixed(h) => h,
        Size::Fill => measure_height(root, width).max(viewport.height),
        Size::Auto => measure_height(root, width),
    };
    let rect = Rect::new(viewport.x + margin.left, margin.top, width, height);

    {
        let mut pass = Pass {
            viewport,
            result: &mut result,
        };
        place(root, rect, false, &mut pass);
    }

    result.document_height = rect.bottom().saturating_add(margin.bottom);
    result
}

fn place(element: &Element, rect: Rect, fixed: bool, pass: &mut Pass) {
    pass.result.insert(&element.id, rect, fixed);
    layout_children(element, rect, fixed, pass);
}

fn insets(element: &Element) -> (u16, u16, u16, u16) {
    let (bt, br, bb, bl) = element.style.border.insets();
    let p = element.padding;
    (p.top + bt, p.right + br, p.bottom + bb, p.left + bl)
}

fn inner_width(element: &Element, width: u16) -> u16 {
    let (_, r, _, l) = insets(element);
    width.saturating_sub(l + r)
}

fn is_flow(element: &Element) -> bool {
    element.position == Position::Static
}

fn flow_children(element: &Element) -> Vec<&Element> {
    match &element.content {
        Content::Children(children) => children.iter().filter(|c| is_flow(c)).collect(),
        _ => Vec::new(),
    }
}

/// Width of a block-level box given the space its parent offers.
fn block_width(element: &Element, available: u16) -> u16 {
    let width = match element.width {
        Size::Fixed(n) => n,
        Size::Fill | Size::Auto => available,
    };
    let width = element.max_width.map_or(width, |m| width.min(m));
    width.min(available)
}

/// Content-determined width, ignoring wrapping.
fn intrinsic_width(element: &Element) -> u16 {
    if let Size::Fixed(n) = element.width {
        return n;
    }

    let (_, r, _, l) = insets(element);
    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => max_line_width(text) as u16,
        Content::Children(_) => {
            let children = flow_children(element);
            let outer = children
                .iter()
                .map(|c| intrinsic_width(c) + c.margin.horizontal_total());
            if element.direction == Direction::Row {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                outer.sum::<u16>() + gaps
            } else {
                outer.max().unwrap_or(0)
            }
        }
    };

    let width = content + l + r;
    element.max_width.map_or(width, |m| width.min(m))
}

/// Border-box height of `element` laid out `width` columns wide.
fn measure_height(element: &Element, width: u16) -> u16 {
    let height = match element.height {
        Size::Fixed(h) => h,
        Size::Fill | Size::Auto => {
            let (t, _, b, _) = insets(element);
            let inner = inner_width(element, width);
            let content = match &element.content {
                Content::None => 0,
                Content::Text(text) => wrap_words(text, inner as usize).len() as u16,
                Content::Children(_) => children_height(element, inner),
            };
            content + t + b
        }
    };
    element.min_height.map_or(height, |m| height.max(m))
}

fn children_height(element: &Element, inner_width: u16) -> u16 {
    let children = flow_children(element);
    if children.is_empty() {
        return 0;
    }

    match element.direction {
        Direction::Column => {
            let gaps = element.gap * (children.len() - 1) as u16;
            children
                .iter()
                .map(|c| {
                    let available = inner_width.saturating_sub(c.margin.horizontal_total());
                    measure_height(c, block_width(c, available)) + c.margin.vertical_total()
                })
                .sum::<u16>()
                + gaps
        }
        Direction::Row => {
            let widths = row_widths(element, &children, inner_width);
            row_lines(element, &children, &widths, inner_width)
                .iter()
                .map(|line| line_height(&children, &widths, line))
                .sum()
        }
    }
}

/// Border-box widths of a row's flow children.
fn row_widths(element: &Element, children: &[&Element], inner_width: u16) -> Vec<u16> {
    let mut widths: Vec<u16> = children
        .iter()
        .map(|c| {
            let available = inner_width.saturating_sub(c.margin.horizontal_total());
            match c.width {
                Size::Fill if !element.wrap => 0,
                _ => intrinsic_width(c).min(available),
            }
        })
        .collect();

    let fill_count = children
        .iter()
        .filter(|c| c.width == Size::Fill && !element.wrap)
        .count() as u16;
    if fill_count > 0 {
        let used: u16 = children
            .iter()
            .zip(&widths)
            .map(|(c, w)| w + c.margin.horizontal_total())
            .sum::<u16>()
            + element.gap * children.len().saturating_sub(1) as u16;
        let share = inner_width.saturating_sub(used) / fill_count;
        for (child, width) in children.iter().zip(widths.iter_mut()) {
            if child.width == Size::Fill {
                *width = share;
            }
        }
    }

    widths
}

/// Split a row's children into lines. Without wrap there is one line.
fn row_lines(
    element: &Element,
    children: &[&Element],
    widths: &[u16],
    inner_width: u16,
) -> Vec<Vec<usize>> {
    if !element.wrap {
        return vec![(0..children.len()).collect()];
    }

    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0u16;

    for (i, child) in children.iter().enumerate() {
        let outer = widths[i] + child.margin.horizontal_total();
        let needed = if current.is_empty() {
            outer
        } else {
            outer + element.gap
        };
        if !current.is_empty() && used + needed > inner_width {
            lines.push(std::mem::take(&mut current));
            used = outer;
        } else {
            used += needed;
        }
        current.push(i);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn line_height(children: &[&Element], widths: &[u16], line: &[usize]) -> u16 {
    line.iter()
        .map(|&i| measure_height(children[i], widths[i]) + children[i].margin.vertical_total())
        .max()
        .unwrap_or(0)
}

/// (leading offset, spacing between items) for distributing `extra` space.
fn justify_offsets(justify: Justify, extra: u16, count: usize, gap: u16) -> (u16, u16) {
    match justify {
        Justify::Start => (0, gap),
        Justify::Center => (extra / 2, gap),
        Justify::End => (extra, gap),
        Justify::SpaceBetween if count > 1 => (0, gap + extra / (count - 1) as u16),
        Justify::SpaceBetween => (0, gap),
    }
}

fn align_offset(align: Align, available: u16, size: u16) -> u16 {
    match align {
        Align::Start => 0,
        Align::Center => available.saturating_sub(size) / 2,
        Align::End => available.saturating_sub(size),
    }
}

fn layout_children(element: &Element, rect: Rect, fixed: bool, pass: &mut Pass) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let (t, r, b, l) = insets(element);
    let inner = rect.shrink(t, r, b, l);
    let flow = flow_children(element);

    if !flow.is_empty() {
        match element.direction {
            Direction::Column => layout_column(element, &flow, inner, fixed, pass),
            Direction::Row => layout_row(element, &flow, inner, fixed, pass),
        }
    }

    for child in children {
        match child.position {
            Position::Static => {}
            Position::Absolute => {
                let child_rect = inset_rect(child, rect);
                place(child, child_rect, fixed, pass);
            }
            Position::Fixed => {
                let child_rect = inset_rect(child, pass.viewport);
                place(child, child_rect, true, pass);
            }
        }
    }
}

fn layout_column(
    element: &Element,
    children: &[&Element],
    inner: Rect,
    fixed: bool,
    pass: &mut Pass,
) {
    let sizes: Vec<(u16, u16)> = children
        .iter()
        .map(|c| {
            let available = inner.width.saturating_sub(c.margin.horizontal_total());
            let width = block_width(c, available);
            (width, measure_height(c, width))
        })
        .collect();

    let total: u16 = children
        .iter()
        .zip(&sizes)
        .map(|(c, (_, h))| h + c.margin.vertical_total())
        .sum::<u16>()
        + element.gap * (children.len() - 1) as u16;

    // Fill children absorb the leftover height of a taller container.
    let fill_count = children.iter().filter(|c| c.height == Size::Fill).count() as u16;
    let leftover = inner.height.saturating_sub(total);
    let fill_extra = if fill_count > 0 { leftover / fill_count } else { 0 };
    let extra = if fill_count > 0 { 0 } else { leftover };

    let (start, spacing) = justify_offsets(element.justify, extra, children.len(), element.gap);
    let mut y = inner.y + start;

    for (child, &(width, height)) in children.iter().zip(&sizes) {
        let height = if child.height == Size::Fill {
            height + fill_extra
        } else {
            height
        };
        let available = inner.width.saturating_sub(child.margin.horizontal_total());
        let x = inner.x + child.margin.left + align_offset(element.align, available, width);
        let child_rect = Rect::new(x, y + child.margin.top, width, height);
        place(child, child_rect, fixed, pass);
        y += child.margin.vertical_total() + height + spacing;
    }
}

fn layout_row(element: &Element, children: &[&Element], inner: Rect, fixed: bool, pass: &mut Pass) {
    let widths = row_widths(element, children, inner.width);
    let lines = row_lines(element, children, &widths, inner.width);
    let mut y = inner.y;

    for line in &lines {
        let height = line_height(children, &widths, line);
        let used: u16 = line
            .iter()
            .map(|&i| widths[i] + children[i].margin.horizontal_total())
            .sum::<u16>()
            + element.gap * line.len().saturating_sub(1) as u16;
        let extra = inner.width.saturating_sub(used);
        let (start, spacing) = justify_offsets(element.justify, extra, line.len(), element.gap);
        let mut x = inner.x + start;

        for &i in line {
            let child = children[i];
            let child_height = measure_height(child, widths[i]);
            let available = height.saturating_sub(child.margin.vertical_total());
            let cy = y + child.margin.top + align_offset(element.align, available, child_height);
            let child_rect = Rect::new(x + child.margin.left, cy, widths[i], child_height);
            place(child, child_rect, fixed, pass);
            x += widths[i] + child.margin.horizontal_total() + spacing;
        }

        y += height;
    }
}

/// Rect for an absolute/fixed element inside `container` from its insets.
fn inset_rect(element: &Element, container: Rect) -> Rect {
    let cx = container.x as i32;
    let cy = container.y as i32;
    let cw = container.width as i32;
    let ch = container.height as i32;

    let width = match (element.left, element.right, element.width) {
        (_, _, Size::Fixed(w)) => w as i32,
        (Some(l), Some(r), _) => cw - l as i32 - r as i32,
        (_, _, Size::Fill) => cw,
        _ => intrinsic_width(element).min(container.width) as i32,
    }
    .max(0);

    let x = match (element.left, element.right) {
        (Some(l), _) => cx + l as i32,
        (None, Some(r)) => cx + cw - r as i32 - width,
        (None, None) => cx,
    };

    let height = match (element.top, element.bottom, element.height) {
        (_, _, Size::Fixed(h)) => h as i32,
        (Some(t), Some(b), _) => ch - t as i32 - b as i32,
        (_, _, Size::Fill) => ch,
        _ => measure_height(element, width as u16) as i32,
    }
    .max(0);

    let y = match (element.top, element.bottom) {
        (Some(t), _) => cy + t as i32,
        (None, Some(b)) => cy + ch - b as i32 - height,
        (None, None) => cy,
    };

    // Parts pushed above/left of the origin are clipped away.
    let clip_x = (-x).max(0);
    let clip_y = (-y).max(0);
    Rect::new(
        x.max(0) as u16,
        y.max(0) as u16,
        (width - clip_x).max(0) as u16,
        (height - clip_y).max(0) as u16,
    )
}
