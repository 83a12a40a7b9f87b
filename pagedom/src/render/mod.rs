use std::time::Instant;

use crate::animation::AnimationState;
use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, wrap_words};
use crate::types::{Border, Rgb};

/// Text color for elements without a foreground anywhere up the tree.
pub const DEFAULT_FOREGROUND: Rgb = Rgb::new(229, 229, 229);

/// Opacity below which text is not drawn at all.
const INVISIBLE: f32 = 0.02;

/// Everything `render_to_buffer` needs besides the tree and the target.
pub struct Frame<'a> {
    pub layout: &'a LayoutResult,
    pub animation: &'a AnimationState,
    pub now: Instant,
    /// Document scroll offset; flow content is shifted up by this much.
    pub scroll_y: u16,
}

/// A render item with its effective z_index, tree order, and the values
/// accumulated from its ancestors.
struct RenderItem<'a> {
    element: &'a Element,
    z_index: i16,
    tree_order: usize,
    opacity: f32,
    offset: (i16, i16),
    foreground: Rgb,
}

pub fn render_to_buffer(root: &Element, frame: &Frame, buf: &mut Buffer) {
    let mut items = Vec::new();
    collect_elements(
        root,
        frame,
        &mut items,
        0,
        root.z_index,
        1.0,
        (0, 0),
        DEFAULT_FOREGROUND,
    );

    // Stable sort keeps tree order within a layer.
    items.sort_by_key(|item| (item.z_index, item.tree_order));

    for item in &items {
        render_single_element(item, frame, buf);
    }

    log::trace!("rendered {} elements at scroll {}", items.len(), frame.scroll_y);
}

#[allow(clippy::too_many_arguments)]
fn collect_elements<'a>(
    element: &'a Element,
    frame: &Frame,
    list: &mut Vec<RenderItem<'a>>,
    tree_order: usize,
    parent_z_index: i16,
    parent_opacity: f32,
    parent_offset: (i16, i16),
    parent_foreground: Rgb,
) -> usize {
    let mut order = tree_order;
    let effective_z = element.z_index.max(parent_z_index);

    let animated = frame.animation.resolve(element, frame.now);
    let opacity = parent_opacity * animated.opacity.clamp(0.0, 1.0);
    let offset = (
        parent_offset.0.saturating_add(animated.translate.0),
        parent_offset.1.saturating_add(animated.translate.1),
    );
    let foreground = element
        .style
        .foreground
        .map_or(parent_foreground, |c| c.to_rgb());

    list.push(RenderItem {
        element,
        z_index: effective_z,
        tree_order: order,
        opacity,
        offset,
        foreground,
    });
    order += 1;

    if let Content::Children(children) = &element.content {
        for child in children {
            order = collect_elements(
                child,
                frame,
                list,
                order,
                effective_z,
                opacity,
                offset,
                foreground,
            );
        }
    }

    order
}

/// Screen-space box: signed so partly scrolled-off elements still paint.
#[derive(Debug, Clone, Copy)]
struct ScreenRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl ScreenRect {
    fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x + left as i32,
            y: self.y + top as i32,
            width: (self.width - left as i32 - right as i32).max(0),
            height: (self.height - top as i32 - bottom as i32).max(0),
        }
    }

    fn right(&self) -> i32 {
        self.x + self.width
    }

    fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

fn screen_rect(rect: &Rect, fixed: bool, scroll_y: u16, offset: (i16, i16)) -> ScreenRect {
    let scroll = if fixed { 0 } else { scroll_y as i32 };
    ScreenRect {
        x: rect.x as i32 + offset.0 as i32,
        y: rect.y as i32 - scroll + offset.1 as i32,
        width: rect.width as i32,
        height: rect.height as i32,
    }
}

fn render_single_element(item: &RenderItem, frame: &Frame, buf: &mut Buffer) {
    let element = item.element;
    let Some(layout_rect) = frame.layout.get(&element.id) else {
        return;
    };
    if item.opacity <= 0.0 {
        return;
    }

    let rect = screen_rect(
        layout_rect,
        frame.layout.is_fixed(&element.id),
        frame.scroll_y,
        item.offset,
    );
    if rect.bottom() <= 0 || rect.y >= buf.height() as i32 {
        return;
    }

    if let Some(bg) = element.style.background {
        fill_rect(buf, rect, bg.to_rgb(), bg.alpha() * item.opacity);
    }

    render_border(item, rect, buf);

    if let Content::Text(text) = &element.content {
        render_text(text, item, rect, buf);
    }
}

/// Composite `color` over the cells of `rect`. Fully opaque fills erase
/// what was underneath; translucent ones tint it.
fn fill_rect(buf: &mut Buffer, rect: ScreenRect, color: Rgb, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let opaque = alpha >= 1.0;

    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let Some(cell) = buf.get_mut_at(x, y) else {
                continue;
            };
            if opaque {
                cell.char = ' ';
                cell.wide_continuation = false;
                cell.bg = color;
                cell.fg = color;
            } else {
                cell.bg = cell.bg.blend(color, alpha);
                cell.fg = cell.fg.blend(color, alpha);
            }
        }
    }
}

fn put_char(buf: &mut Buffer, x: i32, y: i32, ch: char, fg: Rgb, alpha: f32, item: &RenderItem) {
    let Some(cell) = buf.get_mut_at(x, y) else {
        return;
    };
    cell.char = ch;
    cell.fg = cell.bg.blend(fg, alpha);
    cell.style = item.element.style.text_style;
    cell.wide_continuation = false;
}

fn render_border(item: &RenderItem, rect: ScreenRect, buf: &mut Buffer) {
    let style = &item.element.style;
    if style.border == Border::None || rect.width == 0 || rect.height == 0 {
        return;
    }

    let color = style.border_color.map_or(item.foreground, |c| c.to_rgb());
    let alpha = item.opacity * style.border_color.map_or(1.0, |c| c.alpha());
    if alpha < INVISIBLE {
        return;
    }

    let (left, right) = (rect.x, rect.right() - 1);
    let (top, bottom) = (rect.y, rect.bottom() - 1);

    match style.border {
        Border::None => {}
        Border::Bottom => {
            for x in left..=right {
                put_char(buf, x, bottom, '─', color, alpha, item);
            }
        }
        Border::Top => {
            for x in left..=right {
                put_char(buf, x, top, '─', color, alpha, item);
            }
        }
        Border::Single | Border::Rounded => {
            let (tl, tr, bl, br) = if style.border == Border::Rounded {
                ('╭', '╮', '╰', '╯')
            } else {
                ('┌', '┐', '└', '┘')
            };
            for x in left + 1..right {
                put_char(buf, x, top, '─', color, alpha, item);
                put_char(buf, x, bottom, '─', color, alpha, item);
            }
            for y in top + 1..bottom {
                put_char(buf, left, y, '│', color, alpha, item);
                put_char(buf, right, y, '│', color, alpha, item);
            }
            put_char(buf, left, top, tl, color, alpha, item);
            put_char(buf, right, top, tr, color, alpha, item);
            put_char(buf, left, bottom, bl, color, alpha, item);
            put_char(buf, right, bottom, br, color, alpha, item);
        }
    }
}

fn render_text(text: &str, item: &RenderItem, rect: ScreenRect, buf: &mut Buffer) {
    let element = item.element;
    let alpha = item.opacity * element.style.foreground.map_or(1.0, |c| c.alpha());
    if alpha < INVISIBLE {
        return;
    }

    let (bt, br, bb, bl) = element.style.border.insets();
    let p = element.padding;
    let inner = rect.shrink(p.top + bt, p.right + br, p.bottom + bb, p.left + bl);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let max_width = inner.width as usize;
    for (line_idx, line) in wrap_words(text, max_width).iter().enumerate() {
        let y = inner.y + line_idx as i32;
        if y >= inner.bottom() {
            break;
        }
        if y < 0 {
            continue;
        }

        let x_offset = align_offset(display_width(line), max_width, element.text_align);
        let mut x = inner.x + x_offset as i32;

        for ch in line.chars() {
            let w = char_width(ch) as i32;
            if w == 0 {
                continue;
            }
            if x + w > inner.right() {
                break;
            }
            put_char(buf, x, y, ch, item.foreground, alpha, item);
            if w == 2 {
                if let Some(cell) = buf.get_mut_at(x + 1, y) {
                    cell.wide_continuation = true;
                }
            }
            x += w;
        }
    }
}
