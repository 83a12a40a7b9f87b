//! The scrollable document: viewport, scroll offset, and overflow.

use std::cell::Cell;
use std::rc::Rc;

use log::trace;

use crate::layout::{LayoutResult, Rect};
use crate::types::Overflow;

/// Shared handle to the document's overflow setting.
///
/// Cloning yields another handle to the same flag, so a controller can hold
/// one and lock or unlock scrolling without borrowing the document.
#[derive(Debug, Clone, Default)]
pub struct ScrollBehavior(Rc<Cell<Overflow>>);

impl ScrollBehavior {
    pub fn get(&self) -> Overflow {
        self.0.get()
    }

    pub fn set(&self, overflow: Overflow) {
        self.0.set(overflow);
    }
}

/// Geometry of an element relative to the viewport's top-left corner.
/// `y` is negative for elements scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug)]
pub struct Document {
    width: u16,
    height: u16,
    scroll_y: u16,
    content_height: u16,
    overflow: ScrollBehavior,
}

impl Document {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
            content_height: height,
            overflow: ScrollBehavior::default(),
        }
    }

    pub fn viewport_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// The visible window in document coordinates.
    pub fn viewport(&self) -> Rect {
        Rect::new(0, self.scroll_y, self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_scroll();
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll_y
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    /// Record the document height from the latest layout.
    pub fn set_content_height(&mut self, height: u16) {
        self.content_height = height;
        self.clamp_scroll();
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.overflow.clone()
    }

    /// Scroll by `dy` rows. Returns true if the offset changed.
    /// Does nothing while overflow is hidden.
    pub fn scroll_by(&mut self, dy: i32) -> bool {
        let target = (self.scroll_y as i32 + dy).clamp(0, u16::MAX as i32) as u16;
        self.scroll_to(target)
    }

    /// Scroll so that document row `y` is at the top, clamped to the
    /// scrollable range. Returns true if the offset changed.
    pub fn scroll_to(&mut self, y: u16) -> bool {
        if self.overflow() == Overflow::Hidden {
            trace!("scroll to {y} ignored: overflow hidden");
            return false;
        }
        self.jump_to(y)
    }

    /// Programmatic scroll, as an anchor jump does. Hidden overflow only
    /// blocks user scrolling, so this still moves the page. Returns true
    /// if the offset changed.
    pub fn jump_to(&mut self, y: u16) -> bool {
        let target = y.min(self.max_scroll());
        if target == self.scroll_y {
            return false;
        }
        self.scroll_y = target;
        true
    }

    fn clamp_scroll(&mut self) {
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Viewport-relative geometry of a laid-out element.
    pub fn bounding_client_rect(&self, layout: &LayoutResult, id: &str) -> Option<ClientRect> {
        let rect = layout.get(id)?;
        let y = if layout.is_fixed(id) {
            rect.y as i32
        } else {
            rect.y as i32 - self.scroll_y as i32
        };
        Some(ClientRect {
            x: rect.x as i32,
            y,
            width: rect.width,
            height: rect.height,
        })
    }
}
