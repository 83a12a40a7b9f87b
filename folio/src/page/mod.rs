//! Views: pure functions from page state to element trees.

pub mod about;
pub mod blog;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod timeline;

use pagedom::{Edges, Element, Size, TextStyle};

use crate::theme::Theme;

/// Widest the page content grows; wider viewports center it.
pub const CONTENT_WIDTH: u16 = 100;

pub const NAV_BAR_ID: &str = "nav";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_BRAND_ID: &str = "nav-brand";
pub const OVERLAY_BACKDROP_ID: &str = "overlay-backdrop";
pub const OVERLAY_PANEL_ID: &str = "overlay-panel";

pub fn nav_link_id(index: usize) -> String {
    format!("nav-link-{index}")
}

pub fn overlay_link_id(index: usize) -> String {
    format!("overlay-link-{index}")
}

/// Screen layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn classify(width: u16, breakpoint: u16) -> Self {
        if width >= breakpoint {
            Viewport::Desktop
        } else {
            Viewport::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == Viewport::Desktop
    }
}

/// A full-width section with vertical breathing room and centered content.
fn section(id: &str, inner: Element) -> Element {
    Element::col()
        .id(id)
        .width(Size::Fill)
        .padding(Edges::symmetric(4, 3))
        .align(pagedom::Align::Center)
        .child(inner.max_width(CONTENT_WIDTH).width(Size::Fill))
}

/// Small uppercase accent heading used at the top of each section.
fn eyebrow(label: &str, theme: &Theme) -> Element {
    Element::text(label.to_uppercase())
        .foreground(theme.accent)
        .text_style(TextStyle::new().bold())
}

/// A pill-style tag.
fn tag(label: &str, theme: &Theme) -> Element {
    Element::text(label)
        .padding(Edges::horizontal(1))
        .background(theme.secondary)
        .foreground(theme.foreground)
}
