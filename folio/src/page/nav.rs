//! The fixed navigation bar and, while the menu is open, its overlay.

use pagedom::{
    Align, Border, Color, Edges, Element, Justify, Position, Size, Style, TextAlign, TextStyle,
};

use super::{
    CONTENT_WIDTH, NAV_BAR_ID, NAV_BRAND_ID, NAV_TOGGLE_ID, OVERLAY_BACKDROP_ID, OVERLAY_PANEL_ID,
    Viewport, nav_link_id, overlay_link_id,
};
use crate::content::{NavItem, Profile};
use crate::nav::{NavBar, OverlayGeometry};
use crate::overlay::{Stage, script};
use crate::theme::Theme;

/// Widest the overlay panel gets; the backdrop shows beside it.
pub const PANEL_WIDTH: u16 = 48;

const BAR_Z: i16 = 50;
const BACKDROP_Z: i16 = 55;
const PANEL_Z: i16 = 60;
const TOGGLE_Z: i16 = 100;

pub fn bar(
    nav: &NavBar,
    items: &[NavItem],
    profile: &Profile,
    theme: &Theme,
    viewport: Viewport,
) -> Element {
    let mut inner = Element::row()
        .width(Size::Fill)
        .max_width(CONTENT_WIDTH)
        .padding(Edges::symmetric(1, 2))
        .gap(2)
        .align(Align::Center);

    if viewport.is_desktop() {
        inner = inner
            .child(
                Element::link(&profile.monogram, "#")
                    .id(NAV_BRAND_ID)
                    .width(Size::Fill)
                    .text_style(TextStyle::new().bold()),
            )
            .child(Element::row().gap(4).children(items.iter().enumerate().map(
                |(i, item)| {
                    Element::link(&item.label, &item.href)
                        .id(nav_link_id(i))
                        .foreground(theme.muted)
                },
            )));
    } else {
        inner = inner
            .child(
                Element::link(format!("{}  {}", profile.monogram, profile.role), "#")
                    .id(NAV_BRAND_ID)
                    .width(Size::Fill)
                    .text_style(TextStyle::new().bold()),
            )
            .child(toggle(nav.is_open(), theme));
    }

    let mut style = Style::new();
    if nav.scrolled() {
        style = style
            .background(theme.background.with_alpha(0.9))
            .border(Border::Bottom)
            .border_color(theme.border);
    }

    Element::col()
        .id(NAV_BAR_ID)
        .position(Position::Fixed)
        .top(0)
        .left(0)
        .right(0)
        .z_index(BAR_Z)
        .align(Align::Center)
        .style(style)
        .child(inner)
}

/// Three-line toggle, crossed while open.
fn toggle(open: bool, theme: &Theme) -> Element {
    let (glyph, color) = if open {
        ("✕", theme.accent)
    } else {
        ("☰", theme.foreground)
    };
    Element::text(glyph)
        .id(NAV_TOGGLE_ID)
        .width(Size::Fixed(3))
        .text_align(TextAlign::Center)
        .z_index(TOGGLE_Z)
        .foreground(color)
        .clickable(true)
}

/// Backdrop and panel for an open menu, pinned under the bar.
pub fn overlay(
    geometry: OverlayGeometry,
    items: &[NavItem],
    theme: &Theme,
    viewport_width: u16,
) -> Vec<Element> {
    let top = geometry.top as i16;
    let panel_width = viewport_width.min(PANEL_WIDTH);

    let mut backdrop = Element::box_()
        .id(OVERLAY_BACKDROP_ID)
        .position(Position::Fixed)
        .inset()
        .top(top)
        .z_index(BACKDROP_Z)
        .background(Color::rgb(0, 0, 0).with_alpha(0.4))
        .clickable(true);

    let mut panel = Element::col()
        .id(OVERLAY_PANEL_ID)
        .position(Position::Fixed)
        .top(top)
        .left(0)
        .bottom(0)
        .width(Size::Fixed(panel_width))
        .z_index(PANEL_Z)
        .background(theme.background)
        // Swallows clicks so they never reach the backdrop underneath.
        .clickable(true);

    let mut links = Vec::with_capacity(items.len());
    for (stage, cue) in script(items.len()) {
        let entrance = cue.keyframes();
        match stage {
            Stage::Backdrop => backdrop = backdrop.animation(entrance),
            Stage::Panel => panel = panel.animation(entrance),
            Stage::Pattern => {
                let layer = pattern(panel_width, geometry.height, theme);
                panel = panel.child(layer.animation(entrance));
            }
            Stage::Glow(i) => panel = panel.child(glow(i, theme).animation(entrance)),
            Stage::Link(i) => {
                if let Some(item) = items.get(i) {
                    links.push(link(i, item, theme).animation(entrance));
                }
            }
            Stage::Footer => {
                panel = panel
                    .child(
                        Element::col()
                            .id("overlay-links")
                            .padding(Edges::symmetric(2, 3))
                            .gap(1)
                            .children(links.drain(..)),
                    )
                    .child(footer(theme).animation(entrance));
            }
        }
    }

    vec![backdrop, panel]
}

fn link(index: usize, item: &NavItem, theme: &Theme) -> Element {
    Element::row()
        .id(overlay_link_id(index))
        .href(&item.href)
        .width(Size::Fill)
        .justify(Justify::SpaceBetween)
        .padding(Edges::symmetric(1, 2))
        .style(Style::new().border(Border::Rounded).border_color(theme.border))
        .child(Element::text(&item.label).text_style(TextStyle::new().bold()))
        .child(Element::text("→").foreground(theme.accent.with_alpha(0.6)))
}

fn footer(theme: &Theme) -> Element {
    Element::col()
        .id("overlay-footer")
        .margin(Edges::horizontal(3))
        .padding(Edges::top(1))
        .style(Style::new().border(Border::Top).border_color(theme.border))
        .child(
            Element::text("Navigate my story")
                .width(Size::Fill)
                .text_align(TextAlign::Center)
                .foreground(theme.muted),
        )
}

/// Dot grid behind the links.
fn pattern(width: u16, height: u16, theme: &Theme) -> Element {
    let line = vec!["·"; (width as usize).div_ceil(4)].join("   ");
    let rows = (height as usize).div_ceil(2);
    Element::col()
        .id("overlay-pattern")
        .position(Position::Absolute)
        .inset()
        .gap(1)
        .foreground(theme.foreground.with_alpha(0.2))
        .children((0..rows).map(|_| Element::text(line.clone())))
}

fn glow(index: usize, theme: &Theme) -> Element {
    let glow = Element::box_()
        .id(format!("overlay-glow-{index}"))
        .position(Position::Absolute);
    if index == 0 {
        glow.top(2)
            .right(2)
            .width(Size::Fixed(16))
            .height(Size::Fixed(6))
            .background(theme.accent.with_alpha(0.10))
    } else {
        glow.bottom(2)
            .left(2)
            .width(Size::Fixed(12))
            .height(Size::Fixed(4))
            .background(theme.accent.with_alpha(0.05))
    }
}
