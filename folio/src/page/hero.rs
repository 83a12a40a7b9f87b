use std::time::Duration;

use pagedom::{Edges, Element, Justify, Keyframes, Size, TextStyle};

use super::CONTENT_WIDTH;
use crate::content::Profile;
use crate::theme::Theme;

const SLIDE_UP: Duration = Duration::from_millis(700);
const STEP: Duration = Duration::from_millis(100);

/// Mount entrance for the `step`-th hero line.
fn slide_up(step: u32) -> Keyframes {
    Keyframes::fade_in(SLIDE_UP)
        .from_translate(0, 1)
        .delay(STEP * step)
}

/// Full-height intro. `viewport_height` keeps it a screen tall on any
/// terminal.
pub fn view(profile: &Profile, theme: &Theme, viewport_height: u16) -> Element {
    let role = Element::text(&profile.role)
        .id("hero-role")
        .foreground(theme.muted)
        .animation(slide_up(0));

    let name = Element::col()
        .id("hero-name")
        .animation(slide_up(1))
        .child(Element::text(&profile.first_name).text_style(TextStyle::new().bold()))
        .child(
            Element::text(&profile.last_name)
                .foreground(theme.accent)
                .text_style(TextStyle::new().bold()),
        );

    let tagline = Element::text(&profile.tagline)
        .id("hero-tagline")
        .max_width(64)
        .foreground(theme.muted)
        .animation(slide_up(2));

    let contact = Element::row()
        .id("hero-contact")
        .wrap(true)
        .gap(3)
        .animation(slide_up(3))
        .child(
            Element::link(format!("✉ {}", profile.email), profile.mailto())
                .id("hero-email")
                .foreground(theme.muted),
        )
        .child(
            Element::link("in LinkedIn", &profile.linkedin)
                .id("hero-linkedin")
                .foreground(theme.muted),
        )
        .child(Element::text(format!("⌖ {}", profile.location)).foreground(theme.muted));

    let explore = Element::link("Scroll to explore ↓", "#about")
        .id("hero-explore")
        .margin(Edges::top(2))
        .foreground(theme.muted)
        .animation(slide_up(4));

    Element::col()
        .id("hero")
        .width(Size::Fill)
        .min_height(viewport_height)
        .justify(Justify::Center)
        .align(pagedom::Align::Center)
        .padding(Edges::new(4, 3, 2, 3))
        .child(
            Element::col()
                .width(Size::Fill)
                .max_width(CONTENT_WIDTH)
                .gap(1)
                .child(role)
                .child(name)
                .child(tagline)
                .child(contact)
                .child(explore),
        )
}
