use std::time::Duration;

use pagedom::{Edges, Element, Size, TextStyle};

use super::{Viewport, eyebrow, section, tag};
use crate::content::About;
use crate::reveal::RevealController;
use crate::theme::Theme;

pub const SECTION_ID: &str = "about";

/// The skills column trails the biography.
const SECOND_COLUMN_DELAY: Duration = Duration::from_millis(200);

/// Hidden About content sits two rows low.
pub const HIDDEN_OFFSET: (i16, i16) = (0, 2);

pub fn view(
    about: &About,
    reveal: &RevealController,
    theme: &Theme,
    viewport: Viewport,
) -> Element {
    let bio = Element::col()
        .id("about-bio")
        .width(Size::Fill)
        .gap(1)
        .child(eyebrow("About me", theme))
        .child(Element::text(&about.lead).text_style(TextStyle::new().bold()))
        .children(
            about
                .paragraphs
                .iter()
                .map(|p| Element::text(p).foreground(theme.muted)),
        );

    let skills = Element::col()
        .id("about-skills")
        .width(Size::Fill)
        .gap(1)
        .child(Element::text("TECHNICAL SKILLS").foreground(theme.muted))
        .child(
            Element::row()
                .wrap(true)
                .gap(1)
                .children(about.skills.iter().map(|s| tag(s, theme))),
        )
        .child(
            Element::text("CERTIFICATIONS")
                .foreground(theme.muted)
                .margin(Edges::top(1)),
        )
        .children(about.certifications.iter().map(|cert| {
            Element::row()
                .gap(1)
                .child(Element::text("•").foreground(theme.accent))
                .child(Element::text(cert).width(Size::Fill))
        }));

    let bio = reveal.style(0).apply(bio);
    let skills = reveal.style_with_delay(0, SECOND_COLUMN_DELAY).apply(skills);

    let grid = if viewport.is_desktop() {
        Element::row().gap(6).child(bio).child(skills)
    } else {
        Element::col().gap(3).child(bio).child(skills)
    };

    section(SECTION_ID, grid)
}
