use pagedom::{Edges, Element, Size, TextStyle};

use super::{eyebrow, section};
use crate::content::Milestone;
use crate::reveal::{INDEX_ATTR, RevealController};
use crate::theme::Theme;

pub const SECTION_ID: &str = "timeline";
pub const HIDDEN_OFFSET: (i16, i16) = (0, 2);

pub fn item_id(index: usize) -> String {
    format!("timeline-item-{index}")
}

fn milestone(index: usize, m: &Milestone, theme: &Theme) -> Element {
    Element::row()
        .id(item_id(index))
        .data(INDEX_ATTR, index.to_string())
        .width(Size::Fill)
        .gap(2)
        .child(
            Element::text(&m.period)
                .width(Size::Fixed(12))
                .foreground(theme.accent),
        )
        .child(
            Element::col()
                .width(Size::Fill)
                .padding(Edges::bottom(1))
                .child(Element::text(&m.role).text_style(TextStyle::new().bold()))
                .child(Element::text(&m.organization).foreground(theme.muted))
                .child(
                    Element::text(&m.summary)
                        .foreground(theme.muted)
                        .margin(Edges::top(1)),
                ),
        )
}

pub fn view(milestones: &[Milestone], reveal: &RevealController, theme: &Theme) -> Element {
    let items = milestones
        .iter()
        .enumerate()
        .map(|(i, m)| reveal.style(i).apply(milestone(i, m, theme)));

    section(
        SECTION_ID,
        Element::col()
            .gap(1)
            .child(eyebrow("Timeline", theme))
            .child(
                Element::text("Where I have been, and what I built along the way.")
                    .text_style(TextStyle::new().bold())
                    .margin(Edges::bottom(1)),
            )
            .child(Element::col().gap(1).children(items)),
    )
}
