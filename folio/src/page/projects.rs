use pagedom::{Border, Edges, Element, Size, Style, TextStyle};

use super::{Viewport, eyebrow, section, tag};
use crate::content::Project;
use crate::reveal::{INDEX_ATTR, RevealController};
use crate::theme::Theme;

pub const SECTION_ID: &str = "projects";
pub const HIDDEN_OFFSET: (i16, i16) = (0, 2);

pub fn card_id(index: usize) -> String {
    format!("project-card-{index}")
}

fn card(index: usize, project: &Project, theme: &Theme) -> Element {
    let mut title = Element::text(&project.title).text_style(TextStyle::new().bold());
    if let Some(link) = &project.link {
        title = title.href(link).foreground(theme.accent);
    }

    Element::col()
        .id(card_id(index))
        .data(INDEX_ATTR, index.to_string())
        .width(Size::Fill)
        .gap(1)
        .padding(Edges::symmetric(1, 2))
        .style(
            Style::new()
                .background(theme.card)
                .border(Border::Rounded)
                .border_color(theme.border),
        )
        .child(title)
        .child(
            Element::text(&project.description)
                .foreground(theme.muted)
                .margin(Edges::bottom(1)),
        )
        .child(
            Element::row()
                .wrap(true)
                .gap(1)
                .children(project.tags.iter().map(|t| tag(t, theme))),
        )
}

pub fn view(
    projects: &[Project],
    reveal: &RevealController,
    theme: &Theme,
    viewport: Viewport,
) -> Element {
    let cards = projects
        .iter()
        .enumerate()
        .map(|(i, p)| reveal.style(i).apply(card(i, p, theme)));

    let grid = if viewport.is_desktop() {
        Element::row().gap(3).children(cards)
    } else {
        Element::col().gap(2).children(cards)
    };

    section(
        SECTION_ID,
        Element::col()
            .gap(1)
            .child(eyebrow("Projects", theme))
            .child(
                Element::text(
                    "A selection of work that showcases my expertise in data engineering \
                     and system design.",
                )
                .max_width(64)
                .text_style(TextStyle::new().bold())
                .margin(Edges::bottom(2)),
            )
            .child(grid),
    )
}
