use pagedom::{Border, Edges, Element, Size, Style, TextStyle};

use super::{Viewport, eyebrow, section};
use crate::content::Post;
use crate::reveal::{INDEX_ATTR, RevealController};
use crate::theme::Theme;

pub const SECTION_ID: &str = "blog";

/// Hidden posts wait four columns to the left and slide in.
pub const HIDDEN_OFFSET: (i16, i16) = (-4, 0);

pub fn post_id(index: usize) -> String {
    format!("blog-post-{index}")
}

fn post(index: usize, post: &Post, last: bool, theme: &Theme, viewport: Viewport) -> Element {
    let meta = Element::text(format!("{} • {}", post.date, post.read_time))
        .foreground(theme.muted)
        .text_style(TextStyle::new().italic());

    let body = Element::col()
        .width(Size::Fill)
        .child(
            Element::text(&post.category)
                .padding(Edges::horizontal(1))
                .background(theme.accent.with_alpha(0.15))
                .foreground(theme.accent),
        )
        .child(
            Element::row()
                .width(Size::Fill)
                .gap(2)
                .child(
                    Element::text(&post.title)
                        .width(Size::Fill)
                        .text_style(TextStyle::new().bold()),
                )
                .child(Element::text("↗").foreground(theme.muted)),
        )
        .child(
            Element::text(&post.excerpt)
                .max_width(72)
                .foreground(theme.muted)
                .margin(Edges::top(1)),
        );

    let mut row = if viewport.is_desktop() {
        Element::row()
            .gap(4)
            .child(meta.width(Size::Fixed(24)))
            .child(body)
    } else {
        Element::col().gap(1).child(meta).child(body)
    };
    row = row
        .id(post_id(index))
        .data(INDEX_ATTR, index.to_string())
        .width(Size::Fill)
        .padding(Edges::vertical(1));
    if !last {
        row = row.style(Style::new().border(Border::Bottom).border_color(theme.border));
    }
    row
}

pub fn view(
    posts: &[Post],
    reveal: &RevealController,
    theme: &Theme,
    viewport: Viewport,
) -> Element {
    let count = posts.len();
    let items = posts
        .iter()
        .enumerate()
        .map(|(i, p)| reveal.style(i).apply(post(i, p, i + 1 == count, theme, viewport)));

    section(
        SECTION_ID,
        Element::col()
            .gap(1)
            .child(eyebrow("Blog", theme))
            .child(
                Element::text(
                    "Thoughts on data science, engineering, and the journey of continuous \
                     learning.",
                )
                .max_width(64)
                .text_style(TextStyle::new().bold())
                .margin(Edges::bottom(2)),
            )
            .child(Element::col().children(items)),
    )
    .background(theme.card)
}
