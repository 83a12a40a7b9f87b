use pagedom::{Border, Edges, Element, Justify, Size, Style, TextStyle};

use super::{CONTENT_WIDTH, Viewport};
use crate::content::Profile;
use crate::theme::Theme;

pub const FOOTER_ID: &str = "footer";

pub fn view(profile: &Profile, theme: &Theme, viewport: Viewport, year: i32) -> Element {
    let heading = Element::col()
        .child(Element::text("Let's Connect").text_style(TextStyle::new().bold()))
        .child(Element::text("Open to opportunities and collaborations").foreground(theme.muted));

    let link = |label: &str, href: &str| {
        Element::link(label, href)
            .foreground(theme.muted)
            .text_style(TextStyle::new().underline())
    };
    let links = Element::row()
        .gap(3)
        .child(link("Email", &profile.mailto()))
        .child(link("LinkedIn", &profile.linkedin))
        .child(link("GitHub", &profile.github));

    let top = if viewport.is_desktop() {
        Element::row()
            .width(Size::Fill)
            .justify(Justify::SpaceBetween)
            .child(heading)
            .child(links)
    } else {
        Element::col().gap(2).child(heading).child(links)
    };

    let bottom = Element::col()
        .width(Size::Fill)
        .margin(Edges::top(2))
        .padding(Edges::top(1))
        .style(Style::new().border(Border::Top).border_color(theme.border))
        .foreground(theme.muted)
        .child(Element::text(format!(
            "© {year} {}. All rights reserved.",
            profile.full_name()
        )))
        .child(Element::text(format!("Made with ♥ in {}", profile.location)));

    Element::col()
        .id(FOOTER_ID)
        .width(Size::Fill)
        .padding(Edges::symmetric(3, 3))
        .align(pagedom::Align::Center)
        .style(Style::new().border(Border::Top).border_color(theme.border))
        .child(
            Element::col()
                .width(Size::Fill)
                .max_width(CONTENT_WIDTH)
                .child(top)
                .child(bottom),
        )
}
