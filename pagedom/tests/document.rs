use pagedom::{layout, Document, Element, Overflow, Position, Rect, Size};

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut doc = Document::new(20, 10);
    doc.set_content_height(25);

    assert_eq!(doc.max_scroll(), 15);
    assert!(doc.scroll_by(100));
    assert_eq!(doc.scroll_y(), 15);
    assert!(doc.scroll_by(-4));
    assert_eq!(doc.scroll_y(), 11);
    assert!(!doc.scroll_by(0));
}

#[test]
fn test_hidden_overflow_blocks_scrolling() {
    let mut doc = Document::new(20, 10);
    doc.set_content_height(40);

    let behavior = doc.scroll_behavior();
    behavior.set(Overflow::Hidden);
    assert_eq!(doc.overflow(), Overflow::Hidden);
    assert!(!doc.scroll_by(5));
    assert_eq!(doc.scroll_y(), 0);

    behavior.set(Overflow::Auto);
    assert!(doc.scroll_by(5));
}

#[test]
fn test_jump_moves_page_under_hidden_overflow() {
    let mut doc = Document::new(20, 10);
    doc.set_content_height(40);
    doc.scroll_behavior().set(Overflow::Hidden);

    assert!(!doc.scroll_to(12));
    assert!(doc.jump_to(12));
    assert_eq!(doc.scroll_y(), 12);
    assert_eq!(doc.overflow(), Overflow::Hidden);

    // Still clamped to the scrollable range.
    assert!(doc.jump_to(100));
    assert_eq!(doc.scroll_y(), 30);
    assert!(!doc.jump_to(30));
}

#[test]
fn test_shrinking_content_pulls_scroll_back() {
    let mut doc = Document::new(20, 10);
    doc.set_content_height(40);
    doc.scroll_to(30);
    doc.set_content_height(15);
    assert_eq!(doc.scroll_y(), 5);
}

#[test]
fn test_bounding_client_rect_is_viewport_relative() {
    let root = Element::col()
        .child(Element::box_().id("a").height(Size::Fixed(10)))
        .child(Element::box_().id("b").height(Size::Fixed(10)))
        .child(
            Element::box_()
                .id("bar")
                .position(Position::Fixed)
                .top(0)
                .left(0)
                .right(0)
                .height(Size::Fixed(3)),
        );
    let result = layout(&root, Rect::from_size(20, 8));
    let mut doc = Document::new(20, 8);
    doc.set_content_height(result.document_height());
    doc.scroll_to(12);

    let a = doc.bounding_client_rect(&result, "a").unwrap();
    assert_eq!(a.y, -12);
    assert_eq!(doc.bounding_client_rect(&result, "b").unwrap().y, -2);
    // Fixed elements do not scroll.
    let bar = doc.bounding_client_rect(&result, "bar").unwrap();
    assert_eq!((bar.y, bar.height), (0, 3));
    assert!(doc.bounding_client_rect(&result, "missing").is_none());
}
