use pagedom::{layout, Document, Element, IntersectionObserver, Rect, Size};

/// Four 10-row sections stacked in a 40-row document.
fn page() -> Element {
    Element::col().id("root").children((0..4).map(|i| {
        Element::box_()
            .id(format!("s{i}"))
            .height(Size::Fixed(10))
            .data("index", i.to_string())
    }))
}

fn records(
    observer: &mut IntersectionObserver,
    root: &Element,
    doc: &Document,
) -> Vec<(String, bool)> {
    let result = layout(root, Rect::from_size(doc.viewport_size().0, doc.viewport_size().1));
    observer
        .take_records(root, &result, doc.viewport())
        .into_iter()
        .map(|e| (e.target, e.is_intersecting))
        .collect()
}

fn doc_for(root: &Element, width: u16, height: u16) -> Document {
    let mut doc = Document::new(width, height);
    let result = layout(root, Rect::from_size(width, height));
    doc.set_content_height(result.document_height());
    doc
}

#[test]
fn test_first_delivery_reports_every_observed_target() {
    let root = page();
    let doc = doc_for(&root, 20, 15);
    let mut observer = IntersectionObserver::new(0.2);
    for i in 0..4 {
        observer.observe(format!("s{i}"));
    }

    let got = records(&mut observer, &root, &doc);
    assert_eq!(
        got,
        vec![
            ("s0".to_string(), true),
            ("s1".to_string(), true),
            ("s2".to_string(), false),
            ("s3".to_string(), false),
        ]
    );
}

#[test]
fn test_only_threshold_crossings_are_redelivered() {
    let root = page();
    let mut doc = doc_for(&root, 20, 15);
    let mut observer = IntersectionObserver::new(0.2);
    for i in 0..4 {
        observer.observe(format!("s{i}"));
    }
    records(&mut observer, &root, &doc);

    // Nothing moved: nothing to report.
    assert!(records(&mut observer, &root, &doc).is_empty());

    // Viewport rows 12..27: s0 gone, s1 still in at 80%, s2 at 70%.
    assert!(doc.scroll_to(12));
    assert_eq!(
        records(&mut observer, &root, &doc),
        vec![("s0".to_string(), false), ("s2".to_string(), true)]
    );
}

#[test]
fn test_ratio_below_threshold_is_not_intersecting() {
    let root = page();
    let mut doc = doc_for(&root, 20, 15);
    let mut observer = IntersectionObserver::new(0.2);
    observer.observe("s1");

    // s1 spans rows 10..20; at scroll 19 only one row (10%) is visible.
    doc.scroll_to(19);
    let result = layout(&root, Rect::from_size(20, 15));
    let entries = observer.take_records(&root, &result, doc.viewport());
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].is_intersecting);
    assert!((entries[0].ratio - 0.1).abs() < 1e-6);
}

#[test]
fn test_ratio_at_threshold_is_intersecting() {
    let root = page();
    let mut doc = doc_for(&root, 20, 15);
    let mut observer = IntersectionObserver::new(0.2);
    observer.observe("s1");

    // At scroll 18 rows 18 and 19 of s1 are visible: exactly 20%.
    doc.scroll_to(18);
    let result = layout(&root, Rect::from_size(20, 15));
    let entries = observer.take_records(&root, &result, doc.viewport());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ratio, 0.2);
    assert!(entries[0].is_intersecting);
}

#[test]
fn test_entry_carries_dataset() {
    let root = page();
    let doc = doc_for(&root, 20, 15);
    let mut observer = IntersectionObserver::new(0.2);
    observer.observe("s1");

    let result = layout(&root, Rect::from_size(20, 15));
    let entries = observer.take_records(&root, &result, doc.viewport());
    assert_eq!(entries[0].dataset.get("index").map(String::as_str), Some("1"));
}

#[test]
fn test_unmounted_target_is_skipped_until_it_appears() {
    let mut observer = IntersectionObserver::new(0.2);
    observer.observe("late");
    let empty = Element::col().id("root");
    let doc = doc_for(&empty, 20, 10);
    assert!(records(&mut observer, &empty, &doc).is_empty());

    let mounted = Element::col()
        .id("root")
        .child(Element::box_().id("late").height(Size::Fixed(3)));
    assert_eq!(
        records(&mut observer, &mounted, &doc),
        vec![("late".to_string(), true)]
    );
}

#[test]
fn test_disconnect_stops_delivery() {
    let root = page();
    let doc = doc_for(&root, 20, 15);
    let mut observer = IntersectionObserver::new(0.2);
    observer.observe("s0");
    observer.observe("s0");
    assert_eq!(observer.observed().count(), 1);

    observer.disconnect();
    assert!(!observer.is_observing());
    assert!(records(&mut observer, &root, &doc).is_empty());
}
