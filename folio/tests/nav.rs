use std::time::{Duration, Instant};

use folio::config::NavSettings;
use folio::nav::{CloseReason, MenuState, NavBar, OverlayGeometry, ScrollLock};
use pagedom::{Document, Overflow};

fn setup() -> (Document, NavBar, Instant) {
    let mut doc = Document::new(60, 20);
    doc.set_content_height(200);
    let now = Instant::now();
    let nav = NavBar::new(&NavSettings::default(), doc.scroll_behavior(), now);
    (doc, nav, now)
}

// =============================================================================
// Scroll styling
// =============================================================================

#[test]
fn test_scrolled_flips_strictly_past_threshold() {
    let doc = Document::new(60, 20);
    let settings = NavSettings {
        scroll_threshold: 50,
        ..Default::default()
    };
    let now = Instant::now();
    let mut nav = NavBar::new(&settings, doc.scroll_behavior(), now);

    assert!(!nav.on_scroll(50, now));
    assert!(!nav.scrolled());

    assert!(nav.on_scroll(51, now));
    assert!(nav.scrolled());

    assert!(nav.on_scroll(0, now));
    assert!(!nav.scrolled());
}

#[test]
fn test_scroll_reports_only_changes() {
    let (_doc, mut nav, now) = setup();
    assert!(nav.on_scroll(10, now));
    assert!(!nav.on_scroll(20, now));
}

// =============================================================================
// Menu and scroll lock
// =============================================================================

#[test]
fn test_menu_starts_closed_and_unlocked() {
    let (doc, nav, _) = setup();
    assert_eq!(nav.menu(), MenuState::Closed);
    assert_eq!(doc.overflow(), Overflow::Auto);
}

#[test]
fn test_open_locks_document_scroll() {
    let (mut doc, mut nav, now) = setup();
    nav.open(now);

    assert!(nav.is_open());
    assert_eq!(doc.overflow(), Overflow::Hidden);
    assert!(!doc.scroll_by(5));
    assert_eq!(doc.scroll_y(), 0);
}

#[test]
fn test_toggle_flips_state() {
    let (doc, mut nav, now) = setup();
    assert_eq!(nav.toggle(now), MenuState::Open);
    assert_eq!(doc.overflow(), Overflow::Hidden);
    assert_eq!(nav.toggle(now), MenuState::Closed);
    assert_eq!(doc.overflow(), Overflow::Auto);
}

#[test]
fn test_backdrop_click_restores_scroll() {
    let (mut doc, mut nav, now) = setup();
    nav.open(now);
    assert!(nav.click_backdrop(now));

    assert!(!nav.is_open());
    assert_eq!(doc.overflow(), Overflow::Auto);
    assert!(doc.scroll_by(5));
}

#[test]
fn test_overlay_link_closes_and_restores_scroll() {
    let (doc, mut nav, now) = setup();
    nav.open(now);
    assert!(nav.activate_link(true, now));
    assert_eq!(doc.overflow(), Overflow::Auto);
}

#[test]
fn test_bar_link_leaves_menu_alone() {
    let (doc, mut nav, now) = setup();
    nav.open(now);
    assert!(!nav.activate_link(false, now));
    assert!(nav.is_open());
    assert_eq!(doc.overflow(), Overflow::Hidden);
}

#[test]
fn test_close_when_closed_is_a_no_op() {
    let (_doc, mut nav, now) = setup();
    assert!(!nav.close(CloseReason::Toggle, now));
    assert!(!nav.click_backdrop(now));
}

#[test]
fn test_open_twice_keeps_one_lock() {
    let (doc, mut nav, now) = setup();
    nav.open(now);
    nav.open(now + Duration::from_millis(5));
    assert_eq!(nav.opened_at(), Some(now));

    nav.close(CloseReason::Toggle, now);
    assert_eq!(doc.overflow(), Overflow::Auto);
}

#[test]
fn test_teardown_while_open_restores_scroll() {
    let (doc, mut nav, now) = setup();
    nav.open(now);
    nav.teardown();
    assert_eq!(doc.overflow(), Overflow::Auto);
    assert_eq!(nav.next_deadline(), None);
}

#[test]
fn test_dropping_open_bar_restores_scroll() {
    let (doc, mut nav, now) = setup();
    nav.open(now);
    drop(nav);
    assert_eq!(doc.overflow(), Overflow::Auto);
}

#[test]
fn test_lock_restores_prior_overflow() {
    let doc = Document::new(10, 10);
    let behavior = doc.scroll_behavior();
    behavior.set(Overflow::Hidden);

    let lock = ScrollLock::engage(doc.scroll_behavior());
    drop(lock);
    assert_eq!(doc.overflow(), Overflow::Hidden);
}

// =============================================================================
// Measurement
// =============================================================================

#[test]
fn test_first_measurement_is_due_at_creation() {
    let (_doc, mut nav, now) = setup();
    assert_eq!(nav.next_deadline(), Some(now));
    assert!(nav.measure_due(now));
    assert_eq!(nav.next_deadline(), None);
}

#[test]
fn test_open_schedules_immediate_and_settled_measurement() {
    let (_doc, mut nav, now) = setup();
    nav.measure_due(now);

    let later = now + Duration::from_millis(100);
    nav.open(later);
    assert!(nav.measure_due(later));

    let settled = later + Duration::from_millis(10);
    assert_eq!(nav.next_deadline(), Some(settled));
    assert!(!nav.measure_due(settled - Duration::from_millis(1)));
    assert!(nav.measure_due(settled));
    assert_eq!(nav.next_deadline(), None);
}

#[test]
fn test_close_drops_settle_measurement() {
    let (_doc, mut nav, now) = setup();
    nav.measure_due(now);
    nav.open(now);
    nav.close(CloseReason::Backdrop, now);

    assert_eq!(nav.next_deadline(), Some(now));
    assert!(nav.measure_due(now));
    assert_eq!(nav.next_deadline(), None);
}

#[test]
fn test_resize_schedules_measurement() {
    let (_doc, mut nav, now) = setup();
    nav.measure_due(now);
    let later = now + Duration::from_millis(3);
    nav.on_resize(later);
    assert_eq!(nav.next_deadline(), Some(later));
}

#[test]
fn test_zero_height_is_ignored() {
    let (_doc, mut nav, _) = setup();
    assert_eq!(nav.measured_height(), 3);
    assert!(!nav.apply_measurement(0));
    assert_eq!(nav.measured_height(), 3);

    assert!(nav.apply_measurement(4));
    assert!(!nav.apply_measurement(4));
    assert_eq!(nav.measured_height(), 4);
}

#[test]
fn test_overlay_sits_under_measured_bar() {
    let (_doc, mut nav, now) = setup();
    assert_eq!(nav.overlay_geometry(20), None);

    nav.open(now);
    nav.apply_measurement(4);
    assert_eq!(
        nav.overlay_geometry(20),
        Some(OverlayGeometry { top: 4, height: 16 })
    );
}
