use std::time::{Duration, Instant};

use folio::content::Content;
use folio::page::{
    NAV_BAR_ID, OVERLAY_PANEL_ID, blog, nav_link_id, overlay_link_id, projects, timeline,
};
use folio::reveal::RevealController;
use folio::{Action, Config, Portfolio};
use pagedom::{Event, Key, Modifiers, Overflow, find_element};

const YEAR: i32 = 2026;

fn page(width: u16, height: u16) -> (Portfolio, Instant) {
    let now = Instant::now();
    (Portfolio::new(Config::default(), width, height, YEAR, now), now)
}

fn bar_height(page: &Portfolio) -> u16 {
    page.document()
        .bounding_client_rect(page.layout(), NAV_BAR_ID)
        .map(|rect| rect.height)
        .unwrap_or(0)
}

fn section_top(page: &Portfolio, id: &str) -> u16 {
    page.layout().get(id).map(|rect| rect.y).unwrap_or(0)
}

// =============================================================================
// Mount
// =============================================================================

#[test]
fn test_mount_measures_bar_and_hides_sections() {
    let (page, _) = page(60, 20);

    assert!(!page.nav().is_open());
    assert!(!page.nav().scrolled());
    assert_eq!(page.nav().measured_height(), bar_height(&page));
    assert_eq!(page.nav().next_deadline(), None);

    // The hero fills the first screen.
    assert!(!page.about().is_visible(0));
    assert!(page.timeline().observations().is_empty());
    assert!(find_element(page.root(), OVERLAY_PANEL_ID).is_none());
}

#[test]
fn test_hero_entrance_runs_from_mount() {
    let (page, now) = page(60, 20);
    let role = find_element(page.root(), "hero-role").expect("hero role");

    assert_eq!(page.animation().resolve(role, now).opacity, 0.0);
    assert!(page.is_animating(now));
    let settled = now + Duration::from_secs(2);
    assert_eq!(page.animation().resolve(role, settled).opacity, 1.0);
}

// =============================================================================
// Keys and links
// =============================================================================

#[test]
fn test_quit_keys() {
    let (mut page, now) = page(60, 20);
    assert_eq!(
        page.handle_event(Event::key(Key::Char('q')), now),
        Some(Action::Quit)
    );
    let ctrl_c = Event::Key {
        key: Key::Char('c'),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(page.handle_event(ctrl_c, now), Some(Action::Quit));
}

#[test]
fn test_scrolling_past_threshold_marks_bar_scrolled() {
    let (mut page, now) = page(60, 20);
    for _ in 0..3 {
        page.handle_event(Event::key(Key::Down), now);
    }
    assert_eq!(page.document().scroll_y(), 3);
    assert!(page.nav().scrolled());

    page.handle_event(Event::key(Key::Home), now);
    assert_eq!(page.document().scroll_y(), 0);
    assert!(!page.nav().scrolled());
}

#[test]
fn test_nav_shortcut_scrolls_section_under_bar() {
    let (mut page, now) = page(60, 20);
    // The anchor offset uses the bar height measured before scrolling.
    let bar = page.nav().measured_height();
    assert_eq!(page.handle_event(Event::key(Key::Char('2')), now), None);

    let expected = section_top(&page, timeline::SECTION_ID) - bar;
    assert_eq!(page.document().scroll_y(), expected);
    assert!(page.nav().scrolled());
    assert!(page.timeline().is_visible(0));
}

#[test]
fn test_external_links_are_handed_out() {
    let (mut page, now) = page(60, 20);
    let action = page.activate("https://github.com/devwo1f", false, now);
    assert_eq!(
        action,
        Some(Action::OpenExternal("https://github.com/devwo1f".to_string()))
    );
    assert_eq!(page.document().scroll_y(), 0);
}

// =============================================================================
// Reveal cascade
// =============================================================================

#[test]
fn test_blog_posts_cascade_by_index() {
    let (mut page, now) = page(60, 60);
    page.handle_event(Event::key(Key::Char('4')), now);

    for i in 0..3 {
        assert!(page.blog().is_visible(i), "post {i} revealed");
    }

    for i in 0..3u32 {
        let post = find_element(page.root(), &blog::post_id(i as usize)).expect("post");
        assert_eq!(post.opacity, 1.0);

        let starts = now + Duration::from_millis(100) * i;
        let before = page.animation().resolve(post, starts);
        assert_eq!(before.opacity, 0.0, "post {i} waits for its delay");
        assert_eq!(before.translate, blog::HIDDEN_OFFSET);

        let after = page.animation().resolve(post, starts + Duration::from_millis(700));
        assert_eq!(after.opacity, 1.0, "post {i} settles");
        assert_eq!(after.translate, (0, 0));
    }
}

fn resize(width: u16, height: u16) -> Event {
    Event::Resize { width, height }
}

/// Every stored item carries the style its controller's state implies.
fn assert_tree_matches_state(page: &Portfolio, step: &str) {
    let content = Content::default();
    let groups: [(&RevealController, usize, fn(usize) -> String); 3] = [
        (page.timeline(), content.timeline.len(), timeline::item_id),
        (page.projects(), content.projects.len(), projects::card_id),
        (page.blog(), content.posts.len(), blog::post_id),
    ];
    for (reveal, count, id) in groups {
        for i in 0..count {
            let element = find_element(page.root(), &id(i)).expect("item in tree");
            let expected = if reveal.is_visible(i) { 1.0 } else { 0.0 };
            assert_eq!(element.opacity, expected, "{} after {step}", id(i));
        }
    }
}

#[test]
fn test_stored_tree_tracks_reveals_across_events() {
    let (mut page, now) = page(60, 20);
    let steps = [
        ("narrow", resize(30, 8)),
        ("blog shortcut", Event::key(Key::Char('4'))),
        ("widen", resize(120, 40)),
        ("end", Event::key(Key::End)),
        ("home", Event::key(Key::Home)),
        ("projects shortcut", Event::key(Key::Char('3'))),
    ];
    assert_tree_matches_state(&page, "mount");
    for (step, event) in steps {
        page.handle_event(event, now);
        assert_tree_matches_state(&page, step);
    }
    assert!(page.blog().is_visible(0));
}

#[test]
fn test_reduced_motion_reveals_instantly() {
    let mut config = Config::default();
    config.motion.reduced = true;
    let now = Instant::now();
    let mut page = Portfolio::new(config, 60, 60, YEAR, now);

    page.handle_event(Event::key(Key::Char('4')), now);
    let post = find_element(page.root(), &blog::post_id(2)).expect("post");
    assert_eq!(page.animation().resolve(post, now).opacity, 1.0);
    assert!(!page.is_animating(now));
}

// =============================================================================
// Overlay menu
// =============================================================================

#[test]
fn test_menu_key_opens_overlay_and_locks_scroll() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);

    assert!(page.nav().is_open());
    assert_eq!(page.document().overflow(), Overflow::Hidden);
    let panel = page.layout().get(OVERLAY_PANEL_ID).expect("panel laid out");
    assert_eq!(panel.y, page.nav().measured_height());

    page.handle_event(Event::key(Key::Down), now);
    assert_eq!(page.document().scroll_y(), 0);
}

#[test]
fn test_settle_measurement_is_pending_after_open() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);
    assert_eq!(
        page.next_deadline(),
        Some(now + Duration::from_millis(10))
    );

    page.frame(now + Duration::from_millis(10));
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn test_backdrop_click_closes_menu() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);

    // Right of the panel, below the bar.
    page.handle_event(Event::click(59, 19), now);
    assert!(!page.nav().is_open());
    assert_eq!(page.document().overflow(), Overflow::Auto);
    assert!(find_element(page.root(), OVERLAY_PANEL_ID).is_none());
}

#[test]
fn test_panel_click_keeps_menu_open() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);

    let panel = *page.layout().get(OVERLAY_PANEL_ID).expect("panel");
    page.handle_event(Event::click(panel.x, panel.bottom() - 1), now);
    assert!(page.nav().is_open());
}

#[test]
fn test_toggle_closes_menu() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);
    page.handle_event(Event::key(Key::Char('m')), now);
    assert!(!page.nav().is_open());
    assert_eq!(page.document().overflow(), Overflow::Auto);
}

#[test]
fn test_overlay_link_closes_then_scrolls() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);

    let bar = page.nav().measured_height();
    let link = *page.layout().get(&overlay_link_id(1)).expect("timeline link");
    let action = page.handle_event(Event::click(link.x + 1, link.y + 1), now);

    assert_eq!(action, None);
    assert!(!page.nav().is_open());
    assert_eq!(page.document().overflow(), Overflow::Auto);
    let expected = section_top(&page, timeline::SECTION_ID) - bar;
    assert_eq!(page.document().scroll_y(), expected);
}

#[test]
fn test_bar_link_scrolls_while_menu_is_open() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);
    // Widen past the breakpoint: the bar shows inline links, the menu stays open.
    page.handle_event(
        Event::Resize {
            width: 100,
            height: 20,
        },
        now,
    );
    assert!(page.nav().is_open());

    let bar = page.nav().measured_height();
    let link = *page.layout().get(&nav_link_id(2)).expect("projects link");
    let action = page.handle_event(Event::click(link.x, link.y), now);

    assert_eq!(action, None);
    assert!(page.nav().is_open());
    assert_eq!(page.document().overflow(), Overflow::Hidden);
    let expected = section_top(&page, projects::SECTION_ID) - bar;
    assert!(expected > 0);
    assert_eq!(page.document().scroll_y(), expected);

    // The lock still holds against user scrolling.
    page.handle_event(Event::key(Key::Down), now);
    assert_eq!(page.document().scroll_y(), expected);
}

#[test]
fn test_overlay_restarts_entrance_on_reopen() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);
    page.handle_event(Event::key(Key::Char('m')), now);

    let reopened = now + Duration::from_secs(5);
    page.handle_event(Event::key(Key::Char('m')), reopened);
    let panel = find_element(page.root(), OVERLAY_PANEL_ID).expect("panel");
    assert_eq!(page.animation().resolve(panel, reopened).opacity, 0.0);
    assert!(page.is_animating(reopened));
}

#[test]
fn test_resize_while_open_remeasures_bar() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);
    let before = page.nav().measured_height();

    // Narrow enough that the brand wraps.
    page.handle_event(
        Event::Resize {
            width: 20,
            height: 20,
        },
        now,
    );

    let after = page.nav().measured_height();
    assert!(after > before, "bar grew from {before} to {after}");
    assert_eq!(after, bar_height(&page));
    let panel = page.layout().get(OVERLAY_PANEL_ID).expect("panel");
    assert_eq!(panel.y, after);
}

#[test]
fn test_teardown_while_open_restores_scroll() {
    let (mut page, now) = page(60, 20);
    page.handle_event(Event::key(Key::Char('m')), now);
    page.teardown();

    assert!(!page.nav().is_open());
    assert_eq!(page.document().overflow(), Overflow::Auto);
    assert!(!page.blog().is_observing());
}
