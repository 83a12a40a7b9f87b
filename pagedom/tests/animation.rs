use std::time::{Duration, Instant};

use pagedom::{AnimationState, Easing, Element, Keyframes, Transition};

// =============================================================================
// Easing
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseOut.apply(2.0), 1.0, "input is clamped");
}

#[test]
fn test_snap_curve_overshoots_linear_early() {
    let snap = Easing::SNAP;
    assert_eq!(snap.apply(0.0), 0.0);
    assert_eq!(snap.apply(1.0), 1.0);
    // Fast start: well ahead of linear at a quarter of the way.
    assert!(snap.apply(0.25) > 0.6);
    let mut last = 0.0;
    for i in 1..=20 {
        let v = snap.apply(i as f32 / 20.0);
        assert!(v + 1e-4 >= last, "monotonic");
        last = v;
    }
}

// =============================================================================
// Property transitions
// =============================================================================

fn fading(id: &str, opacity: f32, delay_ms: u64) -> Element {
    Element::box_().id(id).opacity(opacity).transition(
        Transition::new(Duration::from_millis(700), Easing::Linear)
            .delay(Duration::from_millis(delay_ms)),
    )
}

#[test]
fn test_first_frame_has_no_transition() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    let el = fading("a", 0.0, 0);

    state.update(&el, t0);
    assert_eq!(state.resolve(&el, t0).opacity, 0.0);
    assert!(!state.is_animating(t0));
}

#[test]
fn test_value_change_starts_transition_after_delay() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    state.update(&fading("a", 0.0, 100), t0);

    let shown = fading("a", 1.0, 100);
    state.update(&shown, t0);
    assert!(state.is_animating(t0));

    // Holds the old value during the delay.
    assert_eq!(state.resolve(&shown, t0 + Duration::from_millis(50)).opacity, 0.0);
    let mid = state.resolve(&shown, t0 + Duration::from_millis(450)).opacity;
    assert!((mid - 0.5).abs() < 0.01, "halfway through 700ms, got {mid}");
    assert_eq!(state.resolve(&shown, t0 + Duration::from_millis(800)).opacity, 1.0);
    assert!(!state.is_animating(t0 + Duration::from_millis(800)));
}

#[test]
fn test_translate_interpolates_with_opacity() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    state.update(&fading("a", 0.0, 0).translate(0, 4), t0);

    let shown = fading("a", 1.0, 0);
    state.update(&shown, t0);
    let mid = state.resolve(&shown, t0 + Duration::from_millis(350));
    assert_eq!(mid.translate, (0, 2));
}

#[test]
fn test_reduced_motion_skips_transitions() {
    let mut state = AnimationState::new();
    state.set_reduced_motion(true);
    let t0 = Instant::now();
    state.update(&fading("a", 0.0, 0), t0);
    let shown = fading("a", 1.0, 0);
    state.update(&shown, t0);

    assert_eq!(state.resolve(&shown, t0).opacity, 1.0);
    assert!(!state.is_animating(t0));
}

// =============================================================================
// Mount keyframes
// =============================================================================

#[test]
fn test_mount_animation_runs_from_first_sight() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    let el = Element::box_().id("panel").animation(
        Keyframes::fade_in(Duration::from_millis(500))
            .from_translate(0, -10)
            .delay(Duration::from_millis(100))
            .easing(Easing::Linear),
    );

    state.update(&el, t0);
    let start = state.resolve(&el, t0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.translate, (0, -10));

    let mid = state.resolve(&el, t0 + Duration::from_millis(350));
    assert!((mid.opacity - 0.5).abs() < 0.01);
    assert_eq!(mid.translate, (0, -5));

    assert!(state.is_animating(t0 + Duration::from_millis(550)));
    state.update(&el, t0 + Duration::from_millis(600));
    assert!(!state.is_animating(t0 + Duration::from_millis(600)));
    assert_eq!(state.resolve(&el, t0 + Duration::from_millis(600)).opacity, 1.0);
}

#[test]
fn test_remount_restarts_animation() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    let el = Element::box_()
        .id("panel")
        .animation(Keyframes::fade_in(Duration::from_millis(300)));
    let root_with = Element::col().id("root").child(el.clone());
    let root_without = Element::col().id("root");

    state.update(&root_with, t0);
    state.update(&root_without, t0 + Duration::from_secs(1));
    let t1 = t0 + Duration::from_secs(2);
    state.update(&root_with, t1);

    assert_eq!(state.resolve(&el, t1).opacity, 0.0);
}
