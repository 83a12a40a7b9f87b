use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::{walk, Element};
use crate::transitions::Easing;

/// Paint-time values of an element's animatable properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    pub opacity: f32,
    pub translate: (i16, i16),
}

impl Animated {
    fn of(element: &Element) -> Self {
        Self {
            opacity: element.opacity,
            translate: element.translate,
        }
    }

    fn lerp(from: Animated, to: Animated, t: f32) -> Animated {
        Animated {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            translate: (
                lerp_i16(from.translate.0, to.translate.0, t),
                lerp_i16(from.translate.1, to.translate.1, t),
            ),
        }
    }
}

/// A single active property transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: Animated,
    to: Animated,
    /// When the value starts moving (transition delay already applied).
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> Animated {
        if now < self.start {
            return self.from;
        }
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (now.duration_since(self.start).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        Animated::lerp(self.from, self.to, self.easing.apply(t))
    }

    fn end(&self) -> Instant {
        self.start + self.duration
    }
}

/// Manages animation state across frames.
///
/// Call `update` with each freshly built tree before painting it. Property
/// transitions start when an element's declared opacity or translation
/// differs from the previous frame; mount animations start the first frame
/// an element id appears and restart if it disappears and comes back.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's declared values per element.
    snapshots: HashMap<String, Animated>,
    active: HashMap<String, ActiveTransition>,
    /// When each element id was first seen in its current mount.
    mounted: HashMap<String, Instant>,
    /// Settle time of each mount animation.
    keyframe_ends: HashMap<String, Instant>,
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, transitions and mount animations complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.active.clear();
            self.keyframe_ends.clear();
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// True while any transition or mount animation is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.values().any(|t| t.end() > now)
            || self.keyframe_ends.values().any(|&end| end > now)
    }

    pub fn update(&mut self, root: &Element, now: Instant) {
        self.active.retain(|_, t| t.end() > now);
        self.keyframe_ends.retain(|_, end| *end > now);

        let mut seen = HashSet::new();
        let mut elements = Vec::new();
        walk(root, &mut |el: &Element| elements.push(el));

        for element in elements {
            seen.insert(element.id.clone());
            self.update_element(element, now);
        }

        self.cleanup(&seen);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let id = &element.id;
        let current = Animated::of(element);

        if !self.mounted.contains_key(id) {
            self.mounted.insert(id.clone(), now);
            if let Some(keyframes) = element.animation {
                if !self.reduced_motion {
                    self.keyframe_ends.insert(id.clone(), now + keyframes.total());
                }
            }
        }

        let previous = self.snapshots.get(id).copied();
        if let (Some(prev), Some(transition)) = (previous, element.transition) {
            if prev != current && !self.reduced_motion {
                // Retarget from wherever an in-flight transition currently is.
                let from = self
                    .active
                    .get(id)
                    .map(|t| t.value_at(now))
                    .unwrap_or(prev);
                self.active.insert(
                    id.clone(),
                    ActiveTransition {
                        from,
                        to: current,
                        start: now + transition.delay,
                        duration: transition.duration,
                        easing: transition.easing,
                    },
                );
            }
        }

        self.snapshots.insert(id.clone(), current);
    }

    /// Values to paint `element` with at `now`.
    pub fn resolve(&self, element: &Element, now: Instant) -> Animated {
        let base = self
            .active
            .get(&element.id)
            .map(|t| t.value_at(now))
            .unwrap_or_else(|| Animated::of(element));

        let Some(keyframes) = element.animation else {
            return base;
        };
        if self.reduced_motion {
            return base;
        }
        let Some(&mounted_at) = self.mounted.get(&element.id) else {
            // Not yet seen by `update`: paint the first keyframe.
            return Animated {
                opacity: keyframes.from_opacity,
                translate: keyframes.from_translate,
            };
        };

        let from = Animated {
            opacity: keyframes.from_opacity,
            translate: keyframes.from_translate,
        };
        let progress = keyframes.progress(now.saturating_duration_since(mounted_at));
        Animated::lerp(from, base, progress)
    }

    /// Forget elements that are no longer in the tree.
    fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|id, _| current_ids.contains(id));
        self.mounted.retain(|id, _| current_ids.contains(id));
        self.keyframe_ends.retain(|id, _| current_ids.contains(id));
    }
}

fn lerp_i16(from: i16, to: i16, t: f32) -> i16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i16
}
