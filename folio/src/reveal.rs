//! Reveal-on-scroll.
//!
//! A section registers the elements it wants revealed. After each layout the
//! controller collects intersection entries and marks every intersecting
//! target's index visible. Marks are never cleared, so a target that scrolls
//! back out stays revealed.

use std::collections::BTreeSet;
use std::time::Duration;

use log::{debug, trace};
use pagedom::{
    Easing, Element, IntersectionEntry, IntersectionObserver, LayoutResult, Rect, Transition,
};

use crate::config::RevealSettings;

/// Data attribute carrying a target's ordinal within its section.
pub const INDEX_ATTR: &str = "index";

/// Which indices of a section have been revealed. Absent means hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationSet {
    visible: BTreeSet<usize>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `index` visible. Returns true if it was hidden before.
    pub fn mark(&mut self, index: usize) -> bool {
        self.visible.insert(index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().copied()
    }
}

/// Hidden and revealed style states with their transition timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate: (i16, i16),
    pub transition: Transition,
}

impl RevealStyle {
    pub fn apply(self, element: Element) -> Element {
        element
            .opacity(self.opacity)
            .translate(self.translate.0, self.translate.1)
            .transition(self.transition)
    }
}

#[derive(Debug)]
pub struct RevealController {
    observer: IntersectionObserver,
    /// Registered target ids with their index.
    targets: Vec<(String, usize)>,
    set: ObservationSet,
    duration: Duration,
    stagger: Duration,
    /// Paint offset of a hidden target.
    hidden_offset: (i16, i16),
}

impl RevealController {
    pub fn new(settings: &RevealSettings, hidden_offset: (i16, i16)) -> Self {
        Self {
            observer: IntersectionObserver::new(settings.threshold),
            targets: Vec::new(),
            set: ObservationSet::new(),
            duration: settings.duration(),
            stagger: settings.stagger(),
            hidden_offset,
        }
    }

    /// A controller watching one element, revealed as index 0.
    pub fn single(settings: &RevealSettings, id: &str, hidden_offset: (i16, i16)) -> Self {
        let mut controller = Self::new(settings, hidden_offset);
        controller.register(id, 0);
        controller
    }

    /// Watch `id` as item `index`. The rendered element should carry the
    /// same index in its `index` data attribute.
    pub fn register(&mut self, id: impl Into<String>, index: usize) {
        let id = id.into();
        if self.targets.iter().any(|(t, _)| *t == id) {
            return;
        }
        self.observer.observe(id.clone());
        self.targets.push((id, index));
    }

    /// Watch one element per item, ids from `id_for(index)`.
    pub fn register_all(&mut self, count: usize, id_for: impl Fn(usize) -> String) {
        for index in 0..count {
            self.register(id_for(index), index);
        }
    }

    /// Record a batch of entries. Returns true if anything was newly
    /// revealed.
    pub fn deliver(&mut self, entries: &[IntersectionEntry]) -> bool {
        let mut changed = false;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(index) = self.index_of(entry) else {
                trace!("entry for unknown target {}", entry.target);
                continue;
            };
            if self.set.mark(index) {
                debug!("revealed {} (index {index})", entry.target);
                changed = true;
            }
        }
        changed
    }

    /// Collect entries against a fresh layout and deliver them.
    pub fn observe_layout(
        &mut self,
        root: &Element,
        layout: &LayoutResult,
        viewport: Rect,
    ) -> bool {
        if !self.observer.is_observing() {
            return false;
        }
        let entries = self.observer.take_records(root, layout, viewport);
        self.deliver(&entries)
    }

    fn index_of(&self, entry: &IntersectionEntry) -> Option<usize> {
        if let Some(index) = entry.dataset.get(INDEX_ATTR).and_then(|v| v.parse().ok()) {
            return Some(index);
        }
        self.targets
            .iter()
            .find(|(id, _)| *id == entry.target)
            .map(|(_, index)| *index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.set.is_visible(index)
    }

    pub fn observations(&self) -> &ObservationSet {
        &self.set
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_observing()
    }

    /// Cascade delay for item `index`.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// Style state for item `index`.
    pub fn style(&self, index: usize) -> RevealStyle {
        self.style_with_delay(index, Duration::ZERO)
    }

    /// Style state for item `index`, with `extra` added to its delay.
    pub fn style_with_delay(&self, index: usize, extra: Duration) -> RevealStyle {
        let delay = self.stagger_delay(index) + extra;
        let transition = Transition::new(self.duration, Easing::EaseOut).delay(delay);
        if self.is_visible(index) {
            RevealStyle {
                opacity: 1.0,
                translate: (0, 0),
                transition,
            }
        } else {
            RevealStyle {
                opacity: 0.0,
                translate: self.hidden_offset,
                transition,
            }
        }
    }

    /// Stop watching. Already revealed items stay revealed.
    pub fn unmount(&mut self) {
        self.observer.disconnect();
        self.targets.clear();
    }
}
