//! Viewport intersection observation.
//!
//! Mirrors the browser's `IntersectionObserver`: targets are observed by
//! element id, and after each layout `take_records` reports the targets whose
//! intersecting state is new (first delivery after `observe`) or has crossed
//! the threshold since the previous delivery.

use std::collections::HashMap;

use log::trace;

use crate::element::{find_element, Element};
use crate::layout::{LayoutResult, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    /// Visible fraction of the target's area, 0.0 to 1.0.
    pub ratio: f32,
    pub is_intersecting: bool,
    /// The target's `data-*` attributes at delivery time.
    pub dataset: HashMap<String, String>,
}

#[derive(Debug)]
pub struct IntersectionObserver {
    threshold: f32,
    /// Observed ids in observation order, with the last delivered state
    /// (None until the first delivery).
    targets: Vec<(String, Option<bool>)>,
}

impl IntersectionObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            targets: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.targets.iter().any(|(t, _)| *t == id) {
            return;
        }
        self.targets.push((id, None));
    }

    pub fn unobserve(&mut self, id: &str) {
        self.targets.retain(|(t, _)| t != id);
    }

    /// Stop observing everything.
    pub fn disconnect(&mut self) {
        if !self.targets.is_empty() {
            trace!("observer disconnected from {} targets", self.targets.len());
        }
        self.targets.clear();
    }

    pub fn is_observing(&self) -> bool {
        !self.targets.is_empty()
    }

    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|(id, _)| id.as_str())
    }

    /// Collect pending entries against the current layout.
    ///
    /// `viewport` is the visible window in document coordinates. Targets
    /// that are not laid out (not mounted) are skipped until they are.
    pub fn take_records(
        &mut self,
        root: &Element,
        layout: &LayoutResult,
        viewport: Rect,
    ) -> Vec<IntersectionEntry> {
        let threshold = self.threshold;
        let mut entries = Vec::new();

        for (id, last) in &mut self.targets {
            let Some(rect) = layout.get(id) else { continue };

            // Fixed elements are always in view when laid out.
            let ratio = if layout.is_fixed(id) {
                1.0
            } else {
                intersection_ratio(rect, &viewport)
            };
            let is_intersecting = ratio > 0.0 && ratio >= threshold;

            if *last == Some(is_intersecting) {
                continue;
            }
            *last = Some(is_intersecting);

            let dataset = find_element(root, id)
                .map(|el| el.data.clone())
                .unwrap_or_default();
            entries.push(IntersectionEntry {
                target: id.clone(),
                ratio,
                is_intersecting,
                dataset,
            });
        }

        entries
    }
}

/// Fraction of `rect` inside `viewport`. Empty rects never intersect.
pub fn intersection_ratio(rect: &Rect, viewport: &Rect) -> f32 {
    if rect.is_empty() {
        return 0.0;
    }
    match rect.intersection(viewport) {
        Some(overlap) => overlap.area() as f32 / rect.area() as f32,
        None => 0.0,
    }
}
