//! Navigation bar state: scroll styling, menu state, the bar's measured
//! height, and the scroll lock held while the overlay menu is open.

use std::time::Instant;

use log::{debug, info, trace};
use pagedom::{Overflow, ScrollBehavior};

use crate::config::NavSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// What closed the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    Backdrop,
    Link,
    Teardown,
}

/// Holds the document's overflow at `Hidden` while alive.
///
/// Dropping the lock puts back whatever overflow was in effect when it was
/// taken.
#[derive(Debug)]
pub struct ScrollLock {
    behavior: ScrollBehavior,
    prior: Overflow,
}

impl ScrollLock {
    pub fn engage(behavior: ScrollBehavior) -> Self {
        let prior = behavior.get();
        behavior.set(Overflow::Hidden);
        Self { behavior, prior }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.behavior.set(self.prior);
        trace!("scroll lock released, overflow {:?}", self.prior);
    }
}

/// Where the overlay sits: directly under the bar, down to the bottom of
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub top: u16,
    pub height: u16,
}

#[derive(Debug)]
pub struct NavBar {
    settings: NavSettings,
    behavior: ScrollBehavior,
    scrolled: bool,
    lock: Option<ScrollLock>,
    measured_height: u16,
    /// When the menu last opened; overlay entrance cues count from here.
    opened_at: Option<Instant>,
    /// Deadlines at which the bar should be re-measured.
    pending: Vec<Instant>,
}

impl NavBar {
    /// A closed bar at the configured default height. A measurement is
    /// scheduled for the first frame.
    pub fn new(settings: &NavSettings, behavior: ScrollBehavior, now: Instant) -> Self {
        Self {
            settings: settings.clone(),
            behavior,
            scrolled: false,
            lock: None,
            measured_height: settings.initial_height,
            opened_at: None,
            pending: vec![now],
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu(&self) -> MenuState {
        if self.lock.is_some() {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu() == MenuState::Open
    }

    pub fn opened_at(&self) -> Option<Instant> {
        self.opened_at
    }

    pub fn measured_height(&self) -> u16 {
        self.measured_height
    }

    pub fn breakpoint(&self) -> u16 {
        self.settings.breakpoint
    }

    /// Record a new scroll offset. Returns true if `scrolled` changed.
    pub fn on_scroll(&mut self, offset: u16, now: Instant) -> bool {
        let scrolled = offset > self.settings.scroll_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        // The scrolled style adds a border row.
        self.schedule_measure(now);
        changed
    }

    pub fn on_resize(&mut self, now: Instant) {
        self.schedule_measure(now);
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self, now: Instant) -> MenuState {
        if self.is_open() {
            self.close(CloseReason::Toggle, now);
        } else {
            self.open(now);
        }
        self.menu()
    }

    pub fn open(&mut self, now: Instant) {
        if self.is_open() {
            return;
        }
        self.lock = Some(ScrollLock::engage(self.behavior.clone()));
        self.opened_at = Some(now);
        self.schedule_measure(now);
        self.schedule_measure(now + self.settings.settle_delay());
        info!("menu opened");
    }

    /// Close the menu. Returns false if it was already closed.
    pub fn close(&mut self, reason: CloseReason, now: Instant) -> bool {
        let Some(lock) = self.lock.take() else {
            return false;
        };
        drop(lock);
        self.opened_at = None;
        // Pending settle measurements belong to the open menu.
        self.pending.clear();
        self.schedule_measure(now);
        info!("menu closed ({reason:?})");
        true
    }

    /// A navigation link was activated. Links inside the overlay close the
    /// menu first. Returns true if the menu closed.
    pub fn activate_link(&mut self, in_overlay: bool, now: Instant) -> bool {
        in_overlay && self.close(CloseReason::Link, now)
    }

    pub fn click_backdrop(&mut self, now: Instant) -> bool {
        self.close(CloseReason::Backdrop, now)
    }

    pub fn schedule_measure(&mut self, at: Instant) {
        if !self.pending.contains(&at) {
            self.pending.push(at);
        }
    }

    /// Earliest scheduled measurement.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }

    /// Consume the measurements due at `now`. Returns true if any was due.
    pub fn measure_due(&mut self, now: Instant) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&at| at > now);
        self.pending.len() != before
    }

    /// Take a measured bar height. Zero reads are ignored. Returns true if
    /// the stored height changed.
    pub fn apply_measurement(&mut self, height: u16) -> bool {
        if height == 0 {
            trace!("ignoring zero nav height");
            return false;
        }
        if height == self.measured_height {
            return false;
        }
        debug!("nav height {} -> {height}", self.measured_height);
        self.measured_height = height;
        true
    }

    /// Overlay placement for a viewport `viewport_height` rows tall, while
    /// the menu is open.
    pub fn overlay_geometry(&self, viewport_height: u16) -> Option<OverlayGeometry> {
        if !self.is_open() {
            return None;
        }
        Some(OverlayGeometry {
            top: self.measured_height,
            height: viewport_height.saturating_sub(self.measured_height),
        })
    }

    /// Close without scheduling anything further.
    pub fn teardown(&mut self) {
        if self.lock.take().is_some() {
            info!("menu closed ({:?})", CloseReason::Teardown);
        }
        self.opened_at = None;
        self.pending.clear();
    }
}

impl Drop for NavBar {
    fn drop(&mut self) {
        self.teardown();
    }
}
