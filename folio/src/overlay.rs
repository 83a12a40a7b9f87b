//! Entrance script for the menu overlay.
//!
//! Every layer mounts when the menu opens and runs its own entrance,
//! offset from the open: backdrop and panel at once, then the background
//! pattern, the two glows, the links one after another, and the footer
//! last.

use std::time::Duration;

use pagedom::{Easing, Keyframes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Backdrop,
    Panel,
    Pattern,
    Glow(usize),
    Link(usize),
    Footer,
}

/// One layer's entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub from_translate: (i16, i16),
}

impl Cue {
    const fn new(
        delay_ms: u64,
        duration_ms: u64,
        easing: Easing,
        from_translate: (i16, i16),
    ) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
            easing,
            from_translate,
        }
    }

    pub fn keyframes(&self) -> Keyframes {
        Keyframes::fade_in(self.duration)
            .from_translate(self.from_translate.0, self.from_translate.1)
            .delay(self.delay)
            .easing(self.easing)
    }
}

const GLOW_DELAYS_MS: [u64; 2] = [400, 600];

pub fn cue(stage: Stage) -> Cue {
    match stage {
        Stage::Backdrop => Cue::new(0, 300, Easing::EaseOut, (0, 0)),
        Stage::Panel => Cue::new(0, 500, Easing::SNAP, (0, -1)),
        Stage::Pattern => Cue::new(300, 800, Easing::EaseOut, (0, 0)),
        Stage::Glow(i) => {
            let delay = GLOW_DELAYS_MS[i.min(GLOW_DELAYS_MS.len() - 1)];
            Cue::new(delay, 1000, Easing::SNAP, (0, 0))
        }
        Stage::Link(i) => Cue::new(200 + 100 * i as u64, 600, Easing::SNAP, (3, 0)),
        Stage::Footer => Cue::new(800, 700, Easing::SNAP, (0, 1)),
    }
}

/// The whole entrance in paint order for a menu with `links` links.
pub fn script(links: usize) -> Vec<(Stage, Cue)> {
    let mut stages = vec![Stage::Backdrop, Stage::Panel, Stage::Pattern];
    stages.extend((0..GLOW_DELAYS_MS.len()).map(Stage::Glow));
    stages.extend((0..links).map(Stage::Link));
    stages.push(Stage::Footer);
    stages.into_iter().map(|stage| (stage, cue(stage))).collect()
}
