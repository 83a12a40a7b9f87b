use std::time::Duration;

/// Easing function for transitions and mount animations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The "snappy" curve used for overlay entrances.
    pub const SNAP: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_axis_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve x(s) = t for the curve parameter, then return y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let mut s = t;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - t;
        if err.abs() < 1e-5 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled; bisect.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_axis(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

/// A CSS-style property transition: when an element's opacity or translation
/// changes between frames, it moves to the new value over `duration`, after
/// waiting `delay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A mount animation with `fill: forwards` semantics: the element starts at
/// `from_opacity`/`from_translate` and animates to its declared values.
/// Before `delay` has elapsed the element holds the `from` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub from_opacity: f32,
    pub from_translate: (i16, i16),
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Keyframes {
    /// Fade in from fully transparent.
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            from_opacity: 0.0,
            from_translate: (0, 0),
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    pub fn from_translate(mut self, dx: i16, dy: i16) -> Self {
        self.from_translate = (dx, dy);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress `elapsed` after mount.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return 0.0;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.easing.apply(t)
    }

    /// Total time from mount until the animation settles.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}
