use palette::{IntoColor, Oklab, Oklch, Srgb};

/// A color as authored on an element.
///
/// Oklch colors carry an alpha channel; it is honoured when filling
/// backgrounds (the fill is blended over what is already in the buffer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

/// A concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix towards `other` by `t` (0.0 = self, 1.0 = other) in Oklab space.
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }

        let from = to_oklab(self);
        let to = to_oklab(other);
        let mixed = Oklab::new(
            from.l + (to.l - from.l) * t,
            from.a + (to.a - from.a) * t,
            from.b + (to.b - from.b) * t,
        );
        let srgb: Srgb = mixed.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

fn to_oklab(rgb: Rgb) -> Oklab {
    let srgb = Srgb::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
    );
    srgb.into_color()
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } => *a,
            Self::Rgb { .. } => 1.0,
        }
    }

    /// Same color with a different alpha. Rgb colors become Oklch.
    pub fn with_alpha(self, a: f32) -> Self {
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a },
            Self::Rgb { .. } => {
                let (l, c, h) = self.to_oklch();
                Self::Oklch { l, c, h, a }
            }
        }
    }

    /// Lightness, chroma, hue (degrees).
    pub fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h, .. } => (*l, *c, *h),
            Self::Rgb { r, g, b } => {
                let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
