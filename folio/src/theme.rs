use pagedom::{Color, Rgb};

/// Page palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub card: Color,
    pub secondary: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::oklch(0.16, 0.01, 260.0),
            foreground: Color::oklch(0.95, 0.005, 260.0),
            muted: Color::oklch(0.68, 0.02, 260.0),
            accent: Color::oklch(0.74, 0.15, 195.0),
            card: Color::oklch(0.2, 0.012, 260.0),
            secondary: Color::oklch(0.27, 0.015, 260.0),
            border: Color::oklch(0.32, 0.015, 260.0),
        }
    }

    /// Color the terminal is cleared to each frame.
    pub fn clear_color(&self) -> Rgb {
        self.background.to_rgb()
    }
}
