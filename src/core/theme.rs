/// Visual theme resolved once at application start. Consumers read it through
/// a shared handle; only the theme-toggle control writes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference string. Anything unrecognized falls back to light.
    pub fn from_preference(s: &str) -> Theme {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// 8-bit RGB color with a floating-point alpha, printable as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiply alpha by `k`, clamped to [0, 1].
    #[inline]
    pub fn scale_alpha(self, k: f32) -> Self {
        self.with_alpha(self.a * k)
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Which palette a blob field samples its colors from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Four-color section accent palette.
    Hero,
    /// Seven-color page-wide drift palette.
    Backdrop,
}

impl Palette {
    pub fn colors(self, theme: Theme) -> &'static [Rgba] {
        match (self, theme) {
            (Palette::Hero, Theme::Dark) => &HERO_DARK,
            (Palette::Hero, Theme::Light) => &HERO_LIGHT,
            (Palette::Backdrop, Theme::Dark) => &BACKDROP_DARK,
            (Palette::Backdrop, Theme::Light) => &BACKDROP_LIGHT,
        }
    }
}

pub const HERO_DARK: [Rgba; 4] = [
    Rgba::new(59, 130, 246, 0.15),
    Rgba::new(139, 92, 246, 0.15),
    Rgba::new(236, 72, 153, 0.15),
    Rgba::new(16, 185, 129, 0.15),
];

pub const HERO_LIGHT: [Rgba; 4] = [
    Rgba::new(59, 130, 246, 0.08),
    Rgba::new(139, 92, 246, 0.08),
    Rgba::new(236, 72, 153, 0.08),
    Rgba::new(16, 185, 129, 0.08),
];

pub const BACKDROP_DARK: [Rgba; 7] = [
    Rgba::new(56, 189, 248, 0.35),
    Rgba::new(99, 102, 241, 0.35),
    Rgba::new(217, 70, 239, 0.35),
    Rgba::new(236, 72, 153, 0.35),
    Rgba::new(16, 185, 129, 0.35),
    Rgba::new(245, 158, 11, 0.35),
    Rgba::new(37, 99, 235, 0.35),
];

pub const BACKDROP_LIGHT: [Rgba; 7] = [
    Rgba::new(56, 189, 248, 0.12),
    Rgba::new(99, 102, 241, 0.12),
    Rgba::new(217, 70, 239, 0.12),
    Rgba::new(236, 72, 153, 0.12),
    Rgba::new(16, 185, 129, 0.12),
    Rgba::new(245, 158, 11, 0.12),
    Rgba::new(37, 99, 235, 0.12),
];

/// Blue accent used for the majority of molecule nodes.
pub fn node_primary(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => Rgba::new(59, 130, 246, 0.3),
        Theme::Light => Rgba::new(59, 130, 246, 0.2),
    }
}

/// Purple accent used for the remainder of molecule nodes.
pub fn node_secondary(theme: Theme) -> Rgba {
    match theme {
        Theme::Dark => Rgba::new(139, 92, 246, 0.3),
        Theme::Light => Rgba::new(139, 92, 246, 0.2),
    }
}
