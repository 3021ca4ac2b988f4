//! Character palettes for luminance-to-glyph mapping.

/// Default character ramp (11 levels).
/// Characters ordered from densest (full block) to sparsest (space).
/// Dark regions map to the front of the slice, bright regions to the back.
pub const COMPLEX_CHARSET: &[char] = &['█', '░', '@', '%', '=', '+', '*', ':', '-', '.', ' '];

/// Extended character ramp (22 levels).
/// A finer gradient at the cost of a noisier result.
pub const SIMPLE_CHARSET: &[char] = &[
    '█', '░', '@', '&', '$', '%', '!', '(', ')', '=', '+', '^', '*', ';', ':', '_', '-', '"', '/',
    ',', '.', ' ',
];

/// Palette selection for ASCII conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Default 11-glyph ramp
    #[default]
    Complex,
    /// Extended 22-glyph ramp
    Simple,
}

impl Palette {
    /// Get the character slice for this palette, ordered densest to sparsest.
    pub fn chars(&self) -> &'static [char] {
        match self {
            Palette::Complex => COMPLEX_CHARSET,
            Palette::Simple => SIMPLE_CHARSET,
        }
    }

    /// Cycle to the next palette.
    pub fn next(&self) -> Self {
        match self {
            Palette::Complex => Palette::Simple,
            Palette::Simple => Palette::Complex,
        }
    }

    /// Get a human-readable name for the palette.
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Complex => "complex",
            Palette::Simple => "simple",
        }
    }

    /// Parse a palette name from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "complex" => Some(Palette::Complex),
            "simple" => Some(Palette::Simple),
            _ => None,
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
