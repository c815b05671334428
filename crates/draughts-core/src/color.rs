//! Player color representation.

/// Represents the two sides in draughts.
///
/// Light starts on the bottom lines of the board and travels up,
/// Dark starts on the top lines and travels down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Returns the index (0 for Light, 1 for Dark).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if men of this color move toward line 0.
    #[inline]
    pub const fn moves_up(self) -> bool {
        matches!(self, Color::Light)
    }

    /// Returns the glyph used for a man of this color.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Color::Light => 'o',
            Color::Dark => 'x',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}
