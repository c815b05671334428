//! Draughts piece representation.

use crate::Color;

/// A piece on the board: a man or a king of one color.
///
/// Pieces are immutable values. Promotion replaces a man with
/// [`crowned`](Piece::crowned) rather than flipping a flag in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece { color, king: false }
    }

    /// Creates a king.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece { color, king: true }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Returns this piece as a king. Crowning a king is a no-op.
    #[inline]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Returns true if the piece travels toward line 0 on plain moves.
    #[inline]
    pub const fn moves_up(self) -> bool {
        self.color.moves_up()
    }

    /// Returns the display glyph: the color's letter, upper case for kings.
    pub const fn glyph(self) -> char {
        let c = self.color.glyph();
        if self.king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = if self.king { "king" } else { "man" };
        write!(f, "{} {}", self.color, rank)
    }
}
