//! Move representation.

use std::fmt;

/// A draughts move: a plain step or a whole capture chain.
///
/// Square indices are 0-based; the [`Display`](fmt::Display) form uses the
/// 1-based numeric notation, `9-13` for a step and `9x18` for a capture.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    from: usize,
    to: usize,
    captured: Vec<usize>,
    promotion: bool,
}

impl Move {
    /// Creates a move with an explicit capture list.
    pub fn new(from: usize, to: usize, captured: Vec<usize>, promotion: bool) -> Self {
        Move {
            from,
            to,
            captured,
            promotion,
        }
    }

    /// Creates a non-capturing, non-promoting move.
    #[inline]
    pub fn simple(from: usize, to: usize) -> Self {
        Self::new(from, to, Vec::new(), false)
    }

    /// Returns the source square.
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the jumped squares in the order they are captured.
    #[inline]
    pub fn captured(&self) -> &[usize] {
        &self.captured
    }

    /// Returns true if the moving piece is crowned by this move.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Returns the number of captured pieces.
    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }

    /// Returns the numeric notation for this move (e.g., "9-13", "22x15").
    pub fn to_notation(&self) -> String {
        let sep = if self.is_capture() { 'x' } else { '-' };
        format!("{}{}{}", self.from + 1, sep, self.to + 1)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self.to_notation())?;
        if self.is_capture() {
            write!(f, " captures {:?}", self.captured)?;
        }
        if self.promotion {
            write!(f, " promotes")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
