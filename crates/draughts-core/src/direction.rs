//! Diagonal step directions.

/// One of the four diagonal steps between playable squares.
///
/// The northern directions point toward line 0 of the board. Within a line,
/// `NorthEast`/`SouthEast` lead to the lower of the two candidate indices and
/// `NorthWest`/`SouthWest` to the higher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthEast = 0,
    NorthWest = 1,
    SouthEast = 2,
    SouthWest = 3,
}

impl Direction {
    /// All directions in search order.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Returns the index of this direction (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the two directions pointing toward line 0.
    #[inline]
    pub const fn is_up(self) -> bool {
        (self as u8) & 2 == 0
    }

    /// Returns the direction leading back to the starting square.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        };
        write!(f, "{}", name)
    }
}
