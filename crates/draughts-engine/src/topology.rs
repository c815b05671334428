//! Diagonal adjacency between playable squares.
//!
//! Playable squares are indexed left to right, line by line, starting from
//! line 0 at the top of the board. Even lines have their squares shifted one
//! column to the right of odd lines, so neighbor indices cannot be derived
//! from fixed offsets and are computed per square when the board is built.

use draughts_core::Direction;

use crate::BoardError;

/// Largest supported factor; `2 * 13` columns use up the letters A to Z.
pub const MAX_FACTOR: usize = 13;

/// The four diagonal neighbors of one square, indexed by [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors([Option<usize>; 4]);

impl Neighbors {
    /// A square with no neighbors.
    pub const NONE: Neighbors = Neighbors([None; 4]);

    /// Returns the neighbor in the given direction, if any.
    #[inline]
    pub const fn get(self, dir: Direction) -> Option<usize> {
        self.0[dir.index()]
    }

    #[inline]
    fn set(&mut self, dir: Direction, index: usize) {
        self.0[dir.index()] = Some(index);
    }

    /// Iterates over the existing neighbors in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = (Direction, usize)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.get(dir).map(|index| (dir, index)))
    }

    /// Returns the number of existing neighbors (1 to 4 on any real board).
    pub fn count(self) -> usize {
        self.0.iter().filter(|n| n.is_some()).count()
    }
}

/// Precomputed adjacency for a board of a given factor.
///
/// The factor is half the side length: factor 4 is the classic 8x8 board
/// with 32 playable squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    factor: usize,
    lines: usize,
    table: Vec<Neighbors>,
}

impl Topology {
    /// Builds the adjacency table for `factor`.
    pub fn new(factor: usize) -> Result<Self, BoardError> {
        if factor == 0 || factor > MAX_FACTOR {
            return Err(BoardError::InvalidFactor(factor));
        }
        let lines = factor * 2;
        let table = (0..factor * lines)
            .map(|i| Self::square_neighbors(factor, lines, i))
            .collect();
        Ok(Topology {
            factor,
            lines,
            table,
        })
    }

    fn square_neighbors(factor: usize, lines: usize, i: usize) -> Neighbors {
        let current_line = i / factor;
        let line_bonus = current_line % 2;
        let current_column = i % factor + (1 - line_bonus);
        let base = i - line_bonus;

        let mut neighbors = Neighbors::NONE;
        // The first square of an odd line has `base < factor`; it has no
        // NorthEast neighbor, and its NorthWest one is `base + 1 - factor`.
        if current_line != 0 {
            if current_column != 0 {
                neighbors.set(Direction::NorthEast, base - factor);
            }
            if current_column != factor {
                neighbors.set(Direction::NorthWest, base + 1 - factor);
            }
        }
        if current_line != lines - 1 {
            let bottom = base + factor;
            if current_column != 0 {
                neighbors.set(Direction::SouthEast, bottom);
            }
            if current_column != factor {
                neighbors.set(Direction::SouthWest, bottom + 1);
            }
        }
        neighbors
    }

    /// Returns half the side length of the board.
    #[inline]
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Returns the number of lines (rows) on the board.
    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Returns the number of playable squares, `2 * factor²`.
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.size()
    }

    /// Returns the neighbors of a square; [`Neighbors::NONE`] off the board.
    #[inline]
    pub fn neighbors(&self, index: usize) -> Neighbors {
        self.table.get(index).copied().unwrap_or_default()
    }

    /// Returns the neighbor of a square in one direction.
    #[inline]
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        self.neighbors(index).get(dir)
    }

    /// Returns the line of a square, 0 being the top line.
    #[inline]
    pub fn line_of(&self, index: usize) -> usize {
        index / self.factor
    }

    /// Returns true if the square is on the last line reached when
    /// travelling up (`up == true`) or down.
    pub fn is_far_line(&self, index: usize, up: bool) -> bool {
        if !self.contains(index) {
            return false;
        }
        let line = self.line_of(index);
        if up {
            line == 0
        } else {
            line == self.lines - 1
        }
    }
}
