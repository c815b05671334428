//! Board state: occupancy on top of a fixed topology.

use std::collections::HashMap;

use draughts_core::{Color, Move, Piece};
use tracing::debug;

use crate::coord::{coord_name, parse_coord};
use crate::movegen;
use crate::topology::{Neighbors, Topology};
use crate::{BoardError, Setup};

/// The state of one square, returned by value from [`Board::square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub piece: Option<Piece>,
    pub neighbors: Neighbors,
}

impl Square {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub fn has_color(&self, color: Color) -> bool {
        self.piece.is_some_and(|p| p.color() == color)
    }
}

/// A draughts board.
///
/// The topology is fixed at construction; only the occupancy changes, and
/// only through [`apply`](Board::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    topology: Topology,
    pieces: Vec<Option<Piece>>,
}

impl Board {
    /// Factor of the classic 8x8 board.
    pub const DEFAULT_FACTOR: usize = 4;

    /// Creates a board of `factor` with the standard layout.
    pub fn new(factor: usize) -> Result<Self, BoardError> {
        let topology = Topology::new(factor)?;
        Self::from_parts(topology, &Setup::standard(factor))
    }

    /// Creates a board of `factor` with no pieces.
    pub fn empty(factor: usize) -> Result<Self, BoardError> {
        Self::with_setup(factor, &Setup::new())
    }

    /// Creates a board of `factor` with a custom placement.
    pub fn with_setup(factor: usize, setup: &Setup) -> Result<Self, BoardError> {
        Self::from_parts(Topology::new(factor)?, setup)
    }

    fn from_parts(topology: Topology, setup: &Setup) -> Result<Self, BoardError> {
        let factor = topology.factor();
        let pieces = setup.occupancy(topology.size())?;
        debug!(
            factor,
            size = topology.size(),
            pieces = pieces.iter().flatten().count(),
            "built board"
        );
        Ok(Board { topology, pieces })
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn factor(&self) -> usize {
        self.topology.factor()
    }

    #[inline]
    pub fn lines(&self) -> usize {
        self.topology.lines()
    }

    /// Returns the number of playable squares.
    #[inline]
    pub fn size(&self) -> usize {
        self.topology.size()
    }

    /// Returns the state of a square, or `None` off the board.
    pub fn square(&self, index: usize) -> Option<Square> {
        let piece = *self.pieces.get(index)?;
        Some(Square {
            piece,
            neighbors: self.topology.neighbors(index),
        })
    }

    #[inline]
    pub fn piece_at(&self, index: usize) -> Option<Piece> {
        self.pieces.get(index).copied().flatten()
    }

    /// Returns true if the square exists and holds no piece.
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.pieces.get(index), Some(None))
    }

    #[inline]
    pub fn square_has_color(&self, index: usize, color: Color) -> bool {
        self.piece_at(index).is_some_and(|p| p.color() == color)
    }

    /// Iterates over the occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i, p)))
    }

    /// Returns the number of pieces of a color, kings included.
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color() == color).count()
    }

    /// Converts a two-character coordinate into a square index.
    ///
    /// See [`parse_coord`] for the accepted notations.
    pub fn coord_convert(&self, coord: &str) -> Result<usize, BoardError> {
        parse_coord(coord, self.factor())
    }

    /// Returns the algebraic name of a square, e.g. `"C3"`.
    pub fn index_to_coord(&self, index: usize) -> Option<String> {
        coord_name(index, self.factor())
    }

    /// Returns true if `piece` is crowned by arriving on `index`.
    ///
    /// Kings are never promoted again.
    pub fn need_promotion(&self, index: usize, piece: Piece) -> bool {
        !piece.is_king() && self.topology.is_far_line(index, piece.moves_up())
    }

    /// Returns the legal moves of the piece on `from`.
    ///
    /// Captures are mandatory: when any capture chain exists only capture
    /// chains are returned.
    pub fn generate_moves(&self, from: usize) -> Vec<Move> {
        movegen::generate_moves(self, from)
    }

    /// Applies a move.
    ///
    /// The move is validated completely before the board is touched, so on
    /// error the board is unchanged.
    pub fn apply(&mut self, m: &Move) -> Result<(), BoardError> {
        self.validate(m)?;

        let mut piece = self.pieces[m.from()]
            .take()
            .ok_or_else(|| BoardError::illegal("can't move an empty square"))?;
        for &captured in m.captured() {
            self.pieces[captured] = None;
        }
        if m.is_promotion() {
            piece = piece.crowned();
        }
        self.pieces[m.to()] = Some(piece);

        debug!(
            mv = %m,
            captured = m.capture_count(),
            promotion = m.is_promotion(),
            "applied move"
        );
        Ok(())
    }

    fn validate(&self, m: &Move) -> Result<(), BoardError> {
        for index in [m.from(), m.to()] {
            if !self.topology.contains(index) {
                return Err(BoardError::illegal(format!(
                    "square {} is outside the board",
                    index
                )));
            }
        }
        let Some(piece) = self.piece_at(m.from()) else {
            return Err(BoardError::illegal("can't move an empty square"));
        };
        if !self.is_empty(m.to()) {
            return Err(BoardError::illegal("can't go to a non-empty square"));
        }
        for (i, &captured) in m.captured().iter().enumerate() {
            if !self.topology.contains(captured) {
                return Err(BoardError::illegal(format!(
                    "captured square {} is outside the board",
                    captured
                )));
            }
            if self.is_empty(captured) {
                return Err(BoardError::illegal(format!(
                    "can't capture the empty square {}",
                    captured
                )));
            }
            if captured == m.from() || self.square_has_color(captured, piece.color()) {
                return Err(BoardError::illegal(format!(
                    "can't capture own piece on square {}",
                    captured
                )));
            }
            if m.captured()[..i].contains(&captured) {
                return Err(BoardError::illegal(format!(
                    "square {} is captured twice",
                    captured
                )));
            }
        }
        Ok(())
    }

    /// Applies a non-capturing move written as two coordinates, e.g. `"C3D4"`.
    ///
    /// Only the checks of [`apply`](Board::apply) are made; the step does not
    /// have to be one [`generate_moves`](Board::generate_moves) would offer.
    pub fn apply_simple(&mut self, simple_move: &str) -> Result<Move, BoardError> {
        let chars: Vec<char> = simple_move.chars().collect();
        if chars.len() != 4 {
            return Err(BoardError::coordinate("simple move's length is not 4"));
        }
        let from: String = chars[..2].iter().collect();
        let to: String = chars[2..].iter().collect();
        let from = self.coord_convert(&from)?;
        let to = self.coord_convert(&to)?;

        let piece = self
            .piece_at(from)
            .ok_or_else(|| BoardError::illegal("can't move an empty square"))?;
        let m = Move::new(from, to, Vec::new(), self.need_promotion(to, piece));
        self.apply(&m)?;
        Ok(m)
    }

    /// Returns the display glyph of the piece on a square.
    #[inline]
    pub fn glyph(&self, index: usize) -> Option<char> {
        self.piece_at(index).map(Piece::glyph)
    }

    /// Returns one display cell per square: the marker if the square has one,
    /// otherwise the piece glyph, otherwise a blank.
    pub fn view(&self, markers: &HashMap<usize, String>) -> Vec<String> {
        (0..self.size())
            .map(|i| match (markers.get(&i), self.glyph(i)) {
                (Some(marker), _) => marker.clone(),
                (None, Some(glyph)) => glyph.to_string(),
                (None, None) => " ".to_string(),
            })
            .collect()
    }
}
