//! Initial piece placement.

use draughts_core::{Color, Piece};

use crate::BoardError;

/// An initial placement: four disjoint sets of square indices.
///
/// # Example
///
/// ```
/// use draughts_engine::{Board, Setup};
///
/// let setup = Setup::new().light([21]).dark([17]);
/// let board = Board::with_setup(4, &setup).unwrap();
/// assert_eq!(board.generate_moves(21).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setup {
    pub light: Vec<usize>,
    pub dark: Vec<usize>,
    pub light_kings: Vec<usize>,
    pub dark_kings: Vec<usize>,
}

impl Setup {
    /// Creates an empty setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard layout: Dark men on the top `factor - 1` lines, Light men
    /// on the bottom `factor - 1` lines, two empty lines between them.
    pub fn standard(factor: usize) -> Self {
        let size = 2 * factor * factor;
        let dark_end = factor * factor.saturating_sub(1);
        let light_start = factor * (factor + 1);
        Setup {
            light: (light_start..size).collect(),
            dark: (0..dark_end).collect(),
            ..Self::default()
        }
    }

    /// Adds Light men.
    pub fn light(mut self, squares: impl IntoIterator<Item = usize>) -> Self {
        self.light.extend(squares);
        self
    }

    /// Adds Dark men.
    pub fn dark(mut self, squares: impl IntoIterator<Item = usize>) -> Self {
        self.dark.extend(squares);
        self
    }

    /// Adds Light kings.
    pub fn light_kings(mut self, squares: impl IntoIterator<Item = usize>) -> Self {
        self.light_kings.extend(squares);
        self
    }

    /// Adds Dark kings.
    pub fn dark_kings(mut self, squares: impl IntoIterator<Item = usize>) -> Self {
        self.dark_kings.extend(squares);
        self
    }

    /// Iterates over every placement with the piece it puts down.
    pub fn placements(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        tagged(&self.light, Piece::man(Color::Light))
            .chain(tagged(&self.dark, Piece::man(Color::Dark)))
            .chain(tagged(&self.light_kings, Piece::king(Color::Light)))
            .chain(tagged(&self.dark_kings, Piece::king(Color::Dark)))
    }

    /// Expands the setup into one occupant per square.
    pub(crate) fn occupancy(&self, size: usize) -> Result<Vec<Option<Piece>>, BoardError> {
        let mut squares = vec![None; size];
        for (index, piece) in self.placements() {
            let slot = squares.get_mut(index).ok_or_else(|| {
                BoardError::InvalidSetup(format!(
                    "square {} is outside the board (size {})",
                    index, size
                ))
            })?;
            if let Some(existing) = slot {
                return Err(BoardError::InvalidSetup(format!(
                    "square {} is listed twice ({} and {})",
                    index, existing, piece
                )));
            }
            *slot = Some(piece);
        }
        Ok(squares)
    }
}

fn tagged(squares: &[usize], piece: Piece) -> impl Iterator<Item = (usize, Piece)> + '_ {
    squares.iter().map(move |&index| (index, piece))
}
