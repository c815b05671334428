//! Core types for draughts.
//!
//! This crate provides the fundamental types used across the draughts engine:
//! - [`Color`] and [`Piece`] for piece representation
//! - [`Direction`] for the four diagonal steps between playable squares
//! - [`Move`] for plain moves and capture chains
//!
//! Squares are plain `usize` indices into the playable squares of a board;
//! their geometry depends on the board size and lives in `draughts-engine`.

mod color;
mod direction;
mod mov;
mod piece;

pub use color::Color;
pub use direction::Direction;
pub use mov::Move;
pub use piece::Piece;
