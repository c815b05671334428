//! Draughts rules engine.
//!
//! This crate provides:
//! - [`Topology`] - precomputed diagonal adjacency of the playable squares
//! - [`Board`] - piece occupancy, coordinates, and move application
//! - [`Setup`] - standard or custom initial placement
//! - Move generation with mandatory capture chains and promotion
//!
//! # Example
//!
//! ```
//! use draughts_engine::Board;
//!
//! let mut board = Board::new(4).unwrap();
//! let from = board.coord_convert("C3").unwrap();
//! let moves = board.generate_moves(from);
//! assert_eq!(moves.len(), 2);
//!
//! board.apply(&moves[0]).unwrap();
//! assert!(board.is_empty(from));
//! ```

mod board;
pub mod coord;
mod error;
pub mod movegen;
mod setup;
pub mod topology;

pub use board::{Board, Square};
pub use error::BoardError;
pub use movegen::{generate_captures, generate_moves};
pub use setup::Setup;
pub use topology::{Neighbors, Topology, MAX_FACTOR};

pub use draughts_core::{Color, Direction, Move, Piece};
