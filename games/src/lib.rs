//! minimax Games - Payoff matrix construction
//!
//! This crate turns game descriptions into payoff matrices for the engine:
//! a catalog of named and parameterized games, a text format for arbitrary
//! matrices, and a helper for picking the shift constant.

pub mod catalog;
pub mod error;
pub mod parse;
pub mod shift;

pub use catalog::{Game, CATALOG};
pub use error::{GameError, ParseError};
pub use parse::{parse_matrix, read_matrix};
pub use shift::auto_shift;
