//! Implementation of English draughts, its rules and specifics: the board,
//! moves, move generation and validation, standard notation.

pub mod board;
pub mod core;
mod display;
mod error;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
mod validate;

pub use error::Error;
