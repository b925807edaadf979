//! This module implements "static" [evaluation], i.e. predicting the relative
//! value of a given board for one of the players without [`crate::search`].
//!
//! The value is a weighted sum of a few differentials between the player and
//! the opponent, see [`Features`]. Positive values are good for the player.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

use crate::draughts::board::Board;
use crate::draughts::core::Player;

mod features;

pub use features::Features;

/// Relative value of a board. The weighted sum is not normalized.
pub type Value = i32;

/// Weights of the evaluation features.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Weights {
    pub piece: Value,
    pub king: Value,
    pub moves_count: Value,
    pub capturable: Value,
    pub king_maker: Value,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            piece: 15,
            king: 20,
            moves_count: 2,
            capturable: 10,
            king_maker: 6,
        }
    }
}

/// Evaluates `board` from the perspective of `player`, regardless of whose
/// turn it is.
///
/// ```
/// use kingrow::draughts::board::Board;
/// use kingrow::draughts::core::Player;
/// use kingrow::evaluation::{evaluate, Weights};
///
/// // The starting position is symmetric.
/// assert_eq!(evaluate(&Board::starting(), Player::One, &Weights::default()), 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board, player: Player, weights: &Weights) -> Value {
    Features::new(board, player).score(weights)
}
