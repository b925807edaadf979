//! Implements [Minimax] search over the tree of legal moves: the engine looks
//! a fixed number of plies ahead and picks the move with the best
//! [`crate::evaluation`] of the resulting boards.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use crate::draughts::board::Board;
use crate::draughts::core::Player;
use crate::draughts::moves::Move;
use crate::evaluation::{Value, Weights};

mod minimax;

/// Search depth in plies.
pub type Depth = u8;

/// Search parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of plies to look ahead.
    pub max_depth: Depth,
    /// Evaluation of the leaves.
    pub weights: Weights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 6,
            weights: Weights::default(),
        }
    }
}

/// Outcome of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the best line from the perspective of the player to move at
    /// the root.
    pub value: Value,
    /// `None` if there are no legal moves or the search depth is 0.
    pub best_move: Option<Move>,
    /// Number of visited boards, root included.
    pub nodes: u64,
}

/// Looks for the best move of `player` on `board`.
///
/// ```
/// use kingrow::draughts::board::Board;
/// use kingrow::draughts::core::Player;
/// use kingrow::search::{search, Config};
///
/// let config = Config {
///     max_depth: 2,
///     ..Config::default()
/// };
/// let board = Board::starting();
/// let result = search(&board, Player::One, &config);
/// assert!(board.legal_moves(Player::One).contains(&result.best_move.unwrap()));
/// ```
#[must_use]
pub fn search(board: &Board, player: Player, config: &Config) -> SearchResult {
    let mut nodes = 0;
    let (value, best_move) = minimax::minimax(
        board,
        player,
        &minimax::Context {
            root: player,
            max_depth: config.max_depth,
            weights: &config.weights,
        },
        0,
        &mut nodes,
    );
    match &best_move {
        Some(best_move) => log::debug!(
            "depth {}: best move {best_move} with value {value}, {nodes} nodes",
            config.max_depth
        ),
        None => log::debug!("depth {}: no moves to search, value {value}", config.max_depth),
    }
    SearchResult {
        value,
        best_move,
        nodes,
    }
}
