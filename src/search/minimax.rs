//! Naive depth-limited [Minimax] without any pruning.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use crate::draughts::board::Board;
use crate::draughts::core::Player;
use crate::draughts::moves::Move;
use crate::evaluation::{evaluate, Value, Weights};
use crate::search::Depth;

/// Parameters shared by the whole search tree.
pub(super) struct Context<'a> {
    /// Leaves are evaluated from this player's perspective.
    pub(super) root: Player,
    pub(super) max_depth: Depth,
    pub(super) weights: &'a Weights,
}

/// Returns the value of `board` with `to_move` to play and the move leading to
/// it. The root player maximizes and the opponent minimizes; the first move
/// reaching the best value wins ties.
pub(super) fn minimax(
    board: &Board,
    to_move: Player,
    context: &Context<'_>,
    depth: Depth,
    nodes: &mut u64,
) -> (Value, Option<Move>) {
    *nodes += 1;
    let moves = board.legal_moves(to_move);
    if moves.is_empty() || depth >= context.max_depth {
        return (evaluate(board, context.root, context.weights), None);
    }
    let maximizing = to_move == context.root;
    let mut best: Option<(Value, Move)> = None;
    for next_move in moves {
        let (value, _) = minimax(
            &board.apply(&next_move),
            to_move.opponent(),
            context,
            depth + 1,
            nodes,
        );
        log::trace!("depth {depth}: {next_move} -> {value}");
        let improves = best.as_ref().map_or(true, |(best_value, _)| {
            if maximizing {
                value > *best_value
            } else {
                value < *best_value
            }
        });
        if improves {
            best = Some((value, next_move));
        }
    }
    match best {
        Some((value, best_move)) => (value, Some(best_move)),
        None => (evaluate(board, context.root, context.weights), None),
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::draughts::board::Board;
    use crate::draughts::core::{Piece, Player, Position};
    use crate::draughts::moves::Move;
    use crate::evaluation::{evaluate, Weights};
    use crate::search::{search, Config, SearchResult};

    fn at(file: u8, row: u8) -> Position {
        Position::new(file, row).unwrap()
    }

    fn config(max_depth: u8) -> Config {
        Config {
            max_depth,
            ..Config::default()
        }
    }

    #[test]
    fn zero_depth() {
        let board = Board::starting();
        assert_eq!(
            search(&board, Player::One, &config(0)),
            SearchResult {
                value: 0,
                best_move: None,
                nodes: 1,
            }
        );
    }

    #[test]
    fn no_moves() {
        let mut board = Board::empty();
        board.set(at(1, 0), Some(Piece::man(Player::One)));
        let result = search(&board, Player::Two, &config(4));
        assert_eq!(result.best_move, None);
        assert_eq!(
            result.value,
            evaluate(&board, Player::Two, &Weights::default())
        );
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn forced_capture() {
        let mut board = Board::empty();
        board.set(at(2, 3), Some(Piece::man(Player::One)));
        board.set(at(3, 4), Some(Piece::man(Player::Two)));
        let result = search(&board, Player::One, &config(1));
        assert_eq!(
            result.best_move,
            Some(Move::new(Player::One, &[at(2, 3), at(4, 5)]).unwrap())
        );
        // Root and the only child.
        assert_eq!(result.nodes, 2);
    }

    #[test]
    fn avoids_losing_piece() {
        // Stepping to {2, 3} gives the Green man a capture.
        let mut board = Board::empty();
        board.set(at(1, 2), Some(Piece::man(Player::One)));
        board.set(at(3, 4), Some(Piece::man(Player::Two)));
        let result = search(&board, Player::One, &config(2));
        assert_eq!(
            result.best_move,
            Some(Move::new(Player::One, &[at(1, 2), at(0, 3)]).unwrap())
        );
        assert_eq!(result.value, -2);
        assert_eq!(result.nodes, 6);
    }

    #[test]
    fn second_player_perspective() {
        // Mirror of the above: the root player maximizes regardless of its
        // colour.
        let mut board = Board::empty();
        board.set(at(6, 5), Some(Piece::man(Player::Two)));
        board.set(at(4, 3), Some(Piece::man(Player::One)));
        let result = search(&board, Player::Two, &config(2));
        assert_eq!(
            result.best_move,
            Some(Move::new(Player::Two, &[at(6, 5), at(7, 4)]).unwrap())
        );
        assert_eq!(result.value, -2);
    }

    #[test]
    fn starting_position() {
        let board = Board::starting();
        let result = search(&board, Player::One, &config(3));
        let best_move = result.best_move.unwrap();
        assert_eq!(board.check_move(&best_move), Ok(()));
        // 1 + 7 + 49 + 302 boards.
        assert_eq!(result.nodes, 359);
    }
}
