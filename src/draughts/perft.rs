//! [Perft] (*per*formance *t*esting) counts the leaves of the legal move tree
//! to a fixed depth. The numbers are well-known for the starting position, so
//! this checks move generation, forced capture and move application at once.
//!
//! [Perft]: https://www.chessprogramming.org/Perft

use crate::draughts::board::Board;
use crate::draughts::core::Player;

/// Number of leaf nodes reachable from `board` in exactly `depth` plies with
/// `player` to move. Lines ending early (no legal moves) are not counted.
#[must_use]
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves(player);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|next_move| perft(&board.apply(next_move), player.opponent(), depth - 1))
        .sum()
}
