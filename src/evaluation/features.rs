use crate::draughts::board::Board;
use crate::draughts::core::Player;
use crate::draughts::moves::Move;
use crate::evaluation::{Value, Weights};

/// Raw evaluation features of a board: differences between the player and the
/// opponent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Features {
    /// Men and kings.
    pub piece_diff: Value,
    /// Kings only, on top of [`Self::piece_diff`].
    pub king_diff: Value,
    /// Number of generated moves, forced capture is not applied.
    pub moves_count_diff: Value,
    /// Pieces that can be taken: each capture chain counts the jumps it makes.
    pub capturable_diff: Value,
    /// Moves landing on the row where men are crowned.
    pub king_maker_diff: Value,
}

/// Per-player move statistics.
#[derive(Default)]
struct Mobility {
    moves: Value,
    capturable: Value,
    king_makers: Value,
}

impl Mobility {
    fn new(board: &Board, player: Player) -> Self {
        let mut mobility = Self::default();
        for next_move in board.generate_moves(player) {
            mobility.moves += 1;
            if next_move.to().row() == player.promotion_row() {
                mobility.king_makers += 1;
            }
            if next_move.is_capture() {
                mobility.capturable += jumps(&next_move);
            }
        }
        mobility
    }
}

fn jumps(chain: &Move) -> Value {
    Value::try_from(chain.squares().len() - 1).unwrap_or(Value::MAX)
}

impl Features {
    /// Extracts the features of `board` from the perspective of `player`.
    #[must_use]
    pub fn new(board: &Board, player: Player) -> Self {
        let opponent = player.opponent();
        let count = board.count_pieces();
        let ours = Mobility::new(board, player);
        let theirs = Mobility::new(board, opponent);
        Self {
            piece_diff: Value::from(count.total(player)) - Value::from(count.total(opponent)),
            king_diff: Value::from(count.kings(player)) - Value::from(count.kings(opponent)),
            moves_count_diff: ours.moves - theirs.moves,
            capturable_diff: ours.capturable - theirs.capturable,
            king_maker_diff: ours.king_makers - theirs.king_makers,
        }
    }

    /// Weighted sum of the features.
    #[must_use]
    pub const fn score(&self, weights: &Weights) -> Value {
        self.piece_diff * weights.piece
            + self.king_diff * weights.king
            + self.moves_count_diff * weights.moves_count
            + self.capturable_diff * weights.capturable
            + self.king_maker_diff * weights.king_maker
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starting_position() {
        assert_eq!(
            Features::new(&Board::starting(), Player::One),
            Features::default()
        );
    }

    #[test]
    fn material() {
        let board = Board::from_rows(&[
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 1, 0, 1, 0],
            [0, -1, 0, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, -1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 2, 0, 0, 0, 0],
        ])
        .unwrap();
        let features = Features::new(&board, Player::One);
        assert_eq!(features.piece_diff, 4);
        assert_eq!(features.king_diff, 2);
    }

    #[test]
    fn mobility() {
        let board = Board::from_rows(&[
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, -1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [2, 0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let features = Features::new(&board, Player::One);
        assert_eq!(features.moves_count_diff, 3);
        assert_eq!(Features::new(&board, Player::Two).moves_count_diff, -3);
    }

    #[test]
    fn captures_and_king_makers() {
        let board = Board::from_rows(&[
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, -1, 0, 0, 0],
            [0, 0, 0, 0, 0, 2, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0, 0, 0, 0],
            [0, 0, 2, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let features = Features::new(&board, Player::One);
        assert_eq!(features.piece_diff, 0);
        assert_eq!(features.king_diff, 1);
        // Red: three king steps, the king jumping {5, 2} and {1, 6} to {0, 7}.
        // Green: two steps, {5, 2} jumping the king and {2, 7} jumping {1, 6}.
        assert_eq!(features.moves_count_diff, 5 - 4);
        assert_eq!(features.capturable_diff, 1 - 2);
        // {1, 6} to {0, 7} and {5, 2} to {3, 0} both crown.
        assert_eq!(features.king_maker_diff, 0);
        assert_eq!(features.score(&Weights::default()), 20 + 2 - 10);
    }
}
