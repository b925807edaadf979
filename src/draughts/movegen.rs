//! Move generation: simple steps, single jumps and complete capture chains.
//!
//! The generator is the ground truth of what is legal: validation of moves
//! coming from the outside is checked against its output, and the search
//! explores exactly the moves it produces. Hence it has to be exhaustive and
//! must never produce the same chain twice.

use arrayvec::ArrayVec;

use crate::draughts::board::Board;
use crate::draughts::core::{Piece, Player, Position};
use crate::draughts::moves::Move;

const FILE_DIRECTIONS: [i8; 2] = [-1, 1];

/// Row directions a piece can move in: forward first, then backward for
/// kings.
fn row_directions(piece: Piece) -> ArrayVec<i8, 2> {
    let mut directions = ArrayVec::new();
    directions.push(piece.owner.forward());
    if piece.is_king() {
        directions.push(-piece.owner.forward());
    }
    directions
}

impl Board {
    fn piece_of(&self, player: Player, square: Position) -> Option<Piece> {
        self.get(square).filter(|piece| piece.owner == player)
    }

    /// Simple diagonal steps from `square` to empty neighbours: up to two for
    /// a man and four for a king.
    #[must_use]
    pub fn non_capture_moves(&self, player: Player, square: Position) -> Vec<Move> {
        let Some(piece) = self.piece_of(player, square) else {
            return vec![];
        };
        let mut moves = vec![];
        for row_delta in row_directions(piece) {
            for file_delta in FILE_DIRECTIONS {
                if let Some(target) = square.offset(file_delta, row_delta) {
                    if self.get(target).is_none() {
                        moves.push(Move::starting_at(player, square).extended(target));
                    }
                }
            }
        }
        moves
    }

    /// Landing squares of single jumps from `square`: the adjacent diagonal
    /// square holds an opponent's piece and the one right behind it is empty.
    #[must_use]
    pub fn single_jumps(&self, player: Player, square: Position) -> Vec<Position> {
        let Some(piece) = self.piece_of(player, square) else {
            return vec![];
        };
        let mut jumps = vec![];
        for row_delta in row_directions(piece) {
            for file_delta in FILE_DIRECTIONS {
                let Some(jumped) = square.offset(file_delta, row_delta) else {
                    continue;
                };
                if !self.is_owned_by(jumped, player.opponent()) {
                    continue;
                }
                if let Some(landing) = jumped.offset(file_delta, row_delta) {
                    if self.get(landing).is_none() {
                        jumps.push(landing);
                    }
                }
            }
        }
        jumps
    }

    /// All complete capture chains starting at `square`. A chain ends only
    /// when no further jump is available, and every jump in a chain continues
    /// in the row direction of the first one.
    #[must_use]
    pub fn jump_moves(&self, player: Player, square: Position) -> Vec<Move> {
        let mut moves = vec![];
        self.extend_chain(&Move::starting_at(player, square), &mut moves);
        moves
    }

    /// Depth-first walk over the capture tree. `self` is the board with all
    /// jumps of `chain` already made, so the jumped pieces are gone and can
    /// not be captured twice.
    fn extend_chain(&self, chain: &Move, moves: &mut Vec<Move>) {
        let square = chain.to();
        let mut extended = false;
        for landing in self.single_jumps(chain.player(), square) {
            if !chain.keeps_direction(landing) {
                continue;
            }
            extended = true;
            let hop = Move::starting_at(chain.player(), square).extended(landing);
            self.apply(&hop)
                .extend_chain(&chain.extended(landing), moves);
        }
        if !extended && chain.squares().len() > 1 {
            moves.push(chain.clone());
        }
    }

    /// All moves of `player`: for every piece (in row-major order) its simple
    /// steps followed by its capture chains.
    ///
    /// This does not apply the forced capture rule, see [`Self::legal_moves`].
    #[must_use]
    pub fn generate_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::with_capacity(16);
        for (square, _) in self.pieces(player) {
            moves.extend(self.non_capture_moves(player, square));
            moves.extend(self.jump_moves(player, square));
        }
        moves
    }

    /// Moves `player` is allowed to make: only the capture chains if there is
    /// at least one, all moves otherwise.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let moves = self.generate_moves(player);
        if captures_available(&moves) {
            moves.into_iter().filter(Move::is_capture).collect()
        } else {
            moves
        }
    }
}

/// Returns `true` if any of the moves is a capture.
#[must_use]
pub fn captures_available(moves: &[Move]) -> bool {
    moves.iter().any(Move::is_capture)
}
