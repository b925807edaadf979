//! Legality checks for moves coming from outside of the generator.

use crate::draughts::board::Board;
use crate::draughts::moves::Move;
use crate::draughts::movegen::captures_available;
use crate::draughts::Error;

impl Board {
    /// Checks whether `candidate` can be made on this board: the player owns
    /// the starting piece and every transition is a diagonal step or jump
    /// onto an empty square, in the allowed direction, over an opponent's
    /// piece when jumping.
    ///
    /// This does not check the forced capture rule, see
    /// [`Self::check_move`].
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self, candidate: &Move) -> Result<(), Error> {
        let player = candidate.player();
        let start = candidate.from();
        let Some(piece) = self.get(start).filter(|piece| piece.owner == player) else {
            return Err(Error::InvalidStart { square: start });
        };
        if candidate.squares().len() > 2 && !candidate.is_jump_sequence() {
            return Err(Error::InvalidJumpSequence);
        }
        for (from, to) in candidate.transitions() {
            if self.get(to).is_some() {
                return Err(Error::SquareOccupied { square: to });
            }
            let (file_delta, row_delta) = from.delta(to);
            if file_delta.abs() != row_delta.abs() || !(1..=2).contains(&row_delta.abs()) {
                return Err(Error::InvalidDiagonal { from, to });
            }
            if !piece.is_king() && row_delta.signum() != player.forward() {
                return Err(Error::MustMoveForward { from, to });
            }
            if row_delta.abs() == 2 {
                let jumped = from.midpoint(to);
                if !self.is_owned_by(jumped, player.opponent()) {
                    return Err(Error::NoOpponentJumped { square: jumped });
                }
            }
        }
        Ok(())
    }

    /// Full check of a move entered by a player: it has to be valid, it has
    /// to be a capture if any capture is available and a capture has to be
    /// taken in its entirety. Picking one of several captures is fine, it
    /// does not have to be the longest one.
    ///
    /// # Errors
    ///
    /// Returns the [`Self::validate`] error, [`Error::ForcedCaptureViolation`]
    /// or [`Error::IncompleteCapture`].
    pub fn check_move(&self, candidate: &Move) -> Result<(), Error> {
        self.validate(candidate)?;
        let moves = self.generate_moves(candidate.player());
        if captures_available(&moves) && !candidate.is_capture() {
            return Err(Error::ForcedCaptureViolation);
        }
        if !moves.contains(candidate) {
            return Err(Error::IncompleteCapture);
        }
        Ok(())
    }
}
