use thiserror::Error;

use crate::draughts::core::Position;

/// Reasons for rejecting a position or a move. The variants carry the
/// offending squares so that the caller can render the message however it
/// wants; the [`std::fmt::Display`] implementation is a reasonable default.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Coordinates do not address a square on the board.
    #[error("position {{{file}, {row}}} is outside the board")]
    OutOfRange {
        #[allow(missing_docs)]
        file: u8,
        #[allow(missing_docs)]
        row: u8,
    },
    /// A move has to visit at least two and at most
    /// [`crate::draughts::moves::MAX_SQUARES`] squares.
    #[error("move should visit between 2 and 16 squares, got {len}")]
    InvalidLength {
        #[allow(missing_docs)]
        len: usize,
    },
    /// The starting square is not occupied by the moving player.
    #[error("start position {square} isn't valid")]
    InvalidStart {
        #[allow(missing_docs)]
        square: Position,
    },
    /// A move visiting more than two squares has to consist of jumps going in
    /// the same row direction.
    #[error("move is not a valid jump sequence")]
    InvalidJumpSequence,
    /// The landing square of a transition is not empty.
    #[error("position {square} isn't available")]
    SquareOccupied {
        #[allow(missing_docs)]
        square: Position,
    },
    /// The transition is not a diagonal step of one or two squares.
    #[error("{from} to {to} is not a valid diagonal move")]
    InvalidDiagonal {
        #[allow(missing_docs)]
        from: Position,
        #[allow(missing_docs)]
        to: Position,
    },
    /// Men can not move backwards.
    #[error("non-king move from {from} to {to} must move forward")]
    MustMoveForward {
        #[allow(missing_docs)]
        from: Position,
        #[allow(missing_docs)]
        to: Position,
    },
    /// The jumped square is not held by the opponent.
    #[error("jumped square {square} not held by opponent")]
    NoOpponentJumped {
        #[allow(missing_docs)]
        square: Position,
    },
    /// A capture is available, so a non-capturing move is not allowed.
    #[error("capture moves available and not taken")]
    ForcedCaptureViolation,
    /// A capture chain was stopped while further jumps were available.
    #[error("capture moves must be taken entirely")]
    IncompleteCapture,
}
