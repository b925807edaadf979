//! Moves as chains of visited squares.

use std::fmt;

use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::draughts::core::{Player, Position};
use crate::draughts::Error;

/// Upper bound on the number of squares a single move visits. A capture chain
/// takes at most 12 pieces, hence it visits no more than 13 squares.
pub const MAX_SQUARES: usize = 16;

/// Separator used between the squares of a simple (non-capturing) move.
pub const STEP_SEPARATOR: &str = " ➤ ";
/// Separator used between the squares of a capture chain.
pub const CAPTURE_SEPARATOR: &str = " ☓ ";

/// A move is the list of squares a piece visits, starting with the square it
/// occupies, together with the player making the move.
///
/// Moves are either simple diagonal steps (two squares) or capture chains
/// consisting exclusively of jumps. The move itself does not know anything
/// about the board: [`crate::draughts::board::Board::validate`] checks whether
/// it is legal in a specific position.
///
/// ```
/// use kingrow::draughts::core::{Player, Position};
/// use kingrow::draughts::moves::Move;
///
/// let chain = Move::new(
///     Player::One,
///     &[
///         Position::new(1, 2).unwrap(),
///         Position::new(3, 4).unwrap(),
///         Position::new(5, 6).unwrap(),
///     ],
/// )
/// .unwrap();
/// assert!(chain.is_capture());
/// assert_eq!(chain.jumped_squares().count(), 2);
/// assert_eq!(chain.to_string(), "1: {1, 2} ☓ {3, 4} ☓ {5, 6}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    player: Player,
    squares: ArrayVec<Position, MAX_SQUARES>,
}

impl Move {
    /// Creates a move visiting `squares` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless the move visits between 2 and
    /// [`MAX_SQUARES`] squares.
    pub fn new(player: Player, squares: &[Position]) -> Result<Self, Error> {
        if squares.len() < 2 {
            return Err(Error::InvalidLength { len: squares.len() });
        }
        let squares = ArrayVec::try_from(squares).map_err(|_| Error::InvalidLength {
            len: squares.len(),
        })?;
        Ok(Self { player, squares })
    }

    /// Starts building a chain from the square the piece occupies. The chain is
    /// not a complete move until at least one more square is added.
    pub(super) fn starting_at(player: Player, square: Position) -> Self {
        let mut squares = ArrayVec::new();
        squares.push(square);
        Self { player, squares }
    }

    /// Returns a copy of the chain with one more square appended. Capture
    /// enumeration branches through this, so that sibling chains never share
    /// the accumulated squares.
    #[must_use]
    pub(super) fn extended(&self, square: Position) -> Self {
        let mut next = self.clone();
        next.squares.push(square);
        next
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// All squares visited by the move, starting square included.
    #[must_use]
    pub fn squares(&self) -> &[Position] {
        &self.squares
    }

    /// The square the piece starts from.
    #[must_use]
    pub fn from(&self) -> Position {
        self.squares[0]
    }

    /// The square the piece lands on.
    #[must_use]
    pub fn to(&self) -> Position {
        self.squares[self.squares.len() - 1]
    }

    /// Consecutive `(start, end)` pairs of the chain.
    pub fn transitions(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.squares.iter().copied().tuple_windows()
    }

    /// Whether the move is a capture. Only the first transition is inspected:
    /// [`Self::is_jump_sequence`] and board validation take care of the rest.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.transitions()
            .next()
            .is_some_and(|(start, end)| start.jump_direction(end).is_some())
    }

    /// Squares skipped by the jumps of this move, works for either direction.
    pub fn jumped_squares(&self) -> impl Iterator<Item = Position> + '_ {
        self.transitions()
            .filter(|(start, end)| start.jump_direction(*end).is_some())
            .map(|(start, end)| start.midpoint(end))
    }

    /// Checks that every transition skips a row and all of them go in the same
    /// row direction. Only the coordinates are checked, not the board.
    #[must_use]
    pub fn is_jump_sequence(&self) -> bool {
        let mut directions = self
            .transitions()
            .map(|(start, end)| start.jump_direction(end));
        match directions.next() {
            Some(Some(first)) => directions.all(|direction| direction == Some(first)),
            _ => false,
        }
    }

    /// Checks whether landing on `next` keeps the row direction established by
    /// the first transition of the chain. Any direction is allowed before the
    /// first transition is made.
    #[must_use]
    pub(super) fn keeps_direction(&self, next: Position) -> bool {
        match self.transitions().next() {
            None => true,
            Some((start, end)) => {
                start.delta(end).1.signum() == self.to().delta(next).1.signum()
            },
        }
    }

    pub(super) fn separator(&self) -> &'static str {
        if self.is_capture() {
            CAPTURE_SEPARATOR
        } else {
            STEP_SEPARATOR
        }
    }
}

impl fmt::Display for Move {
    /// Serializes the chain with raw coordinates, e.g. `1: {2, 3} ➤ {3, 4}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.player,
            self.squares.iter().join(self.separator())
        )
    }
}
