//! Draughts primitives commonly used within [`crate::draughts`].

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::iproduct;

use crate::draughts::Error;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;

/// A square on the board addressed by its file (column) and row. Both
/// coordinates are zero-based and always within `0..BOARD_WIDTH`: there is no
/// way to construct a [`Position`] outside of the board.
///
/// Player [`Player::One`] starts on rows 0 to 2 and moves towards increasing
/// rows, [`Player::Two`] starts on rows 5 to 7 and moves the other way.
///
/// ```
/// use kingrow::draughts::core::Position;
///
/// let position = Position::new(2, 3).unwrap();
/// assert_eq!(position.file(), 2);
/// assert_eq!(position.row(), 3);
/// assert_eq!(position.to_string(), "{2, 3}");
/// assert!(Position::new(8, 0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    row: u8,
}

impl Position {
    /// Connects file and row into a position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either coordinate is outside
    /// `0..BOARD_WIDTH`.
    pub const fn new(file: u8, row: u8) -> Result<Self, Error> {
        if file < BOARD_WIDTH && row < BOARD_WIDTH {
            Ok(Self { file, row })
        } else {
            Err(Error::OutOfRange { file, row })
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Iterates over all positions of the board: row by row, and from the
    /// lowest file to the highest one within each row.
    pub fn iter() -> impl Iterator<Item = Self> {
        iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH).map(|(row, file)| Self { file, row })
    }

    /// Returns the position shifted by given deltas or `None` if it would end
    /// up outside of the board.
    #[must_use]
    pub fn offset(self, file_delta: i8, row_delta: i8) -> Option<Self> {
        let file = self.file.checked_add_signed(file_delta)?;
        let row = self.row.checked_add_signed(row_delta)?;
        Self::new(file, row).ok()
    }

    /// Signed `(file, row)` distance from `self` to `other`.
    #[must_use]
    pub const fn delta(self, other: Self) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.row as i8 - self.row as i8,
        )
    }

    /// The square between `self` and `other`. Only meaningful for two
    /// positions two diagonal steps apart, i.e. the endpoints of a jump.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            file: (self.file + other.file) / 2,
            row: (self.row + other.row) / 2,
        }
    }

    /// Returns the row direction (`1` or `-1`) of the transition from `self`
    /// to `other` if it is a diagonal jump over exactly one square, `None`
    /// otherwise.
    #[must_use]
    pub const fn jump_direction(self, other: Self) -> Option<i8> {
        match self.delta(other) {
            (2 | -2, 2) => Some(1),
            (2 | -2, -2) => Some(-1),
            _ => None,
        }
    }

    /// Playable (dark) squares are the only ones pieces ever occupy.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.file + self.row) % 2 == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.file, self.row)
    }
}

/// Draughts is played between two players. [`Player::One`] (Red) makes the
/// first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    #[allow(missing_docs)]
    One,
    #[allow(missing_docs)]
    Two,
}

impl Player {
    /// "Flips" the player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Row delta of a forward move: men of [`Player::One`] move towards higher
    /// rows and men of [`Player::Two`] towards lower ones.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::One => 1,
            Self::Two => -1,
        }
    }

    /// The opponent's back rank: a man reaching it is crowned.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::One => BOARD_WIDTH - 1,
            Self::Two => 0,
        }
    }

    /// Player number as used by the signed cell encoding (`1` or `2`).
    #[must_use]
    pub const fn number(self) -> i8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Human-readable colour of the player's pieces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::One => "Red",
            Self::Two => "Green",
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = anyhow::Error;

    fn try_from(number: i8) -> anyhow::Result<Self> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => bail!("player should be 1 or 2, got {number}"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Men only move forward, kings move diagonally in both row directions.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Man,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::King,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// The same piece after coronation.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Signed cell encoding: `+N` for a man of player `N` and `-N` for a king.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self.kind {
            PieceKind::Man => self.owner.number(),
            PieceKind::King => -self.owner.number(),
        }
    }

    /// Decodes a cell of the signed encoding: `0` is an empty square.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside of `-2..=2`.
    pub fn from_value(value: i8) -> anyhow::Result<Option<Self>> {
        let kind = if value < 0 {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        match value {
            0 => Ok(None),
            -2..=2 => Ok(Some(Self {
                owner: Player::try_from(value.abs())?,
                kind,
            })),
            _ => bail!("cell value should be within -2..=2, got {value}"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match (&self.owner, &self.kind) {
            (Player::One, PieceKind::Man) => 'r',
            (Player::One, PieceKind::King) => 'R',
            (Player::Two, PieceKind::Man) => 'g',
            (Player::Two, PieceKind::King) => 'G',
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn position() {
        assert_eq!(Position::new(3, 0), Ok(Position { file: 3, row: 0 }));
        assert_eq!(Position::new(2, 3), Ok(Position { file: 2, row: 3 }));
        assert_eq!(
            Position::new(8, 0),
            Err(Error::OutOfRange { file: 8, row: 0 })
        );
        assert_eq!(
            Position::new(7, 255),
            Err(Error::OutOfRange { file: 7, row: 255 })
        );
    }

    #[test]
    fn iteration_order() {
        let positions: Vec<_> = Position::iter().collect();
        assert_eq!(positions.len(), 64);
        assert_eq!(positions[0], Position { file: 0, row: 0 });
        assert_eq!(positions[1], Position { file: 1, row: 0 });
        assert_eq!(positions[8], Position { file: 0, row: 1 });
        assert_eq!(positions[63], Position { file: 7, row: 7 });
        assert_eq!(Position::iter().filter(|p| p.is_dark()).count(), 32);
    }

    #[test]
    fn offset() {
        let position = Position::new(0, 7).unwrap();
        assert_eq!(position.offset(1, -1), Position::new(1, 6).ok());
        assert_eq!(position.offset(-1, -1), None);
        assert_eq!(position.offset(1, 1), None);
        assert_eq!(position.offset(2, -2), Position::new(2, 5).ok());
    }

    #[test]
    fn jump_geometry() {
        let from = Position::new(2, 3).unwrap();
        let to = Position::new(4, 5).unwrap();
        assert_eq!(from.delta(to), (2, 2));
        assert_eq!(from.midpoint(to), Position::new(3, 4).unwrap());
        assert_eq!(from.jump_direction(to), Some(1));
        assert_eq!(to.jump_direction(from), Some(-1));
        assert_eq!(from.jump_direction(Position::new(3, 4).unwrap()), None);
        // Skips a row but not a file.
        assert_eq!(from.jump_direction(Position::new(2, 5).unwrap()), None);
        assert_eq!(from.jump_direction(Position::new(6, 5).unwrap()), None);
    }

    #[test]
    fn player() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.forward(), 1);
        assert_eq!(Player::Two.forward(), -1);
        assert_eq!(Player::One.promotion_row(), 7);
        assert_eq!(Player::Two.promotion_row(), 0);
        assert!(Player::try_from(3).is_err());
    }

    #[test]
    fn piece_encoding() {
        for value in -2..=2 {
            let decoded = Piece::from_value(value).unwrap();
            assert_eq!(decoded.map_or(0, Piece::value), value);
        }
        assert_eq!(
            Piece::from_value(-1).unwrap(),
            Some(Piece::king(Player::One))
        );
        assert_eq!(Piece::from_value(2).unwrap(), Some(Piece::man(Player::Two)));
        assert_eq!(Piece::man(Player::Two).crowned(), Piece::king(Player::Two));
    }

    #[test]
    #[should_panic(expected = "cell value should be within -2..=2, got 3")]
    fn piece_from_incorrect_value() {
        let _ = Piece::from_value(3).unwrap();
    }
}
