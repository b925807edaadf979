//! Standard square numbering: the 32 dark squares are numbered row by row,
//! four per row, starting from the row of [`Player::One`]. Square 1 is
//! `{1, 0}`, square 5 is `{0, 1}` and square 32 is `{6, 7}`.
//!
//! Moves are written as numbers of the visited squares separated by spaces
//! (`11 15`, `14 23 30`); `-` and `x` are also accepted as separators.

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::draughts::core::{Player, Position};
use crate::draughts::moves::Move;

/// Number of playable squares.
pub const SQUARES: u8 = 32;

const SQUARES_PER_ROW: u8 = 4;

/// Converts standard square number to its position.
///
/// # Errors
///
/// Returns an error if the number is outside of `1..=32`.
pub fn position_of(number: u8) -> anyhow::Result<Position> {
    if !(1..=SQUARES).contains(&number) {
        bail!("square number should be within 1..={SQUARES}, got {number}");
    }
    let index = number - 1;
    let row = index / SQUARES_PER_ROW;
    let file = 2 * (index % SQUARES_PER_ROW) + u8::from(row % 2 == 0);
    Ok(Position::new(file, row)?)
}

/// Standard number of the square or `None` for light squares, which are
/// never occupied.
#[must_use]
pub fn square_number(position: Position) -> Option<u8> {
    position
        .is_dark()
        .then_some(position.row() * SQUARES_PER_ROW + position.file() / 2 + 1)
}

/// Parses a move of `player` from standard notation.
///
/// ```
/// use kingrow::draughts::core::{Player, Position};
/// use kingrow::draughts::notation::parse_move;
///
/// let parsed = parse_move("14 23 30", Player::One).unwrap();
/// assert_eq!(
///     parsed.squares(),
///     &[
///         Position::new(2, 3).unwrap(),
///         Position::new(4, 5).unwrap(),
///         Position::new(2, 7).unwrap(),
///     ]
/// );
/// assert!(parse_move("14 33", Player::One).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if any of the tokens is not a square number or the move
/// visits too few or too many squares. The move is not checked against any
/// board.
pub fn parse_move(input: &str, player: Player) -> anyhow::Result<Move> {
    let mut squares = vec![];
    for token in input
        .split(|c: char| c.is_whitespace() || c == '-' || c == 'x')
        .filter(|token| !token.is_empty())
    {
        let square = token
            .parse::<u8>()
            .ok()
            .and_then(|number| position_of(number).ok());
        match square {
            Some(square) => squares.push(square),
            None => bail!("bad square '{token}'"),
        }
    }
    Move::new(player, &squares).with_context(|| format!("incorrect move: '{}'", input.trim()))
}

impl Move {
    /// Serializes the move with standard square numbers, e.g. `11 ➤ 15` or
    /// `14 ☓ 23 ☓ 30`.
    #[must_use]
    pub fn to_standard(&self) -> String {
        self.squares()
            .iter()
            .map(|&square| square_number(square).unwrap_or_default())
            .join(self.separator())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(file: u8, row: u8) -> Position {
        Position::new(file, row).unwrap()
    }

    #[test]
    fn numbering() {
        assert_eq!(position_of(1).unwrap(), at(1, 0));
        assert_eq!(position_of(2).unwrap(), at(3, 0));
        assert_eq!(position_of(5).unwrap(), at(0, 1));
        assert_eq!(position_of(14).unwrap(), at(2, 3));
        assert_eq!(position_of(32).unwrap(), at(6, 7));
        assert!(position_of(0).is_err());
        assert!(position_of(33).is_err());

        for number in 1..=SQUARES {
            let position = position_of(number).unwrap();
            assert!(position.is_dark());
            assert_eq!(square_number(position), Some(number));
        }
        assert_eq!(square_number(at(0, 0)), None);
        assert_eq!(square_number(at(7, 7)), None);
    }

    #[test]
    fn parse() {
        assert_eq!(
            parse_move("14 23 30", Player::One).unwrap(),
            Move::new(Player::One, &[at(2, 3), at(4, 5), at(2, 7)]).unwrap()
        );
        assert_eq!(
            parse_move("15 19", Player::One).unwrap(),
            Move::new(Player::One, &[at(4, 3), at(5, 4)]).unwrap()
        );
        assert_eq!(
            parse_move("  22-18\n", Player::Two).unwrap(),
            Move::new(Player::Two, &[at(2, 5), at(3, 4)]).unwrap()
        );
        assert_eq!(
            parse_move("14x23x30", Player::One).unwrap().squares().len(),
            3
        );
    }

    #[test]
    #[should_panic(expected = "bad square '33'")]
    fn parse_out_of_range() {
        let _ = parse_move("14 33", Player::One).unwrap();
    }

    #[test]
    #[should_panic(expected = "bad square '0'")]
    fn parse_zero() {
        let _ = parse_move("0 5", Player::One).unwrap();
    }

    #[test]
    #[should_panic(expected = "bad square 'e4'")]
    fn parse_garbage() {
        let _ = parse_move("e4 e5", Player::One).unwrap();
    }

    #[test]
    fn parse_too_short() {
        assert!(parse_move("", Player::One).is_err());
        assert!(parse_move("15", Player::Two).is_err());
    }

    #[test]
    fn standard_string() {
        assert_eq!(
            parse_move("11 15", Player::One).unwrap().to_standard(),
            "11 ➤ 15"
        );
        assert_eq!(
            parse_move("14 23 30", Player::One).unwrap().to_standard(),
            "14 ☓ 23 ☓ 30"
        );
    }
}
