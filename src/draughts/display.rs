//! Text rendering of the board for the interactive game.

use std::fmt;

use crate::draughts::board::Board;
use crate::draughts::core::{Player, Position, BOARD_WIDTH};
use crate::draughts::notation::square_number;

const ROW_SEPARATOR: &str = "  +-----+-----+-----+-----+-----+-----+-----+-----+";
const EMPTY_CELL: &str = "     ";

impl fmt::Display for Board {
    /// Draws the grid with row 0 at the top. Every dark square shows its
    /// standard number, prefixed by the piece marker (`r`/`R` for Red man and
    /// king, `g`/`G` for Green) when occupied. Piece counters follow the grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROW_SEPARATOR}")?;
        for position in Position::iter() {
            if position.file() == 0 {
                write!(f, "  |")?;
            }
            match square_number(position) {
                Some(number) => {
                    let marker = self
                        .get(position)
                        .map_or_else(|| " ".to_string(), |piece| piece.to_string());
                    write!(f, " {marker}{number:>2} |")?;
                },
                None => write!(f, "{EMPTY_CELL}|")?,
            }
            if position.file() == BOARD_WIDTH - 1 {
                writeln!(f)?;
                writeln!(f, "{ROW_SEPARATOR}")?;
            }
        }
        let count = self.count_pieces();
        write!(
            f,
            "  [{}: {}] [{}: {}]",
            Player::One.name(),
            count.total(Player::One),
            Player::Two.name(),
            count.total(Player::Two)
        )
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::draughts::board::Board;
    use crate::draughts::core::{Piece, Player, Position};

    #[test]
    fn starting_board() {
        let rendered = Board::starting().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        // Separator and cells for each row, counters at the end.
        assert_eq!(lines.len(), 8 * 2 + 2);
        assert_eq!(
            lines[0],
            "  +-----+-----+-----+-----+-----+-----+-----+-----+"
        );
        assert_eq!(
            lines[1],
            "  |     | r 1 |     | r 2 |     | r 3 |     | r 4 |"
        );
        assert_eq!(
            lines[5],
            "  |     | r 9 |     | r10 |     | r11 |     | r12 |"
        );
        assert_eq!(
            lines[7],
            "  |  13 |     |  14 |     |  15 |     |  16 |     |"
        );
        assert!(lines[15].contains(" g32 |"));
        assert_eq!(lines[17], "  [Red: 12] [Green: 12]");
    }

    #[test]
    fn kings() {
        let mut board = Board::empty();
        board.set(Position::new(1, 0).unwrap(), Some(Piece::king(Player::Two)));
        board.set(Position::new(6, 7).unwrap(), Some(Piece::king(Player::One)));
        let rendered = board.to_string();
        assert!(rendered.contains(" G 1 |"));
        assert!(rendered.contains(" R32 |"));
        assert!(rendered.ends_with("[Red: 1] [Green: 1]"));
    }
}
