//! Square-centric board representation. The board is small enough to be
//! copied around freely: applying a move always produces a new [`Board`] and
//! never mutates the original, which is what the search relies on when it
//! keeps many positions alive along the recursion.

use std::fmt;

use itertools::Itertools;

use crate::draughts::core::{Piece, PieceKind, Player, Position, BOARD_WIDTH};
use crate::draughts::moves::Move;

const SQUARE_SEPARATOR: &str = " ";
const LINE_SEPARATOR: &str = "\n";

/// Raw board layout in the signed cell encoding: `rows[row][file]` is `0` for
/// an empty square, `N` for a man and `-N` for a king of player `N`.
pub type Rows = [[i8; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];

/// An 8×8 draughts board.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
}

impl Board {
    /// Board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
        }
    }

    /// Standard setup: each player has 12 men on the dark squares of the
    /// three rows closest to them.
    ///
    /// ```
    /// use kingrow::draughts::board::Board;
    /// use kingrow::draughts::core::Player;
    ///
    /// let board = Board::starting();
    /// assert_eq!(board.count_pieces().totals(), (12, 12));
    /// assert_eq!(board.generate_moves(Player::One).len(), 7);
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for position in Position::iter().filter(|position| position.is_dark()) {
            match position.row() {
                0..=2 => board.set(position, Some(Piece::man(Player::One))),
                5..=7 => board.set(position, Some(Piece::man(Player::Two))),
                _ => {},
            }
        }
        board
    }

    /// Builds a board from its signed cell encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if any cell holds a value outside of `-2..=2`.
    pub fn from_rows(rows: &Rows) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        for position in Position::iter() {
            let value = rows[position.row() as usize][position.file() as usize];
            board.set(position, Piece::from_value(value)?);
        }
        Ok(board)
    }

    /// Dumps the board in the signed cell encoding, inverse of
    /// [`Self::from_rows`].
    #[must_use]
    pub fn rows(&self) -> Rows {
        let mut rows = [[0; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];
        for position in Position::iter() {
            rows[position.row() as usize][position.file() as usize] = self.value(position);
        }
        rows
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn get(&self, position: Position) -> Option<Piece> {
        self.cells[position.row() as usize][position.file() as usize]
    }

    /// Cell value in the signed encoding.
    #[must_use]
    pub fn value(&self, position: Position) -> i8 {
        self.get(position).map_or(0, Piece::value)
    }

    pub(crate) fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.cells[position.row() as usize][position.file() as usize] = piece;
    }

    /// Whether the square holds a piece of `player`, man or king.
    #[must_use]
    pub fn is_owned_by(&self, position: Position, player: Player) -> bool {
        self.get(position).is_some_and(|piece| piece.owner == player)
    }

    /// Pieces of `player` in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::iter().filter_map(move |position| match self.get(position) {
            Some(piece) if piece.owner == player => Some((position, piece)),
            _ => None,
        })
    }

    /// Returns the board after making the move. The move has to be legal, see
    /// [`Self::validate`]: the starting square is cleared, all jumped pieces
    /// are removed and the piece lands on the last square. A man landing on
    /// either back rank is crowned.
    #[must_use]
    pub fn apply(&self, next_move: &Move) -> Self {
        let mut board = *self;
        let start = next_move.from();
        let piece = self.get(start);
        board.set(start, None);
        for jumped in next_move.jumped_squares() {
            board.set(jumped, None);
        }
        let target = next_move.to();
        let crowned = piece.map(|piece| {
            if piece.kind == PieceKind::Man
                && (target.row() == 0 || target.row() == BOARD_WIDTH - 1)
            {
                piece.crowned()
            } else {
                piece
            }
        });
        board.set(target, crowned);
        board
    }

    /// Counts men and kings of both players.
    #[must_use]
    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for piece in Position::iter().filter_map(|position| self.get(position)) {
            match piece.kind {
                PieceKind::Man => count.men[piece.owner.index()] += 1,
                PieceKind::King => count.kings[piece.owner.index()] += 1,
            }
        }
        count
    }

    /// Returns `true` if the game is decided with `player` to move: either
    /// side ran out of pieces or `player` has no moves left.
    #[must_use]
    pub fn winner(&self, player: Player) -> bool {
        self.outcome(player).is_some()
    }

    /// Returns the winner of the game with `player` to move, if the game is
    /// over. A player without pieces loses, and so does a player who can not
    /// move.
    #[must_use]
    pub fn outcome(&self, player: Player) -> Option<Player> {
        let count = self.count_pieces();
        if count.total(player) == 0 {
            return Some(player.opponent());
        }
        if count.total(player.opponent()) == 0 {
            return Some(player);
        }
        if self.generate_moves(player).is_empty() {
            return Some(player.opponent());
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&Rows> for Board {
    type Error = anyhow::Error;

    fn try_from(rows: &Rows) -> anyhow::Result<Self> {
        Self::from_rows(rows)
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in the signed cell encoding, row 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.rows()
                .iter()
                .map(|row| row.iter().map(|value| format!("{value:>2}")).join(SQUARE_SEPARATOR))
                .join(LINE_SEPARATOR)
        )
    }
}

/// Number of men and kings each player has on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceCount {
    men: [u8; 2],
    kings: [u8; 2],
}

impl PieceCount {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn men(&self, player: Player) -> u8 {
        self.men[player.index()]
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kings(&self, player: Player) -> u8 {
        self.kings[player.index()]
    }

    /// Men and kings of `player`.
    #[must_use]
    pub const fn total(&self, player: Player) -> u8 {
        self.men(player) + self.kings(player)
    }

    /// Total pieces of [`Player::One`] and [`Player::Two`].
    #[must_use]
    pub const fn totals(&self) -> (u8, u8) {
        (self.total(Player::One), self.total(Player::Two))
    }
}
