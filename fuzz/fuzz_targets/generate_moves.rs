#![no_main]
use kingrow::draughts::board::{Board, Rows};
use kingrow::draughts::core::{Player, Position};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    // One byte per dark square, pieces only on the dark squares.
    let mut rows: Rows = [[0; 8]; 8];
    for (position, byte) in Position::iter()
        .filter(|position| position.is_dark())
        .zip(data)
    {
        rows[position.row() as usize][position.file() as usize] = (*byte % 5) as i8 - 2;
    }
    let board = Board::from_rows(&rows).expect("all values are within -2..=2");
    for player in [Player::One, Player::Two] {
        for next_move in board.generate_moves(player) {
            assert_eq!(board.validate(&next_move), Ok(()), "{next_move}\n{board}");
            assert_eq!(board.check_move(&next_move).is_err(), {
                let moves = board.legal_moves(player);
                !moves.contains(&next_move)
            });
        }
    }
});
