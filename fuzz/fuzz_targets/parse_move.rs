#![no_main]
use kingrow::draughts::board::Board;
use kingrow::draughts::core::Player;
use kingrow::draughts::notation::parse_move;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(next_move) = parse_move(s, Player::One) {
            // Checking arbitrary moves must never panic.
            let _ = Board::starting().check_move(&next_move);
        }
    }
});
