//! Interactive draughts game in the terminal: either two humans play against
//! each other or Green plays against the engine.

use std::io::{self, BufRead, Write};

use kingrow::{Engine, Mode};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    kingrow::print_engine_info();
    kingrow::print_binary_info();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    write!(
        output,
        "Press c for computer opponent or anything else for human: "
    )?;
    output.flush()?;
    let mut choice = Vec::new();
    let _ = input.read_until(b'\n', &mut choice)?;
    let mode = if String::from_utf8_lossy(&choice).trim() == "c" {
        Mode::Computer
    } else {
        Mode::TwoPlayers
    };
    log::info!("starting the game: {mode:?}");

    let mut engine = Engine::new(&mut input, &mut output, mode);
    let _ = engine.play()?;
    Ok(())
}
