/// Line of user input during the game.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// Move in standard notation, e.g. `11 15`.
    Move(String),
    /// Lists legal moves of the player to move.
    Moves,
    /// Prints the board again.
    Show,
    Quit,
    Empty,
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "" => Self::Empty,
            "moves" | "?" => Self::Moves,
            "board" | "show" => Self::Show,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Move(input.to_string()),
        }
    }
}
