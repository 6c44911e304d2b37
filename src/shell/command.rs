use crate::chess::core::{Move, Square};

/// A single line of the shell protocol.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Move(Move),
    Display,
    Moves,
    Status,
    NewGame,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_move(parts: &[&str]) -> Option<Move> {
    match parts {
        [uci] => Move::from_uci(uci).ok(),
        ["move", from, to] => Some(Move::new(
            Square::try_from(*from).ok()?,
            Square::try_from(*to).ok()?,
        )),
        _ => None,
    }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [] => Self::Empty,
            ["d"] => Self::Display,
            ["moves"] => Self::Moves,
            ["status"] => Self::Status,
            ["new"] => Self::NewGame,
            ["quit"] => Self::Quit,
            _ => match parse_move(&parts) {
                Some(candidate) => Self::Move(candidate),
                None => Self::Unknown(input.trim().to_string()),
            },
        }
    }
}
