use std::str::FromStr;

use sweeper_core::{Action, Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, expected one of u, f, s, r, q")]
    Unknown(String),
    #[error("Expected two coordinates, as in `u 3 4`")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    BadCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

fn parse_coord(word: Option<&str>) -> Result<Coord, ParseCommandError> {
    let word = word.ok_or(ParseCommandError::MissingCoords)?;
    word.parse()
        .map_err(|_| ParseCommandError::BadCoord(word.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;

        let mut coords = || -> Result<Coord2, ParseCommandError> {
            Ok((parse_coord(words.next())?, parse_coord(words.next())?))
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "u" | "uncover" => Command::Act(Action::Uncover(coords()?)),
            "f" | "flag" => Command::Act(Action::Flag(coords()?)),
            "s" | "start" => Command::Act(Action::Start(coords()?)),
            "r" | "reset" => Command::Act(Action::Reset),
            "q" | "quit" => Command::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}
