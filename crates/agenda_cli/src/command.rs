//! Line command parsing for the terminal driver.

use agenda_core::EntryId;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Edit { id: EntryId, text: String },
    Delete(EntryId),
    Move { from: usize, to: usize },
    List,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidIndex(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`"),
            Self::MissingArgument(name) => write!(f, "missing argument: {name}"),
            Self::InvalidIndex(raw) => write!(f, "invalid index `{raw}`"),
        }
    }
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = split_word(line);
        match word {
            "" | "list" | "ls" => Ok(Self::List),
            "quit" | "exit" => Ok(Self::Quit),
            "add" => Ok(Self::Add(rest.to_string())),
            "delete" | "del" | "rm" => Ok(Self::Delete(required_id(rest)?)),
            "edit" => {
                let (id, text) = split_word(rest);
                Ok(Self::Edit {
                    id: required_id(id)?,
                    text: text.to_string(),
                })
            }
            "move" | "mv" => {
                let (from, to) = split_word(rest);
                Ok(Self::Move {
                    from: parse_index(from, "from")?,
                    to: parse_index(to, "to")?,
                })
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn split_word(value: &str) -> (&str, &str) {
    match value.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (value, ""),
    }
}

fn required_id(value: &str) -> Result<EntryId, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument("id"));
    }
    Ok(EntryId::from(value))
}

fn parse_index(value: &str, name: &'static str) -> Result<usize, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }
    value
        .parse()
        .map_err(|_| CommandError::InvalidIndex(value.to_string()))
}
