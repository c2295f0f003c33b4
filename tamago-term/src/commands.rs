//! Typed commands accepted by the terminal front-end.

use std::str::FromStr;

use tamago_core::Action;
use thiserror::Error;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed, sleep or play.
    Act(Action),
    /// Re-render without doing anything.
    Status,
    /// Change the pet's display name.
    Rename(String),
    /// Start over with a fresh pet.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line.
    #[error("empty command")]
    Empty,
    /// First word is not a known command.
    #[error("unknown command: {0}")]
    Unknown(String),
    /// `name` without an argument.
    #[error("`name` needs a new name")]
    MissingName,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "feed" | "eat" | "f" => Ok(Self::Act(Action::Feed)),
            "sleep" | "s" => Ok(Self::Act(Action::Sleep)),
            "play" | "p" => Ok(Self::Act(Action::Play)),
            "status" | "look" => Ok(Self::Status),
            "name" | "rename" if rest.is_empty() => Err(CommandError::MissingName),
            "name" | "rename" => Ok(Self::Rename(rest.to_string())),
            "reset" | "restart" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  feed            lower hunger
  sleep           restore energy (only when tired)
  play            cheer up (not when starving or exhausted)
  status          show the pet
  name <name>     rename the pet
  reset           start over with a new pet
  help            this list
  quit            leave";
